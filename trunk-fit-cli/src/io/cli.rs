use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON catalog of vehicles, the builtin catalog is used if not provided
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether an item fits in the trunk of a vehicle
    Check(CheckArgs),
    /// List brands, the models of a brand or the years of a model
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(long)]
    pub brand: String,
    #[arg(long)]
    pub model: String,
    #[arg(long)]
    pub year: String,
    #[arg(long, default_value = "")]
    pub length: String,
    #[arg(long, default_value = "")]
    pub width: String,
    #[arg(long, default_value = "")]
    pub height: String,
    /// Write the report as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long, requires = "brand")]
    pub model: Option<String>,
}
