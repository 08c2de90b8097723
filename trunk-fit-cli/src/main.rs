use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use trunk_fit::catalog::Catalog;
use trunk_fit::check_fit;
use trunk_fit::io::export::{export_report, export_vehicle};
use trunk_fit::parse::ItemInput;
use trunk_fit_cli::config::CliConfig;
use trunk_fit_cli::io;
use trunk_fit_cli::io::cli::{CheckArgs, Cli, Command, ListArgs};
use trunk_fit_cli::io::output::CheckOutput;
use trunk_fit_cli::render;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("Successfully parsed CliConfig: {config:?}");

    let catalog = io::read_catalog(args.catalog_file.as_deref())?;

    match args.command {
        Command::Check(check_args) => main_check(&catalog, check_args, config),
        Command::List(list_args) => main_list(&catalog, list_args),
    }
}

fn main_check(catalog: &Catalog, args: CheckArgs, config: CliConfig) -> Result<()> {
    let vehicle = catalog
        .find(&args.brand, &args.model, &args.year)
        .with_context(|| {
            format!(
                "unknown vehicle: {} {} {}",
                args.brand, args.model, args.year
            )
        })?;

    let item = ItemInput::new(args.length, args.width, args.height);
    let report = check_fit(Some(vehicle.trunk), &item).context("invalid item dimensions")?;

    match &report {
        Some(report) => print!("{}", render::render_report(report, &config)),
        None => warn!("[CHECK] item dimensions incomplete, provide --length, --width and --height"),
    }
    print!("{}", render::render_trunk(vehicle, &config));

    if let Some(output_file) = args.output_file {
        let output = CheckOutput {
            vehicle: export_vehicle(vehicle),
            item,
            report: report.as_ref().map(export_report),
            config,
        };
        io::write_json(&output, &output_file)?;
    }

    Ok(())
}

fn main_list(catalog: &Catalog, args: ListArgs) -> Result<()> {
    print!(
        "{}",
        render::render_selection(catalog, args.brand.as_deref(), args.model.as_deref())
    );
    Ok(())
}
