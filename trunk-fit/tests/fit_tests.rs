#[cfg(test)]
mod tests {
    use test_case::test_case;

    use trunk_fit::catalog::{Catalog, TrunkProvider};
    use trunk_fit::check_fit;
    use trunk_fit::fit::{FitReport, Placement, describe};
    use trunk_fit::geometry::{Dims, Orientation};
    use trunk_fit::parse::{InputError, ItemInput};
    use trunk_fit::test_fit;

    fn init() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    }

    fn check(brand: &str, model: &str, year: &str, item: ItemInput) -> Option<FitReport> {
        let catalog = Catalog::builtin();
        check_fit(catalog.lookup(brand, model, year), &item).unwrap()
    }

    #[test_case("Toyota", "Camry", "2024"; "camry")]
    #[test_case("Toyota", "Corolla", "2024"; "corolla")]
    #[test_case("Honda", "Civic", "2024"; "civic")]
    #[test_case("Honda", "Accord", "2024"; "accord")]
    #[test_case("Tesla", "Model 3", "2024"; "model 3")]
    #[test_case("BMW", "3 Series", "2024"; "3 series")]
    #[test_case("Mercedes", "C-Class", "2024"; "c-class")]
    fn every_trunk_fits_itself_as_measured(brand: &str, model: &str, year: &str) {
        init();
        let trunk = Catalog::builtin().lookup(brand, model, year).unwrap();
        let report = test_fit(trunk, trunk);
        assert!(report.fits);
        assert_eq!(report.best_option, Some(Placement::AsMeasured));
        assert_eq!(report.orientations[0].dims, trunk);
    }

    #[test]
    fn suitcase_in_a_civic() {
        init();
        // 40 only goes along the height, 90 only along the length
        let report = check("Honda", "Civic", "2024", ItemInput::new("50", "40", "90")).unwrap();
        assert_eq!(report.total_orientations(), 1);
        assert_eq!(report.orientations[0].dims, Dims::new(90.0, 50.0, 40.0));
        assert_eq!(report.best_option, Some(Placement::UprightRotated));
        assert_eq!(report.message(), "The item will fit in your trunk!");
    }

    #[test]
    fn long_box_fits_in_accord_but_not_corolla() {
        init();
        let item = ItemInput::new("45", "100", "30");
        let accord = check("Honda", "Accord", "2024", item.clone()).unwrap();
        let corolla = check("Toyota", "Corolla", "2024", item).unwrap();
        assert!(accord.fits);
        assert!(!corolla.fits);
        assert_eq!(corolla.best_option, None);
    }

    #[test]
    fn unknown_vehicle_gives_no_report() {
        assert_eq!(check("Lada", "Niva", "1985", ItemInput::new("1", "1", "1")), None);
    }

    #[test]
    fn invalid_input_is_an_error() {
        let trunk = Catalog::builtin().lookup("Toyota", "Camry", "2024");
        let err = check_fit(trunk, &ItemInput::new("10", "10", "-10")).unwrap_err();
        assert!(matches!(err, InputError::InvalidDimension { .. }));
    }

    #[test]
    fn every_orientation_is_a_permutation_of_the_item() {
        let item = Dims::new(20.0, 35.0, 45.0);
        let report = test_fit(item, Dims::new(100.0, 100.0, 100.0));
        assert_eq!(report.total_orientations(), 6);
        for (fo, o) in report.orientations.iter().zip(Orientation::ALL) {
            assert_eq!(fo.dims, o.apply(&item));
            assert_eq!(fo.placement, Placement::from(o));
            let mut values: [f64; 3] = fo.dims.into();
            values.sort_by(f64::total_cmp);
            assert_eq!(values, [20.0, 35.0, 45.0]);
        }
    }

    #[test]
    fn describe_matches_table_order_for_duplicates() {
        let item = Dims::new(10.0, 10.0, 20.0);
        // swapping the two equal values gives back the item as measured
        assert_eq!(
            describe(&item, &Dims::new(10.0, 10.0, 20.0)),
            Placement::AsMeasured
        );
        assert_eq!(describe(&item, &Dims::new(10.0, 20.0, 10.0)), Placement::OnItsSide);
        assert_eq!(
            describe(&item, &Dims::new(20.0, 10.0, 10.0)),
            Placement::UprightRotated
        );
    }

    #[test]
    fn recomputing_gives_the_same_report() {
        let item = Dims::new(60.0, 40.0, 30.0);
        let trunk = Dims::new(100.0, 55.0, 45.0);
        assert_eq!(test_fit(item, trunk), test_fit(item, trunk));
    }
}
