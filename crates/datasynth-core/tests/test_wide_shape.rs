use datasynth_core::{
    generate_wide, CellValue, Channel, Metric, NoiseParams, NoiseProfile, RngFactory, WideParams,
};
use std::collections::HashSet;

#[test]
fn test_wide_clean_values() {
    let mut rng = RngFactory::new(12).stream(0);
    let params = WideParams {
        num_dates: 9,
        noise: NoiseParams::clean(),
        wrong_type_cells: vec![],
    };
    let table = generate_wide(&params, &mut rng).unwrap().table;
    assert_eq!(table.num_rows(), 9);
    assert_eq!(table.num_columns(), 4);

    for (c, key) in table.columns().iter().enumerate() {
        let metric: Metric = key.field().parse().unwrap();
        for value in table.column_values(c) {
            let v = value.as_integer().unwrap();
            assert!(metric.range().contains(&v));
        }
    }
}

#[test]
fn test_wide_wrong_type_cells() {
    let mut rng = RngFactory::new(12).stream(1);
    let params = WideParams {
        num_dates: 16,
        noise: NoiseParams {
            add_empty_cells: false,
            empty_frac: 0.0,
            change_types: true,
        },
        wrong_type_cells: vec![(Channel::Tv, Metric::Spend), (Channel::Radio, Metric::Grps)],
    };
    let generated = generate_wide(&params, &mut rng).unwrap();
    let table = generated.table;
    assert_eq!(generated.summary.wrong_typed, 4);

    for (c, key) in table.columns().iter().enumerate() {
        let malformed: Vec<&CellValue> = table
            .column_values(c)
            .filter(|v| matches!(v, CellValue::Malformed(_)))
            .collect();
        let targeted = matches!(
            (key.group(), key.field()),
            (Some("TV"), "Spend") | (Some("Radio"), "GRPs")
        );
        assert_eq!(malformed.len(), if targeted { 2 } else { 0 });
        for v in malformed {
            assert!(NoiseProfile::NumericLike
                .vocabulary()
                .contains(&v.as_text().unwrap()));
        }
    }
}

#[test]
fn test_wide_empty_cells_shape() {
    let mut rng = RngFactory::new(12).stream(2);
    let params = WideParams {
        num_dates: 10,
        noise: NoiseParams {
            add_empty_cells: true,
            empty_frac: 0.2,
            change_types: false,
        },
        wrong_type_cells: vec![],
    };
    let generated = generate_wide(&params, &mut rng).unwrap();
    // 10 rows x 4 value columns, index excluded
    assert_eq!(generated.summary.empty_picks, 8);
    assert!(generated.table.count_empty() <= 8);
    assert_eq!(generated.table.num_rows(), 10);
    assert_eq!(generated.table.num_columns(), 4);
}

#[test]
fn test_wide_index_dates_distinct() {
    let mut rng = RngFactory::new(12).stream(3);
    let params = WideParams {
        num_dates: 6,
        noise: NoiseParams::clean(),
        wrong_type_cells: vec![],
    };
    let table = generate_wide(&params, &mut rng).unwrap().table;
    let dates: HashSet<_> = table
        .index()
        .unwrap()
        .values
        .iter()
        .map(|v| v.render().unwrap())
        .collect();
    assert_eq!(dates.len(), 6);
}
