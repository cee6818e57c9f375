use sextant_core::{OutputKind, OutputValue};
use sextant_fixture::{Config, Declaration, Tolerance, parse_fixture};
use sextant_gen::{Catalog, RunError, verify_selected, write_selected};

fn render(names: &[&str], config: &Config) -> String {
    let catalog = Catalog::reference().unwrap();
    let mut out = Vec::new();
    write_selected(&catalog, names, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn epj2jd_fixture_text() {
    let config = Config::default().with_declaration(Declaration::Var);
    let text = render(&["epj2jd"], &config);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "var epj2jd_results = [");
    assert_eq!(
        lines[1],
        "  [1.9555450000000000000000000000e+06, \
         2.4000005000000000000000000000e+06, \
         7.1358385575000000000000000000e+08  ],"
    );
    assert_eq!(lines[10], "];");
    assert!(text.ends_with("];\n"));
}

#[test]
fn two_input_fixture_is_exhaustive() {
    let text = render(&["tcbtdb"], &Config::default());
    let parsed = parse_fixture(&text).unwrap();

    assert_eq!(parsed.name, "tcbtdb_results");
    let records = parsed
        .records::<2>(&[OutputKind::Integer, OutputKind::Scalar, OutputKind::Scalar])
        .unwrap();
    assert_eq!(records.len(), 49);

    let axis = [-12.0, -8.25, -4.5, -0.75, 3.0, 6.75, 10.5];
    for (k, record) in records.iter().enumerate() {
        assert_eq!(record.inputs, [axis[k / 7], axis[k % 7]]);
        assert_eq!(record.field_count(), 5);
    }
}

#[test]
fn three_input_fixture_is_decimated() {
    let text = render(&["ut1tai"], &Config::default());
    let records = parse_fixture(&text)
        .unwrap()
        .records::<3>(&[OutputKind::Integer, OutputKind::Scalar, OutputKind::Scalar])
        .unwrap();

    assert_eq!(records.len(), 69);
    // Position 1 of the enumeration: only the innermost axis has advanced.
    assert_eq!(records[0].inputs, [-12.0, -12.0, -8.25]);
    // Position 6.
    assert_eq!(records[1].inputs, [-12.0, -12.0, 10.5]);
    // Position 11 crosses into the next middle-axis value.
    assert_eq!(records[2].inputs, [-12.0, -8.25, 3.0]);
}

#[test]
fn calendar_failures_are_recorded() {
    let text = render(&["jd2cal"], &Config::default());
    let first = text.lines().nth(1).unwrap();

    let prefix = concat!(
        "  [-1.0000000000000000000000000000e+05, ",
        "-7.5000000000000000000000000000e-01, ",
        "-1, 0, 0, 0, ",
    );
    assert!(first.starts_with(prefix), "{first}");
}

#[test]
fn output_is_deterministic() {
    let config = Config::default();
    assert_eq!(render(&[], &config), render(&[], &config));
}

#[test]
fn whole_catalog_is_one_stream() {
    let text = render(&[], &Config::default());
    let catalog = Catalog::reference().unwrap();

    let openings: Vec<&str> = text.lines().filter(|line| line.ends_with(" = [")).collect();
    let expected: Vec<String> = catalog
        .iter()
        .map(|entry| format!("{}_results = [", entry.name()))
        .collect();
    assert_eq!(openings, expected);

    let records = text.lines().filter(|line| line.starts_with("  [")).count();
    let expected: usize = catalog.iter().map(|entry| entry.expected_records()).sum();
    assert_eq!(records, expected);
}

#[test]
fn every_routine_matches_its_fixture() {
    let catalog = Catalog::reference().unwrap();
    let config = Config::default().with_declaration(Declaration::Const);

    let reports = verify_selected::<&str>(&catalog, &[], &config, Tolerance::EXACT).unwrap();

    assert_eq!(reports.len(), catalog.len());
    for (name, report) in reports {
        assert!(report.is_clean(), "{name}: {:?}", report.mismatches);
        assert_eq!(report.rows, catalog.get(&name).unwrap().expected_records());
    }
}

#[test]
fn unknown_names_are_rejected() {
    let catalog = Catalog::reference().unwrap();
    let mut out = Vec::new();

    let result = write_selected(&catalog, &["epj2jd", "nope"], &Config::default(), &mut out);
    assert!(matches!(result, Err(RunError::Catalog(_))));
    assert!(out.is_empty());
}

#[test]
fn config_file_sets_suffix() {
    let config: Config = toml::from_str(
        r#"
        declaration = "let"
        suffix = "_expected"
        "#,
    )
    .unwrap();

    let text = render(&["rv2m"], &config);
    let first = text.lines().nth(1).unwrap();

    assert!(text.starts_with("let rv2m_expected = [\n"), "{text}");
    assert!(first.starts_with("  [-3.0000000000000000000000000000e+00, "), "{first}");
    assert!(first.contains(", [[") && first.ends_with("]]  ],"), "{first}");
}

#[test]
fn rotation_vectors_round_trip_through_matrices() {
    let text = render(&["rm2v"], &Config::default());
    let records = parse_fixture(&text)
        .unwrap()
        .records::<3>(&[OutputKind::Vector])
        .unwrap();
    assert_eq!(records.len(), 25);

    let short: Vec<_> = records
        .iter()
        .filter(|record| record.inputs.iter().map(|w| w * w).sum::<f64>().sqrt() < 3.0)
        .collect();
    assert!(!short.is_empty());
    for record in short {
        let OutputValue::Vector(vector) = record.outputs[0] else {
            panic!("expected a vector, got {:?}", record.outputs[0]);
        };
        for (w, v) in record.inputs.iter().zip(vector) {
            assert!((w - v).abs() < 1e-12, "{:?} -> {vector:?}", record.inputs);
        }
    }
}
