use chart_config::ChartError;
use chart_config::api::{
    AssemblerConfig, ChartAssembler, ChartConfiguration, ChartDocument, JsonFormat,
};
use chart_config::core::{Chart, ChartDataset, ChartType};

#[test]
fn assembled_json_parses_back_into_the_same_document() {
    let assembler = ChartAssembler::default();
    let chart = Chart::new(1, "Contract", ChartType::Bar);
    let datasets = vec![
        ChartDataset::new(1, 1)
            .with_title("Visitors")
            .with_labels(["Mon", "Tue"])
            .with_values([120, 98])
            .with_meta("borderWidth", 1),
    ];

    let built = assembler.build(&chart, &datasets).expect("build");
    let json = built.to_json(JsonFormat::Pretty).expect("serialize");
    let parsed = ChartDocument::from_json_str(&json).expect("parse");
    assert_eq!(parsed, built);

    let typed = ChartConfiguration::from_json_str(&json).expect("typed parse");
    assert_eq!(
        typed,
        ChartAssembler::base_configuration(&chart.chart_type, &datasets)
    );
}

#[test]
fn unknown_fields_survive_a_document_round_trip_in_order() {
    let input = r#"{"type":"line","data":{"labels":[],"datasets":[],"xLabels":["a"]},"options":{"responsive":false,"legend":{"display":false}},"plugins":[]}"#;
    let parsed = ChartDocument::from_json_str(input).expect("parse");

    assert_eq!(parsed.chart_type(), Some("line"));
    assert!(parsed.options().expect("options").contains_key("legend"));
    assert!(parsed.pointer("/data/xLabels").is_some());
    assert_eq!(parsed.to_json_string().expect("serialize"), input);

    let typed = parsed.to_configuration().expect("typed");
    assert_eq!(typed.chart_type, ChartType::from_raw("line"));
    assert!(!typed.options.responsive);
}

#[test]
fn document_without_typed_fields_does_not_convert_back() {
    let mut document = ChartAssembler::default()
        .build(&Chart::new(1, "Bare", ChartType::Bar), &Vec::<ChartDataset>::new())
        .expect("build");
    document.remove("options");

    let err = document.to_configuration().expect_err("options missing");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn malformed_configuration_json_is_invalid_data() {
    let err = ChartConfiguration::from_json_str("{\"type\":1}").expect_err("bad json");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn assembler_config_controls_output_layout() {
    let config = AssemblerConfig::from_json_str(r#"{"json_format":"pretty"}"#).expect("config");
    let assembler = ChartAssembler::new(config);
    assert_eq!(assembler.config().json_format, JsonFormat::Pretty);

    let json = assembler
        .assemble(&Chart::new(1, "Layout", ChartType::Pie), &Vec::<ChartDataset>::new())
        .expect("assemble");
    assert!(json.starts_with("{\n"));
}
