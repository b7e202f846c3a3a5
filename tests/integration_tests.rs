use sales_etl::config::toml_config::TomlConfig;
use sales_etl::utils::error::{ErrorCategory, ErrorSeverity};
use sales_etl::{EtlEngine, EtlError, LocalStorage, SalesPipeline};
use tempfile::TempDir;

const SALES_CSV: &str = "id,name,serial_number,cost,sales_price,sales_person
1,Rock Salt,RS1,10,50,Andy Ghadban
2,Planter's Nuts,XO28-V,4,23,Reginald VelJohnson
3,Bulk Pack SuperWash Fire Hoses,BPSW-FH3,122,122,Harry Lewis
4,BlackBOX carnival sticks,BBOX4,215,460,Jean-Luc Picard
5,ARMY surplus Canned Beef,5-ARMYCB,34,513,Jean-Luc Picard
6,Compressed Air,CA6,80,900,Frank Castle
7,Rock Salt,RS1,10,2,Reginald VelJohnson
8,Werther's Original,WO-8,12,75,Andy Ghadban
9,tonka truck passenger door,TT-PD-9,336,275,Jean-Luc Picard
10,ARMY surplus Canned Beef,5-ARMYCB,12,6000,Frank Castle
11,SwashBuckler's Buckled Swashes,SBBS11,122,160,Harry Lewis
";

fn config_for(input: &str, output: &str) -> TomlConfig {
    let toml_content = format!(
        r#"
[pipeline]
name = "integration"

[source]
type = "csv"
path = "{}"

[load]
output_path = "{}"
output_formats = ["text", "csv", "json"]
"#,
        input, output
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_with_csv_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("sales.csv");
    std::fs::write(&input_path, SALES_CSV).unwrap();
    let output_path = temp_dir.path().join("out");

    let config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let pipeline = SalesPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    let rendered = engine.run().await.unwrap();

    let filtered_section = rendered
        .split("Filtered and Sorted List: ")
        .nth(1)
        .unwrap();
    let filtered_ids: Vec<&str> = filtered_section
        .lines()
        .filter(|line| line.starts_with("id: "))
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(
        filtered_ids,
        vec!["id: 6", "id: 4", "id: 8", "id: 1", "id: 11"]
    );

    assert!(rendered.contains(
        "id: 6, name: Compressed Air, serialNumber: CA6, cost: 80, salesPrice: 900, salesPerson: Frank Castle, SalesPerson's Profit: 6808"
    ));

    let text = std::fs::read_to_string(output_path.join("report.txt")).unwrap();
    assert_eq!(text, rendered);

    let csv = std::fs::read_to_string(output_path.join("filtered.csv")).unwrap();
    assert_eq!(csv.lines().count(), 6);

    let json = std::fs::read_to_string(output_path.join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["original"].as_array().unwrap().len(), 11);
    assert_eq!(value["filtered"].as_array().unwrap().len(), 5);
    assert_eq!(value["salesperson_totals"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_sample_source_matches_csv_source() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("sales.csv");
    std::fs::write(&input_path, SALES_CSV).unwrap();

    let from_csv = {
        let mut config = config_for(input_path.to_str().unwrap(), "unused");
        config.load.output_path = None;
        EtlEngine::new(SalesPipeline::new(LocalStorage::default(), config))
            .run()
            .await
            .unwrap()
    };

    let from_sample = {
        let config = TomlConfig::from_toml_str(
            r#"
[pipeline]
name = "sample"

[source]
type = "sample"

[load]
"#,
        )
        .unwrap();
        EtlEngine::new(SalesPipeline::new(LocalStorage::default(), config))
            .run()
            .await
            .unwrap()
    };

    assert_eq!(from_csv, from_sample);
}

#[tokio::test]
async fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("missing.csv");

    let mut config = config_for(input_path.to_str().unwrap(), "unused");
    config.load.output_path = None;
    let engine = EtlEngine::new(SalesPipeline::new(LocalStorage::default(), config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, EtlError::InputReadError { .. }));
    assert_eq!(err.category(), ErrorCategory::Input);
    assert_eq!(err.severity(), ErrorSeverity::High);
    assert!(err.user_friendly_message().starts_with("Could not read sales records"));
}

#[tokio::test]
async fn test_header_only_input_yields_empty_listings() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("empty.csv");
    std::fs::write(
        &input_path,
        "id,name,serial_number,cost,sales_price,sales_person\n",
    )
    .unwrap();

    let mut config = config_for(input_path.to_str().unwrap(), "unused");
    config.load.output_path = None;
    let rendered = EtlEngine::new(SalesPipeline::new(LocalStorage::default(), config))
        .run()
        .await
        .unwrap();

    assert!(rendered.contains("Original List: "));
    assert!(rendered.contains("Filtered and Sorted List: "));
    assert!(!rendered.contains("id: "));
}
