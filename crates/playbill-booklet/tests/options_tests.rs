use playbill_booklet::*;

#[test]
fn test_default_options() {
    let options = BookletOptions::default();
    assert_eq!(options.print_order, PrintOrder::DoubleSided);
    assert_eq!(options.max_preview_sheets, None);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_zero_preview_sheets() {
    let options = BookletOptions {
        max_preview_sheets: Some(0),
        ..Default::default()
    };
    match options.validate() {
        Err(BookletError::Config(msg)) => assert!(msg.contains("at least one sheet")),
        _ => panic!("Expected Config error"),
    }

    let options = BookletOptions {
        max_preview_sheets: Some(1),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        print_order: PrintOrder::TwoSided,
        max_preview_sheets: Some(3),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = BookletOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "print_order": "two_sided" }"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.print_order, PrintOrder::TwoSided);
    assert_eq!(loaded.max_preview_sheets, None);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match BookletOptions::load(temp_file.path()).await {
        Err(BookletError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&PrintOrder::TwoSided).unwrap(),
        "\"two_sided\""
    );
    assert_eq!(
        serde_json::to_string(&PreviewMode::ReadingOrder).unwrap(),
        "\"reading_order\""
    );
}
