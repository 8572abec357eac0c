use anyhow::Result;
use labbook::labs;
use labbook::utils::validation::Validate;
use labbook::{LabError, LabGroup, LabId, LabRunner, LabbookConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_file_and_run_scripted_labs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("labbook.toml");
    std::fs::write(
        &config_path,
        r#"
[files]
path = "out/lab.txt"

[inputs]
conditions = "3 72"
functions = "7 8 9"
"#,
    )?;

    let config = LabbookConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.files.path, "out/lab.txt");
    assert_eq!(config.inputs.len(), 2);

    let runner = LabRunner::new(config);
    assert!(runner.has_scripted_input(LabId::Conditions));
    assert!(!runner.has_scripted_input(LabId::Loops));

    let report = runner.capture(LabId::Conditions, runner.input_for(LabId::Conditions, None))?;
    assert_eq!(
        report.transcript.as_deref(),
        Some("Enter choice (1-3): You selected multiplication\nEnter marks (0-100): Grade C\n")
    );

    let report = runner.capture(LabId::Functions, runner.input_for(LabId::Functions, None))?;
    let text = report.transcript.unwrap_or_default();
    assert!(text.contains("add(x, y): 15\n"));
    assert!(text.contains("average(x, y, z): 8\n"));
    Ok(())
}

#[test]
fn test_missing_sections_fall_back_to_defaults() -> Result<()> {
    let config = LabbookConfig::from_toml("")?;
    config.validate()?;
    assert_eq!(config.files.path, "filename.txt");
    assert!(config.inputs.is_empty());
    Ok(())
}

#[test]
fn test_inputs_for_non_interactive_lab_are_rejected() -> Result<()> {
    let config = LabbookConfig::from_toml("[inputs]\narrays = \"1 2 3\"\n")?;
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        LabError::InvalidConfigValueError { ref field, ref value, .. }
            if field == "inputs" && value == "arrays"
    ));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_empty_file_path_is_rejected() -> Result<()> {
    let config = LabbookConfig::from_toml("[files]\npath = \"  \"\n")?;
    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn test_malformed_toml_reports_config_error() {
    let err = LabbookConfig::from_toml("[files\npath = ").unwrap_err();
    assert!(matches!(err, LabError::ConfigParseError(_)));
}

#[test]
fn test_catalog_serializes_for_json_output() -> Result<()> {
    let config = LabbookConfig::default();
    let oop = labs::catalog(&config, Some(LabGroup::Oop));
    let json = serde_json::to_value(&oop)?;

    let entries = json.as_array().map(Vec::len).unwrap_or_default();
    assert_eq!(entries, 7);
    assert_eq!(json[0]["id"], "constructors");
    assert_eq!(json[0]["group"], "oop");
    assert_eq!(json[0]["interactive"], false);
    Ok(())
}
