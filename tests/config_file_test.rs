use anyhow::Result;
use chaos_score::{ChaosError, CliConfig, FileConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn cli_with_config(path: std::path::PathBuf) -> CliConfig {
    CliConfig {
        lat: 28.6,
        lng: 77.2,
        config: Some(path),
        tomtom_key: None,
        openweather_key: None,
        newsapi_key: None,
        verbose: false,
    }
}

#[test]
fn loads_keys_and_endpoints_from_file() -> Result<()> {
    let file = write_config(
        r#"
[keys]
tomtom = "tt-key"
openweather = "ow-key"
newsapi = "na-key"

[endpoints]
traffic = "http://localhost:9090"
"#,
    )?;

    let config = FileConfig::from_file(file.path())?;
    assert_eq!(config.keys.tomtom.as_deref(), Some("tt-key"));
    assert_eq!(
        config.endpoints.traffic.as_deref(),
        Some("http://localhost:9090")
    );
    assert_eq!(config.endpoints.weather, None);

    let settings = cli_with_config(file.path().to_path_buf()).resolve()?;
    assert_eq!(settings.tomtom_key, "tt-key");
    assert_eq!(settings.openweather_key, "ow-key");
    assert_eq!(settings.newsapi_key, "na-key");
    Ok(())
}

#[test]
fn cli_keys_take_precedence_over_file() -> Result<()> {
    let file = write_config(
        r#"
[keys]
tomtom = "file-key"
openweather = "ow-key"
newsapi = "na-key"
"#,
    )?;

    let mut cli = cli_with_config(file.path().to_path_buf());
    cli.tomtom_key = Some("cli-key".to_string());

    let settings = cli.resolve()?;
    assert_eq!(settings.tomtom_key, "cli-key");
    Ok(())
}

#[test]
fn rejects_invalid_endpoint_url() -> Result<()> {
    let file = write_config(
        r#"
[endpoints]
weather = "not a url"
"#,
    )?;

    let result = FileConfig::from_file(file.path());
    assert!(matches!(
        result,
        Err(ChaosError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn rejects_out_of_range_coordinate() -> Result<()> {
    let file = write_config(
        r#"
[keys]
tomtom = "tt"
openweather = "ow"
newsapi = "na"
"#,
    )?;

    let mut cli = cli_with_config(file.path().to_path_buf());
    cli.lat = 91.0;

    let result = cli.resolve();
    assert!(matches!(
        result,
        Err(ChaosError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn missing_key_is_reported_by_field() -> Result<()> {
    let file = write_config(
        r#"
[keys]
tomtom = "tt"
openweather = "ow"
"#,
    )?;

    std::env::remove_var("NEWSAPI_KEY");
    let result = cli_with_config(file.path().to_path_buf()).resolve();
    match result {
        Err(ChaosError::MissingConfigError { field }) => assert_eq!(field, "newsapi_key"),
        other => panic!("expected MissingConfigError, got {:?}", other.map(|_| ())),
    }
    Ok(())
}
