//! Tests for configuration system

use enquiry::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.notification.title, "Message Sent!");
    assert_eq!(config.notification.duration_secs, 5);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("enquiry.toml");
    std::fs::write(
        &path,
        "[notification]\ntitle = \"Thanks!\"\nduration_secs = 2\n",
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.notification.title, "Thanks!");
    assert_eq!(config.notification.duration_secs, 2);
    assert_eq!(
        config.notification.description,
        "Thanks for completing the form. We'll be in touch soon!"
    );

    Ok(())
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("missing.toml");

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.notification.duration_secs, 5);
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}

#[test]
fn test_zero_duration_fails_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("enquiry.toml");
    std::fs::write(&path, "[notification]\nduration_secs = 0\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(config.validate().is_err());

    Ok(())
}
