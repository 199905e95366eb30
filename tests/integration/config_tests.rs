//! Configuration layering: defaults, TOML file, environment.

use namedupe::cli::OutputFormat;
use namedupe::config::Config;
use namedupe::i18n::Language;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all NAMEDUPE_* environment variables to avoid interference.
fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("NAMEDUPE_") {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_config_load_from_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    fs::write(
        &config_path,
        r#"
extensions = ["ydr", ".YBN"]
language = "pt"
output = "csv"
follow_symlinks = true
"#,
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    assert_eq!(config.extensions, vec!["ydr", ".YBN"]);
    assert_eq!(config.language, Language::Pt);
    assert_eq!(config.output, OutputFormat::Csv);
    assert!(config.follow_symlinks);
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "language = \"pt-br\"\n").unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    assert_eq!(config.language, Language::Pt);
    assert_eq!(config.extensions, Config::default().extensions);
    assert_eq!(config.output, OutputFormat::Table);
}

#[test]
fn test_config_invalid_toml_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "language = \"klingon\"\n").unwrap();

    assert!(Config::load(Some(&config_path)).is_err());
}

#[test]
fn test_env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "language = \"pt\"\noutput = \"csv\"\n").unwrap();

    std::env::set_var("NAMEDUPE_LANGUAGE", "en");
    std::env::set_var("NAMEDUPE_FOLLOW_SYMLINKS", "true");
    let config = Config::load(Some(&config_path));
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.language, Language::En);
    assert_eq!(config.output, OutputFormat::Csv);
    assert!(config.follow_symlinks);
}

#[test]
fn test_figment_without_file_is_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let config: Config = Config::figment(None).extract().unwrap();
    assert_eq!(config, Config::default());
}
