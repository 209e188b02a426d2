use log_chain::app::{Config, ConfigError, TracingLevel};
use log_chain::Severity;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn clean_all_env_vars() {
    let env_vars = [
        "LOG_CHAIN_LOG_LEVEL",
        "LOG_CHAIN_LOG_DIRECTIVES",
        "LOG_CHAIN_ORDER",
        "LOG_CHAIN_CONFIG",
    ];

    unsafe {
        for var in &env_vars {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_no_arguments_yields_defaults() {
    clean_all_env_vars();

    let config = Config::from_args(["log-chain"]).unwrap();
    assert_eq!(config.log_level, TracingLevel::Warn);
    assert_eq!(
        config.chain_order,
        vec![Severity::Info, Severity::Debug, Severity::Error]
    );
    assert!(config.log_directives.is_empty());
    assert!(config.config_file.is_none());
}

#[test]
#[serial]
fn test_config_from_args() {
    clean_all_env_vars();

    let config = Config::from_args([
        "log-chain",
        "--log-level",
        "debug",
        "--chain-order",
        "error,INFO",
        "--log-directive",
        "log_chain::chain=trace",
    ])
    .unwrap();

    assert_eq!(config.log_level, TracingLevel::Debug);
    assert_eq!(config.chain_order, vec![Severity::Error, Severity::Info]);
    assert_eq!(config.log_directives, vec!["log_chain::chain=trace"]);
}

#[test]
#[serial]
fn test_config_from_env() {
    clean_all_env_vars();
    unsafe {
        env::set_var("LOG_CHAIN_ORDER", "debug,error,info");
        env::set_var("LOG_CHAIN_LOG_LEVEL", "trace");
    }

    let config = Config::from_args(["log-chain"]).unwrap();
    assert_eq!(
        config.chain_order,
        vec![Severity::Debug, Severity::Error, Severity::Info]
    );
    assert_eq!(config.log_level, TracingLevel::Trace);

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_duplicate_order_rejected() {
    clean_all_env_vars();

    let err = Config::from_args(["log-chain", "--chain-order", "info,info"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
}

#[test]
#[serial]
fn test_unknown_severity_rejected() {
    clean_all_env_vars();

    let err = Config::from_args(["log-chain", "--chain-order", "info,warn"]).unwrap_err();
    assert!(matches!(err, ConfigError::Cli(_)));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "log_level = \"info\"").unwrap();
    writeln!(file, "chain_order = [\"error\", \"debug\"]").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log_level, TracingLevel::Info);
    assert_eq!(config.chain_order, vec![Severity::Error, Severity::Debug]);
    assert_eq!(config.config_file.as_deref(), Some(file.path()));
}

#[test]
fn test_config_file_missing_keys_use_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.chain_order, Config::default().chain_order);
    assert_eq!(config.log_level, TracingLevel::Warn);
}

#[test]
fn test_config_file_errors() {
    let missing = Config::from_file("/nonexistent/log-chain.toml").unwrap_err();
    assert!(matches!(missing, ConfigError::FileError(_)));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "chain_order = [\"fatal\"]").unwrap();
    let invalid = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(invalid, ConfigError::ParseError(_)));
}

#[test]
fn test_resolve_prefers_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "chain_order = [\"debug\"]").unwrap();

    let config = Config {
        config_file: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let resolved = config.resolve().unwrap();
    assert_eq!(resolved.chain_order, vec![Severity::Debug]);
}

#[test]
fn test_config_file_severities_are_case_insensitive() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "chain_order = [\"INFO\", \"Debug\"]").unwrap();

    let from_file = Config::from_file(file.path()).unwrap();
    assert_eq!(from_file.chain_order, vec![Severity::Info, Severity::Debug]);
}

#[test]
#[serial]
fn test_file_and_args_accept_the_same_severity_names() {
    clean_all_env_vars();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "chain_order = [\"ERROR\", \"info\"]").unwrap();

    let from_file = Config::from_file(file.path()).unwrap();
    let from_args = Config::from_args(["log-chain", "--chain-order", "ERROR,info"]).unwrap();
    assert_eq!(from_file.chain_order, from_args.chain_order);
}

#[test]
#[serial]
fn test_warning_alias_for_log_level() {
    clean_all_env_vars();

    let config = Config::from_args(["log-chain", "--log-level", "warning"]).unwrap();
    assert_eq!(config.log_level, TracingLevel::Warn);

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "log_level = \"warning\"").unwrap();
    let from_file = Config::from_file(file.path()).unwrap();
    assert_eq!(from_file.log_level, TracingLevel::Warn);
}
