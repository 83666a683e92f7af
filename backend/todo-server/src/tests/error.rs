use crate::error::{Result as ServerErrorResult, ServerError};

use todo_config::{Config, ConfigError};

fn validate_startup_config(config: &Config) -> ServerErrorResult<()> {
    config.validate()?;
    Ok(())
}

#[test]
fn test_invalid_config_surfaces_as_server_config_error() {
    let mut config = Config::default();
    config.database.name = String::new();

    let error = validate_startup_config(&config).unwrap_err();

    assert!(matches!(error, ServerError::Config(ConfigError::Generic { .. })));
    assert!(error.to_string().starts_with("Config error: "));
}

#[test]
fn test_io_error_names_the_failed_action() {
    let error = ServerError::Io {
        action: "bind listener",
        source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
    };

    assert_eq!(error.to_string(), "Failed to bind listener: address in use");
}
