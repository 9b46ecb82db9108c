use cplan_domain::config::LoggingConfig;
use cplan_logger::{Logger, LoggerError, parse_level};

#[test]
fn second_install_from_config_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggingConfig { level: "warn".to_owned(), ..LoggingConfig::default() };

    let logger = Logger::builder().name("course-planner").level(parse_level(&config.level)?).init()?;
    assert!(logger.guard().is_none(), "console-only logging has no file worker");

    let err = Logger::builder()
        .name("course-planner-shadow")
        .level(parse_level(&config.level)?)
        .init()
        .expect_err("only one global subscriber per process");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
    Ok(())
}
