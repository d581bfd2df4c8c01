use carealert_engine::config::EngineConfig;
use chrono::Duration;
use pretty_assertions::assert_eq;
use tracing::Level;

#[test]
fn test_defaults_match_documented_values() {
    let config = EngineConfig::default();

    assert_eq!(config.poll_interval_seconds, 60);
    assert_eq!(config.tolerance_minutes, 5);
    assert_eq!(config.snooze_minutes, 10);
    assert_eq!(config.history_recent_limit, 10);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_duration_accessors() {
    let config = EngineConfig {
        poll_interval_seconds: 30,
        tolerance_minutes: 2,
        snooze_minutes: 15,
        ..EngineConfig::default()
    };

    assert_eq!(config.poll_interval(), std::time::Duration::from_secs(30));
    assert_eq!(config.tolerance(), Duration::minutes(2));
    assert_eq!(config.snooze_duration(), Duration::minutes(15));
}
