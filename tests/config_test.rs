use std::time::Duration;

use purchais::config::Config;

// Env vars are process-wide, so everything touching them lives in one test.
#[test]
fn config_from_env() {
    unsafe {
        std::env::remove_var("PURCHAIS_SEED_FILE");
        std::env::remove_var("PURCHAIS_INGEST_DELAY_MS");
        std::env::remove_var("PURCHAIS_SUGGEST_DELAY_MS");
        std::env::remove_var("PURCHAIS_ORDER_DELAY_MS");
        std::env::remove_var("PURCHAIS_EXPIRY_WINDOW_DAYS");
    }

    let defaults = Config::from_env().unwrap();
    assert!(defaults.seed_file.is_none());
    assert_eq!(defaults.ingest_delay, Duration::from_millis(2000));
    assert_eq!(defaults.suggest_delay, Duration::from_millis(1500));
    assert_eq!(defaults.expiry_window_days, 3);
    assert!(!defaults.log_level.is_empty());

    unsafe {
        std::env::set_var("PURCHAIS_SEED_FILE", "/tmp/pantry.toml");
        std::env::set_var("PURCHAIS_INGEST_DELAY_MS", "10");
        std::env::set_var("PURCHAIS_EXPIRY_WINDOW_DAYS", "5");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.seed_file.as_deref(), Some(std::path::Path::new("/tmp/pantry.toml")));
    assert_eq!(config.ingest_delay, Duration::from_millis(10));
    assert_eq!(config.expiry_window_days, 5);

    unsafe {
        std::env::set_var("PURCHAIS_ORDER_DELAY_MS", "soon");
    }
    assert!(Config::from_env().is_err());

    unsafe {
        std::env::remove_var("PURCHAIS_SEED_FILE");
        std::env::remove_var("PURCHAIS_INGEST_DELAY_MS");
        std::env::remove_var("PURCHAIS_ORDER_DELAY_MS");
        std::env::remove_var("PURCHAIS_EXPIRY_WINDOW_DAYS");
    }
}

#[test]
fn instant_config_has_no_delays() {
    let config = Config::instant();
    assert_eq!(config.ingest_delay, Duration::ZERO);
    assert_eq!(config.suggest_delay, Duration::ZERO);
    assert_eq!(config.order_delay, Duration::ZERO);
}
