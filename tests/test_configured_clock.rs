//! Tests for validating contacts through the configured clock.
//!
//! These tests mutate `CONTACTS_CLOCK` and run serially.

use chrono::Utc;
use contact_schemas::{validate_contact_with, Clock, Config};
use serde_json::json;
use serial_test::serial;
use std::env;

mod fixtures;
use fixtures::*;

struct ClockVarGuard;

impl ClockVarGuard {
    fn set(value: &str) -> Self {
        env::set_var("CONTACTS_CLOCK", value);
        ClockVarGuard
    }
}

impl Drop for ClockVarGuard {
    fn drop(&mut self) {
        env::remove_var("CONTACTS_CLOCK");
    }
}

#[test]
#[serial]
fn test_utc_clock_from_env_drives_birthday_check() {
    let _guard = ClockVarGuard::set("utc");
    let config = Config::from_env().unwrap();
    assert_eq!(config.clock(), Clock::Utc);

    // Today in UTC can be ahead of the local date; it must still pass
    let today_utc = Utc::now().date_naive();
    let raw = contact_json_with("birthday", json!(today_utc.to_string()));
    assert!(validate_contact_with(&raw, &config).is_ok());

    let next_week = today_utc + chrono::Duration::days(7);
    let raw = contact_json_with("birthday", json!(next_week.to_string()));
    let err = validate_contact_with(&raw, &config).unwrap_err();
    assert_eq!(err.fields(), vec!["birthday"]);
}

#[test]
#[serial]
fn test_fixed_clock_in_config_is_honoured() {
    let config = Config {
        clock: fixed_clock(),
        ..Config::default()
    };

    let raw = contact_json_with("birthday", json!(today().to_string()));
    assert!(validate_contact_with(&raw, &config).is_ok());

    let tomorrow = today().succ_opt().unwrap();
    let raw = contact_json_with("birthday", json!(tomorrow.to_string()));
    assert!(validate_contact_with(&raw, &config).is_err());
}
