//! Configuration parsing tests.

use armfpe_core::config::{EmulatorConfig, FaultPolicy};
use rstest::rstest;

#[test]
fn defaults() {
    let config = EmulatorConfig::default();
    assert!(!config.trace);
    assert_eq!(config.fault_policy, FaultPolicy::Abort);
}

#[test]
fn empty_json_takes_defaults() {
    assert_eq!(EmulatorConfig::from_json("{}").unwrap(), EmulatorConfig::default());
}

#[rstest]
#[case(r#"{ "fault_policy": "Stop" }"#, FaultPolicy::Stop)]
#[case(r#"{ "fault_policy": "stop" }"#, FaultPolicy::Stop)]
#[case(r#"{ "fault_policy": "abort" }"#, FaultPolicy::Abort)]
fn fault_policy_spellings(#[case] json: &str, #[case] expected: FaultPolicy) {
    assert_eq!(EmulatorConfig::from_json(json).unwrap().fault_policy, expected);
}

#[test]
fn unknown_policy_is_rejected() {
    assert!(EmulatorConfig::from_json(r#"{ "fault_policy": "ignore" }"#).is_err());
}

#[test]
fn builders_override_fields() {
    let config = EmulatorConfig::default()
        .with_trace(true)
        .with_fault_policy(FaultPolicy::Stop);
    assert!(config.trace);
    assert_eq!(config.fault_policy, FaultPolicy::Stop);
}
