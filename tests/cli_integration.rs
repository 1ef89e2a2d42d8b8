//! Integration tests for the ugen binary and library.
//!
//! Binary tests run the built executable with a piped stdout, so no trailing
//! line feed is written.

use std::collections::HashSet;
use std::process::{Command, Output};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use ugen::config::DefaultsConfig;
use ugen::domain::{GenerationConfig, Strategy};
use ugen::error::GenerateError;
use ugen::service::Generator;

// ============================================================================
// Test Harness
// ============================================================================

/// Run the binary with `args` and a clean environment.
fn ugen(args: &[&str]) -> Output {
    ugen_with_env(args, &[])
}

fn ugen_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ugen"));
    command.args(args).env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("UGEN__") {
            command.env_remove(key);
        }
    }
    command.envs(vars.iter().copied());
    command.output().expect("Failed to run ugen")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "ugen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn generate(config: GenerationConfig, count: usize, length: usize) -> Vec<u8> {
    let mut out = Vec::new();
    Generator::new(config)
        .generate(&mut out, count, length)
        .expect("generation failed");
    out
}

const UUID_PATTERN: &str =
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

// ============================================================================
// Binary Tests
// ============================================================================

#[test]
fn test_default_output() {
    let out = stdout(&ugen(&[]));
    assert!(Regex::new("^[0-9a-zA-Z]{12}$").unwrap().is_match(&out));
}

#[test]
fn test_digit_scenario() {
    let out = stdout(&ugen(&["-d", "-l", "5"]));
    assert!(Regex::new("^[1-9][0-9]{4}$").unwrap().is_match(&out));
}

#[test]
fn test_uuid7_scenario() {
    let out = stdout(&ugen(&["--uuid7", "-c", "3", "-s", ","]));
    let re = Regex::new(&format!("^{UUID_PATTERN}$")).unwrap();
    let values: Vec<&str> = out.split(',').collect();
    assert_eq!(values.len(), 3);
    for value in &values {
        assert!(re.is_match(value), "not a UUID: {value}");
        assert_eq!(&value[14..15], "7");
    }
    assert!(values.windows(2).all(|w| w[0][..13] <= w[1][..13]));
}

#[test]
fn test_count_and_separator() {
    let out = stdout(&ugen(&["-c", "50", "-l", "16"]));
    let values: Vec<&str> = out.split('\n').collect();
    assert_eq!(values.len(), 50);
    assert_eq!(values.iter().collect::<HashSet<_>>().len(), 50);
}

#[test]
fn test_count_zero() {
    let output = ugen(&["-c", "0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_ulid_output() {
    let out = stdout(&ugen(&["--ulid"]));
    assert!(
        Regex::new("^[0-9A-HJKMNP-TV-Z]{26}$")
            .unwrap()
            .is_match(&out)
    );
}

#[test]
fn test_ulid_as_uuid_output() {
    let out = stdout(&ugen(&["--ulid-as-uuid"]));
    assert!(
        Regex::new(&format!("^{UUID_PATTERN}$"))
            .unwrap()
            .is_match(&out)
    );
}

#[test]
fn test_hex_output() {
    let out = stdout(&ugen(&["--hex", "-l", "8", "--prefix", "0x"]));
    assert!(Regex::new("^0x[0-9a-f]{16}$").unwrap().is_match(&out));
}

#[test]
fn test_base64_output() {
    let out = stdout(&ugen(&["--base64", "-l", "9"]));
    assert_eq!(out.len(), 12);
    assert_eq!(STANDARD.decode(&out).unwrap().len(), 9);
}

#[test]
fn test_upper_case() {
    let out = stdout(&ugen(&["--upper", "-l", "32"]));
    assert!(Regex::new("^[0-9A-Z]{32}$").unwrap().is_match(&out));
}

#[test]
fn test_interval_output() {
    let out = stdout(&ugen(&["-i", "-5,5", "-c", "200", "-s", " "]));
    for value in out.split(' ') {
        let n: i64 = value.parse().unwrap();
        assert!((-5..5).contains(&n), "{n} out of range");
    }
}

#[test]
fn test_interval_single_bound() {
    let out = stdout(&ugen(&["--interval", "3", "-c", "100"]));
    assert!(out.split('\n').all(|v| matches!(v, "0" | "1" | "2")));
}

#[test]
fn test_invalid_interval_exit_code() {
    let output = ugen(&["-i", "10,5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ugen: "), "stderr: {stderr}");
    assert!(stderr.contains("interval begin is greater than or equals to end"));
}

#[test]
fn test_failure_reported_once() {
    for level in ["warn", "error"] {
        let output = ugen_with_env(
            &["-i", "10,5"],
            &[("UGEN__OBSERVABILITY__LOG_LEVEL", level)],
        );
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(
            stderr,
            "ugen: interval begin is greater than or equals to end\n",
            "log level {level}"
        );
        assert!(!output.stderr.contains(&0x1b));
    }
}

#[test]
fn test_oversized_length_exit_code() {
    let output = ugen(&["-l", &usize::MAX.to_string()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ugen: length "), "stderr: {stderr}");
    assert!(stderr.contains("too large"));
}

#[test]
fn test_unparsable_interval_names_token() {
    let output = ugen(&["-i", "x,10"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"x\""));
}

#[test]
fn test_unknown_flag_rejected() {
    let output = ugen(&["--bogus"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_environment_defaults() {
    let out = stdout(&ugen_with_env(
        &["-d"],
        &[
            ("UGEN__DEFAULTS__COUNT", "4"),
            ("UGEN__DEFAULTS__LENGTH", "6"),
            ("UGEN__DEFAULTS__SEPARATOR", ";"),
        ],
    ));
    let values: Vec<&str> = out.split(';').collect();
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|v| v.len() == 6));
}

#[test]
fn test_flags_override_environment() {
    let out = stdout(&ugen_with_env(
        &["-d", "-l", "3"],
        &[("UGEN__DEFAULTS__LENGTH", "6")],
    ));
    assert_eq!(out.len(), 3);
}

#[test]
fn test_invalid_environment_fails() {
    for var in ["UGEN__DEFAULTS__LENGTH", "UGEN__DEFAULTS__COUNT"] {
        let output = ugen_with_env(&[], &[(var, "0")]);
        assert!(!output.status.success(), "{var}");
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load configuration"));
    }
}

// ============================================================================
// Library Tests
// ============================================================================

#[test]
fn test_strategy_precedence() {
    let config = GenerationConfig::builder()
        .uuid4(true)
        .uuid7(true)
        .base64(true)
        .build()
        .unwrap();
    assert_eq!(Strategy::resolve(&config), Strategy::Uuid4);

    let config = GenerationConfig::builder()
        .ulid_as_uuid(true)
        .uuid4(true)
        .build()
        .unwrap();
    assert_eq!(Strategy::resolve(&config), Strategy::Ulid { as_uuid: true });
}

#[test]
fn test_library_prefix_suffix() {
    let config = GenerationConfig::builder()
        .digit(true)
        .prefix("<")
        .suffix(">")
        .separator("|")
        .build()
        .unwrap();
    let out = String::from_utf8(generate(config, 3, 4)).unwrap();
    assert!(
        Regex::new(r"^<[1-9][0-9]{3}>\|<[1-9][0-9]{3}>\|<[1-9][0-9]{3}>$")
            .unwrap()
            .is_match(&out)
    );
}

#[test]
fn test_library_raw_bytes() {
    let config = GenerationConfig::builder()
        .any_character(true)
        .build()
        .unwrap();
    assert_eq!(generate(config, 1, 64).len(), 64);
}

#[test]
fn test_library_lower_wins() {
    let config = GenerationConfig::builder()
        .lower(true)
        .upper(true)
        .build()
        .unwrap();
    let out = String::from_utf8(generate(config, 1, 40)).unwrap();
    assert!(out.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
}

#[test]
fn test_library_invalid_interval() {
    let err = GenerationConfig::builder()
        .interval("5,5")
        .build()
        .unwrap_err();
    assert!(matches!(err, GenerateError::Configuration(_)));
}

#[test]
fn test_defaults_config_values() {
    let defaults = DefaultsConfig::default();
    assert_eq!(defaults.count, 1);
    assert_eq!(defaults.length, 12);
    assert_eq!(defaults.separator, "\n");
}
