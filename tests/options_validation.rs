//! End-to-end option validation: argv through clap into the validator.

use astral::cli::validator::OptionsValidator;
use astral::cli::Cli;
use astral::result::{Result, ShellError};
use clap::Parser;
use tempfile::NamedTempFile;

fn validate(args: &[&str]) -> Result<()> {
    let argv = std::iter::once("astral").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("argv should tokenize");
    OptionsValidator::validate(&cli)
}

#[test]
fn valid_connection_strings_pass() {
    assert!(validate(&["-z", "host1:8888"]).is_ok());
    assert!(validate(&["-z", "10.10.10.3:9999"]).is_ok());
}

#[test]
fn host_without_port_fails() {
    assert!(validate(&["-z", "host1"]).is_err());
    assert!(validate(&["-z", "10.10.10.3"]).is_err());
}

#[test]
fn invalid_host_name_fails() {
    assert!(validate(&["-z", "!!!@!!@!:8882"]).is_err());
}

#[test]
fn out_of_range_address_segments_fail() {
    assert!(validate(&["-z", "11111.22222.10.3:3332"]).is_err());
}

#[test]
fn missing_host_fails() {
    assert!(validate(&["-z", ":8882"]).is_err());
}

#[test]
fn out_of_range_ports_fail() {
    assert!(validate(&["-z", "host1:0"]).is_err());
    assert!(validate(&["-z", "host1:75565"]).is_err());
}

#[test]
fn file_options_accept_existing_files() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    assert!(validate(&["-v", path]).is_ok());
    assert!(validate(&["--irc", path]).is_ok());
    assert!(validate(&["-p", path]).is_ok());
}

#[test]
fn file_options_reject_missing_files() {
    let missing = "./target/doesNotExist";

    for args in [
        ["-v", missing],
        ["--irc", missing],
        ["-p", missing],
    ] {
        let err = validate(&args).unwrap_err();
        assert!(matches!(err, ShellError::NotFound(_)));
        assert!(err.to_string().contains(missing));
    }
}

#[test]
fn flag_options_are_not_validated() {
    assert!(validate(&["--na"]).is_ok());
    assert!(validate(&[]).is_ok());
}

#[test]
fn long_option_spellings_match_short_ones() {
    assert!(validate(&["--zookeeper", "host1:8888"]).is_ok());
    let err = validate(&["--zookeeper", "host1:75565"]).unwrap_err();
    assert!(matches!(err, ShellError::InvalidConnectionString(_)));
    assert!(err.to_string().contains("host1:75565"));
}
