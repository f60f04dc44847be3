use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use touch::cli::{command, Args};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("touch")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["main.rs"])).unwrap();

    assert_eq!(parsed.file, "main.rs");
    assert_eq!(parsed.config, None);
    assert!(!parsed.force);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--force", "--verbose", "--config", "./touch.conf", "src/lib.rs"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.file, "src/lib.rs");
    assert_eq!(parsed.config, Some(PathBuf::from("./touch.conf")));
    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-f", "-v", "-c", "x.conf", "a.py"])).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.config, Some(PathBuf::from("x.conf")));
}

#[test]
fn test_missing_file() {
    let err = Args::try_parse_from(make_args(&[])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["a.c", "b.c"])).is_err());
}

#[test]
fn test_version_and_help() {
    let err = Args::try_parse_from(make_args(&["--version"])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

    let err = Args::try_parse_from(make_args(&["--help"])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_help_mentions_config_file() {
    let help = command().render_help().to_string();
    assert!(help.contains("touch.conf"));
}
