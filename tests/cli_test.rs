use clap::Parser;
use kiln::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("kiln")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let args = make_args(&[]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, None);
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.template, None);
    assert!(!parsed.yes);
    assert!(!parsed.verbose);
}

#[test]
fn test_name_and_output_dir() {
    let args = make_args(&["my-app", "--output-dir", "./apps"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("my-app"));
    assert_eq!(parsed.output_dir, PathBuf::from("./apps"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&["my-app", "-o", "./apps", "-t", "hello-world", "-y", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template.as_deref(), Some("hello-world"));
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_long_flags() {
    let args = make_args(&["--template", "web-app", "--yes", "--verbose"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, None);
    assert_eq!(parsed.template.as_deref(), Some("web-app"));
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["my-app", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
