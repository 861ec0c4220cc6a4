//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_verify_default_manifest() {
    match parse(&["pbfsum", "verify", "europe-latest.osm.pbf"]) {
        CliCommand::Verify { target, manifest } => {
            assert_eq!(target, PathBuf::from("europe-latest.osm.pbf"));
            assert!(manifest.is_none());
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_explicit_manifest() {
    match parse(&["pbfsum", "verify", "a.osm.pbf", "--manifest", "sums/a.md5"]) {
        CliCommand::Verify { target, manifest } => {
            assert_eq!(target, PathBuf::from("a.osm.pbf"));
            assert_eq!(manifest, Some(PathBuf::from("sums/a.md5")));
        }
        _ => panic!("expected Verify with --manifest"),
    }
    match parse(&["pbfsum", "verify", "a.osm.pbf", "-m", "b.md5"]) {
        CliCommand::Verify { manifest, .. } => {
            assert_eq!(manifest, Some(PathBuf::from("b.md5")))
        }
        _ => panic!("expected Verify with -m"),
    }
}

#[test]
fn cli_parse_parse() {
    match parse(&["pbfsum", "parse", "a.osm.pbf.md5"]) {
        CliCommand::Parse { manifest } => assert_eq!(manifest, PathBuf::from("a.osm.pbf.md5")),
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["pbfsum", "checksum", "/tmp/x.bin"]) {
        CliCommand::Checksum { path } => assert_eq!(path, PathBuf::from("/tmp/x.bin")),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_verify_requires_target() {
    assert!(Cli::try_parse_from(["pbfsum", "verify"]).is_err());
}
