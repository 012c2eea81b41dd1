//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_resolve() {
    let cli = parse(&["scid", "resolve", "https://soundcloud.com/artist/track"]);
    assert!(cli.client_id.is_none());
    match cli.command {
        CliCommand::Resolve { url } => assert_eq!(url, "https://soundcloud.com/artist/track"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_keeps_raw_url() {
    let raw = "https://soundcloud.com/artist/track?in=a&si=b";
    match parse(&["scid", "resolve", raw]).command {
        CliCommand::Resolve { url } => assert_eq!(url, raw),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_interactive() {
    match parse(&["scid", "interactive"]).command {
        CliCommand::Interactive => {}
        _ => panic!("expected Interactive"),
    }
}

#[test]
fn cli_parse_client_id_global() {
    let cli = parse(&["scid", "resolve", "https://x.test/a", "--client-id", "abc"]);
    assert_eq!(cli.client_id.as_deref(), Some("abc"));
    let cli = parse(&["scid", "--client-id", "def", "interactive"]);
    assert_eq!(cli.client_id.as_deref(), Some("def"));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["scid"]).is_err());
    assert!(Cli::try_parse_from(["scid", "resolve"]).is_err());
}
