//! Credential helper entry point
//!
//! Thin protocol adapter around the flat-file store engine. The host passes
//! one command as the sole argument; the payload arrives on stdin and the
//! result leaves on stdout. Diagnostics go to stderr because stdout carries
//! the protocol, and on failure the error's display string is printed to
//! stdout so the host can match on it.
//!
//! Each invocation is one-shot: no state survives in this process between
//! commands. Retry, if desired, is the host's responsibility.

mod protocol;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use credfile_core::{CredentialStore, FlatfileStore, StoreResult};

#[derive(Parser)]
#[command(
    name = "docker-credential-credfile",
    about = "File-backed credential helper",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store the credentials read as JSON from stdin
    Store,
    /// Print the credentials for the server URL read from stdin
    Get,
    /// Remove the credentials for the server URL read from stdin
    Erase,
    /// Print all stored server URLs and their usernames
    List,
    /// Print the helper version
    Version,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("docker-credential-credfile v{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let result = FlatfileStore::open_default().and_then(|store| run(&cli.command, &store));

    match result {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_expected() {
                log::warn!("{e}");
            } else {
                log::error!("{e}");
            }
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch one protocol command against the store.
///
/// Returns the text to print on stdout, if the command produces any.
fn run(command: &Command, store: &FlatfileStore) -> StoreResult<Option<String>> {
    match command {
        Command::Store => {
            let credentials = protocol::read_credentials(io::stdin().lock())?;
            store.store(&credentials)?;
            Ok(None)
        }
        Command::Get => {
            let server_url = protocol::read_server_url(io::stdin().lock())?;
            let (username, secret) = store.get(&server_url)?;
            protocol::format_credentials(&server_url, &username, &secret).map(Some)
        }
        Command::Erase => {
            let server_url = protocol::read_server_url(io::stdin().lock())?;
            store.erase(&server_url)?;
            Ok(None)
        }
        Command::List => {
            let list = store.list()?;
            protocol::format_list(&list).map(Some)
        }
        // Answered in main before the store is opened.
        Command::Version => Ok(None),
    }
}
