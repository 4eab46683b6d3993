//
//  starr
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use starr::cli::{ActivityKind, Cli, Commands};
use starr::output::{OutputFormat, OutputWriter};
use starr::{exit_codes, ErrorKind};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("STARR_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps a failure to a process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    let Some(err) = err.chain().find_map(|e| e.downcast_ref::<starr::Error>()) else {
        return exit_codes::ERROR;
    };
    match err.kind() {
        ErrorKind::InvalidArgument => exit_codes::USAGE,
        ErrorKind::Transport => exit_codes::SERVICE_ERROR,
        ErrorKind::InvalidStatusCode => match err.status().map(|s| s.as_u16()) {
            Some(401 | 403) => exit_codes::AUTH_ERROR,
            Some(404) => exit_codes::NOT_FOUND,
            Some(500..=599) => exit_codes::SERVICE_ERROR,
            _ => exit_codes::ERROR,
        },
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status(cmd) => cmd.run(&cli.global).await,
        Commands::Tags(cmd) => cmd.run(&cli.global).await,
        Commands::History(cmd) => cmd.run(ActivityKind::History, &cli.global).await,
        Commands::Queue(cmd) => cmd.run(ActivityKind::Queue, &cli.global).await,
        Commands::Blocklist(cmd) => cmd.run(ActivityKind::Blocklist, &cli.global).await,
        Commands::Indexers(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("starr version {}", starr::VERSION);
            Ok(())
        }
    }
}
