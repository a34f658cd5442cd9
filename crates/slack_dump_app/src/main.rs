//! `slack-image-dump`: download every image matching a Slack search query.
//!
//! ```bash
//! SLACK_COOKIE=xoxd-... slack-image-dump -w myteam -q "from:@alice cats"
//! ```
//!
//! Files land in `./slack-image-dump-<query>/0.png`, `1.png`, ... in search
//! order.

mod cli;
mod progress;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use dump_logging::{dump_debug, dump_info, LogOptions};
use slack_dump_core::normalize_workspace_url;
use slack_dump_engine::{run_dump, SessionSettings, WorkspaceSession};

use crate::cli::{resolve_cookie, Cli, COOKIE_ENV};
use crate::progress::TerminalProgress;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    dump_logging::initialize(&LogOptions::new(cli.verbose, cli.log_file.clone()));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cookie = resolve_cookie(cli.cookie, std::env::var(COOKIE_ENV).ok())?;

    let workspace_url = normalize_workspace_url(&cli.workspace);
    dump_debug!("Normalized workspace {:?} to {}", cli.workspace, workspace_url);
    let settings = SessionSettings {
        user_agent: cli.user_agent,
        ..SessionSettings::default()
    };
    let session = WorkspaceSession::connect(workspace_url, &cookie, settings).await?;

    let progress = TerminalProgress::stdout();
    let summary = run_dump(&session, Path::new("."), &cli.query, &progress).await?;

    dump_info!(
        "Dump finished: {} files in {:?}",
        summary.files_written,
        summary.output_dir
    );
    println!(
        "Saved {} files to {}",
        summary.files_written,
        summary.output_dir.display()
    );
    Ok(())
}
