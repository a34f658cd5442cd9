use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Environment variable consulted when `--cookie` is not given.
pub const COOKIE_ENV: &str = "SLACK_COOKIE";

/// Commandline tool to dump slack images from a workspace based on a specified query.
#[derive(Debug, Parser)]
#[command(
    name = "slack-image-dump",
    version,
    after_help = "slack-image-dump expects a cookie supplied with the -c parameter or set with the environment variable SLACK_COOKIE"
)]
pub struct Cli {
    /// Slack keyword search query
    #[arg(short, long)]
    pub query: String,

    /// Slack workspace url to search
    #[arg(short, long)]
    pub workspace: String,

    /// Slack d cookie extracted from a browser session (starting with `xoxd-`)
    #[arg(short, long)]
    pub cookie: Option<String>,

    /// Optional User-Agent override
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write the log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error(
        "a cookie value must be supplied via the -c parameter or as an environment variable (SLACK_COOKIE)"
    )]
    MissingCookie,
}

/// The flag wins over the environment; blank values count as missing.
pub fn resolve_cookie(flag: Option<String>, env: Option<String>) -> Result<String, UsageError> {
    flag.into_iter()
        .chain(env)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(UsageError::MissingCookie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from([
            "slack-image-dump",
            "-q",
            "cats",
            "-w",
            "myteam",
            "-c",
            "xoxd-abc",
            "-u",
            "agent/1",
        ])
        .unwrap();
        assert_eq!(cli.query, "cats");
        assert_eq!(cli.workspace, "myteam");
        assert_eq!(cli.cookie.as_deref(), Some("xoxd-abc"));
        assert_eq!(cli.user_agent.as_deref(), Some("agent/1"));
        assert!(!cli.verbose);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn long_flags_parse() {
        let cli = Cli::try_parse_from([
            "slack-image-dump",
            "--query",
            "big cats",
            "--workspace",
            "https://myteam.slack.com",
            "--user-agent",
            "agent/2",
            "--verbose",
            "--log-file",
            "dump.log",
        ])
        .unwrap();
        assert_eq!(cli.query, "big cats");
        assert_eq!(cli.cookie, None);
        assert!(cli.verbose);
        assert_eq!(cli.log_file, Some(PathBuf::from("dump.log")));
    }

    #[test]
    fn query_and_workspace_are_required() {
        assert!(Cli::try_parse_from(["slack-image-dump", "-q", "cats"]).is_err());
        assert!(Cli::try_parse_from(["slack-image-dump", "-w", "myteam"]).is_err());
    }

    #[test]
    fn flag_cookie_wins_over_environment() {
        let cookie = resolve_cookie(Some("xoxd-flag".into()), Some("xoxd-env".into()));
        assert_eq!(cookie, Ok("xoxd-flag".to_string()));
    }

    #[test]
    fn environment_cookie_is_the_fallback() {
        assert_eq!(
            resolve_cookie(None, Some("xoxd-env".into())),
            Ok("xoxd-env".to_string())
        );
        assert_eq!(
            resolve_cookie(Some("  ".into()), Some("xoxd-env".into())),
            Ok("xoxd-env".to_string())
        );
    }

    #[test]
    fn missing_cookie_is_a_usage_error() {
        assert_eq!(resolve_cookie(None, None), Err(UsageError::MissingCookie));
        assert_eq!(
            resolve_cookie(None, Some(String::new())),
            Err(UsageError::MissingCookie)
        );
        assert!(UsageError::MissingCookie.to_string().contains("SLACK_COOKIE"));
    }
}
