//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;
use jcapi::DEFAULT_BASE_URL;

/// Export the results of a JumpCloud saved command as CSV (flags take two dashes: --key,
/// --commandid, --out, --url).
#[derive(Parser, Debug)]
#[command(name = "jcapi-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Your JumpCloud administrator API key
    #[arg(long, env = "JUMPCLOUD_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// The id of the saved command
    #[arg(long = "commandid", env = "JUMPCLOUD_COMMAND_ID")]
    pub command_id: Option<String>,

    /// File path for CSV output (defaults to stdout; must not exist)
    #[arg(long, env = "JUMPCLOUD_OUT")]
    pub out: Option<PathBuf>,

    /// Alternative JumpCloud API URL
    #[arg(long, env = "JUMPCLOUD_API_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "jcapi-export",
            "--key",
            "abc",
            "--commandid",
            "C1",
            "--out",
            "results.csv",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.key.as_deref(), Some("abc"));
        assert_eq!(cli.command_id.as_deref(), Some("C1"));
        assert_eq!(cli.out, Some(PathBuf::from("results.csv")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn about_mentions_double_dash_flags() {
        use clap::CommandFactory;
        let about = Cli::command().get_about().unwrap().to_string();
        assert!(about.contains("--key"));
        assert!(about.contains("--commandid"));
    }

    #[test]
    fn single_dash_long_flag_rejected() {
        assert!(Cli::try_parse_from(["jcapi-export", "-key", "abc"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
