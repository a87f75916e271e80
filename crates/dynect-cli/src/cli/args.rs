//! Command-line argument definitions using clap.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// List the zones and nodes of a DynECT account
///
/// Credentials are read from a key-value file (keys: cn, un, pw).
/// At least one of -z/--zones or -n/--nodes must be given.
#[derive(Parser, Debug)]
#[command(name = "pnz")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("listing")
        .args(["zones", "nodes"])
        .required(true)
        .multiple(true)
))]
pub struct Cli {
    /// Print the zones
    #[arg(short, long)]
    pub zones: bool,

    /// Print the nodes within each zone
    #[arg(short, long)]
    pub nodes: bool,

    /// File to write the listing to instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Credentials file
    #[arg(short, long, value_name = "PATH", default_value = "config.toml")]
    pub config: PathBuf,

    /// API base URL
    #[arg(
        long,
        env = "DYNECT_API_URL",
        default_value = "https://api2.dynect.net",
        value_name = "URL"
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Increase verbosity (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_a_listing_flag() {
        assert!(Cli::try_parse_from(["pnz"]).is_err());
        assert!(Cli::try_parse_from(["pnz", "-z"]).is_ok());
        assert!(Cli::try_parse_from(["pnz", "-n"]).is_ok());
        assert!(Cli::try_parse_from(["pnz", "-z", "-n"]).is_ok());
    }

    #[test]
    fn file_flag_takes_a_path() {
        let cli = Cli::try_parse_from(["pnz", "-z", "-f", "out.txt"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("out.txt")));
    }

    #[test]
    fn long_forms_parse() {
        let cli = Cli::try_parse_from(["pnz", "--zones", "--nodes", "--file", "list.txt"]).unwrap();
        assert!(cli.zones);
        assert!(cli.nodes);
        assert!(cli.file.is_some());
    }
}
