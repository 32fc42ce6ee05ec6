use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Encrypted save file (e.g. user1.dat)
    pub input: PathBuf,

    /// Only show items obtainable up to this act; shows everything if omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub act: Option<u8>,

    /// Catalog JSON to use instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Leave prerequisites and locations out of the text report
    #[arg(long)]
    pub hide_spoilers: bool,

    /// Debug logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["silk-ledger", "user1.dat"]).unwrap();
        assert_eq!(cli.act, None);
        assert_eq!(cli.format, Format::Text);
        assert!(cli.catalog.is_none());
        assert!(!cli.hide_spoilers);
    }

    #[test]
    fn act_range() {
        let cli = Cli::try_parse_from(["silk-ledger", "--act", "2", "user1.dat"]).unwrap();
        assert_eq!(cli.act, Some(2));
        assert!(Cli::try_parse_from(["silk-ledger", "--act", "4", "user1.dat"]).is_err());
        assert!(Cli::try_parse_from(["silk-ledger", "--act", "0", "user1.dat"]).is_err());
    }

    #[test]
    fn json_format() {
        let cli = Cli::try_parse_from(["silk-ledger", "--format", "json", "-v", "user1.dat"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(cli.verbose);
    }
}
