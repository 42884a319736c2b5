// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "normalize_eol",
    version = crate::VERSION,
    about = "Rewrite repository source files as UTF-8 (no BOM) with CRLF line endings"
)]
pub struct Args {
    /// Repository root the file patterns are evaluated against
    #[arg(value_name = "ROOT", default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Increase log verbosity on stderr (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_debug_assert() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_root_defaults_to_current_dir() {
        let args = Args::try_parse_from(["normalize_eol"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_root_and_verbosity() {
        let args = Args::try_parse_from(["normalize_eol", "-vv", "repo"]).unwrap();
        assert_eq!(args.root, PathBuf::from("repo"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Args::try_parse_from(["normalize_eol", "a", "b"]).is_err());
    }
}
