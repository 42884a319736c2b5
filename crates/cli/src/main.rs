// crates/cli/src/main.rs
use clap::Parser;
use normalize_eol_cli::args::Args;
use normalize_eol_cli::config::NormalizeConfig;
use normalize_eol_cli::error::Result;
use normalize_eol_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = NormalizeConfig::try_from(args)?;
    normalize_eol_cli::run(&config)?;
    Ok(())
}
