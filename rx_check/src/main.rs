use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rx_check::{build_resolver, check_all, collect_patterns, init_tracing, Config};
use rx_lint::Validator;

#[derive(Parser)]
#[command(name = "rx_check")]
#[command(author, version, about = "Finds mistakes in the regex patterns of ignored errors", long_about = None)]
struct Cli {
    /// Configuration file listing the ignored errors
    config: PathBuf,

    /// Name to treat as a type, on top of the configured ones
    #[arg(long = "known-type", value_name = "NAME")]
    known_types: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        },
    };

    let validator = Validator::with_resolver(build_resolver(&config.validation, &cli.known_types));
    match check_all(&validator, &collect_patterns(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(invalid) => {
            for error in &invalid.errors {
                eprintln!("{}\n", error);
            }
            eprintln!("{}", invalid);
            ExitCode::from(1)
        },
    }
}
