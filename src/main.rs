// Entrypoint for the cxg CLI.
// - Keeps `main` small: parse options, install logging, hand over to `run`.
// - Every failure is logged once here and turned into exit code 2.

use std::process::ExitCode;

use anyhow::Context;
use cxg_cli::config::Config;

/// Exit code for any failure, the same code clap uses for usage errors.
const FAILURE: u8 = 2;

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = cxg_cli::logging::init(config.loglevel()) {
        eprintln!("{e:#}");
        return ExitCode::from(FAILURE);
    }

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            tracing::info!("Quit because of previous error.");
            ExitCode::from(FAILURE)
        }
    }
}

fn try_main(config: &Config) -> anyhow::Result<()> {
    let action = match config.get() {
        Some(id) => format!("failed to get paste {id:?}"),
        None => "failed to create paste".to_string(),
    };
    let stdout = std::io::stdout();
    cxg_cli::run(config, &mut stdout.lock()).context(action)
}
