// Library root
// -----------
// This crate exposes the library surface of the `cxg` CLI, a client for the
// cxg.de nopaste service. The binary (`main.rs`) parses the configuration,
// installs logging and calls `run`.
//
// Module responsibilities:
// - `config`: command-line options and their validation.
// - `content`: reading the content to paste from stdin or a file.
// - `api`: HTTP interactions with the service (create and fetch a paste).
// - `present`: writing results to stdout or a file.
// - `logging`: the tracing subscriber for the process.
// - `error`: the error type shared by all of the above.
pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod present;

use std::io::Write;

use api::{NewPaste, PasteClient};
use config::Config;

pub use error::{Error, Result};

/// Runs one invocation: fetch the paste named by `--get`, or read content
/// and create a new paste. Results meant for the user go to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    config.validate()?;
    let client = PasteClient::from_config(config)?;
    tracing::debug!("Initialized with: {:?}", config);

    match config.get() {
        Some(id) => {
            let spinner = present::spinner("Fetching paste...");
            let paste = client.fetch(id);
            spinner.finish_and_clear();
            present::write_paste(out, &paste?, config.file())
        }
        None => {
            let content = content::read_content(config.file())?;
            let paste = NewPaste::from_config(config, content);
            let spinner = present::spinner("Creating paste...");
            let created = client.create(&paste);
            spinner.finish_and_clear();
            present::report_created(out, &created?)
        }
    }
}
