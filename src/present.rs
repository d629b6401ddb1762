// Result presenter: turns api answers into output for the user. Writers are
// passed in so the binary can hand over stdout while tests use buffers.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{CreatedPaste, Paste};
use crate::error::{Error, Result};

/// Writes the line telling the user where the new paste lives.
pub fn report_created<W: Write>(out: &mut W, created: &CreatedPaste) -> Result<()> {
    writeln!(
        out,
        "You can find your paste with the id {} at {}",
        created.id, created.url
    )
    .and_then(|_| out.flush())
    .map_err(|e| Error::io("failed to write to stdout", e))
}

/// Writes the paste content to `file`, or to `out` when no file is given.
/// The content is written as-is, no newline is appended.
pub fn write_paste<W: Write>(out: &mut W, paste: &Paste, file: Option<&Path>) -> Result<()> {
    tracing::info!(
        "Getting paste with title {:?}, format {:?} and creation date {}",
        paste.title.as_deref().unwrap_or(""),
        paste.format.as_deref().unwrap_or(""),
        crdate_display(paste)
    );

    match file {
        None => {
            tracing::info!("Printing content to stdout.");
            out.write_all(paste.content.as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| Error::io("failed to write to stdout", e))
        }
        Some(path) => {
            tracing::info!("Saving content to file {}", path.display());
            let context = || format!("failed to write {}", path.display());
            let mut fp = File::create(path).map_err(|e| Error::io(context(), e))?;
            fp.write_all(paste.content.as_bytes())
                .and_then(|_| fp.flush())
                .map_err(|e| Error::io(context(), e))
        }
    }
}

fn crdate_display(paste: &Paste) -> String {
    match &paste.crdate {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

/// Spinner shown on stderr while a request is in flight. indicatif hides it
/// when stderr is not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
