//! Editor integration
//!
//! Runs the configured editor in the foreground and blocks until it exits.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::core::error::{JourneyError, Result};

/// Split an editor setting into program and leading arguments
/// (`"code --wait"` -> `("code", ["--wait"])`).
///
/// A setting naming an existing file is taken whole, so paths such as
/// `/Applications/Visual Studio Code.app/...` keep their spaces.
pub fn editor_command(editor: &str) -> (&str, Vec<&str>) {
    if Path::new(editor).is_file() {
        return (editor, Vec::new());
    }
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor);
    (program, parts.collect())
}

/// Open `path` in `editor` and wait for the editor to exit
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let (program, args) = editor_command(editor);
    debug!(editor = program, path = %path.display(), "launching editor");

    let status = Command::new(program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|source| JourneyError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(JourneyError::EditorFailed {
            editor: editor.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}
