//! Копирование сгенерированных значений в буфер обмена

use arboard::Clipboard;

use crate::error::{DevkitError, Result};

/// Copy `text` into the system clipboard.
///
/// Any platform failure (no display server, missing clipboard service)
/// surfaces as [`DevkitError::ClipboardUnavailable`]; the operation is not
/// retried.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| DevkitError::ClipboardUnavailable(e.to_string()))?;

    clipboard
        .set_text(text.to_owned())
        .map_err(|e| DevkitError::ClipboardUnavailable(e.to_string()))?;

    Ok(())
}
