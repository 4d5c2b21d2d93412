//! System clipboard access for the copy action.

use arboard::Clipboard;

/// Write text to the system clipboard.
///
/// Errors are stringified for direct display in the status surface; there is
/// nothing the caller can do about a missing clipboard beyond telling the
/// user.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy text: {}", e))
}
