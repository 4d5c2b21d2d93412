//! Persisted dark/light preference.
//!
//! The preference is a single file whose entire content is the literal
//! string `true` when dark mode is on; a missing file or any other content
//! means light. Nothing else depends on the value for correctness, only
//! for rendering.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app::error::{RecapError, Result};

/// Owns the theme flag and its persistence. Injected through the application
/// context; reads are lock-free so the renderer can consult it every frame.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    dark: AtomicBool,
}

impl ThemeStore {
    /// Load the preference from the default location
    /// (`~/.local/share/recap/dark_mode` on Linux).
    pub fn load() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| RecapError::Other("Could not find data directory".into()))?;
        let recap_dir = data_dir.join("recap");
        fs::create_dir_all(&recap_dir)?;
        Ok(Self::with_path(recap_dir.join("dark_mode")))
    }

    /// Load the preference from an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let dark = fs::read_to_string(&path)
            .map(|content| content.trim() == "true")
            .unwrap_or(false);

        Self {
            path,
            dark: AtomicBool::new(dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle(&self) -> Result<bool> {
        let dark = !self.is_dark();
        fs::write(&self.path, if dark { "true" } else { "false" })?;
        self.dark.store(dark, Ordering::Relaxed);
        Ok(dark)
    }
}
