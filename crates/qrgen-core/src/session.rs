use std::fmt;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::encode;
use crate::error::Result;
use crate::holder::{ImageHolder, QrImage};
use crate::layout::{preview_bounds, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::save;
use crate::settings::Settings;

/// User-triggered operations, one per button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Generate,
    Save,
    Clear,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Generate => write!(f, "Generate"),
            Action::Save => write!(f, "Save"),
            Action::Clear => write!(f, "Clear"),
        }
    }
}

/// Why an action did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyText,
    NoImage,
}

/// What a successful dispatch did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Generated { width: u32, height: u32 },
    Saved(PathBuf),
    Cleared,
    Skipped(SkipReason),
}

/// Complete application state: the typed text and the current image.
pub struct Session {
    pub text: String,
    holder: ImageHolder,
    settings: Settings,
    preview_bounds: (u32, u32),
    revision: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            text: String::new(),
            holder: ImageHolder::Empty,
            settings,
            preview_bounds: preview_bounds(WINDOW_WIDTH, WINDOW_HEIGHT),
            revision: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn holder(&self) -> &ImageHolder {
        &self.holder
    }

    /// Bumped whenever the holder changes, so views can refresh cached copies.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run one action to completion.
    ///
    /// An error leaves the session exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Generate => self.generate(),
            Action::Save => self.save(),
            Action::Clear => Ok(self.clear()),
        }
    }

    fn generate(&mut self) -> Result<Outcome> {
        if self.text.is_empty() {
            debug!("Generate skipped: empty text");
            return Ok(Outcome::Skipped(SkipReason::EmptyText));
        }
        let image = encode::generate(&self.text, &self.settings)?;
        let (width, height) = image.dimensions();
        self.holder.replace(QrImage::new(image, self.preview_bounds));
        self.revision += 1;
        info!(width, height, "Generated QR code");
        Ok(Outcome::Generated { width, height })
    }

    fn save(&mut self) -> Result<Outcome> {
        let Some(current) = self.holder.current() else {
            debug!("Save skipped: no image");
            return Ok(Outcome::Skipped(SkipReason::NoImage));
        };
        if self.text.is_empty() {
            debug!("Save skipped: empty text");
            return Ok(Outcome::Skipped(SkipReason::EmptyText));
        }
        let filename = save::derive_filename(&self.text);
        save::save_png(current.image(), &self.settings.output_dir, &filename)
            .map(Outcome::Saved)
            .inspect_err(|e| error!("Error saving QR code: {e}"))
    }

    fn clear(&mut self) -> Outcome {
        if !self.holder.is_empty() {
            self.holder.clear();
            self.revision += 1;
        }
        Outcome::Cleared
    }
}
