use std::path::PathBuf;

/// Directory (relative to the working directory) that saved codes land in.
pub const DEFAULT_OUTPUT_DIR: &str = "qr-codes";

/// Pixel width and height of one QR module.
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Blank margin around the symbol, in modules.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Rendering and output parameters shared by the GUI and CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub module_size: u32,
    pub quiet_zone: u32,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Settings {
    /// Same rendering parameters, different output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
