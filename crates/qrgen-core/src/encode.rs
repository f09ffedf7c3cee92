use std::fmt;

use image::{GrayImage, Luma};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use tracing::{debug, warn};

use crate::error::{QrGenError, Result};
use crate::settings::Settings;

pub const DARK: Luma<u8> = Luma([0]);
pub const LIGHT: Luma<u8> = Luma([255]);

/// Largest rendered side, in pixels, `generate` will allocate.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Low error correction: roughly 7% of codewords recoverable, maximum capacity.
const EC_LEVEL: EcLevel = EcLevel::L;

/// Metadata of the symbol chosen for a given text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Normal QR version, 1..=40.
    pub version: i16,
    /// Modules per side, excluding the quiet zone.
    pub modules: usize,
    pub ec_level: EcLevel,
}

impl SymbolInfo {
    /// Side length in pixels of the rendered image, quiet zone included.
    ///
    /// Fails when the side would exceed [`MAX_IMAGE_SIDE`].
    pub fn pixel_size(&self, settings: &Settings) -> Result<u32> {
        side_pixels(self.modules as u32, settings)
    }
}

fn side_pixels(modules: u32, settings: &Settings) -> Result<u32> {
    settings
        .quiet_zone
        .checked_mul(2)
        .and_then(|border| border.checked_add(modules))
        .and_then(|cells| cells.checked_mul(settings.module_size))
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            QrGenError::Encode(format!(
                "{modules} modules at {} px with a {}-module quiet zone exceeds {MAX_IMAGE_SIDE} px",
                settings.module_size, settings.quiet_zone
            ))
        })
}

impl fmt::Display for SymbolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version {} ({}x{} modules, EC {:?})",
            self.version, self.modules, self.modules, self.ec_level
        )
    }
}

/// Encode `text` at the smallest version that fits.
fn encode(text: &str) -> Result<QrCode> {
    if text.is_empty() {
        return Err(QrGenError::EmptyInput);
    }
    QrCode::with_error_correction_level(text.as_bytes(), EC_LEVEL).map_err(|e| match e {
        QrError::DataTooLong => {
            warn!(len = text.len(), "Data too large for QR code");
            QrGenError::DataTooLong { len: text.len() }
        }
        other => {
            warn!("QR encoding failed: {other}");
            QrGenError::Encode(other.to_string())
        }
    })
}

/// Describe the symbol that `generate` would render for `text`.
pub fn symbol_info(text: &str) -> Result<SymbolInfo> {
    let code = encode(text)?;
    let version = match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    };
    Ok(SymbolInfo {
        version,
        modules: code.width(),
        ec_level: code.error_correction_level(),
    })
}

/// Encode `text` into a black-on-white QR bitmap.
///
/// The image is square with side `module_size * (modules + 2 * quiet_zone)`.
pub fn generate(text: &str, settings: &Settings) -> Result<GrayImage> {
    let code = encode(text)?;
    let image = render(&code, settings)?;
    debug!(
        modules = code.width(),
        width = image.width(),
        "Rendered QR code"
    );
    Ok(image)
}

fn render(code: &QrCode, settings: &Settings) -> Result<GrayImage> {
    let modules = code.width() as u32;
    let module = settings.module_size;
    let side = side_pixels(modules, settings)?;
    let mut img = GrayImage::from_pixel(side, side, LIGHT);

    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] != Color::Dark {
                continue;
            }
            let px = (settings.quiet_zone + x) * module;
            let py = (settings.quiet_zone + y) * module;
            for dy in 0..module {
                for dx in 0..module {
                    img.put_pixel(px + dx, py + dy, DARK);
                }
            }
        }
    }

    Ok(img)
}
