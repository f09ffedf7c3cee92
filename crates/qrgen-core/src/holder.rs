use image::imageops::{self, FilterType};
use image::GrayImage;

/// A generated code together with the copy that is shown on screen.
#[derive(Clone, Debug)]
pub struct QrImage {
    image: GrayImage,
    preview: GrayImage,
}

impl QrImage {
    /// Build the preview by fitting `image` inside `bounds` (width, height).
    pub fn new(image: GrayImage, bounds: (u32, u32)) -> Self {
        let (w, h) = fit_within(image.dimensions(), bounds);
        let preview = if (w, h) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(&image, w, h, FilterType::Nearest)
        };
        Self { image, preview }
    }

    /// Full resolution bitmap, the one that gets saved.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn preview(&self) -> &GrayImage {
        &self.preview
    }
}

/// Largest size with the aspect ratio of `size` that fits in `bounds`.
///
/// Never scales up; a zero-sized bound collapses to at least one pixel.
pub fn fit_within(size: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = size;
    let (max_w, max_h) = bounds;
    if w <= max_w && h <= max_h {
        return size;
    }
    let scale = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let fw = ((w as f64 * scale).floor() as u32).clamp(1, max_w.max(1));
    let fh = ((h as f64 * scale).floor() as u32).clamp(1, max_h.max(1));
    (fw, fh)
}

/// The current image, if any.
///
/// `Empty` is the initial state. Only a successful generate populates it and
/// only [`ImageHolder::clear`] empties it again.
#[derive(Clone, Debug, Default)]
pub enum ImageHolder {
    #[default]
    Empty,
    Populated(QrImage),
}

impl ImageHolder {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn current(&self) -> Option<&QrImage> {
        match self {
            Self::Empty => None,
            Self::Populated(img) => Some(img),
        }
    }

    /// Store a freshly generated image, replacing any previous one.
    pub fn replace(&mut self, image: QrImage) {
        *self = Self::Populated(image);
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }
}
