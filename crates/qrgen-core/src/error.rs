use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrGenError {
    #[error("Nothing to encode: input text is empty")]
    EmptyInput,

    #[error("Data too large for QR code ({len} bytes)")]
    DataTooLong { len: usize },

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, QrGenError>;
