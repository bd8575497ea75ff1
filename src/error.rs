use thiserror::Error;

/// Malformed inputs rejected before any scanning begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    #[error("image must be square, got {width}x{height}")]
    NonSquareImage { width: usize, height: usize },

    #[error("{mask} mask is {width}x{height}, expected {expected}x{expected}")]
    MaskDimensionMismatch {
        mask: &'static str,
        width: usize,
        height: usize,
        expected: usize,
    },

    #[error("{width}x{height} frame with stride {stride} needs more than {len} bytes")]
    FrameBufferTooSmall {
        width: usize,
        height: usize,
        stride: usize,
        len: usize,
    },

    #[error("window kernel must be odd, got {0}")]
    EvenKernel(usize),

    #[error("window kernel must be at least 3, got {0}")]
    KernelTooSmall(usize),

    #[error("minimum bar length sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),
}

/// Errors raised by the I/O, configuration and detector layers.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error("Image error for {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
