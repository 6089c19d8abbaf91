use thiserror::Error;

/// Smallest width/height with at least one interior pixel.
pub const MIN_DIMENSION: usize = 3;

/// Precondition violations rejected before any output pixel is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConvError {
    #[error("image {width}x{height} is too small (each side must be >= {MIN_DIMENSION})")]
    ImageTooSmall { width: usize, height: usize },

    #[error("kernel weight-sum is zero")]
    ZeroWeightSum,

    #[error("output {output_w}x{output_h} does not match input {input_w}x{input_h}")]
    DimensionMismatch {
        input_w: usize,
        input_h: usize,
        output_w: usize,
        output_h: usize,
    },

    #[error("buffer holds {len} samples but the view needs {required}")]
    BufferTooShort { len: usize, required: usize },
}
