//! 3×3 integer convolution over `i8` images with `u8` weights.
//!
//! For each interior pixel `(x, y)` the kernels compute
//!
//! ```text
//! out[y][x] = (1 + Σ in[y+dy][x+dx] · k[dy+1][dx+1]) / Σ k      (dx, dy ∈ {-1, 0, 1})
//! ```
//!
//! with truncating signed division. The border ring (first/last row and
//! column) is never written; the caller owns its contents.
//!
//! Two interchangeable implementations produce bit-identical output:
//!
//! - [`scalar`]: the nine-term multiply-accumulate per pixel.
//! - [`vectorized`]: column-wise sliding window of three 4-lane row vectors
//!   reduced with dot-product instructions, loading one new row per step.
//!
//! [`KernelVariant::default`] is chosen at build time (cargo feature
//! `vectorized`); [`convolve3x3_with`] selects explicitly at runtime.

pub mod scalar;
pub mod vectorized;


use crate::error::{ConvError, MIN_DIMENSION};
use crate::image::{ImageI8, ImageViewMut};
use crate::kernel::Kernel3;

use log::debug;
use serde::{Deserialize, Serialize};

pub use scalar::convolve3x3_scalar;
pub use vectorized::convolve3x3_vectorized;

/// Additive term applied to every dot product before normalisation.
pub const BIAS: i32 = 1;

/// Which implementation of the kernel to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelVariant {
    Scalar,
    Vectorized,
}

impl KernelVariant {
    pub const ALL: [KernelVariant; 2] = [KernelVariant::Scalar, KernelVariant::Vectorized];

    pub fn name(self) -> &'static str {
        match self {
            KernelVariant::Scalar => "scalar",
            KernelVariant::Vectorized => "vectorized",
        }
    }
}

impl Default for KernelVariant {
    #[cfg(feature = "vectorized")]
    fn default() -> Self {
        KernelVariant::Vectorized
    }

    #[cfg(not(feature = "vectorized"))]
    fn default() -> Self {
        KernelVariant::Scalar
    }
}

impl std::fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convolve with the build's default variant.
pub fn convolve3x3<O>(input: ImageI8<'_>, kernel: &Kernel3, output: &mut O) -> Result<(), ConvError>
where
    O: ImageViewMut<Pixel = i32>,
{
    convolve3x3_with(KernelVariant::default(), input, kernel, output)
}

/// Convolve with an explicitly selected variant.
pub fn convolve3x3_with<O>(
    variant: KernelVariant,
    input: ImageI8<'_>,
    kernel: &Kernel3,
    output: &mut O,
) -> Result<(), ConvError>
where
    O: ImageViewMut<Pixel = i32>,
{
    match variant {
        KernelVariant::Scalar => convolve3x3_scalar(input, kernel, output),
        KernelVariant::Vectorized => convolve3x3_vectorized(input, kernel, output),
    }
}

/// Same result as [`convolve3x3_with`], logging every window, sum and
/// quotient at `info` level (the `conv3x3` binary shows `info` by default;
/// elsewhere set `RUST_LOG=conv3x3=info`).
pub fn convolve3x3_verbose<O>(
    variant: KernelVariant,
    input: ImageI8<'_>,
    kernel: &Kernel3,
    output: &mut O,
) -> Result<(), ConvError>
where
    O: ImageViewMut<Pixel = i32>,
{
    let weight = validate(&input, kernel, output)?;
    match variant {
        KernelVariant::Scalar => scalar::run::<O, true>(input, kernel, weight, output),
        KernelVariant::Vectorized => vectorized::run::<O, true>(input, kernel, weight, output),
    }
    Ok(())
}

/// Check every precondition and return the (non-zero) weight-sum.
pub(crate) fn validate<O>(
    input: &ImageI8<'_>,
    kernel: &Kernel3,
    output: &O,
) -> Result<i32, ConvError>
where
    O: ImageViewMut<Pixel = i32>,
{
    if input.w < MIN_DIMENSION || input.h < MIN_DIMENSION {
        return Err(ConvError::ImageTooSmall {
            width: input.w,
            height: input.h,
        });
    }
    if output.width() != input.w || output.height() != input.h {
        return Err(ConvError::DimensionMismatch {
            input_w: input.w,
            input_h: input.h,
            output_w: output.width(),
            output_h: output.height(),
        });
    }
    let len = input.data.len();
    if input.stride < input.w {
        return Err(ConvError::BufferTooShort {
            len,
            required: input.w.saturating_mul(input.h),
        });
    }
    match input.required_len() {
        Some(required) if len >= required => {}
        required => {
            return Err(ConvError::BufferTooShort {
                len,
                required: required.unwrap_or(usize::MAX),
            })
        }
    }
    if !kernel.is_normalisable() {
        return Err(ConvError::ZeroWeightSum);
    }
    let weight = kernel.weight_sum();
    debug!(
        "conv3x3: {}x{} stride={} weight_sum={}",
        input.w, input.h, input.stride, weight
    );
    // At most 9 * 255, always representable.
    Ok(weight as i32)
}

/// Bias and normalise an accumulated dot product.
#[inline(always)]
pub(crate) fn normalise(sum: i32, weight: i32) -> i32 {
    (sum + BIAS) / weight
}
