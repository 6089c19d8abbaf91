//! 3×3 integer convolution kernels with a self-verifying benchmark harness.
//!
//! Two interchangeable kernels compute `(1 + Σ in·k) / Σk` over every interior
//! pixel of a signed 8-bit image: a portable scalar one and a sliding-window
//! one built on 4-lane dot products. The harness generates a synthetic image
//! whose convolution has a closed form, so results are checked without a
//! reference run.
//!
//! ```
//! use conv3x3::prelude::*;
//!
//! let image = generate_image(16, 12).unwrap();
//! let mut out = ImageI32::new(16, 12);
//! convolve3x3_with(KernelVariant::Vectorized, image.as_view(), &TEST_KERNEL, &mut out).unwrap();
//! assert_eq!(verify_and_reset(&mut out), MatchResult::Pass);
//! ```

// Public modules
pub mod conv;
pub mod error;
pub mod harness;
pub mod image;
pub mod kernel;
pub mod simd;

// Tooling support for the binary.
pub mod config;
pub mod diagnostics;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::conv::{convolve3x3, convolve3x3_verbose, convolve3x3_with, KernelVariant};
pub use crate::error::ConvError;
pub use crate::harness::bench::{run_benchmark, BenchParams, BenchReport};
pub use crate::harness::{generate_image, verify_and_reset, verify_verbose, MatchResult};
pub use crate::kernel::Kernel3;

// --- Prelude ---------------------------------------------------------------

/// Everything needed for a generate → convolve → verify cycle.
pub mod prelude {
    pub use crate::conv::{convolve3x3, convolve3x3_with, KernelVariant};
    pub use crate::error::ConvError;
    pub use crate::harness::{generate_image, verify_and_reset, MatchResult, TEST_KERNEL};
    pub use crate::image::{ImageI32, ImageI8, ImageView, ImageViewMut, OwnedImageI8};
    pub use crate::kernel::{Kernel3, BOX_3X3, GAUSSIAN_3X3};
}
