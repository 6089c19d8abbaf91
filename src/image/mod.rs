//! Image buffer conventions shared by the kernels and the harness.
//!
//! All buffers are single-channel and row-major; the linear index of `(x, y)`
//! is `y * stride + x`. Input samples are `i8`, convolution output is `i32`.
pub mod i32;
pub mod i8;
pub mod traits;

pub use self::i32::ImageI32;
pub use self::i8::{ImageI8, OwnedImageI8};
pub use self::traits::{ImageView, ImageViewMut, Rows};
