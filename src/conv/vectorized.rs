//! Sliding-window kernel built on 4-lane dot products.
//!
//! The image is walked column by column. For column `x` the window holds three
//! row vectors `{in[r][x-1], in[r][x], in[r][x+1], 0}` for rows `y-1..=y+1`:
//!
//! ```text
//!   win[0] = A0 A1 A2 0      <- row y-1
//!   win[1] = B0 B1 B2 0      <- row y
//!   win[2] = C0 C1 C2 0      <- row y+1
//!            D0 D1 D2        <- row y+2, loaded after out[y][x] is stored
//! ```
//!
//! Each output costs three dot products against the packed kernel rows. The
//! window then shifts down one row, so only three new samples are read per
//! step instead of nine.
use super::{normalise, validate};
use crate::error::ConvError;
use crate::image::{ImageI8, ImageView, ImageViewMut};
use crate::kernel::Kernel3;
use crate::simd::{dot, dot_acc, V4s, V4u};

use log::info;

/// Vectorized 3×3 convolution. Writes interior pixels only.
pub fn convolve3x3_vectorized<O>(
    input: ImageI8<'_>,
    kernel: &Kernel3,
    output: &mut O,
) -> Result<(), ConvError>
where
    O: ImageViewMut<Pixel = i32>,
{
    let weight = validate(&input, kernel, output)?;
    run::<O, false>(input, kernel, weight, output);
    Ok(())
}

pub(crate) fn run<O, const VERBOSE: bool>(
    input: ImageI8<'_>,
    kernel: &Kernel3,
    weight: i32,
    output: &mut O,
) where
    O: ImageViewMut<Pixel = i32>,
{
    let coeff = [0, 1, 2].map(|r| {
        let [a, b, c] = kernel.row(r);
        V4u::from3(a, b, c)
    });
    let (w, h) = (input.w, input.h);

    for x in 1..w - 1 {
        let mut win = [
            V4s::load3(input.row(0), x - 1),
            V4s::load3(input.row(1), x - 1),
            V4s::load3(input.row(2), x - 1),
        ];

        for y in 1..h - 1 {
            let mut sum = dot(win[0], coeff[0]);
            sum = dot_acc(win[1], coeff[1], sum);
            sum = dot_acc(win[2], coeff[2], sum);
            let value = normalise(sum, weight);
            if VERBOSE {
                info!(
                    "vectorized ({x},{y}) window={:?} sum={sum} out={value}",
                    win.map(V4s::lanes)
                );
            }
            output.row_mut(y)[x] = value;

            if y + 2 < h {
                let next = V4s::load3(input.row(y + 2), x - 1);
                win = [win[1], win[2], next];
            }
        }
    }
}
