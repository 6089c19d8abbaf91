//! Portable reference kernel: nine multiply-accumulates per output pixel.
use super::{normalise, validate};
use crate::error::ConvError;
use crate::image::{ImageI8, ImageView, ImageViewMut};
use crate::kernel::Kernel3;

use log::info;

/// Scalar 3×3 convolution. Writes interior pixels only.
pub fn convolve3x3_scalar<O>(
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
    let k = kernel.weights.map(i32::from);
    let (w, h) = (input.w, input.h);

    for y in 1..h - 1 {
        let rows = [input.row(y - 1), input.row(y), input.row(y + 1)];
        let out_row = output.row_mut(y);
        for x in 1..w - 1 {
            let mut sum = 0;
            for (ky, row) in rows.iter().enumerate() {
                sum += i32::from(row[x - 1]) * k[ky * 3]
                    + i32::from(row[x]) * k[ky * 3 + 1]
                    + i32::from(row[x + 1]) * k[ky * 3 + 2];
            }
            let value = normalise(sum, weight);
            if VERBOSE {
                info!(
                    "scalar ({x},{y}) window={:?} sum={sum} out={value}",
                    rows.map(|r| [r[x - 1], r[x], r[x + 1]])
                );
            }
            out_row[x] = value;
        }
    }
}
