//! Self-checking test harness for the convolution kernels.
//!
//! The generator fills pixel `(x, y)` with `(y mod 16) + (x mod 4)`. Convolved
//! with [`TEST_KERNEL`] (the `[1 2 1]ᵀ·[1 2 1]` binomial, weight-sum 16) the
//! result separates into a row term and a column term, both integral:
//!
//! - row term `y mod 16`, except `4` when `y mod 16 == 0` and `11` when
//!   `y mod 16 == 15` (the neighbourhood straddles the wrap of the pattern);
//! - column term `((x mod 4) / 2) + 1`.
//!
//! So every interior output must equal `row + column` exactly, and the verifier
//! needs no reference convolution. Matched pixels are zeroed so the same output
//! buffer can be reused across repeated runs.

pub mod bench;


use crate::error::{ConvError, MIN_DIMENSION};
use crate::image::{ImageI32, ImageView, ImageViewMut, OwnedImageI8};
use crate::kernel::{Kernel3, GAUSSIAN_3X3};

use log::warn;
use serde::Serialize;

/// Kernel whose output on the generated pattern has a closed form.
pub const TEST_KERNEL: Kernel3 = GAUSSIAN_3X3;

/// Generator value at column `x`, row `y`.
#[inline]
pub fn pattern_value(x: usize, y: usize) -> i8 {
    // at most 15 + 3
    ((y % 16) + (x % 4)) as i8
}

/// Allocate and fill a `width × height` test image.
pub fn generate_image(width: usize, height: usize) -> Result<OwnedImageI8, ConvError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(ConvError::ImageTooSmall { width, height });
    }
    let mut img = OwnedImageI8::new(width, height);
    fill_test_pattern(&mut img);
    Ok(img)
}

/// Write the test pattern into every pixel of `img`.
///
/// Tall images are filled row by row, wide ones column by column; the result
/// is the same either way.
pub fn fill_test_pattern<I>(img: &mut I)
where
    I: ImageViewMut<Pixel = i8>,
{
    let (w, h) = (img.width(), img.height());
    if h > w {
        for y in 0..h {
            let row = img.row_mut(y);
            for (x, px) in row.iter_mut().enumerate() {
                *px = pattern_value(x, y);
            }
        }
    } else {
        for x in 0..w {
            for y in 0..h {
                img.row_mut(y)[x] = pattern_value(x, y);
            }
        }
    }
}

/// Closed-form [`TEST_KERNEL`] output for interior pixel `(x, y)`.
#[inline]
pub fn expected_pixel(x: usize, y: usize) -> i32 {
    let row_term = match y % 16 {
        0 => 4,
        15 => 11,
        r => r as i32,
    };
    let col_term = ((x % 4) / 2) as i32 + 1;
    row_term + col_term
}

/// Outcome of [`verify_and_reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum MatchResult {
    /// Every interior pixel matched and has been zeroed.
    Pass,
    /// The mismatch sits at linear index 0.
    ImmediateFailure { actual: i32, expected: i32 },
    /// First mismatch; pixels from here on were left untouched.
    Mismatch {
        index: usize,
        x: usize,
        y: usize,
        actual: i32,
        expected: i32,
    },
}

impl MatchResult {
    fn mismatch(index: usize, x: usize, y: usize, actual: i32, expected: i32) -> Self {
        if index == 0 {
            MatchResult::ImmediateFailure { actual, expected }
        } else {
            MatchResult::Mismatch {
                index,
                x,
                y,
                actual,
                expected,
            }
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, MatchResult::Pass)
    }

    /// Integer status: `0` pass, `-1` immediate failure, otherwise the failing
    /// linear index.
    pub fn code(&self) -> i64 {
        match self {
            MatchResult::Pass => 0,
            MatchResult::ImmediateFailure { .. } => -1,
            MatchResult::Mismatch { index, .. } => *index as i64,
        }
    }
}

/// Compare interior pixels with [`expected_pixel`] in row-major order, zeroing
/// each match. Stops at the first mismatch.
pub fn verify_and_reset(output: &mut ImageI32) -> MatchResult {
    let (w, h) = (output.width(), output.height());
    for y in 1..h.saturating_sub(1) {
        let row = output.row_mut(y);
        for x in 1..w.saturating_sub(1) {
            let expected = expected_pixel(x, y);
            let actual = row[x];
            if actual != expected {
                let index = y * w + x;
                warn!(
                    "verify: mismatch at index {index} ({x},{y}): got {actual}, expected {expected}"
                );
                return MatchResult::mismatch(index, x, y, actual, expected);
            }
            row[x] = 0;
        }
    }
    MatchResult::Pass
}

/// One interior pixel's actual and expected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelComparison {
    pub actual: i32,
    pub expected: i32,
}

impl PixelComparison {
    pub fn matches(&self) -> bool {
        self.actual == self.expected
    }
}

/// Full actual-vs-expected table over the interior, one entry per row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<PixelComparison>>,
}

impl VerificationReport {
    pub fn mismatches(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| !c.matches())
            .count()
    }
}

impl std::fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            write!(f, "|")?;
            for c in row {
                write!(f, " {:2} - {:2} |", c.actual, c.expected)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Diagnostic counterpart of [`verify_and_reset`]: records every interior
/// pixel, never resets, never stops early.
pub fn verify_verbose(output: &ImageI32) -> VerificationReport {
    let (w, h) = (output.width(), output.height());
    let rows = output
        .rows()
        .enumerate()
        .take(h.saturating_sub(1))
        .skip(1)
        .map(|(y, row)| {
            (1..w.saturating_sub(1))
                .map(|x| PixelComparison {
                    actual: row[x],
                    expected: expected_pixel(x, y),
                })
                .collect()
        })
        .collect();
    VerificationReport {
        width: w,
        height: h,
        rows,
    }
}
