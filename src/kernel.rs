//! 3×3 unsigned weight kernels.
//!
//! Weights are stored row-major. Every convolution normalises by the sum of
//! all nine weights, so a usable kernel must have a non-zero weight-sum.
use serde::{Deserialize, Serialize};

/// Fixed 3×3 grid of unsigned 8-bit weights, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kernel3 {
    pub weights: [u8; 9],
}

impl Default for Kernel3 {
    fn default() -> Self {
        GAUSSIAN_3X3
    }
}

impl Kernel3 {
    pub const fn new(weights: [u8; 9]) -> Self {
        Self { weights }
    }

    /// Sum of all nine weights; the normalisation divisor.
    pub fn weight_sum(&self) -> u32 {
        self.weights.iter().map(|&w| u32::from(w)).sum()
    }

    pub fn is_normalisable(&self) -> bool {
        self.weights.iter().any(|&w| w != 0)
    }

    /// Weights of kernel row `r` (0..3).
    #[inline]
    pub fn row(&self, r: usize) -> [u8; 3] {
        [
            self.weights[r * 3],
            self.weights[r * 3 + 1],
            self.weights[r * 3 + 2],
        ]
    }
}

/// All-ones box kernel, weight-sum 9.
pub const BOX_3X3: Kernel3 = Kernel3::new([1, 1, 1, 1, 1, 1, 1, 1, 1]);

/// Binomial `[1, 2, 1] ⊗ [1, 2, 1]` kernel, weight-sum 16.
pub const GAUSSIAN_3X3: Kernel3 = Kernel3::new([1, 2, 1, 2, 4, 2, 1, 2, 1]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_kernels_have_expected_weight_sums() {
        assert_eq!(BOX_3X3.weight_sum(), 9);
        assert_eq!(GAUSSIAN_3X3.weight_sum(), 16);
        assert_eq!(Kernel3::new([255; 9]).weight_sum(), 2295);
    }

    #[test]
    fn rows_split_row_major_weights() {
        let k = Kernel3::new([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(k.row(0), [1, 2, 3]);
        assert_eq!(k.row(1), [4, 5, 6]);
        assert_eq!(k.row(2), [7, 8, 9]);
    }

    #[test]
    fn zero_kernel_is_not_normalisable() {
        assert!(!Kernel3::new([0; 9]).is_normalisable());
        assert!(Kernel3::new([0, 0, 0, 0, 1, 0, 0, 0, 0]).is_normalisable());
    }

    #[test]
    fn kernel_deserializes_from_flat_array() {
        let k: Kernel3 = serde_json::from_str("[1,2,1,2,4,2,1,2,1]").unwrap();
        assert_eq!(k, GAUSSIAN_3X3);
    }
}
