//! Four-lane 8-bit vectors with dot-product primitives.
//!
//! Models the packed `v4s` registers and the `dotsp4` / `sdotsp4` style
//! instructions of small DSP-extended RISC-V cores. Lane 3 is always zero when
//! built through [`V4s::from3`] / [`V4u::from3`], so a dot product covers
//! exactly three taps. On every host the products are unrolled scalar
//! multiply-adds; results are identical to a plain 3-term sum.

/// Four signed 8-bit sample lanes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct V4s(pub [i8; 4]);

/// Four unsigned 8-bit coefficient lanes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct V4u(pub [u8; 4]);

impl V4s {
    #[inline(always)]
    pub fn from3(a: i8, b: i8, c: i8) -> Self {
        Self([a, b, c, 0])
    }

    /// Load three horizontally adjacent samples starting at `row[x0]`.
    #[inline(always)]
    pub fn load3(row: &[i8], x0: usize) -> Self {
        Self::from3(row[x0], row[x0 + 1], row[x0 + 2])
    }

    #[inline(always)]
    pub fn lanes(self) -> [i8; 4] {
        self.0
    }
}

impl V4u {
    #[inline(always)]
    pub fn from3(a: u8, b: u8, c: u8) -> Self {
        Self([a, b, c, 0])
    }

    #[inline(always)]
    pub fn lanes(self) -> [u8; 4] {
        self.0
    }
}

/// Lane-wise product summed over all four lanes.
#[inline(always)]
pub fn dot(a: V4s, b: V4u) -> i32 {
    dot_acc(a, b, 0)
}

/// `acc + dot(a, b)`.
#[inline(always)]
pub fn dot_acc(a: V4s, b: V4u, acc: i32) -> i32 {
    let [a0, a1, a2, a3] = a.0;
    let [b0, b1, b2, b3] = b.0;
    acc + i32::from(a0) * i32::from(b0)
        + i32::from(a1) * i32::from(b1)
        + i32::from(a2) * i32::from(b2)
        + i32::from(a3) * i32::from(b3)
}
