/// Deterministic pseudo-random samples (xorshift32) covering the full `i8` range.
pub fn noise_i8(width: usize, height: usize, seed: u32) -> Vec<i8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8 as i8
        })
        .collect()
}

/// Marker written into the output border before convolving.
pub const BORDER_SENTINEL: i32 = 0x5A5A_5A5A;

/// `true` when `(x, y)` lies on the outermost ring.
pub fn is_border(x: usize, y: usize, width: usize, height: usize) -> bool {
    x == 0 || y == 0 || x == width - 1 || y == height - 1
}
