//! Owned signed 32-bit accumulator image in row-major layout (stride == width).
//!
//! Holds convolution results. Border pixels are never written by the kernels,
//! so whatever the caller stored there survives a convolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageI32 {
    w: usize,
    h: usize,
    /// Backing storage in row-major order
    data: Vec<i32>,
}

impl ImageI32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Adopt a caller allocation. Returns it back if the length is not `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<i32>) -> Result<Self, Vec<i32>> {
        if data.len() != w * h {
            return Err(data);
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    /// Convert (x, y) to a linear index into the backing storage.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn fill(&mut self, v: i32) {
        self.data.fill(v);
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }
}

impl crate::image::traits::ImageView for ImageI32 {
    type Pixel = i32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageI32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
