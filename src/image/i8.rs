//! Signed 8-bit sample images: a borrowed strided view and an owned buffer.

/// Borrowed, read-only view over caller-owned samples.
#[derive(Clone, Copy, Debug)]
pub struct ImageI8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [i8],
}

impl<'a> ImageI8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [i8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i8 {
        self.data[y * self.stride + x]
    }

    /// Minimum `data` length the view's geometry requires, `None` when it
    /// does not fit in `usize`.
    pub fn required_len(&self) -> Option<usize> {
        if self.w == 0 || self.h == 0 {
            return Some(0);
        }
        self.stride
            .checked_mul(self.h - 1)
            .and_then(|n| n.checked_add(self.w))
    }
}

impl<'a> crate::image::traits::ImageView for ImageI8<'a> {
    type Pixel = i8;

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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[i8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned sample buffer in row-major layout (stride == width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImageI8 {
    width: usize,
    height: usize,
    data: Vec<i8>,
}

impl OwnedImageI8 {
    /// Zero-initialised `width × height` buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Borrow as a read-only `ImageI8` view.
    pub fn as_view(&self) -> ImageI8<'_> {
        ImageI8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl crate::image::traits::ImageView for OwnedImageI8 {
    type Pixel = i8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[i8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl crate::image::traits::ImageViewMut for OwnedImageI8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}
