/// Borrowed 8-bit interleaved RGB frame.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view (`stride == 3 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * 3,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Interleaved bytes of row `y` (`3 * w` values).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 3]
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        (0..self.h).flat_map(move |y| {
            self.row(y)
                .chunks_exact(3)
                .map(|px| [px[0], px[1], px[2]])
        })
    }

    pub fn is_square(&self) -> bool {
        self.w == self.h
    }
}
