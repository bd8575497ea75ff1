/// Read access to a row-major raster with a per-row stride.
///
/// Implemented by the single-channel float image used for edge detection and
/// by the binary [`Mask`](crate::image::Mask) produced by the color and edge
/// providers.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Rows from top to bottom.
    fn rows(&self) -> impl Iterator<Item = &[Self::Pixel]> + '_ {
        (0..self.height()).map(move |y| self.row(y))
    }

    fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}
