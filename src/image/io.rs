//! I/O helpers for frames, masks and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG into an owned 8-bit RGB buffer.
//! - `RgbImageBuf::center_crop_square`: cut the largest centered square.
//! - `save_mask`: write a binary mask as a black/white PNG.
//! - `save_overlay`: draw detected corners and bars onto a copy of the frame.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgb8, ImageView, Mask};
use crate::error::{Error, Result};
use crate::types::{CornerQuad, Point};
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use serde::Serialize;
use std::fs;
use std::path::Path;

const CORNER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BAR_COLOR: Rgb<u8> = Rgb([255, 220, 0]);
const CORNER_RADIUS: i32 = 3;

/// Owned 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageBuf {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageBuf {
    /// Construct from tightly packed interleaved RGB bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height * 3).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8::packed(self.width, self.height, &self.data)
    }

    /// Largest centered square crop and its `(row, col)` origin in this frame.
    pub fn center_crop_square(&self) -> (RgbImageBuf, Point) {
        let side = self.width.min(self.height);
        let row0 = (self.height - side) / 2;
        let col0 = (self.width - side) / 2;
        let mut data = Vec::with_capacity(side * side * 3);
        for y in row0..row0 + side {
            let start = (y * self.width + col0) * 3;
            data.extend_from_slice(&self.data[start..start + side * 3]);
        }
        let crop = RgbImageBuf {
            width: side,
            height: side,
            data,
        };
        (crop, Point::new(row0 as i32, col0 as i32))
    }
}

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageBuf> {
    let img = image::open(path)
        .map_err(|source| Error::Image {
            path: path.display().to_string(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbImageBuf {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Save a mask as an 8-bit PNG (true = white).
pub fn save_mask(mask: &Mask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let pixels = mask
        .rows()
        .flat_map(|row| row.iter().map(|&v| if v { 255u8 } else { 0 }))
        .collect();
    let out = GrayImage::from_raw(mask.width() as u32, mask.height() as u32, pixels)
        .ok_or_else(|| buffer_mismatch(path))?;
    out.save(path).map_err(|source| Error::Image {
        path: path.display().to_string(),
        source,
    })
}

/// Draw the gate bars and corners onto a copy of `frame` and save it.
///
/// `origin` is added to every corner, so corners found on a cropped frame can
/// be drawn onto the full frame.
pub fn save_overlay(
    frame: &ImageRgb8,
    quad: Option<&CornerQuad>,
    origin: Point,
    path: &Path,
) -> Result<()> {
    ensure_parent_dir(path)?;
    let pixels = (0..frame.h)
        .flat_map(|y| frame.row(y).iter().copied())
        .collect();
    let mut out = RgbImage::from_raw(frame.w as u32, frame.h as u32, pixels)
        .ok_or_else(|| buffer_mismatch(path))?;
    if let Some(q) = quad {
        let [p1, p2, p3, p4] = q.corners().map(|p| p.offset(origin.row, origin.col));
        for (a, b) in [(p1, p2), (p1, p3), (p2, p4)] {
            draw_line_segment_mut(&mut out, xy(a), xy(b), BAR_COLOR);
        }
        let side = (2 * CORNER_RADIUS + 1) as u32;
        for p in [p1, p2, p3, p4] {
            let marker = Rect::at(p.col - CORNER_RADIUS, p.row - CORNER_RADIUS).of_size(side, side);
            draw_filled_rect_mut(&mut out, marker, CORNER_COLOR);
        }
    }
    out.save(path).map_err(|source| Error::Image {
        path: path.display().to_string(),
        source,
    })
}

/// Drawing coordinates are `(x, y)`.
fn xy(p: Point) -> (f32, f32) {
    (p.col as f32, p.row as f32)
}

fn buffer_mismatch(path: &Path) -> Error {
    Error::Image {
        path: path.display().to_string(),
        source: ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )),
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_crop_keeps_the_middle_square() {
        // 4 wide, 2 tall; pixel value encodes the column.
        let data: Vec<u8> = (0..2)
            .flat_map(|_| (0..4u8).flat_map(|c| [c, c, c]))
            .collect();
        let buf = RgbImageBuf::new(4, 2, data).expect("consistent buffer");
        let (crop, origin) = buf.center_crop_square();
        assert_eq!((crop.width(), crop.height()), (2, 2));
        assert_eq!(origin, Point::new(0, 1));
        let view = crop.as_view();
        assert_eq!(view.get(0, 0), [1, 1, 1]);
        assert_eq!(view.get(1, 1), [2, 2, 2]);
    }

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("snake_gate_io_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn overlay_draws_bars_and_corner_markers() {
        let gray = vec![120u8; 40 * 40 * 3];
        let frame = ImageRgb8::packed(40, 40, &gray);
        let quad = CornerQuad {
            p1: Point::new(30, 5),
            p2: Point::new(5, 5),
            p3: Point::new(30, 35),
            p4: Point::new(5, 35),
        };
        let path = temp_png("overlay.png");
        save_overlay(&frame, Some(&quad), Point::default(), &path).expect("overlay written");

        let back = load_rgb_image(&path).expect("overlay readable");
        let view = back.as_view();
        assert_eq!(view.get(5, 30), CORNER_COLOR.0, "marker on p1");
        assert_eq!(view.get(5, 17), BAR_COLOR.0, "left bar between p1 and p2");
        assert_eq!(view.get(20, 30), BAR_COLOR.0, "bottom bar");
        assert_eq!(view.get(20, 20), [120, 120, 120], "interior untouched");
    }

    #[test]
    fn mask_round_trips_as_black_and_white() {
        let mut mask = Mask::new(6, 4);
        mask.fill(1..3, 2..4);
        let path = temp_png("mask.png");
        save_mask(&mask, &path).expect("mask written");

        let back = load_rgb_image(&path).expect("mask readable");
        let view = back.as_view();
        assert_eq!((back.width(), back.height()), (6, 4));
        assert_eq!(view.get(2, 1), [255, 255, 255]);
        assert_eq!(view.get(0, 0), [0, 0, 0]);
    }

    #[test]
    fn rejects_inconsistent_buffer() {
        assert!(RgbImageBuf::new(2, 2, vec![0; 11]).is_none());
    }
}
