//! Blob - a connected 1 bpp region treated as a character candidate
//!
//! The bitmap is stored packed, 8 pixels per byte, most significant bit
//! first, with rows padded to a whole byte. Pixel-count and centroid
//! computations go through per-byte lookup tables.

use crate::error::{Error, Result};
use crate::geom::{BlobBox, Orientation};

/// Number of ON bits for each byte value
static SUMTAB: [u8; 256] = build_sumtab();

/// Sum of the bit positions (0 = MSB) of the ON bits for each byte value
static CENTTAB: [u16; 256] = build_centtab();

const fn build_sumtab() -> [u8; 256] {
    let mut tab = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        tab[i] = (i as u8).count_ones() as u8;
        i += 1;
    }
    tab
}

const fn build_centtab() -> [u16; 256] {
    let mut tab = [0u16; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut bit = 0u16;
        while bit < 8 {
            if i & (0x80 >> bit) != 0 {
                tab[i] += bit;
            }
            bit += 1;
        }
        i += 1;
    }
    tab
}

/// A connected image region representing a candidate character
///
/// Carries its page-coordinate bounding box and the orientation of its
/// content relative to upright text.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    bounds: BlobBox,
    orientation: Orientation,
    /// Packed rows, `row_bytes()` bytes per row
    data: Vec<u8>,
}

impl Blob {
    /// Create an empty (all background) blob
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(bounds: BlobBox, orientation: Orientation) -> Result<Self> {
        if bounds.w == 0 || bounds.h == 0 {
            return Err(Error::InvalidDimension {
                width: bounds.w,
                height: bounds.h,
            });
        }
        let row_bytes = bounds.w.div_ceil(8) as usize;
        Ok(Self {
            bounds,
            orientation,
            data: vec![0u8; row_bytes * bounds.h as usize],
        })
    }

    /// Create an upright blob at the origin from text rows
    ///
    /// Each string is one row; `x` or `#` marks a foreground pixel, any
    /// other character is background. All rows must have the same length.
    /// Mainly useful for building synthetic glyphs in tests and training.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let h = rows.len() as u32;
        let w = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut blob = Self::new(BlobBox::new(0, 0, w, h), Orientation::Up)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != w {
                return Err(Error::InvalidParameter(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.chars().count(),
                    w
                )));
            }
            for (x, c) in row.chars().enumerate() {
                if c == 'x' || c == '#' {
                    blob.set_pixel(x as u32, y as u32, true)?;
                }
            }
        }
        Ok(blob)
    }

    /// Bounding box on the page
    #[inline]
    pub fn bounds(&self) -> BlobBox {
        self.bounds
    }

    /// Orientation of the content
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.w
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.h
    }

    #[inline]
    fn row_bytes(&self) -> usize {
        self.bounds.w.div_ceil(8) as usize
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.bounds.w || y >= self.bounds.h {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.bounds.w,
                height: self.bounds.h,
            });
        }
        Ok(())
    }

    /// Get the pixel at (x, y); true is foreground
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<bool> {
        self.check_bounds(x, y)?;
        let byte = self.data[y as usize * self.row_bytes() + (x / 8) as usize];
        Ok(byte & (0x80 >> (x % 8)) != 0)
    }

    /// Set the pixel at (x, y)
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<()> {
        self.check_bounds(x, y)?;
        let row_bytes = self.row_bytes();
        let byte = &mut self.data[y as usize * row_bytes + (x / 8) as usize];
        let mask = 0x80 >> (x % 8);
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        Ok(())
    }

    /// Count of foreground pixels
    pub fn fg_count(&self) -> u64 {
        let mut count = 0u64;
        for byte in &self.data {
            count += SUMTAB[*byte as usize] as u64;
        }
        count
    }

    /// True if the blob has no foreground pixels
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    /// Centroid of the foreground, in blob-local coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the blob has no foreground pixels.
    pub fn centroid(&self) -> Result<(f32, f32)> {
        let row_bytes = self.row_bytes();
        let mut xsum = 0u64;
        let mut ysum = 0u64;
        let mut total = 0u64;
        for y in 0..self.bounds.h as usize {
            for bx in 0..row_bytes {
                let byte = self.data[y * row_bytes + bx] as usize;
                let n = SUMTAB[byte] as u64;
                if n == 0 {
                    continue;
                }
                total += n;
                ysum += n * y as u64;
                xsum += n * 8 * bx as u64 + CENTTAB[byte] as u64;
            }
        }
        if total == 0 {
            return Err(Error::NoForeground("centroid of empty blob".to_string()));
        }
        Ok((xsum as f32 / total as f32, ysum as f32 / total as f32))
    }

    /// Foreground pixel count for each column
    pub fn col_profile(&self) -> Vec<u32> {
        let mut profile = vec![0u32; self.bounds.w as usize];
        for y in 0..self.bounds.h {
            for (x, slot) in profile.iter_mut().enumerate() {
                if self.get_pixel(x as u32, y).unwrap_or(false) {
                    *slot += 1;
                }
            }
        }
        profile
    }

    /// Rotate the content by `quads` clockwise quarter turns
    ///
    /// Produces a new blob with swapped dimensions for odd quarter turns.
    /// The page-coordinate origin is preserved; the recorded orientation is
    /// updated so that a round trip of rotations is tracked correctly.
    pub fn rotate_orth(&self, quads: u32) -> Result<Blob> {
        let quads = quads % 4;
        let (w, h) = (self.bounds.w, self.bounds.h);
        let (nw, nh) = if quads % 2 == 1 { (h, w) } else { (w, h) };
        let bounds = BlobBox::new(self.bounds.x, self.bounds.y, nw, nh);
        let mut out = Blob::new(bounds, self.orientation.rotated_cw(quads))?;
        for y in 0..h {
            for x in 0..w {
                if !self.get_pixel(x, y)? {
                    continue;
                }
                let (nx, ny) = match quads {
                    0 => (x, y),
                    1 => (h - 1 - y, x),
                    2 => (w - 1 - x, h - 1 - y),
                    _ => (y, w - 1 - x),
                };
                out.set_pixel(nx, ny, true)?;
            }
        }
        Ok(out)
    }

    /// Extract the column range `[x0, x1)` as a new blob
    ///
    /// The result keeps the parent's orientation and is positioned at the
    /// corresponding page coordinates.
    pub fn crop_cols(&self, x0: u32, x1: u32) -> Result<Blob> {
        if x0 >= x1 || x1 > self.bounds.w {
            return Err(Error::InvalidParameter(format!(
                "invalid column range [{}, {}) for width {}",
                x0, x1, self.bounds.w
            )));
        }
        let bounds = BlobBox::new(
            self.bounds.x + x0 as i32,
            self.bounds.y,
            x1 - x0,
            self.bounds.h,
        );
        let mut out = Blob::new(bounds, self.orientation)?;
        for y in 0..self.bounds.h {
            for x in x0..x1 {
                if self.get_pixel(x, y)? {
                    out.set_pixel(x - x0, y, true)?;
                }
            }
        }
        Ok(out)
    }
}
