//! BlobBox and Orientation - geometry for character regions
//!
//! A [`BlobBox`] locates a blob on the page; an [`Orientation`] records how
//! the blob's content is rotated relative to upright text.

/// A rectangular region on the page
///
/// A simple `Copy` type since it is small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlobBox {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl BlobBox {
    /// Create a new box
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Get the center x coordinate
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + (self.w / 2) as i32
    }

    /// Get the center y coordinate
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + (self.h / 2) as i32
    }

    /// Area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

/// Quarter-turn orientation of blob content relative to upright text
///
/// The variant records how many clockwise quarter turns the content has
/// been rotated away from upright: `Up` is upright, `Right` is 90 degrees
/// clockwise, `Down` is 180, `Left` is 270.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Content is upright
    #[default]
    Up,
    /// Content rotated 90 degrees clockwise
    Right,
    /// Content rotated 180 degrees
    Down,
    /// Content rotated 270 degrees clockwise
    Left,
}

impl Orientation {
    /// Number of clockwise quarter turns from upright
    pub fn quarter_turns(self) -> u32 {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }

    /// Orientation after rotating content `quads` quarter turns clockwise
    pub fn rotated_cw(self, quads: u32) -> Self {
        match (self.quarter_turns() + quads) % 4 {
            0 => Orientation::Up,
            1 => Orientation::Right,
            2 => Orientation::Down,
            _ => Orientation::Left,
        }
    }

    /// Clockwise quarter turns needed to bring this orientation to `target`
    pub fn cw_quarter_turns_to(self, target: Orientation) -> u32 {
        (target.quarter_turns() + 4 - self.quarter_turns()) % 4
    }
}
