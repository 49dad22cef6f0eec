//! Wordrec Core - Basic data structures for word-level text recognition
//!
//! This crate provides the primitive types shared by the recognition
//! crates:
//!
//! - [`Blob`] - A connected 1 bpp region treated as a character candidate
//! - [`BlobBox`] - Rectangle region on the page
//! - [`Orientation`] - Quarter-turn orientation of blob content
//!
//! # Example
//!
//! ```
//! use wordrec_core::Blob;
//!
//! let blob = Blob::from_rows(&["x.x", ".x.", "x.x"]).unwrap();
//! assert_eq!(blob.fg_count(), 5);
//! ```

pub mod blob;
pub mod error;
pub mod geom;

pub use blob::Blob;
pub use error::{Error, Result};
pub use geom::{BlobBox, Orientation};
