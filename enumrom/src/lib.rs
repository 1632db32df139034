//! # Enumerator ROM
//!
//! This small library packs, renders and decodes the enumerator ROM that is embedded in an FPGA
//! build. Host software reads the ROM at runtime to learn which peripheral drivers occupy which
//! bus slots.
//!
//! The image is a fixed 2048 byte block holding a run of NUL-terminated strings: eight header
//! strings followed by one driver identifier per slot. Unused bytes are zero.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contents;
pub mod image;
pub mod listing;

pub use contents::RomContents;
pub use image::{
    Image,
    RomImage,
    CAPACITY,
};

use std::str::Utf8Error;

/// Number of header strings that lead every image
pub const HEADER_STRINGS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Enumerator ROM overflow: {used} bytes packed into a {capacity} byte image")]
    Overflow { used: usize, capacity: usize },
    #[error("Cannot pack a string with an interior NUL: {0:?}")]
    InteriorNul(String),
    #[error("Parsing failed to match the ROM listing grammar")]
    Parse,
    #[error("ROM listing record {found:02X} is out of order, expected {expected:02X}")]
    RecordIndex { expected: usize, found: usize },
    #[error("ROM listing holds {0} records, expected {count}", count = listing::RECORD_COUNT)]
    RecordCount(usize),
    #[error("ROM image ended inside a string")]
    Truncated,
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}
