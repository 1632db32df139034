//! Rendering and parsing of the ROM listing: sixteen `.INIT_xx(256'h...)` block RAM
//! initialization records, each holding 32 bytes of the image with the highest address first.

use crate::{
    Error,
    Image,
    CAPACITY,
};
use nom::{
    bytes::complete::{
        tag,
        take_while_m_n,
    },
    character::complete::{
        char,
        multispace0,
        space0,
    },
    combinator::{
        all_consuming,
        map_res,
        opt,
    },
    multi::many0,
    sequence::{
        delimited,
        preceded,
        terminated,
    },
    IResult,
};
use std::{
    fmt::Display,
    io::Write,
    num::ParseIntError,
};

/// Bytes held by a single initialization record
pub const RECORD_BYTES: usize = 32;

/// Number of records that make up a listing
pub const RECORD_COUNT: usize = CAPACITY / RECORD_BYTES;

/// Displays an image as a listing of [`RECORD_COUNT`] records, separated by commas
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a>(pub &'a Image);

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, chunk) in self.0.chunks_exact(RECORD_BYTES).enumerate() {
            write!(f, "    .INIT_{i:02X}(256'h")?;
            for byte in chunk.iter().rev() {
                write!(f, "{byte:02x}")?;
            }
            if i + 1 == RECORD_COUNT {
                writeln!(f, ")")?;
            } else {
                writeln!(f, "),")?;
            }
        }
        Ok(())
    }
}

/// Write `image` as a listing
/// # Errors
/// Returns an error if writing to `w` fails
pub fn write_listing<W>(image: &Image, w: &mut W) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    write!(w, "{}", Listing(image))
}

/// Render `image` as a listing string
#[must_use]
pub fn to_listing(image: &Image) -> String {
    Listing(image).to_string()
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn record_index(input: &str) -> IResult<&str, usize> {
    map_res(
        preceded(tag(".INIT_"), take_while_m_n(2, 2, is_hex)),
        |s| usize::from_str_radix(s, 16),
    )(input)
}

fn record_bytes(hex: &str) -> Result<[u8; RECORD_BYTES], ParseIntError> {
    let mut bytes = [0u8; RECORD_BYTES];
    // The first pair of digits is the highest byte of the chunk
    for (i, byte) in bytes.iter_mut().rev().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)?;
    }
    Ok(bytes)
}

fn record_value(input: &str) -> IResult<&str, [u8; RECORD_BYTES]> {
    map_res(
        delimited(
            tag("(256'h"),
            take_while_m_n(2 * RECORD_BYTES, 2 * RECORD_BYTES, is_hex),
            char(')'),
        ),
        record_bytes,
    )(input)
}

fn record(input: &str) -> IResult<&str, (usize, [u8; RECORD_BYTES])> {
    let (remaining, index) = preceded(space0, record_index)(input)?;
    let (remaining, bytes) = terminated(record_value, opt(char(',')))(remaining)?;
    let (remaining, _) = multispace0(remaining)?;
    Ok((remaining, (index, bytes)))
}

fn listing(input: &str) -> IResult<&str, Vec<(usize, [u8; RECORD_BYTES])>> {
    all_consuming(preceded(multispace0, many0(record)))(input)
}

/// Parse a listing produced by [`write_listing`] back into the image it describes
/// # Errors
/// Returns an error if the text is not a listing, or if records are missing or out of order
pub fn parse_listing(input: &str) -> Result<Image, Error> {
    let (_, records) = listing(input).map_err(|_| Error::Parse)?;
    if records.len() != RECORD_COUNT {
        return Err(Error::RecordCount(records.len()));
    }
    let mut image = [0u8; CAPACITY];
    for (expected, ((found, bytes), chunk)) in records
        .iter()
        .zip(image.chunks_exact_mut(RECORD_BYTES))
        .enumerate()
    {
        if *found != expected {
            return Err(Error::RecordIndex {
                expected,
                found: *found,
            });
        }
        chunk.copy_from_slice(bytes);
    }
    Ok(image)
}
