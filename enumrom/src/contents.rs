//! Decoding a ROM image back into the strings host software sees

use crate::{
    Error,
    HEADER_STRINGS,
};

/// The strings recovered from an enumerator ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomContents {
    /// The header lines copied from the description file. Bytes that are not UTF-8 show up as
    /// replacement characters.
    pub header: Vec<String>,
    /// Driver identifiers, indexed by bus slot
    pub drivers: Vec<String>,
}

fn next_str<'a>(bytes: &'a [u8], ptr: &mut usize) -> Result<Option<&'a [u8]>, Error> {
    let rest = bytes.get(*ptr..).unwrap_or_default();
    if rest.is_empty() {
        return Ok(None);
    }
    let len = rest.iter().position(|&b| b == 0).ok_or(Error::Truncated)?;
    *ptr += len + 1;
    Ok(Some(&rest[..len]))
}

impl RomContents {
    /// Read the header strings and then driver identifiers until the zero padding
    ///
    /// # Errors
    /// Returns errors on images that end before the header is complete, or on driver identifiers
    /// that are not UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut ptr = 0;
        let mut header = Vec::with_capacity(HEADER_STRINGS);
        for _ in 0..HEADER_STRINGS {
            let line = next_str(bytes, &mut ptr)?.ok_or(Error::Truncated)?;
            header.push(String::from_utf8_lossy(line).into_owned());
        }
        let mut drivers = vec![];
        while let Some(driver) = next_str(bytes, &mut ptr)? {
            // An empty string is the start of the padding
            if driver.is_empty() {
                break;
            }
            drivers.push(std::str::from_utf8(driver)?.to_owned());
        }
        Ok(Self { header, drivers })
    }
}
