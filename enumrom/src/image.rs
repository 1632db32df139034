//! The append-only ROM image

use crate::Error;

/// Size of the enumerator ROM in bytes
pub const CAPACITY: usize = 2048;

/// A finished, zero padded ROM image
pub type Image = [u8; CAPACITY];

/// A ROM image under construction. Strings are appended with a trailing NUL; the image is only
/// padded out to [`CAPACITY`] once it is finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomImage {
    bytes: Vec<u8>,
}

impl RomImage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `s` followed by a NUL terminator
    /// # Errors
    /// Returns an error if `s` contains a NUL or if the packed strings no longer fit in the ROM
    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        self.push_bytes(s.as_bytes())
    }

    /// Append the raw bytes of a string followed by a NUL terminator. The bytes are copied as is,
    /// whatever their encoding.
    /// # Errors
    /// Returns an error if `bytes` contains a NUL or if the packed strings no longer fit in the ROM
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.contains(&0) {
            return Err(Error::InteriorNul(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }
        self.bytes.extend_from_slice(bytes);
        self.bytes.push(0);
        self.check()
    }

    /// Number of bytes packed so far, terminators included
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes still available before the image is full
    #[must_use]
    pub fn remaining(&self) -> usize {
        CAPACITY.saturating_sub(self.bytes.len())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn check(&self) -> Result<(), Error> {
        // A string whose terminator lands on the last byte still fits
        if self.bytes.len() > CAPACITY {
            return Err(Error::Overflow {
                used: self.bytes.len(),
                capacity: CAPACITY,
            });
        }
        Ok(())
    }

    /// Zero pad the packed strings out to the full ROM size
    /// # Errors
    /// Returns an error if the packed strings exceed the ROM capacity
    pub fn finish(self) -> Result<Image, Error> {
        self.check()?;
        let mut image = [0u8; CAPACITY];
        image[..self.bytes.len()].copy_from_slice(&self.bytes);
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_terminates() {
        let mut rom = RomImage::new();
        rom.push_str("null").unwrap();
        rom.push_str("").unwrap();
        assert_eq!(rom.as_bytes(), b"null\0\0");
        assert_eq!(rom.len(), 6);
        assert_eq!(rom.remaining(), CAPACITY - 6);
    }

    #[test]
    fn test_finish_pads() {
        let mut rom = RomImage::new();
        rom.push_str("servo4").unwrap();
        let image = rom.finish().unwrap();
        assert_eq!(&image[..7], b"servo4\0");
        assert!(image[7..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_exact_fit() {
        let mut rom = RomImage::new();
        // 2047 characters plus the terminator fill the image exactly
        rom.push_str(&"a".repeat(CAPACITY - 1)).unwrap();
        assert_eq!(rom.remaining(), 0);
        let image = rom.finish().unwrap();
        assert_eq!(image[CAPACITY - 1], 0);
        assert_eq!(image[CAPACITY - 2], b'a');
    }

    #[test]
    fn test_overflow() {
        let mut rom = RomImage::new();
        rom.push_str(&"a".repeat(CAPACITY - 1)).unwrap();
        let err = rom.push_str("b").unwrap_err();
        assert!(matches!(
            err,
            Error::Overflow {
                used: 2050,
                capacity: CAPACITY
            }
        ));
    }

    #[test]
    fn test_push_raw_bytes() {
        let mut rom = RomImage::new();
        // Latin-1 copyright sign
        rom.push_bytes(b"\xa9 2020").unwrap();
        assert_eq!(rom.as_bytes(), b"\xa9 2020\0");
    }

    #[test]
    fn test_interior_nul() {
        let mut rom = RomImage::new();
        assert!(matches!(
            rom.push_str("ab\0c"),
            Err(Error::InteriorNul(_))
        ));
        assert!(rom.is_empty());
    }
}
