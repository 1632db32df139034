//! Parsing of description files.
//!
//! The first eight lines are free text copied byte for byte into the enumerator ROM. Everything
//! after them is a whitespace separated list of peripheral names in bus order. A word starting
//! with `#` is a comment and is skipped.

use enumrom::HEADER_STRINGS;
use nom::{
    branch::alt,
    character::complete::{
        line_ending,
        not_line_ending,
    },
    combinator::{
        eof,
        not,
    },
    sequence::{
        preceded,
        terminated,
    },
    IResult,
};
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not enough header strings: found {found} of {HEADER_STRINGS}")]
    MissingHeader { found: usize },
    #[error("The peripheral list is not valid UTF-8")]
    Body(#[from] Utf8Error),
}

/// A peripheral name and the (1-based) line it was read from
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub line: usize,
}

/// A parsed description file, borrowing from its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description<'a> {
    /// The ROM header lines with their line terminators removed, in whatever encoding the file
    /// uses
    pub header: Vec<&'a [u8]>,
    body: &'a str,
}

/// One line of text. The last line of a file may be missing its terminator.
fn header_line(input: &[u8]) -> IResult<&[u8], &[u8]> {
    preceded(not(eof), terminated(not_line_ending, alt((line_ending, eof))))(input)
}

impl<'a> Description<'a> {
    /// Split `input` into its header and peripheral list
    /// # Errors
    /// Returns an error if the input ends before all header lines are read, or if the peripheral
    /// list following them is not UTF-8
    pub fn parse(input: &'a [u8]) -> Result<Self, Error> {
        let mut remaining = input;
        let mut header = Vec::with_capacity(HEADER_STRINGS);
        while header.len() < HEADER_STRINGS {
            let (rest, line) = header_line(remaining).map_err(|_| Error::MissingHeader {
                found: header.len(),
            })?;
            header.push(line);
            remaining = rest;
        }
        Ok(Self {
            header,
            body: std::str::from_utf8(remaining)?,
        })
    }

    /// The peripheral names, in file order, with comment words removed
    pub fn tokens(&self) -> impl Iterator<Item = Token<'a>> + 'a {
        let body = self.body;
        body.lines().enumerate().flat_map(|(i, line)| {
            line.split_whitespace()
                .filter(|word| !word.starts_with('#'))
                .map(move |name| Token {
                    name,
                    line: HEADER_STRINGS + 1 + i,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "DPCore\nBaseboard4\nv0.9\n\n\n\n\nbuild 42\n";

    #[test]
    fn test_header_line() {
        assert_eq!(
            header_line(b"abc\ndef"),
            Ok((&b"def"[..], &b"abc"[..]))
        );
        assert_eq!(
            header_line(b"abc\r\ndef"),
            Ok((&b"def"[..], &b"abc"[..]))
        );
        assert_eq!(header_line(b"\n"), Ok((&b""[..], &b""[..])));
        assert_eq!(header_line(b"last"), Ok((&b""[..], &b"last"[..])));
        assert!(header_line(b"").is_err());
    }

    #[test]
    fn test_header() {
        let input = format!("{HEADER}servo4\n");
        let description = Description::parse(input.as_bytes()).unwrap();
        let expected: [&[u8]; 8] = [
            b"DPCore",
            b"Baseboard4",
            b"v0.9",
            b"",
            b"",
            b"",
            b"",
            b"build 42",
        ];
        assert_eq!(description.header, expected);
    }

    #[test]
    fn test_header_at_eof() {
        let description = Description::parse(b"1\n2\n3\n4\n5\n6\n7\n8").unwrap();
        assert_eq!(description.header[7], b"8");
        assert_eq!(description.tokens().count(), 0);
    }

    #[test]
    fn test_latin1_header() {
        // A copyright sign in Latin-1 is not UTF-8 but is kept byte for byte
        let input = b"\xa9 2020 DPI\n2\n3\n4\n5\n6\n7\n8\nservo4\n";
        let description = Description::parse(input).unwrap();
        assert_eq!(description.header[0], b"\xa9 2020 DPI");
        let names: Vec<_> = description.tokens().map(|t| t.name).collect();
        assert_eq!(names, vec!["servo4"]);
    }

    #[test]
    fn test_body_not_utf8() {
        let input = b"1\n2\n3\n4\n5\n6\n7\n8\nserv\xf64\n";
        assert!(matches!(
            Description::parse(input),
            Err(Error::Body(_))
        ));
    }

    #[test]
    fn test_missing_header() {
        let err = Description::parse(b"1\n2\n3\n4\n5\nnull\n").unwrap_err();
        assert!(matches!(err, Error::MissingHeader { found: 6 }));
        let err = Description::parse(b"").unwrap_err();
        assert!(matches!(err, Error::MissingHeader { found: 0 }));
    }

    #[test]
    fn test_tokens() {
        let input = format!("{HEADER}enumerator bb4io\n\n  servo4\tnull  \r\nqtr8");
        let description = Description::parse(input.as_bytes()).unwrap();
        let tokens: Vec<_> = description.tokens().collect();
        assert_eq!(
            tokens,
            vec![
                Token {
                    name: "enumerator",
                    line: 9
                },
                Token {
                    name: "bb4io",
                    line: 9
                },
                Token {
                    name: "servo4",
                    line: 11
                },
                Token {
                    name: "null",
                    line: 11
                },
                Token {
                    name: "qtr8",
                    line: 12
                },
            ]
        );
    }

    #[test]
    fn test_comment_words() {
        // Only the word starting with `#` is skipped, names after it on the same line still count
        let input = format!("{HEADER}enumerator #bus servo4\n#servo4\nservo4 #spare null\n");
        let description = Description::parse(input.as_bytes()).unwrap();
        let tokens: Vec<_> = description.tokens().map(|t| (t.name, t.line)).collect();
        assert_eq!(
            tokens,
            vec![
                ("enumerator", 9),
                ("servo4", 9),
                ("servo4", 11),
                ("null", 11)
            ]
        );
    }

    #[test]
    fn test_header_not_commented() {
        // Header lines are copied verbatim, even when they look like comments
        let input = b"# build\n#2\n3\n4\n5\n6\n7\n8\n";
        let description = Description::parse(input).unwrap();
        assert_eq!(description.header[0], b"# build");
    }
}
