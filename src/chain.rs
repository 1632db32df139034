//! Chaining peripherals onto the bus.
//!
//! Each name in a description becomes an instance in the next bus slot, taking the next block of
//! external pins. A [`Cursor`] carries the next free slot and pin from one instance to the next.
//! [`build`] drives the whole run: wiring text, include directives and the enumerator ROM.

use crate::{
    description::{
        self,
        Description,
        Token,
    },
    peripherals::{
        template::Fragment,
        Descriptor,
        Peripheral,
        Registry,
    },
};
use enumrom::{
    listing::write_listing,
    Image,
    RomImage,
};
use std::{
    io::Write,
    ops::Range,
};
use thiserror::Error;
use tracing::{
    debug,
    info,
    warn,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Description(#[from] description::Error),
    #[error("Unknown peripheral `{name}` on line {line}")]
    UnknownPeripheral { name: String, line: usize },
    #[error("No room in the enumerator ROM for `{name}` in slot {slot}")]
    RomFull {
        name: &'static str,
        slot: usize,
        #[source]
        source: enumrom::Error,
    },
    #[error(transparent)]
    Rom(#[from] enumrom::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The next free bus slot and external pin
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub slot: usize,
    pub pin: usize,
}

impl Cursor {
    /// Place `descriptor` at this cursor, returning the instance and the cursor after it
    #[must_use]
    pub fn place(self, descriptor: &'static Descriptor) -> (Instance, Cursor) {
        let pins = self.pin..self.pin + descriptor.pin_count();
        let next = Cursor {
            slot: self.slot + 1,
            pin: pins.end,
        };
        let instance = Instance {
            slot: self.slot,
            pins,
            descriptor,
        };
        (instance, next)
    }
}

/// A peripheral placed on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub slot: usize,
    pub pins: Range<usize>,
    pub descriptor: &'static Descriptor,
}

impl Instance {
    /// Generate this instance's wiring
    #[must_use]
    pub fn emit(&self) -> Fragment {
        self.descriptor.emit(self.slot, self.pins.start)
    }
}

/// Resolves names and places them one after another, yielding each [`Instance`] in bus order
#[derive(Debug)]
pub struct Chain<'r, I> {
    registry: &'r Registry,
    tokens: I,
    cursor: Cursor,
}

impl<'r, 'a, I> Chain<'r, I>
where
    I: Iterator<Item = Token<'a>>,
{
    pub fn new(registry: &'r Registry, tokens: I) -> Self {
        Self {
            registry,
            tokens,
            cursor: Cursor::default(),
        }
    }

    /// Where the next instance would be placed
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl<'a, I> Iterator for Chain<'_, I>
where
    I: Iterator<Item = Token<'a>>,
{
    type Item = Result<Instance, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        let Some(descriptor) = self.registry.resolve(token.name) else {
            return Some(Err(Error::UnknownPeripheral {
                name: token.name.to_owned(),
                line: token.line,
            }));
        };
        let (instance, cursor) = self.cursor.place(descriptor);
        self.cursor = cursor;
        Some(Ok(instance))
    }
}

/// The outcome of a successful [`build`]
#[derive(Debug)]
pub struct Summary {
    /// Number of bus slots used
    pub slots: usize,
    /// Number of external pins used
    pub pins: usize,
    /// Bytes of the ROM holding strings
    pub rom_used: usize,
    /// The zero padded ROM image
    pub image: Image,
}

/// Process a description: write each instance's wiring to `wiring` followed by the closing
/// `endmodule`, write an include directive per instance to `includes`, and pack the header lines
/// and driver names into the enumerator ROM.
///
/// Any error leaves `wiring` and `includes` incomplete.
/// # Errors
/// Returns an error on a short header, an unknown peripheral name, a full ROM, or a failed write
pub fn build<W, N>(
    input: &[u8],
    registry: &Registry,
    wiring: &mut W,
    includes: &mut N,
) -> Result<Summary, Error>
where
    W: Write + ?Sized,
    N: Write + ?Sized,
{
    let description = Description::parse(input)?;
    let mut rom = RomImage::new();
    for line in &description.header {
        rom.push_bytes(line)?;
    }

    let mut chain = Chain::new(registry, description.tokens());
    for instance in chain.by_ref() {
        let instance = instance?;
        let descriptor = instance.descriptor;
        if descriptor.kind == Peripheral::Enumerator && instance.slot != 0 {
            warn!(
                slot = instance.slot,
                "The enumerator is expected in slot 0"
            );
        }
        debug!(
            slot = instance.slot,
            pins = ?instance.pins,
            name = descriptor.name,
            "Placing peripheral"
        );
        wiring.write_all(instance.emit().text().as_bytes())?;
        writeln!(includes, "`include \"{}.v\"", descriptor.include)?;
        rom.push_str(descriptor.driver)
            .map_err(|source| Error::RomFull {
                name: descriptor.name,
                slot: instance.slot,
                source,
            })?;
    }
    wiring.write_all(b"\nendmodule\n")?;

    let Cursor { slot, pin } = chain.cursor();
    let rom_used = rom.len();
    let image = rom.finish()?;
    info!(slots = slot, pins = pin, rom_used, "Peripheral chain complete");
    Ok(Summary {
        slots: slot,
        pins: pin,
        rom_used,
        image,
    })
}

/// [`build`], then write the ROM listing to the writer `open_listing` returns. The listing is only
/// opened once the whole description has been processed, so a failed run leaves no listing behind.
/// # Errors
/// Returns an error if [`build`] fails, or if opening or writing the listing fails
pub fn generate<W, N, L, F>(
    input: &[u8],
    registry: &Registry,
    wiring: &mut W,
    includes: &mut N,
    open_listing: F,
) -> Result<Summary, Error>
where
    W: Write + ?Sized,
    N: Write + ?Sized,
    L: Write,
    F: FnOnce() -> std::io::Result<L>,
{
    let summary = build(input, registry, wiring, includes)?;
    wiring.flush()?;
    includes.flush()?;
    let mut listing = open_listing()?;
    write_listing(&summary.image, &mut listing)?;
    listing.flush()?;
    Ok(summary)
}
