//! Prelude (helpful reexports) for this package

pub use crate::{
    chain::{
        build,
        generate,
        Chain,
        Cursor,
        Instance,
        Summary,
    },
    description::Description,
    peripherals::{
        Descriptor,
        Peripheral,
        Registry,
    },
};
pub use enumrom::{
    listing::{
        parse_listing,
        write_listing,
        Listing,
    },
    RomContents,
    RomImage,
};
