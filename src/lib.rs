//! # perichain
//!
//! Builds the top level wiring of an FPGA that hosts a chain of bus peripherals. A description file
//! lists peripheral names in bus order; each one gets the next bus slot and the next block of
//! connector pins. The outputs are the Verilog instantiations, the list of sources to include, and
//! the enumerator ROM image host software reads to find out which drivers to load.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod description;
pub mod peripherals;
pub mod prelude;
pub mod sysdefs;
