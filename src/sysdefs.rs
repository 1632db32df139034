//! The globally visible constants of the surrounding FPGA design.
//!
//! The host protocol is a command byte, two bytes of register address, a word transfer count and,
//! for writes, the data. The command carries an operation (read, write, write-then-read), the word
//! length, and whether successive words go to the same or incrementing registers.
//!
//! None of these are interpreted here; they are carried so generated code and the companion
//! header agree on names and values.

use std::io::Write;

/// Fields and values of the host command byte
pub mod cmd {
    pub const OP_FIELD: u8 = 0x0C;
    pub const OP_READ: u8 = 0x04;
    pub const OP_WRITE: u8 = 0x08;
    pub const OP_WRRD: u8 = 0x30;
    pub const SAME_FIELD: u8 = 0x02;
    pub const SAME_REG: u8 = 0x00;
    pub const SUCC_REG: u8 = 0x02;
    pub const LEN_FIELD: u8 = 0x01;
    pub const WORD8: u8 = 0x00;
    pub const WORD16: u8 = 0x01;
}

/// The power states of the FPGA
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerState {
    /// Everything runs at full speed
    FullOn = 0b11,
    /// Peripherals that need precise timing (PWM, servo and H-bridge controllers, serial ports)
    /// are off and the system clock drops to 1 kHz, which still accepts host commands
    Doze = 0b10,
    /// 1 kHz clock with everything off except the bus interface needed to wake up
    Sleep = 0b01,
    /// All peripherals reload their default values and states
    Reset = 0b00,
}

/// States of the SPI byte engine
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum SpiState {
    Idle = 0,
    GetByte = 1,
    SendByte = 2,
    SendReply = 3,
}

/// SPI chip select behavior
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ChipSelect {
    ActiveLow = 0,
    ActiveHigh = 1,
    ForcedLow = 2,
    ForcedHigh = 3,
}

/// SPI clock rates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum SpiClock {
    Mhz2 = 0,
    Mhz1 = 1,
    Khz500 = 2,
    Khz100 = 3,
}

#[derive(Debug, Copy, Clone)]
enum Radix {
    Bin,
    Hex,
}

/// A single Verilog `define
#[derive(Debug, Copy, Clone)]
struct Define {
    name: &'static str,
    width: u8,
    radix: Radix,
    value: u8,
}

const fn hex(name: &'static str, width: u8, value: u8) -> Define {
    Define {
        name,
        width,
        radix: Radix::Hex,
        value,
    }
}

const fn bin(name: &'static str, value: PowerState) -> Define {
    Define {
        name,
        width: 2,
        radix: Radix::Bin,
        value: value as u8,
    }
}

const COMMAND: &[Define] = &[
    hex("CMD_OP_FIELD", 8, cmd::OP_FIELD),
    hex("CMD_OP_READ", 8, cmd::OP_READ),
    hex("CMD_OP_WRITE", 8, cmd::OP_WRITE),
    hex("CMD_OP_WRRD", 8, cmd::OP_WRRD),
    hex("CMD_SAME_FIELD", 8, cmd::SAME_FIELD),
    hex("CMD_SAME_REG", 8, cmd::SAME_REG),
    hex("CMD_SUCC_REG", 8, cmd::SUCC_REG),
    hex("CMD_LEN_FIELD", 8, cmd::LEN_FIELD),
    hex("CMD_WORD8", 8, cmd::WORD8),
    hex("CMD_WORD16", 8, cmd::WORD16),
];

const POWER: &[Define] = &[
    bin("SYS_FULLON", PowerState::FullOn),
    bin("SYS_DOZE", PowerState::Doze),
    bin("SYS_SLEEP", PowerState::Sleep),
    bin("SYS_RESET", PowerState::Reset),
];

const SPI: &[Define] = &[
    hex("IDLE", 2, SpiState::Idle as u8),
    hex("GETBYTE", 2, SpiState::GetByte as u8),
    hex("SNDBYTE", 2, SpiState::SendByte as u8),
    hex("SNDRPLY", 2, SpiState::SendReply as u8),
    hex("CS_MODE_AL", 2, ChipSelect::ActiveLow as u8),
    hex("CS_MODE_AH", 2, ChipSelect::ActiveHigh as u8),
    hex("CS_MODE_FL", 2, ChipSelect::ForcedLow as u8),
    hex("CS_MODE_FH", 2, ChipSelect::ForcedHigh as u8),
    hex("CLK_2M", 2, SpiClock::Mhz2 as u8),
    hex("CLK_1M", 2, SpiClock::Mhz1 as u8),
    hex("CLK_500K", 2, SpiClock::Khz500 as u8),
    hex("CLK_100K", 2, SpiClock::Khz100 as u8),
];

impl std::fmt::Display for Define {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Define {
            name,
            width,
            radix,
            value,
        } = self;
        match radix {
            Radix::Hex if *width == 8 => write!(f, "`define {name:<17} {width}'h{value:02X}"),
            Radix::Hex => write!(f, "`define {name:<12} {width}'h{value:X}"),
            Radix::Bin => write!(
                f,
                "`define {name:<17} {width}'b{value:0w$b}",
                w = usize::from(*width)
            ),
        }
    }
}

/// Write the constants as a Verilog header, one `define per line
/// # Errors
/// Returns an error if writing to `w` fails
pub fn write_header<W>(w: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(w, "// sysdefs.h: globally visible definitions shared by all peripherals")?;
    for (title, defines) in [
        ("Host command byte", COMMAND),
        ("Power states", POWER),
        ("SPI states and configuration", SPI),
    ] {
        writeln!(w, "\n// {title}")?;
        for define in defines {
            writeln!(w, "{define}")?;
        }
    }
    Ok(())
}
