//! General purpose outputs, serial ports and the four pin interface cards

use super::template::{
    clock,
    input,
    out,
    tri,
    wire,
    wires,
    Assign,
    Net::Local,
    Template,
};

const BITOUT: &[Assign] = &[
    out(0, "bitout[0]"),
    out(1, "bitout[1]"),
    out(2, "bitout[2]"),
    out(3, "bitout[3]"),
];

/// Pin bindings of the cards that use connector pins 2, 4 and 6 as outputs and pin 8 as input
const CARD_OOOI: [Assign; 4] = [
    out(0, "pin2"),
    out(1, "pin4"),
    out(2, "pin6"),
    input("pin8", 3),
];

/// Four digital outputs, also sold as an audio amp, driver and USB hub card
pub(crate) const OUT4: Template = Template {
    module: "out4",
    decls: &[wires("bitout", 4)],
    ports: &[Local("bitout")],
    assigns: BITOUT,
};

/// Four latching outputs, also sold as a relay card
pub(crate) const OUT4L: Template = Template {
    module: "out4l",
    decls: &[wires("bitout", 4)],
    ports: &[Local("bitout")],
    assigns: BITOUT,
};

pub(crate) const GPIO4: Template = Template {
    module: "gpio4",
    decls: &[tri("sbio", 4)],
    ports: &[Local("sbio")],
    assigns: &[
        out(0, "sbio[0]"),
        out(1, "sbio[1]"),
        out(2, "sbio[2]"),
        out(3, "sbio[3]"),
    ],
};

pub(crate) const SEROUT4: Template = Template {
    module: "serout #(.NPORT(4), .LOGNPORT(2))",
    decls: &[wires("txd", 4)],
    ports: &[Local("u1clk"), Local("txd")],
    assigns: &[
        clock("u1clk"),
        out(0, "txd[0]"),
        out(1, "txd[1]"),
        out(2, "txd[2]"),
        out(3, "txd[3]"),
    ],
};

pub(crate) const SEROUT8: Template = Template {
    module: "serout #(.NPORT(8), .LOGNPORT(3))",
    decls: &[wires("txd", 8)],
    ports: &[Local("u1clk"), Local("txd")],
    assigns: &[
        clock("u1clk"),
        out(0, "txd[0]"),
        out(1, "txd[1]"),
        out(2, "txd[2]"),
        out(3, "txd[3]"),
        out(4, "txd[4]"),
        out(5, "txd[5]"),
        out(6, "txd[6]"),
        out(7, "txd[7]"),
    ],
};

/// Enhanced SPI master, also the transport for the DAC, digital pot, RTC and AVR cards
pub(crate) const ESPI: Template = Template {
    module: "espi",
    decls: &[],
    ports: &[
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("n100clk"),
        Local("mosi"),
        Local("a"),
        Local("b"),
        Local("miso"),
    ],
    assigns: &[
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        clock("n100clk"),
        out(0, "mosi"),
        out(1, "a"),
        out(2, "b"),
        input("miso", 3),
    ],
};

/// 32 output shift register card. Its timebase port is left unconnected.
pub(crate) const OUT32: Template = Template {
    module: "out32",
    decls: &[],
    ports: &[
        Local("u10clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        out(0, "pin2"),
        out(1, "pin4"),
        out(2, "pin6"),
        out(3, "pin8"),
    ],
};

/// Six digit LCD
pub(crate) const LCD6: Template = Template {
    module: "lcd6",
    decls: &[
        wire("u100clk"),
        wire("pin2"),
        wire("pin4"),
        wire("pin6"),
        wire("pin8"),
    ],
    ports: &[
        Local("u100clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        clock("u100clk"),
        out(0, "pin2"),
        out(1, "pin4"),
        out(2, "pin6"),
        out(3, "pin8"),
    ],
};

pub(crate) const IO8: Template = Template {
    module: "io8",
    decls: &[
        wire("u10clk"),
        wire("pin2"),
        wire("pin4"),
        wire("pin6"),
        wire("pin8"),
    ],
    ports: &[
        Local("u10clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        clock("u10clk"),
        CARD_OOOI[0],
        CARD_OOOI[1],
        CARD_OOOI[2],
        CARD_OOOI[3],
    ],
};

/// Text interface: keypad and character display
pub(crate) const TIF: Template = Template {
    module: "tif",
    decls: &[],
    ports: &[
        Local("u1clk"),
        Local("m10clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        clock("u1clk"),
        clock("m10clk"),
        CARD_OOOI[0],
        CARD_OOOI[1],
        CARD_OOOI[2],
        CARD_OOOI[3],
    ],
};

/// Eight channel ultrasonic ranger
pub(crate) const US8: Template = Template {
    module: "us8",
    decls: &[],
    ports: &[
        Local("n100clk"),
        Local("u10clk"),
        Local("m10clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        clock("n100clk"),
        clock("u10clk"),
        clock("m10clk"),
        CARD_OOOI[0],
        CARD_OOOI[1],
        CARD_OOOI[2],
        CARD_OOOI[3],
    ],
};

/// 32 input shift register card
pub(crate) const IN32: Template = Template {
    module: "in32",
    decls: &[
        wire("u10clk"),
        wire("pin2"),
        wire("pin4"),
        wire("pin6"),
        wire("pin8"),
    ],
    ports: &[
        Local("u10clk"),
        Local("pin2"),
        Local("pin4"),
        Local("pin6"),
        Local("pin8"),
    ],
    assigns: &[
        clock("u10clk"),
        CARD_OOOI[0],
        CARD_OOOI[1],
        CARD_OOOI[2],
        CARD_OOOI[3],
    ],
};

/// I2C master
pub(crate) const EI2C: Template = Template {
    module: "ei2c",
    decls: &[wire("pin2"), wire("pin4"), wire("pin6"), wire("pin8")],
    ports: &[Local("pin2"), Local("pin4"), Local("pin6"), Local("pin8")],
    assigns: &CARD_OOOI,
};
