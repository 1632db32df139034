//! Bus infrastructure and board level peripherals

use super::template::{
    input,
    out,
    wire,
    wires,
    Assign,
    Net::{
        Board,
        Local,
    },
    Template,
};

/// The bus controller and enumerator ROM. Instantiated bare: it drives the bus rather than
/// sitting on it.
pub(crate) const ENUMERATOR: Template = Template {
    module: "enumerator",
    decls: &[],
    ports: &[],
    assigns: &[],
};

/// Baseboard LEDs and buttons. These are wired to board nets, not connector pins.
pub(crate) const BB4IO: Template = Template {
    module: "bb4io",
    decls: &[
        wires("leds", 8),
        wire("bntn1"),
        wire("bntn2"),
        wire("bntn3"),
    ],
    ports: &[
        Local("leds"),
        Local("bntn1"),
        Local("bntn2"),
        Local("bntn3"),
    ],
    assigns: &[
        Assign {
            lhs: Local("bntn1"),
            rhs: Board("BNTN1"),
        },
        Assign {
            lhs: Local("bntn2"),
            rhs: Board("BNTN2"),
        },
        Assign {
            lhs: Local("bntn3"),
            rhs: Board("BNTN3"),
        },
        Assign {
            lhs: Board("LED"),
            rhs: Local("leds"),
        },
    ],
};

/// Serial link to the host, which also taps the host interface nets of the top module
pub(crate) const HOSTSERIAL: Template = Template {
    module: "hostserial",
    decls: &[wire("txd"), wire("rxd"), wire("spare1"), wire("spare2")],
    ports: &[
        Local("txd"),
        Local("rxd"),
        Local("spare1"),
        Local("spare2"),
        Board("sec_enabled"),
        Board("rxbyteout"),
        Board("ready_"),
        Board("ack_"),
        Board("txdstrobe"),
        Board("nomore"),
        Board("dattxd"),
    ],
    assigns: &[
        out(0, "txd"),
        input("rxd", 1),
        input("spare1", 2),
        out(3, "spare2"),
    ],
};

/// Reserves a bus slot without any I/O
pub(crate) const NULL: Template = Template {
    module: "null",
    decls: &[wire("dummy")],
    ports: &[Local("dummy")],
    assigns: &[],
};
