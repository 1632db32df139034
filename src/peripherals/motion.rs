//! Motor, servo and pulse generating peripherals

use super::template::{
    clock,
    out,
    wire,
    wires,
    Net::Local,
    Template,
};

pub(crate) const PULSE2: Template = Template {
    module: "pulse2",
    decls: &[wire("p1p"), wire("p1n"), wire("p2p"), wire("p2n")],
    ports: &[Local("p1p"), Local("p1n"), Local("p2p"), Local("p2n")],
    assigns: &[
        out(0, "p1p"),
        out(1, "p1n"),
        out(2, "p2p"),
        out(3, "p2n"),
    ],
};

pub(crate) const SERVO4: Template = Template {
    module: "servo4",
    decls: &[wires("servo", 4)],
    ports: &[Local("servo")],
    assigns: &[
        out(0, "servo[0]"),
        out(1, "servo[1]"),
        out(2, "servo[2]"),
        out(3, "servo[3]"),
    ],
};

/// Unipolar stepper
pub(crate) const STEPU: Template = Template {
    module: "stepu",
    decls: &[],
    ports: &[
        Local("m1clk"),
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("coila"),
        Local("coilb"),
        Local("coilc"),
        Local("coild"),
    ],
    assigns: &[
        clock("m1clk"),
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        out(0, "coila"),
        out(1, "coilb"),
        out(2, "coilc"),
        out(3, "coild"),
    ],
};

/// Bipolar stepper
pub(crate) const STEPB: Template = Template {
    module: "stepb",
    decls: &[],
    ports: &[
        Local("m1clk"),
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("ain1"),
        Local("ain2"),
        Local("bin1"),
        Local("bin2"),
    ],
    assigns: &[
        clock("m1clk"),
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        out(0, "ain1"),
        out(1, "ain2"),
        out(2, "bin1"),
        out(3, "bin2"),
    ],
};

/// Dual H-bridge. Hooks up more timebases than the module has ports for.
pub(crate) const DC2: Template = Template {
    module: "dc2",
    decls: &[],
    ports: &[
        Local("m100clk"),
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("n100clk"),
        Local("ain1"),
        Local("ain2"),
        Local("bin1"),
        Local("bin2"),
    ],
    assigns: &[
        clock("m100clk"),
        clock("m10clk"),
        clock("m1clk"),
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        clock("n100clk"),
        out(0, "ain1"),
        out(1, "ain2"),
        out(2, "bin1"),
        out(3, "bin2"),
    ],
};

/// Sixteen state pattern generator, also sold as a four channel PWM output
pub(crate) const PGEN16: Template = Template {
    module: "pgen16",
    decls: &[wires("pattern", 4)],
    ports: &[
        Local("m100clk"),
        Local("m10clk"),
        Local("m1clk"),
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("n100clk"),
        Local("pattern"),
    ],
    assigns: &[
        clock("m100clk"),
        clock("m10clk"),
        clock("m1clk"),
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        clock("n100clk"),
        out(0, "pattern[0]"),
        out(1, "pattern[1]"),
        out(2, "pattern[2]"),
        out(3, "pattern[3]"),
    ],
};

pub(crate) const WS2812: Template = Template {
    module: "ws2812",
    decls: &[],
    ports: &[Local("led1"), Local("led2"), Local("led3"), Local("led4")],
    assigns: &[
        out(0, "led1"),
        out(1, "led2"),
        out(2, "led3"),
        out(3, "led4"),
    ],
};
