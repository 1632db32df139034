//! Peripherals that mostly read their pins: encoders, counters, rangers and receivers

use super::template::{
    clock,
    input,
    out,
    tri,
    wire,
    wires,
    Net::Local,
    Template,
};

pub(crate) const PWMIN4: Template = Template {
    module: "pwmin4",
    decls: &[wires("pwm", 4)],
    ports: &[
        Local("pollevt"),
        Local("m100clk"),
        Local("m10clk"),
        Local("m1clk"),
        Local("u100clk"),
        Local("u10clk"),
        Local("u1clk"),
        Local("n100clk"),
        Local("pwm"),
    ],
    assigns: &[
        clock("pollevt"),
        clock("m100clk"),
        clock("m10clk"),
        clock("m1clk"),
        clock("u100clk"),
        clock("u10clk"),
        clock("u1clk"),
        clock("n100clk"),
        input("pwm[0]", 0),
        input("pwm[1]", 1),
        input("pwm[2]", 2),
        input("pwm[3]", 3),
    ],
};

/// Dual quadrature decoder
pub(crate) const QUAD2: Template = Template {
    module: "quad2",
    decls: &[
        wire("m10clk"),
        wire("u1clk"),
        wire("a1"),
        wire("a2"),
        wire("b1"),
        wire("b2"),
    ],
    ports: &[
        Local("m10clk"),
        Local("u1clk"),
        Local("a1"),
        Local("a2"),
        Local("b1"),
        Local("b2"),
    ],
    assigns: &[
        clock("m10clk"),
        clock("u1clk"),
        input("a1", 0),
        input("a2", 1),
        input("b1", 2),
        input("b2", 3),
    ],
};

/// Reflective sensors. The sensor lines are tristate: driven to charge, then released and timed.
pub(crate) const QTR4: Template = Template {
    module: "qtr4",
    decls: &[wire("m10clk"), wire("u10clk"), tri("q", 4)],
    ports: &[Local("m10clk"), Local("u10clk"), Local("q")],
    assigns: &[
        clock("m10clk"),
        clock("u10clk"),
        out(0, "q[0]"),
        out(1, "q[1]"),
        out(2, "q[2]"),
        out(3, "q[3]"),
    ],
};

pub(crate) const QTR8: Template = Template {
    module: "qtr8",
    decls: &[wire("m10clk"), wire("u10clk"), tri("q", 8)],
    ports: &[Local("m10clk"), Local("u10clk"), Local("q")],
    assigns: &[
        clock("m10clk"),
        clock("u10clk"),
        out(0, "q[0]"),
        out(1, "q[1]"),
        out(2, "q[2]"),
        out(3, "q[3]"),
        out(4, "q[4]"),
        out(5, "q[5]"),
        out(6, "q[6]"),
        out(7, "q[7]"),
    ],
};

/// Rotary encoder with push button and LED
pub(crate) const ROTEN: Template = Template {
    module: "roten",
    decls: &[],
    ports: &[Local("btn"), Local("q1"), Local("q2"), Local("led")],
    assigns: &[
        clock("pollevt"),
        input("btn", 0),
        input("q1", 1),
        input("q2", 2),
        out(3, "led"),
    ],
};

/// Four channel event counter, also sold as a capacitive touch sensor
pub(crate) const COUNT4: Template = Template {
    module: "count4",
    decls: &[],
    ports: &[
        Local("m10clk"),
        Local("u1clk"),
        Local("a"),
        Local("b"),
        Local("c"),
        Local("d"),
    ],
    assigns: &[
        clock("m10clk"),
        clock("u1clk"),
        input("a", 0),
        input("b", 1),
        input("c", 2),
        input("d", 3),
    ],
};

/// Ultrasonic rangers sharing a single trigger/echo line each
pub(crate) const PING4: Template = Template {
    module: "ping4",
    decls: &[tri("png", 4)],
    ports: &[Local("u1clk"), Local("m10clk"), Local("png")],
    assigns: &[
        clock("u1clk"),
        clock("m10clk"),
        out(0, "png[0]"),
        out(1, "png[1]"),
        out(2, "png[2]"),
        out(3, "png[3]"),
    ],
};

pub(crate) const IN4: Template = Template {
    module: "in4",
    decls: &[wires("in", 4)],
    ports: &[Local("in")],
    assigns: &[
        clock("pollevt"),
        input("in[0]", 0),
        input("in[1]", 1),
        input("in[2]", 2),
        input("in[3]", 3),
    ],
};

/// Eight channel 12 bit ADC behind an SPI link
pub(crate) const ADC12: Template = Template {
    module: "adc12",
    decls: &[
        wire("n100clk"),
        wire("m1clk"),
        wire("mosi"),
        wire("a"),
        wire("b"),
        wire("miso"),
    ],
    ports: &[
        Local("n100clk"),
        Local("m1clk"),
        Local("mosi"),
        Local("a"),
        Local("b"),
        Local("miso"),
    ],
    assigns: &[
        clock("n100clk"),
        clock("m1clk"),
        out(0, "mosi"),
        out(1, "a"),
        out(2, "b"),
        input("miso", 3),
    ],
};

/// Consumer infrared transceiver
pub(crate) const IRIO: Template = Template {
    module: "irio",
    decls: &[tri("spare0", 1), tri("spare1", 1)],
    ports: &[
        Local("u100clk"),
        Local("u1clk"),
        Local("rxled"),
        Local("txled"),
        Local("irout"),
        Local("irin"),
    ],
    assigns: &[
        clock("u100clk"),
        clock("u1clk"),
        out(0, "rxled"),
        out(1, "txled"),
        out(2, "irout"),
        input("irin", 3),
    ],
};

/// Hobby RC receiver decoder
pub(crate) const RCRX: Template = Template {
    module: "rcrx",
    decls: &[tri("spare0", 1), tri("spare1", 1)],
    ports: &[
        Local("n100clk"),
        Local("rcin"),
        Local("pktled"),
        Local("spare0"),
        Local("spare1"),
    ],
    assigns: &[
        clock("n100clk"),
        input("rcin", 0),
        out(1, "pktled"),
        out(2, "spare0"),
        out(3, "spare1"),
    ],
};

/// Key fob radio receiver
pub(crate) const RFOB: Template = Template {
    module: "rfob",
    decls: &[],
    ports: &[
        Local("u10clk"),
        Local("m1clk"),
        Local("rfdin"),
        Local("rssi"),
        Local("pwml"),
        Local("pwmh"),
    ],
    assigns: &[
        clock("u10clk"),
        clock("m1clk"),
        input("rfdin", 0),
        input("rssi", 1),
        out(2, "pwml"),
        out(3, "pwmh"),
    ],
};
