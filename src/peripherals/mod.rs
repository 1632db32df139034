//! The peripheral registry: every type name a description file may use, the hardware it
//! instantiates, and the driver the enumerator ROM records for it.
//!
//! Several names can share one kind of hardware. `touch4` is a `count4` counter in the FPGA, but
//! host software loads the `touch4` driver for it, so the two are separate entries with the same
//! [`Peripheral`].

mod io;
mod motion;
mod sense;
mod system;
pub mod template;

use kstring::KString;
use std::collections::HashMap;
use template::{
    Fragment,
    Template,
};

/// The closed set of peripheral hardware that can sit on the bus
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Peripheral {
    Enumerator,
    Bb4io,
    Pulse2,
    Servo4,
    StepU,
    StepB,
    Dc2,
    Pgen16,
    Pwmin4,
    Quad2,
    Qtr4,
    Qtr8,
    Roten,
    Count4,
    Ping4,
    Irio,
    Espi,
    Adc12,
    Out4,
    Out4l,
    Serout4,
    Serout8,
    HostSerial,
    Ws2812,
    Gpio4,
    Out32,
    Lcd6,
    In4,
    Io8,
    Tif,
    Us8,
    In32,
    Ei2c,
    Rcrx,
    Rfob,
    Null,
}

impl Peripheral {
    /// The wiring template for this kind of hardware
    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            Self::Enumerator => &system::ENUMERATOR,
            Self::Bb4io => &system::BB4IO,
            Self::Pulse2 => &motion::PULSE2,
            Self::Servo4 => &motion::SERVO4,
            Self::StepU => &motion::STEPU,
            Self::StepB => &motion::STEPB,
            Self::Dc2 => &motion::DC2,
            Self::Pgen16 => &motion::PGEN16,
            Self::Pwmin4 => &sense::PWMIN4,
            Self::Quad2 => &sense::QUAD2,
            Self::Qtr4 => &sense::QTR4,
            Self::Qtr8 => &sense::QTR8,
            Self::Roten => &sense::ROTEN,
            Self::Count4 => &sense::COUNT4,
            Self::Ping4 => &sense::PING4,
            Self::Irio => &sense::IRIO,
            Self::Espi => &io::ESPI,
            Self::Adc12 => &sense::ADC12,
            Self::Out4 => &io::OUT4,
            Self::Out4l => &io::OUT4L,
            Self::Serout4 => &io::SEROUT4,
            Self::Serout8 => &io::SEROUT8,
            Self::HostSerial => &system::HOSTSERIAL,
            Self::Ws2812 => &motion::WS2812,
            Self::Gpio4 => &io::GPIO4,
            Self::Out32 => &io::OUT32,
            Self::Lcd6 => &io::LCD6,
            Self::In4 => &sense::IN4,
            Self::Io8 => &io::IO8,
            Self::Tif => &io::TIF,
            Self::Us8 => &io::US8,
            Self::In32 => &io::IN32,
            Self::Ei2c => &io::EI2C,
            Self::Rcrx => &sense::RCRX,
            Self::Rfob => &sense::RFOB,
            Self::Null => &system::NULL,
        }
    }

    /// Number of external pins every instance of this kind consumes
    #[must_use]
    pub fn pin_count(self) -> usize {
        self.template().pin_count()
    }
}

/// A registry entry
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// The name used in description files and as the label in generated wiring
    pub name: &'static str,
    /// The Verilog source to include, without the `.v` extension
    pub include: &'static str,
    /// The host driver recorded in the enumerator ROM
    pub driver: &'static str,
    pub kind: Peripheral,
}

impl Descriptor {
    /// The module instantiated for this entry
    #[must_use]
    pub fn module(&self) -> &'static str {
        self.kind.template().module
    }

    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.kind.pin_count()
    }

    /// Generate the wiring for an instance in `slot` whose pins start at `pin_start`
    #[must_use]
    pub fn emit(&self, slot: usize, pin_start: usize) -> Fragment {
        self.kind.template().emit(self.name, slot, pin_start)
    }
}

const fn entry(
    name: &'static str,
    include: &'static str,
    driver: &'static str,
    kind: Peripheral,
) -> Descriptor {
    Descriptor {
        name,
        include,
        driver,
        kind,
    }
}

/// Every known peripheral name, in registry order
pub const DESCRIPTORS: &[Descriptor] = &[
    entry("enumerator", "enumerator", "enumerator", Peripheral::Enumerator),
    entry("bb4io", "bb4io", "bb4io", Peripheral::Bb4io),
    entry("pulse2", "pulse2", "pulse2", Peripheral::Pulse2),
    entry("servo4", "servo4", "servo4", Peripheral::Servo4),
    entry("stepu", "stepu", "stepu", Peripheral::StepU),
    entry("stepb", "stepb", "stepb", Peripheral::StepB),
    entry("dc2", "dc2", "dc2", Peripheral::Dc2),
    entry("aamp", "out4", "aamp", Peripheral::Out4),
    entry("pgen16", "pgen16", "pgen16", Peripheral::Pgen16),
    entry("pwmout4", "pgen16", "pwmout4", Peripheral::Pgen16),
    entry("pwmin4", "pwmin4", "pwmin4", Peripheral::Pwmin4),
    entry("quad2", "quad2", "quad2", Peripheral::Quad2),
    entry("qtr4", "qtr4", "qtr4", Peripheral::Qtr4),
    entry("qtr8", "qtr8", "qtr8", Peripheral::Qtr8),
    entry("roten", "roten", "roten", Peripheral::Roten),
    entry("count4", "count4", "count4", Peripheral::Count4),
    entry("touch4", "count4", "touch4", Peripheral::Count4),
    entry("ping4", "ping4", "ping4", Peripheral::Ping4),
    entry("irio", "irio", "irio", Peripheral::Irio),
    entry("espi", "espi", "espi", Peripheral::Espi),
    entry("dac8", "espi", "dac8", Peripheral::Espi),
    entry("qpot", "espi", "qpot", Peripheral::Espi),
    entry("rtc", "espi", "rtc", Peripheral::Espi),
    entry("avr", "espi", "avr", Peripheral::Espi),
    entry("adc812", "adc12", "adc812", Peripheral::Adc12),
    entry("slide4", "adc12", "slide4", Peripheral::Adc12),
    entry("out4", "out4", "out4", Peripheral::Out4),
    entry("out4l", "out4l", "out4l", Peripheral::Out4l),
    entry("serout4", "serout", "serout4", Peripheral::Serout4),
    entry("serout8", "serout", "serout8", Peripheral::Serout8),
    entry("hostserial", "hostserial", "hostserial", Peripheral::HostSerial),
    entry("ws2812", "ws2812", "ws2812", Peripheral::Ws2812),
    entry("rly4", "out4l", "rly4", Peripheral::Out4l),
    // The drv4 card has always loaded the drv3 driver
    entry("drv4", "out4", "drv3", Peripheral::Out4),
    entry("hub4", "out4", "hub4", Peripheral::Out4),
    entry("gpio4", "gpio4", "gpio4", Peripheral::Gpio4),
    entry("out32", "out32", "out32", Peripheral::Out32),
    entry("lcd6", "lcd6", "lcd6", Peripheral::Lcd6),
    entry("in4", "in4", "in4", Peripheral::In4),
    entry("sw4", "in4", "sw4", Peripheral::In4),
    entry("io8", "io8", "io8", Peripheral::Io8),
    entry("tif", "tif", "tif", Peripheral::Tif),
    entry("us8", "us8", "us8", Peripheral::Us8),
    entry("in32", "in32", "in32", Peripheral::In32),
    entry("ei2c", "ei2c", "ei2c", Peripheral::Ei2c),
    entry("rcrx", "rcrx", "rcrx", Peripheral::Rcrx),
    entry("rfob", "rfob", "rfob", Peripheral::Rfob),
    entry("null", "null", "null", Peripheral::Null),
];

/// Exact-match lookup from peripheral name to [`Descriptor`]
#[derive(Debug, Clone)]
pub struct Registry {
    entries: &'static [Descriptor],
    by_name: HashMap<KString, &'static Descriptor>,
}

impl Registry {
    /// Build a registry over `entries`. Names are expected to be unique; a repeated name resolves
    /// to its last entry.
    #[must_use]
    pub fn new(entries: &'static [Descriptor]) -> Self {
        let by_name = entries
            .iter()
            .map(|d| (KString::from_static(d.name), d))
            .collect();
        Self { entries, by_name }
    }

    /// The registry of all known peripherals
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DESCRIPTORS)
    }

    /// Look up the entry registered under exactly `name`
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'static Descriptor> {
        self.by_name.get(name).copied()
    }

    /// Entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = &'static Descriptor> {
        let entries: &'static [Descriptor] = self.entries;
        entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;
    use template::Net;

    macro_rules! test_pins {
        ($name:ident, $inputs:literal, $outputs:literal) => {
            paste! {
                #[test]
                fn [<test_pins_$name>]() {
                    let pins = $inputs + $outputs;
                    let registry = Registry::standard();
                    let descriptor = registry.resolve(stringify!($name)).unwrap();
                    assert_eq!(descriptor.pin_count(), pins);
                    let fragment = descriptor.emit(3, 10);
                    assert_eq!(fragment.pins, 10..10 + pins);
                    let text = fragment.text();
                    assert_eq!(text.matches("= `PIN_").count(), $inputs);
                    assert_eq!(text.matches("assign `PIN_").count(), $outputs);
                }
            }
        };
    }

    #[test]
    fn test_names_unique() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), DESCRIPTORS.len());
    }

    #[test]
    fn test_exact_match() {
        let registry = Registry::standard();
        assert!(registry.resolve("servo4").is_some());
        assert!(registry.resolve("servo").is_none());
        assert!(registry.resolve("servo45").is_none());
        assert!(registry.resolve("Servo4").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_aliases() {
        let registry = Registry::standard();
        let touch = registry.resolve("touch4").unwrap();
        let count = registry.resolve("count4").unwrap();
        assert_eq!(touch.kind, count.kind);
        assert_eq!(touch.module(), "count4");
        assert_eq!(touch.include, count.include);
        assert_ne!(touch.driver, count.driver);
        let drv = registry.resolve("drv4").unwrap();
        assert_eq!(drv.module(), "out4");
        assert_eq!(drv.driver, "drv3");
    }

    #[test]
    fn test_alias_label() {
        let registry = Registry::standard();
        let fragment = registry.resolve("avr").unwrap().emit(2, 0);
        assert!(fragment.text().contains("    // avr\n    espi p02("));
    }

    #[test]
    fn test_order() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.iter().map(|d| d.name).collect();
        assert_eq!(names.first(), Some(&"enumerator"));
        assert_eq!(names.last(), Some(&"null"));
        assert_eq!(names.len(), 48);
    }

    #[test]
    fn test_pins_contiguous() {
        // Every template binds each of its pins exactly once
        for descriptor in DESCRIPTORS {
            let mut pins: Vec<usize> = descriptor
                .kind
                .template()
                .assigns
                .iter()
                .flat_map(|a| [a.lhs, a.rhs])
                .filter_map(|net| match net {
                    Net::Pin(n) => Some(n),
                    _ => None,
                })
                .collect();
            pins.sort_unstable();
            let expected: Vec<usize> = (0..descriptor.pin_count()).collect();
            assert_eq!(pins, expected, "{}", descriptor.name);
        }
    }

    #[test]
    fn test_enumerator_bare() {
        let fragment = Registry::standard()
            .resolve("enumerator")
            .unwrap()
            .emit(0, 0);
        assert_eq!(
            fragment.text(),
            "
    // enumerator
    enumerator p00(p00clk,p00rdwr,p00strobe,p00our_addr,p00addr,
        p00busy_in,p00busy_out,p00addr_match_in,p00addr_match_out,p00datin,p00datout);
"
        );
    }

    #[test]
    fn test_servo4_wiring() {
        let fragment = Registry::standard().resolve("servo4").unwrap().emit(1, 0);
        assert_eq!(
            fragment.text(),
            "
    wire [3:0] p01servo;
    // servo4
    servo4 p01(p01clk,p01rdwr,p01strobe,p01our_addr,p01addr,
        p01busy_in,p01busy_out,p01addr_match_in,p01addr_match_out,p01datin,p01datout,
        p01servo);
    assign `PIN_00 = p01servo[0];
    assign `PIN_01 = p01servo[1];
    assign `PIN_02 = p01servo[2];
    assign `PIN_03 = p01servo[3];
"
        );
    }

    #[test]
    fn test_espi_directions() {
        let fragment = Registry::standard().resolve("espi").unwrap().emit(4, 8);
        let text = fragment.text();
        assert!(text.contains("    assign p04u100clk = bc0u100clk;\n"));
        assert!(text.contains("    assign `PIN_08 = p04mosi;\n"));
        assert!(text.contains("    assign `PIN_10 = p04b;\n"));
        assert!(text.contains("    assign p04miso = `PIN_11;\n"));
    }

    #[test]
    fn test_bb4io_board_nets() {
        let fragment = Registry::standard().resolve("bb4io").unwrap().emit(1, 0);
        let text = fragment.text();
        assert!(text.contains("    wire [7:0] p01leds;\n"));
        assert!(text.contains("    assign p01bntn1 = BNTN1;\n"));
        assert!(text.contains("    assign LED = p01leds;\n"));
        assert!(!text.contains("`PIN_"));
    }

    #[test]
    fn test_serout_parameters() {
        let fragment = Registry::standard().resolve("serout8").unwrap().emit(5, 4);
        assert!(fragment
            .text()
            .contains("    serout #(.NPORT(8), .LOGNPORT(3)) p05(p05clk,"));
        assert!(fragment.text().contains("    assign `PIN_11 = p05txd[7];\n"));
    }

    #[test]
    fn test_hostserial_host_nets() {
        let fragment = Registry::standard()
            .resolve("hostserial")
            .unwrap()
            .emit(1, 0);
        assert!(fragment.text().contains(
            "p01spare1,p01spare2,sec_enabled,rxbyteout,ready_,ack_,txdstrobe,nomore,dattxd);\n"
        ));
    }

    test_pins!(enumerator, 0, 0);
    test_pins!(bb4io, 0, 0);
    test_pins!(null, 0, 0);
    test_pins!(pulse2, 0, 4);
    test_pins!(servo4, 0, 4);
    test_pins!(stepu, 0, 4);
    test_pins!(stepb, 0, 4);
    test_pins!(dc2, 0, 4);
    test_pins!(aamp, 0, 4);
    test_pins!(pgen16, 0, 4);
    test_pins!(pwmout4, 0, 4);
    test_pins!(pwmin4, 4, 0);
    test_pins!(quad2, 4, 0);
    test_pins!(qtr4, 0, 4);
    test_pins!(qtr8, 0, 8);
    test_pins!(roten, 3, 1);
    test_pins!(count4, 4, 0);
    test_pins!(touch4, 4, 0);
    test_pins!(ping4, 0, 4);
    test_pins!(irio, 1, 3);
    test_pins!(espi, 1, 3);
    test_pins!(dac8, 1, 3);
    test_pins!(qpot, 1, 3);
    test_pins!(rtc, 1, 3);
    test_pins!(avr, 1, 3);
    test_pins!(adc812, 1, 3);
    test_pins!(slide4, 1, 3);
    test_pins!(out4, 0, 4);
    test_pins!(out4l, 0, 4);
    test_pins!(rly4, 0, 4);
    test_pins!(drv4, 0, 4);
    test_pins!(hub4, 0, 4);
    test_pins!(serout4, 0, 4);
    test_pins!(serout8, 0, 8);
    test_pins!(hostserial, 2, 2);
    test_pins!(ws2812, 0, 4);
    test_pins!(gpio4, 0, 4);
    test_pins!(out32, 0, 4);
    test_pins!(lcd6, 0, 4);
    test_pins!(in4, 4, 0);
    test_pins!(sw4, 4, 0);
    test_pins!(io8, 1, 3);
    test_pins!(tif, 1, 3);
    test_pins!(us8, 1, 3);
    test_pins!(in32, 1, 3);
    test_pins!(ei2c, 1, 3);
    test_pins!(rcrx, 1, 3);
    test_pins!(rfob, 2, 2);
}
