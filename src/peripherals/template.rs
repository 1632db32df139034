//! The wiring template every peripheral kind is described by, and the rendering of a template
//! into the Verilog fragment for one bus slot.

use std::{
    fmt::Display,
    ops::Range,
};

/// A signal referenced by generated wiring
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Net {
    /// A signal private to the slot, emitted as `pSSname`
    Local(&'static str),
    /// A shared timebase driven by the bus controller, emitted as `bc0name`
    Timebase(&'static str),
    /// A signal of the top level design, emitted verbatim
    Board(&'static str),
    /// The n-th external pin of the instance's pin range, emitted as `` `PIN_NN ``
    Pin(usize),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetKind {
    Wire,
    Tri,
}

/// A local signal declaration. A width of 1 declares a scalar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Decl {
    pub kind: NetKind,
    pub name: &'static str,
    pub width: u8,
}

/// A continuous assignment `lhs = rhs`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Assign {
    pub lhs: Net,
    pub rhs: Net,
}

/// Everything needed to wire one kind of peripheral onto the bus
#[derive(Debug)]
pub struct Template {
    /// The module (with any parameter overrides) to instantiate
    pub module: &'static str,
    pub decls: &'static [Decl],
    /// Ports following the shared bus ports
    pub ports: &'static [Net],
    /// Timebase hookups followed by external pin bindings
    pub assigns: &'static [Assign],
}

pub(crate) const fn wire(name: &'static str) -> Decl {
    wires(name, 1)
}

pub(crate) const fn wires(name: &'static str, width: u8) -> Decl {
    Decl {
        kind: NetKind::Wire,
        name,
        width,
    }
}

pub(crate) const fn tri(name: &'static str, width: u8) -> Decl {
    Decl {
        kind: NetKind::Tri,
        name,
        width,
    }
}

/// Drive a local input from the bus controller's timebase of the same name
pub(crate) const fn clock(name: &'static str) -> Assign {
    Assign {
        lhs: Net::Local(name),
        rhs: Net::Timebase(name),
    }
}

/// Drive external pin `pin` from a local signal
pub(crate) const fn out(pin: usize, name: &'static str) -> Assign {
    Assign {
        lhs: Net::Pin(pin),
        rhs: Net::Local(name),
    }
}

/// Drive a local signal from external pin `pin`
pub(crate) const fn input(name: &'static str, pin: usize) -> Assign {
    Assign {
        lhs: Net::Local(name),
        rhs: Net::Pin(pin),
    }
}

/// Shared bus ports, in the order every peripheral module declares them
const BUS_PORTS: [&str; 11] = [
    "clk",
    "rdwr",
    "strobe",
    "our_addr",
    "addr",
    "busy_in",
    "busy_out",
    "addr_match_in",
    "addr_match_out",
    "datin",
    "datout",
];

/// The generated wiring for one peripheral instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The bus slot the instance occupies
    pub slot: usize,
    /// The external pins the instance drives or reads
    pub pins: Range<usize>,
    text: String,
}

impl Fragment {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders nets for a given slot and pin base
struct Scope {
    prefix: String,
    pin_start: usize,
}

impl Scope {
    fn net(&self, net: Net) -> String {
        match net {
            Net::Local(name) => format!("{}{name}", self.prefix),
            Net::Timebase(name) => format!("bc0{name}"),
            Net::Board(name) => name.to_owned(),
            Net::Pin(n) => format!("`PIN_{:02}", self.pin_start + n),
        }
    }
}

impl Template {
    /// Number of external pins an instance consumes
    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.assigns
            .iter()
            .flat_map(|a| [a.lhs, a.rhs])
            .filter(|net| matches!(net, Net::Pin(_)))
            .count()
    }

    /// Render the wiring for an instance labeled `label` in bus slot `slot` whose pins start at
    /// `pin_start`
    #[must_use]
    pub fn emit(&self, label: &str, slot: usize, pin_start: usize) -> Fragment {
        let rendering = Rendering {
            template: self,
            label,
            scope: Scope {
                prefix: format!("p{slot:02}"),
                pin_start,
            },
        };
        Fragment {
            slot,
            pins: pin_start..pin_start + self.pin_count(),
            text: rendering.to_string(),
        }
    }
}

/// A template bound to a label and slot, ready to be written out
struct Rendering<'a> {
    template: &'a Template,
    label: &'a str,
    scope: Scope,
}

impl Display for Rendering<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            template,
            label,
            scope,
        } = self;
        let p = &scope.prefix;
        writeln!(f)?;
        for decl in template.decls {
            let kind = match decl.kind {
                NetKind::Wire => "wire",
                NetKind::Tri => "tri",
            };
            if decl.width > 1 {
                writeln!(f, "    {kind} [{}:0] {p}{};", decl.width - 1, decl.name)?;
            } else {
                writeln!(f, "    {kind} {p}{};", decl.name)?;
            }
        }
        writeln!(f, "    // {label}")?;
        let bus: Vec<String> = BUS_PORTS.iter().map(|port| format!("{p}{port}")).collect();
        write!(
            f,
            "    {} {p}({},\n        {}",
            template.module,
            bus[..5].join(","),
            bus[5..].join(",")
        )?;
        if !template.ports.is_empty() {
            let ports: Vec<String> = template.ports.iter().map(|&net| scope.net(net)).collect();
            write!(f, ",\n        {}", ports.join(","))?;
        }
        writeln!(f, ");")?;
        for assign in template.assigns {
            writeln!(
                f,
                "    assign {} = {};",
                scope.net(assign.lhs),
                scope.net(assign.rhs)
            )?;
        }
        Ok(())
    }
}
