// SPDX-License-Identifier: Apache-2.0

/// Represents the direction and optional fixed bit width of a port. `None`
/// means the port has no fixed range (a scalar net).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IO {
    Input(Option<usize>),
    Output(Option<usize>),
    InOut(Option<usize>),
    Ref(Option<usize>),
}

impl IO {
    /// Returns the fixed width of the port in bits, if it has one.
    pub fn width(&self) -> Option<usize> {
        match self {
            IO::Input(width) => *width,
            IO::Output(width) => *width,
            IO::InOut(width) => *width,
            IO::Ref(width) => *width,
        }
    }

    /// Returns the SystemVerilog direction keyword for this port.
    pub fn keyword(&self) -> &'static str {
        match self {
            IO::Input(_) => "input",
            IO::Output(_) => "output",
            IO::InOut(_) => "inout",
            IO::Ref(_) => "ref",
        }
    }

    /// Returns the range text used when declaring this port: `[width-1:0]`
    /// for a fixed width greater than one, empty otherwise.
    pub fn range(&self) -> String {
        match self.width() {
            Some(width) if width > 1 => format!("[{}:0]", width - 1),
            _ => String::new(),
        }
    }
}
