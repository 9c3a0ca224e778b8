//! The fixed element table.
//!
//! Only the eleven elements a [`Molecule`](crate::Molecule) can be built from
//! are represented. Each carries a constant atomic weight and a single
//! valence capacity; there are no alternative valence states.

use std::fmt;
use std::str::FromStr;

use crate::error::MoleculeError;

/// Supported elements, tagged with their atomic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Mg = 12,
    P = 15,
    S = 16,
    Cl = 17,
    Br = 35,
}

/// Order in which elements appear in a rendered formula.
///
/// Carbon, hydrogen and oxygen lead; the rest follow this fixed table
/// rather than alphabetical order.
pub const FORMULA_ORDER: [Element; 11] = [
    Element::C,
    Element::H,
    Element::O,
    Element::B,
    Element::N,
    Element::F,
    Element::Mg,
    Element::P,
    Element::S,
    Element::Cl,
    Element::Br,
];

impl Element {
    pub fn from_symbol(s: &str) -> Option<Element> {
        FORMULA_ORDER.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Mg => "Mg",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
        }
    }

    pub fn atomic_weight(self) -> f64 {
        match self {
            Element::H => 1.0,
            Element::B => 10.8,
            Element::C => 12.0,
            Element::N => 14.0,
            Element::O => 16.0,
            Element::F => 19.0,
            Element::Mg => 24.3,
            Element::P => 31.0,
            Element::S => 32.1,
            Element::Cl => 35.5,
            Element::Br => 80.0,
        }
    }

    /// Maximum number of bonds an atom of this element may hold.
    pub fn valence(self) -> usize {
        match self {
            Element::H | Element::F | Element::Cl | Element::Br => 1,
            Element::O | Element::Mg | Element::S => 2,
            Element::B | Element::N | Element::P => 3,
            Element::C => 4,
        }
    }

    /// Position of this element in [`FORMULA_ORDER`].
    pub fn formula_rank(self) -> usize {
        match self {
            Element::C => 0,
            Element::H => 1,
            Element::O => 2,
            Element::B => 3,
            Element::N => 4,
            Element::F => 5,
            Element::Mg => 6,
            Element::P => 7,
            Element::S => 8,
            Element::Cl => 9,
            Element::Br => 10,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = MoleculeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_symbol(s).ok_or_else(|| MoleculeError::UnknownSymbol(s.to_string()))
    }
}
