//! Incremental molecule construction.
//!
//! A [`Molecule`] is built up from branches of carbon atoms, bonds between
//! addressed atoms, element mutations, and added atoms or chains. Every bond
//! respects the valence capacity of both atoms. [`Molecule::lock`] fills the
//! remaining valences with hydrogen and makes the formula and weight
//! readable; [`Molecule::unlock`] strips the hydrogens again.

pub mod atom;
pub mod branch;
pub mod element;
pub mod error;
pub mod formula;
pub mod graph;
mod lock;
pub mod molecule;

pub use atom::{Atom, AtomRef};
pub use element::{Element, FORMULA_ORDER};
pub use error::{BondError, MoleculeError};
pub use molecule::{AtomSpec, BondSpec, LockState, Molecule};
