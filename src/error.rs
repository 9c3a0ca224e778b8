//! Error types for molecule construction.

use thiserror::Error;

use crate::element::Element;

/// Why a bond, unbond or element change was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BondError {
    /// An atom cannot bond to itself.
    #[error("atom {id} cannot bond to itself")]
    SelfBond { id: usize },

    /// The atom already holds as many bonds as its element allows.
    #[error("atom {id} ({element}) has no free valence")]
    ValenceExceeded { id: usize, element: Element },

    /// The atoms are already bonded to each other.
    #[error("atoms {a} and {b} are already bonded")]
    AlreadyBonded { a: usize, b: usize },

    /// `delete_bond` was called on atoms that are not bonded.
    #[error("atoms {a} and {b} are not bonded")]
    NotBonded { a: usize, b: usize },

    /// The atom holds more bonds than the new element can carry.
    #[error("atom {id} has {bonded} bonds, more than {element} can hold")]
    MutationExceedsValence {
        id: usize,
        element: Element,
        bonded: usize,
    },
}

/// Errors returned by [`Molecule`](crate::Molecule) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoleculeError {
    /// A locked-only accessor, or `unlock`, was called on an unlocked molecule.
    #[error("molecule is not locked")]
    UnlockedMolecule,

    /// A mutation, or `lock`, was attempted on a locked molecule.
    #[error("molecule is locked")]
    LockedMolecule,

    /// A bond operation violated valence capacity or bond preconditions.
    #[error("invalid bond: {0}")]
    InvalidBond(#[from] BondError),

    /// Unlocking removed every atom from every branch.
    #[error("molecule has no branches left")]
    EmptyMolecule,

    /// The branch id does not exist.
    #[error("no branch {branch}")]
    UnknownBranch { branch: usize },

    /// The position is outside the branch.
    #[error("no atom at position {position} of branch {branch}")]
    UnknownPosition { branch: usize, position: usize },

    /// The symbol is not in the element table.
    #[error("unknown element symbol {0:?}")]
    UnknownSymbol(String),
}
