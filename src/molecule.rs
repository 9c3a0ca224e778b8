//! The molecule under construction and its mutation API.
//!
//! A [`Molecule`] owns its atoms (in a [`BondGraph`]), the insertion-ordered
//! atom list, the [`BranchIndex`] used for addressing, and a running
//! [`FormulaTally`]. Every mutation keeps the tally exact, so the formula
//! and weight never need to be recomputed.
//!
//! Mutations return `&mut Self` so calls can be chained:
//!
//! ```
//! use molbuild::{Element, Molecule};
//!
//! let mut ethanol = Molecule::new("ethanol");
//! ethanol
//!     .create_branches(&[2])?
//!     .create_bonds(&[(1, 1, 2, 1)])?
//!     .add_atoms(&[(2, 1, Element::O)])?
//!     .lock()?;
//! assert_eq!(ethanol.formula()?, "C2H6O");
//! # Ok::<(), molbuild::MoleculeError>(())
//! ```

use std::iter;

use log::{debug, trace};
use petgraph::stable_graph::NodeIndex;

use crate::atom::AtomRef;
use crate::branch::BranchIndex;
use crate::element::Element;
use crate::error::MoleculeError;
use crate::formula::FormulaTally;
use crate::graph::BondGraph;

/// Whether the molecule accepts mutations or exposes derived properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

/// `(position1, branch1, position2, branch2)` for [`Molecule::create_bonds`].
pub type BondSpec = (usize, usize, usize, usize);

/// `(position, branch, element)` for [`Molecule::mutate_atoms`] and
/// [`Molecule::add_atoms`].
pub type AtomSpec = (usize, usize, Element);

#[derive(Debug, Clone, Default)]
pub struct Molecule {
    name: String,
    pub(crate) graph: BondGraph,
    /// Every atom in insertion order.
    pub(crate) atoms: Vec<NodeIndex>,
    pub(crate) branches: BranchIndex,
    pub(crate) tally: FormulaTally,
    pub(crate) state: LockState,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.bond_count()
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Number of atoms of `element` currently in the molecule.
    pub fn count(&self, element: Element) -> usize {
        self.tally.count(element)
    }

    /// All atoms in insertion order.
    pub fn atoms(&self) -> impl Iterator<Item = AtomRef<'_>> + '_ {
        self.atoms.iter().map(|&n| AtomRef::new(&self.graph, n))
    }

    pub fn atom(&self, id: usize) -> Option<AtomRef<'_>> {
        self.atoms().find(|a| a.id() == id)
    }

    /// Backbone atoms of a branch, in position order.
    pub fn branch(&self, branch: usize) -> Option<impl Iterator<Item = AtomRef<'_>> + '_> {
        let graph = &self.graph;
        self.branches
            .get(branch)
            .map(|atoms| atoms.iter().map(move |&n| AtomRef::new(graph, n)))
    }

    pub fn atom_at(&self, position: usize, branch: usize) -> Result<AtomRef<'_>, MoleculeError> {
        let node = self.branches.resolve(branch, position)?;
        Ok(AtomRef::new(&self.graph, node))
    }

    pub(crate) fn ensure_unlocked(&self) -> Result<(), MoleculeError> {
        match self.state {
            LockState::Unlocked => Ok(()),
            LockState::Locked => Err(MoleculeError::LockedMolecule),
        }
    }

    /// Append a new, unbonded atom and tally it.
    fn push_atom(&mut self, element: Element) -> NodeIndex {
        let id = self.atoms.len() + 1;
        let node = self.graph.add_atom(element, id);
        self.atoms.push(node);
        self.tally.add(element);
        node
    }

    /// Remove the most recently pushed atom.
    fn pop_atom(&mut self) {
        if let Some(node) = self.atoms.pop() {
            if let Some(atom) = self.graph.remove_atom(node) {
                self.tally.remove(atom.element);
            }
        }
    }

    /// Create a new atom bonded to `parent`.
    ///
    /// If the bond is rejected the new atom is discarded again, leaving the
    /// molecule as it was.
    pub(crate) fn attach(
        &mut self,
        parent: NodeIndex,
        element: Element,
    ) -> Result<NodeIndex, MoleculeError> {
        let node = self.push_atom(element);
        if let Err(e) = self.graph.bond(parent, node) {
            self.pop_atom();
            return Err(e.into());
        }
        Ok(node)
    }

    /// Create one branch of unbonded carbons per count.
    pub fn create_branches(&mut self, counts: &[usize]) -> Result<&mut Self, MoleculeError> {
        self.ensure_unlocked()?;
        for &carbons in counts {
            let atoms = (0..carbons)
                .map(|_| self.push_atom(Element::C))
                .collect();
            let id = self.branches.push(atoms);
            trace!("created branch {id} with {carbons} carbons");
        }
        Ok(self)
    }

    /// Bond pairs of addressed atoms.
    ///
    /// Specs are applied in order. A failing spec aborts the call, but bonds
    /// created by earlier specs in the same call are kept. Bonding a pair
    /// that is already bonded fails with [`BondError::AlreadyBonded`].
    ///
    /// [`BondError::AlreadyBonded`]: crate::BondError::AlreadyBonded
    pub fn create_bonds(&mut self, specs: &[BondSpec]) -> Result<&mut Self, MoleculeError> {
        self.ensure_unlocked()?;
        for &(pos1, branch1, pos2, branch2) in specs {
            let a = self.branches.resolve(branch1, pos1)?;
            let b = self.branches.resolve(branch2, pos2)?;
            self.graph.bond(a, b)?;
        }
        Ok(self)
    }

    /// Change the element of addressed atoms, keeping their bonds.
    pub fn mutate_atoms(&mut self, specs: &[AtomSpec]) -> Result<&mut Self, MoleculeError> {
        self.ensure_unlocked()?;
        for &(pos, branch, element) in specs {
            let node = self.branches.resolve(branch, pos)?;
            let (previous, _) = self.graph.mutate_element(node, element)?;
            self.tally.replace(previous, element);
        }
        Ok(self)
    }

    /// Bond one new atom to each addressed atom.
    ///
    /// New atoms join the atom list but no branch. As with
    /// [`create_bonds`](Self::create_bonds), earlier specs stay applied when
    /// a later one fails.
    pub fn add_atoms(&mut self, specs: &[AtomSpec]) -> Result<&mut Self, MoleculeError> {
        self.ensure_unlocked()?;
        for &(pos, branch, element) in specs {
            let parent = self.branches.resolve(branch, pos)?;
            self.attach(parent, element)?;
        }
        Ok(self)
    }

    /// Grow a linear chain from an addressed atom.
    ///
    /// `element` is bonded to the addressed atom and each of `more` to the
    /// atom before it. Either the whole chain is added or, on
    /// [`MoleculeError::InvalidBond`], nothing is: atoms, bonds, tally and
    /// weight are restored before the error is returned.
    pub fn add_chain(
        &mut self,
        position: usize,
        branch: usize,
        element: Element,
        more: &[Element],
    ) -> Result<&mut Self, MoleculeError> {
        self.ensure_unlocked()?;
        let mut prev = self.branches.resolve(branch, position)?;
        let mut added = 0;
        for &next in iter::once(&element).chain(more) {
            match self.attach(prev, next) {
                Ok(node) => {
                    prev = node;
                    added += 1;
                }
                Err(e) => {
                    debug!("chain failed after {added} atoms, rolling back: {e}");
                    // removing an atom also deletes its bond
                    for _ in 0..added {
                        self.pop_atom();
                    }
                    return Err(e);
                }
            }
        }
        Ok(self)
    }
}
