//! Branch addressing.
//!
//! A branch is an ordered run of backbone atoms created together. Callers
//! refer to atoms as `(position, branch)`, both 1-indexed, instead of
//! holding node indices. Branches only store indices into the molecule's
//! [`BondGraph`](crate::graph::BondGraph); they never own atoms.

use petgraph::stable_graph::NodeIndex;

use crate::error::MoleculeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchIndex {
    branches: Vec<Vec<NodeIndex>>,
}

impl BranchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a branch and return its id.
    pub fn push(&mut self, atoms: Vec<NodeIndex>) -> usize {
        self.branches.push(atoms);
        self.branches.len()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn get(&self, branch: usize) -> Option<&[NodeIndex]> {
        branch
            .checked_sub(1)
            .and_then(|i| self.branches.get(i))
            .map(Vec::as_slice)
    }

    pub fn resolve(&self, branch: usize, position: usize) -> Result<NodeIndex, MoleculeError> {
        let atoms = self
            .get(branch)
            .ok_or(MoleculeError::UnknownBranch { branch })?;
        position
            .checked_sub(1)
            .and_then(|i| atoms.get(i))
            .copied()
            .ok_or(MoleculeError::UnknownPosition { branch, position })
    }

    /// Keep only the atoms for which `keep` returns true.
    pub fn retain_atoms(&mut self, mut keep: impl FnMut(NodeIndex) -> bool) {
        for atoms in &mut self.branches {
            atoms.retain(|&n| keep(n));
        }
    }

    /// Drop empty branches so the survivors are numbered `1..K` again.
    ///
    /// Returns the number of branches dropped.
    pub fn compact(&mut self) -> usize {
        let before = self.branches.len();
        self.branches.retain(|atoms| !atoms.is_empty());
        before - self.branches.len()
    }
}
