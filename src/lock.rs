//! Lock/unlock state machine.
//!
//! Locking saturates every open valence with a new hydrogen and makes the
//! formula and weight readable. Unlocking removes every hydrogen, renumbers
//! the remaining atoms `1..N`, and drops branches left empty.

use log::debug;

use crate::element::Element;
use crate::error::MoleculeError;
use crate::molecule::{LockState, Molecule};

impl Molecule {
    /// Saturate the molecule with hydrogens and freeze it.
    ///
    /// Only atoms present when `lock` starts are saturated; the hydrogens it
    /// adds are already full.
    pub fn lock(&mut self) -> Result<&mut Self, MoleculeError> {
        if self.state == LockState::Locked {
            return Err(MoleculeError::LockedMolecule);
        }

        let snapshot = self.atoms.clone();
        let mut added = 0;
        for node in snapshot {
            for _ in 0..self.graph.free_valence(node) {
                self.attach(node, Element::H)?;
                added += 1;
            }
        }

        self.state = LockState::Locked;
        debug!(
            "locked {:?}: added {added} hydrogens, {} atoms",
            self.name(),
            self.atoms.len()
        );
        Ok(self)
    }

    /// Strip every hydrogen and reopen the molecule for editing.
    ///
    /// Manually added hydrogens are removed too. Fails with
    /// [`MoleculeError::EmptyMolecule`] when no branch keeps any atom; the
    /// molecule is left unlocked either way.
    pub fn unlock(&mut self) -> Result<&mut Self, MoleculeError> {
        if self.state == LockState::Unlocked {
            return Err(MoleculeError::UnlockedMolecule);
        }

        let (hydrogens, kept): (Vec<_>, Vec<_>) = self
            .atoms
            .iter()
            .copied()
            .partition(|&n| self.graph.atom(n).element == Element::H);
        for &node in &hydrogens {
            if let Some(atom) = self.graph.remove_atom(node) {
                self.tally.remove(atom.element);
            }
        }
        self.atoms = kept;

        let graph = &self.graph;
        self.branches.retain_atoms(|n| graph.contains(n));

        for (i, &node) in self.atoms.iter().enumerate() {
            self.graph.atom_mut(node).id = i + 1;
        }

        let dropped = self.branches.compact();
        self.state = LockState::Unlocked;
        debug!(
            "unlocked {:?}: removed {} hydrogens, dropped {dropped} branches",
            self.name(),
            hydrogens.len()
        );

        if self.branches.is_empty() {
            return Err(MoleculeError::EmptyMolecule);
        }
        Ok(self)
    }

    /// Empirical formula, e.g. `C2H6O`. Only available while locked.
    pub fn formula(&self) -> Result<String, MoleculeError> {
        self.ensure_locked()?;
        Ok(self.tally.render())
    }

    /// Sum of atomic weights. Only available while locked.
    pub fn molecular_weight(&self) -> Result<f64, MoleculeError> {
        self.ensure_locked()?;
        Ok(self.tally.weight())
    }

    fn ensure_locked(&self) -> Result<(), MoleculeError> {
        match self.state {
            LockState::Locked => Ok(()),
            LockState::Unlocked => Err(MoleculeError::UnlockedMolecule),
        }
    }
}
