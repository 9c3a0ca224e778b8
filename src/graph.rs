//! Atom arena and bond adjacency.
//!
//! [`BondGraph`] owns every atom of a molecule as a node of an undirected
//! stable graph. A bond is an edge, so `b ∈ bonded(a) ⟺ a ∈ bonded(b)`
//! holds without bookkeeping. Node indices survive the removal of other
//! atoms, which lets branches and atom lists refer to atoms by index.

use log::trace;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::atom::Atom;
use crate::element::Element;
use crate::error::BondError;

#[derive(Debug, Clone, Default)]
pub struct BondGraph {
    graph: StableUnGraph<Atom, ()>,
}

impl BondGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, element: Element, id: usize) -> NodeIndex {
        self.graph.add_node(Atom::new(element, id))
    }

    /// Remove an atom along with every bond it holds.
    pub fn remove_atom(&mut self, node: NodeIndex) -> Option<Atom> {
        self.graph.remove_node(node)
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.graph.contains_node(node)
    }

    pub fn atom(&self, node: NodeIndex) -> &Atom {
        &self.graph[node]
    }

    pub fn atom_mut(&mut self, node: NodeIndex) -> &mut Atom {
        &mut self.graph[node]
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(node)
    }

    pub fn bonded_count(&self, node: NodeIndex) -> usize {
        self.graph.neighbors(node).count()
    }

    /// Bonds the atom can still accept.
    pub fn free_valence(&self, node: NodeIndex) -> usize {
        self.atom(node)
            .valence()
            .saturating_sub(self.bonded_count(node))
    }

    pub fn is_bonded(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Bond two distinct atoms that both have free valence.
    ///
    /// Nothing is modified when the bond is rejected.
    pub fn bond(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), BondError> {
        if a == b {
            return Err(BondError::SelfBond {
                id: self.atom(a).id,
            });
        }
        if self.is_bonded(a, b) {
            return Err(BondError::AlreadyBonded {
                a: self.atom(a).id,
                b: self.atom(b).id,
            });
        }
        for node in [a, b] {
            if self.free_valence(node) == 0 {
                let atom = self.atom(node);
                return Err(BondError::ValenceExceeded {
                    id: atom.id,
                    element: atom.element,
                });
            }
        }
        self.graph.add_edge(a, b, ());
        trace!("bonded atom {} to atom {}", self.atom(a).id, self.atom(b).id);
        Ok(())
    }

    pub fn delete_bond(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), BondError> {
        if a == b {
            return Err(BondError::SelfBond {
                id: self.atom(a).id,
            });
        }
        let edge = self
            .graph
            .find_edge(a, b)
            .ok_or_else(|| BondError::NotBonded {
                a: self.atom(a).id,
                b: self.atom(b).id,
            })?;
        self.graph.remove_edge(edge);
        trace!("unbonded atom {} from atom {}", self.atom(a).id, self.atom(b).id);
        Ok(())
    }

    /// Change the element of an atom in place, keeping its bonds.
    ///
    /// Returns the previous element and weight so the owner can adjust its
    /// tallies.
    pub fn mutate_element(
        &mut self,
        node: NodeIndex,
        element: Element,
    ) -> Result<(Element, f64), BondError> {
        let bonded = self.bonded_count(node);
        let atom = self.atom_mut(node);
        if bonded > element.valence() {
            return Err(BondError::MutationExceedsValence {
                id: atom.id,
                element,
                bonded,
            });
        }
        let previous = (atom.element, atom.weight());
        trace!("atom {} mutated {} -> {}", atom.id, atom.element, element);
        atom.element = element;
        Ok(previous)
    }
}
