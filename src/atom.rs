use std::fmt;

use petgraph::stable_graph::NodeIndex;

use crate::element::Element;
use crate::graph::BondGraph;

/// Atom node payload.
///
/// `Atom` holds only the element and the molecule-local id. Weight and
/// valence capacity are read from the element table, and bonds live in the
/// [`BondGraph`] as edges, so the bonded relation is symmetric by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    /// Positive id, unique within its molecule.
    pub id: usize,
}

impl Atom {
    pub fn new(element: Element, id: usize) -> Self {
        Self { element, id }
    }

    pub fn weight(&self) -> f64 {
        self.element.atomic_weight()
    }

    pub fn valence(&self) -> usize {
        self.element.valence()
    }
}

/// Borrowed view of an atom together with the graph it lives in.
///
/// Renders as `Atom(C.2: C1,C3,O4,H,H)`: the element and id, then the
/// bonded partners ordered by formula order with hydrogens last. Hydrogen
/// partners print without an id.
#[derive(Clone, Copy)]
pub struct AtomRef<'a> {
    graph: &'a BondGraph,
    node: NodeIndex,
}

impl<'a> AtomRef<'a> {
    pub(crate) fn new(graph: &'a BondGraph, node: NodeIndex) -> Self {
        Self { graph, node }
    }

    pub fn node(&self) -> NodeIndex {
        self.node
    }

    pub fn atom(&self) -> &'a Atom {
        self.graph.atom(self.node)
    }

    pub fn id(&self) -> usize {
        self.atom().id
    }

    pub fn element(&self) -> Element {
        self.atom().element
    }

    pub fn weight(&self) -> f64 {
        self.atom().weight()
    }

    pub fn valence(&self) -> usize {
        self.atom().valence()
    }

    pub fn bonded_count(&self) -> usize {
        self.graph.bonded_count(self.node)
    }

    /// Ids of the bonded partners, ascending.
    pub fn bonded_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self
            .graph
            .neighbors(self.node)
            .map(|n| self.graph.atom(n).id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn bonded(&self) -> impl Iterator<Item = AtomRef<'a>> + 'a {
        let graph = self.graph;
        graph.neighbors(self.node).map(move |n| AtomRef::new(graph, n))
    }
}

fn display_key(atom: &Atom) -> (bool, usize, usize) {
    (
        atom.element == Element::H,
        atom.element.formula_rank(),
        atom.id,
    )
}

impl fmt::Display for AtomRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atom = self.atom();
        write!(f, "Atom({}.{}", atom.element, atom.id)?;

        let mut partners: Vec<&Atom> = self
            .graph
            .neighbors(self.node)
            .map(|n| self.graph.atom(n))
            .collect();
        if partners.is_empty() {
            return write!(f, ")");
        }
        partners.sort_by_key(|a| display_key(a));

        write!(f, ": ")?;
        for (i, p) in partners.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if p.element == Element::H {
                write!(f, "H")?;
            } else {
                write!(f, "{}{}", p.element, p.id)?;
            }
        }
        write!(f, ")")
    }
}

impl fmt::Debug for AtomRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomRef")
            .field("atom", self.atom())
            .field("bonded", &self.bonded_ids())
            .finish()
    }
}
