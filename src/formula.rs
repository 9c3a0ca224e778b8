//! Formula tally and molecular weight.
//!
//! [`FormulaTally`] is updated one atom at a time as the molecule changes;
//! nothing is recomputed from the atom list. The weight is derived from the
//! integer counts in [`FORMULA_ORDER`], so equal counts always give a
//! bit-identical weight. [`FormulaTally::render`] writes the empirical
//! formula in the same order.

use std::fmt::Write;

use crate::element::{Element, FORMULA_ORDER};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaTally {
    counts: [usize; 11],
}

impl FormulaTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) {
        self.counts[element.formula_rank()] += 1;
    }

    pub fn remove(&mut self, element: Element) {
        let slot = &mut self.counts[element.formula_rank()];
        debug_assert!(*slot > 0, "removing {element} from an empty tally");
        *slot = slot.saturating_sub(1);
    }

    /// Account for an atom changing from `from` to `to`.
    pub fn replace(&mut self, from: Element, to: Element) {
        if from != to {
            self.remove(from);
            self.add(to);
        }
    }

    pub fn count(&self, element: Element) -> usize {
        self.counts[element.formula_rank()]
    }

    pub fn weight(&self) -> f64 {
        self.iter()
            .map(|(e, n)| e.atomic_weight() * n as f64)
            .sum()
    }

    /// Element counts in formula order, skipping absent elements.
    pub fn iter(&self) -> impl Iterator<Item = (Element, usize)> + '_ {
        FORMULA_ORDER
            .iter()
            .map(|&e| (e, self.count(e)))
            .filter(|&(_, n)| n > 0)
    }

    /// Empirical formula such as `C2H6O`.
    ///
    /// Counts of one are omitted, as are elements with no atoms.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (element, count) in self.iter() {
            append_element(&mut result, element.symbol(), count);
        }
        result
    }
}

fn append_element(buf: &mut String, symbol: &str, count: usize) {
    buf.push_str(symbol);
    if count > 1 {
        write!(buf, "{count}").unwrap();
    }
}
