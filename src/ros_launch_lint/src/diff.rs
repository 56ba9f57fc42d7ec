//! Structural comparison of component trees
//!
//! Used to check a statically inferred tree against one observed from a
//! running system. Entries match on `name` and `path`; matched entries must
//! expose the same ports. Both directions are checked by membership only, so
//! duplicated entries on one side are not reported as missing. An entry is
//! a port mismatch only when none of its counterparts has the same ports;
//! each mismatched pair is reported once, whichever side found it.

use crate::tree::{ComponentTree, NodeDesc};
use std::collections::HashSet;
use std::fmt;

/// Which tree an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// An entry with no `name` + `path` counterpart in the other tree
#[derive(Debug, Clone, PartialEq)]
pub struct MissingNode {
    /// Tree the entry is present in
    pub side: Side,
    pub name: String,
    pub path: String,
}

/// Matched entries whose port sets differ
#[derive(Debug, Clone, PartialEq)]
pub struct PortMismatch {
    pub left: NodeDesc,
    pub right: NodeDesc,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeDiff {
    pub missing: Vec<MissingNode>,
    pub port_mismatches: Vec<PortMismatch>,
}

impl TreeDiff {
    /// Every entry of both trees found a counterpart
    pub fn matched(&self) -> bool {
        self.missing.is_empty()
    }

    /// Matched, and every matched pair has the same ports
    pub fn is_clean(&self) -> bool {
        self.matched() && self.port_mismatches.is_empty()
    }

    /// Human-readable report; empty when the trees are equal
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TreeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mismatch in &self.port_mismatches {
            writeln!(f, "Topic mismatch for node {}", mismatch.left.name)?;
            writeln!(f, "{}", mismatch.left)?;
            writeln!(f, "{}", mismatch.right)?;
        }

        for missing in &self.missing {
            writeln!(
                f,
                "Mismatch due to missing node {}{}: only in {} tree",
                missing.path, missing.name, missing.side
            )?;
        }

        Ok(())
    }
}

/// Every element of `a` has an equal element in `b` and vice versa
fn is_equal<T, F>(a: &[T], b: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    a.iter().all(|x| b.iter().any(|y| eq(x, y))) && b.iter().all(|y| a.iter().any(|x| eq(y, x)))
}

fn same_entry(a: &NodeDesc, b: &NodeDesc) -> bool {
    a.name == b.name && a.path == b.path
}

/// Entries of `from` without a counterpart in `other`
fn missing_from<'a>(
    from: &'a [&'a NodeDesc],
    other: &'a [&'a NodeDesc],
    side: Side,
) -> impl Iterator<Item = MissingNode> + 'a {
    from.iter()
        .filter(move |x| !other.iter().any(|y| same_entry(x, y)))
        .map(move |x| MissingNode {
            side,
            name: x.name.clone(),
            path: x.path.clone(),
        })
}

/// Entries of `from` that have counterparts in `other`, none of them with
/// the same ports. Yields `(from index, index of the first counterpart)`.
fn unmatched_ports(from: &[&NodeDesc], other: &[&NodeDesc]) -> Vec<(usize, usize)> {
    let mut unmatched = Vec::new();
    for (i, x) in from.iter().enumerate() {
        let mut counterparts = other
            .iter()
            .enumerate()
            .filter(|(_, y)| same_entry(x, y))
            .peekable();

        let Some(&(first, _)) = counterparts.peek() else {
            continue;
        };

        if !counterparts.any(|(_, y)| is_equal(&x.ports, &y.ports, |p, q| p == q)) {
            unmatched.push((i, first));
        }
    }
    unmatched
}

/// Compare two trees entry by entry
pub fn diff_trees(a: &ComponentTree, b: &ComponentTree) -> TreeDiff {
    let left: Vec<&NodeDesc> = a.iter().collect();
    let right: Vec<&NodeDesc> = b.iter().collect();

    let mut result = TreeDiff::default();

    // (left index, right index) of each mismatched pair, reported once
    let mut pairs = HashSet::new();
    for (i, j) in unmatched_ports(&left, &right) {
        if pairs.insert((i, j)) {
            result.port_mismatches.push(PortMismatch {
                left: left[i].clone(),
                right: right[j].clone(),
            });
        }
    }
    for (j, i) in unmatched_ports(&right, &left) {
        if pairs.insert((i, j)) {
            result.port_mismatches.push(PortMismatch {
                left: left[i].clone(),
                right: right[j].clone(),
            });
        }
    }

    result
        .missing
        .extend(missing_from(&left, &right, Side::Left));
    result
        .missing
        .extend(missing_from(&right, &left, Side::Right));

    log::debug!(
        "tree diff: {} missing entries, {} port mismatches",
        result.missing.len(),
        result.port_mismatches.len()
    );

    result
}

/// Compare two trees, returning whether every entry matched and a report
pub fn diff(a: &ComponentTree, b: &ComponentTree) -> (bool, String) {
    let result = diff_trees(a, b);
    (result.matched(), result.report())
}
