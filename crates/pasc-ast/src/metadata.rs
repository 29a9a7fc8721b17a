//! Node metadata and side tables
//!
//! `Meta` is fixed at construction time and travels with the node.
//! Anything a later pass computes about a node goes into a `SideTable`
//! keyed by `NodeId` instead, so trees stay immutable and shareable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{NodeRef, Position};

/// Extra properties attached by the front-end when it builds a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Props {
    /// The node has no source text of its own (e.g. an empty-statement sentinel)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub synthesized: bool,

    /// Free-form note for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Position plus properties, carried by every node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pos: Position,
    #[serde(default)]
    pub props: Props,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(line: u32, row: u32) -> Self {
        Self {
            pos: Position::new(line, row),
            props: Props::default(),
        }
    }

    /// Metadata for nodes the front-end fills in itself
    pub fn synthesized() -> Self {
        Self {
            pos: Position::unknown(),
            props: Props {
                synthesized: true,
                note: None,
            },
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.props.note = Some(note.into());
        self
    }

    pub fn line(&self) -> Option<u32> {
        self.pos.line
    }

    pub fn row(&self) -> Option<u32> {
        self.pos.row
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Identity of a node: its pre-order index below the root it was numbered from.
///
/// Ids are only meaningful together with that root; the root itself is `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Annotations for nodes of one tree, kept outside the tree
#[derive(Debug, Clone, PartialEq)]
pub struct SideTable<T> {
    entries: BTreeMap<NodeId, T>,
}

impl<T> SideTable<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table by asking `annotate` about every node below `root`.
    /// Nodes for which it returns `None` get no entry.
    pub fn from_tree<'a, F>(root: NodeRef<'a>, mut annotate: F) -> Self
    where
        F: FnMut(NodeRef<'a>) -> Option<T>,
    {
        let mut table = Self::new();
        root.visit_indexed(|id, node| {
            if let Some(value) = annotate(node) {
                table.insert(id, value);
            }
        });
        table
    }

    pub fn insert(&mut self, id: NodeId, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.entries.remove(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pre-order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}

impl<T> Default for SideTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
