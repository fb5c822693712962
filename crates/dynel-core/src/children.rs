//! Ordered key-indexed child storage, shared by array and object payloads.
//!
//! Array children carry synthetic keys (the reserved prefix character plus
//! the zero-based position at insertion time: `"~0"`, `"~1"`, ...); object
//! children carry caller-supplied keys. Insertion order is preserved and
//! duplicate keys are tolerated: every keyed read resolves to the most
//! recently inserted match.

use crate::element::Element;
use crate::error::{ElementError, Result};

/// Prefix character reserved for synthetic array keys.
///
/// Any key starting with this character is treated as array-like by the
/// renumbering pass after a removal. An object key that happens to start
/// with it gets renumbered too; known sharp edge, kept for compatibility.
pub const ARRAY_INDEX_PREFIX: char = '~';

/// Synthetic key for an array child inserted at `position`.
pub(crate) fn synthetic_key(position: usize) -> String {
    format!("{ARRAY_INDEX_PREFIX}{position}")
}

/// Ordered sequence of keyed child elements.
///
/// Keys and nodes are parallel sequences of equal length; both are updated
/// together by every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Children {
    keys: Vec<String>,
    nodes: Vec<Element>,
}

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    /// Array-style storage from a flat node list: each node receives a
    /// synthetic key matching its position.
    pub fn from_nodes(nodes: Vec<Element>) -> Self {
        let mut children = Self {
            keys: Vec::with_capacity(nodes.len()),
            nodes,
        };
        for (position, node) in children.nodes.iter_mut().enumerate() {
            let key = synthetic_key(position);
            node.set_key(key.clone());
            children.keys.push(key);
        }
        children
    }

    /// Object-style storage from parallel key and node lists. The lists may
    /// carry duplicate keys; keyed reads then resolve to the last occurrence.
    pub fn from_parts(keys: Vec<String>, mut nodes: Vec<Element>) -> Result<Self> {
        if keys.len() != nodes.len() {
            return Err(ElementError::SizeMismatch {
                keys: keys.len(),
                values: nodes.len(),
            });
        }
        for (node, key) in nodes.iter_mut().zip(&keys) {
            node.set_key(key.clone());
        }
        Ok(Self { keys, nodes })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Element] {
        &mut self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.nodes.get_mut(index)
    }

    /// Position of the most recently inserted entry with `key`, scanning
    /// from the end (last-match-wins when duplicates are present).
    pub fn find(&self, key: &str) -> Option<usize> {
        self.keys.iter().rposition(|existing| existing == key)
    }

    /// The entry under `key`, resolved by the last-match rule.
    pub fn get_by_key(&self, key: &str) -> Option<&Element> {
        self.find(key).and_then(|position| self.nodes.get(position))
    }

    /// Whether a live entry with `key` is present. Guards the key/node
    /// length invariant and reports divergence instead of scanning over it.
    pub fn exists(&self, key: &str) -> Result<bool> {
        if self.keys.len() != self.nodes.len() {
            return Err(ElementError::CorruptState {
                keys: self.keys.len(),
                children: self.nodes.len(),
            });
        }
        Ok(self.find(key).is_some())
    }

    /// Append `node` under `key`, stamping the key onto the child.
    pub fn push(&mut self, key: String, mut node: Element) {
        node.set_key(key.clone());
        self.keys.push(key);
        self.nodes.push(node);
    }

    /// Replace the entry at the existing (last-match) position for `key`,
    /// or append a new entry. The child's key attribute is stamped either
    /// way; replacement keeps the original insertion position.
    pub fn set(&mut self, key: &str, mut node: Element) {
        node.set_key(key.to_owned());
        match self.find(key) {
            Some(position) => self.nodes[position] = node,
            None => {
                self.keys.push(key.to_owned());
                self.nodes.push(node);
            }
        }
    }

    /// Mutable handle to the entry under `key`, inserting a Null child
    /// first when absent.
    pub fn entry(&mut self, key: &str) -> &mut Element {
        let position = match self.find(key) {
            Some(position) => position,
            None => {
                self.push(key.to_owned(), Element::default());
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[position]
    }

    /// Remove the key and node at `index`. Callers bounds-check first.
    pub fn remove_at(&mut self, index: usize) {
        self.keys.remove(index);
        self.nodes.remove(index);
    }

    /// Rewrite synthetic keys at positions >= `index` to match their new
    /// positions after a removal, keeping array-style indices contiguous.
    /// Keys without the reserved prefix are left untouched.
    pub fn renumber_from(&mut self, index: usize) {
        for position in index..self.keys.len() {
            if self.keys[position].starts_with(ARRAY_INDEX_PREFIX) {
                let key = synthetic_key(position);
                if self.keys[position] != key {
                    self.keys[position] = key;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.nodes.clear();
    }
}
