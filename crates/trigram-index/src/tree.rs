//! Unbalanced binary search tree of triplet counters.
//!
//! Nodes are ordered by fingerprint first; the full key is only compared when
//! two fingerprints are equal. Descent and traversal are iterative, so a
//! degenerate (list-shaped) tree costs time but never stack depth.

use std::cmp::Ordering;

use tracing::debug;
use trigram_types::Triplet;

use crate::arena::{ArenaError, NodeArena, NodeId};

/// One distinct triplet and the number of times it was seen.
#[derive(Clone, Debug)]
pub struct TripletRecord<'t> {
    key: Triplet<'t>,
    fingerprint: u32,
    count: u64,
    first_seen: u32,
}

impl<'t> TripletRecord<'t> {
    pub fn key(&self) -> Triplet<'t> {
        self.key
    }

    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Insertion order of the record within its index, starting at zero.
    pub fn first_seen(&self) -> u32 {
        self.first_seen
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

#[derive(Debug)]
struct Node<'t> {
    record: TripletRecord<'t>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Clone, Copy)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

#[derive(Debug)]
pub struct TripletIndex<'t> {
    nodes: NodeArena<Node<'t>>,
    root: Option<NodeId>,
    collisions: u64,
    max_depth: usize,
}

impl<'t> TripletIndex<'t> {
    pub fn new() -> Self {
        Self::with_chunk_size(crate::arena::DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            nodes: NodeArena::with_chunk_size(chunk_size),
            root: None,
            collisions: 0,
            max_depth: 0,
        }
    }

    /// Return the record for `key`, creating it with a zero count if absent.
    ///
    /// `fingerprint` must be the fingerprint of `key` under a fixed seed; the
    /// tree is only consistent if the same key always arrives with the same
    /// fingerprint.
    pub fn find_or_insert(
        &mut self,
        key: Triplet<'t>,
        fingerprint: u32,
    ) -> Result<&mut TripletRecord<'t>, ArenaError> {
        let mut cursor = self.root;
        let mut link = Link::Root;
        let mut depth = 0usize;
        let mut collided = false;

        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            let by_fingerprint = fingerprint.cmp(&node.record.fingerprint);
            if by_fingerprint == Ordering::Equal && key != node.record.key {
                collided = true;
            }
            match by_fingerprint.then_with(|| key.cmp(&node.record.key)) {
                Ordering::Less => {
                    link = Link::Left(id);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(id);
                    cursor = node.right;
                }
                Ordering::Equal => return Ok(&mut self.nodes.get_mut(id).record),
            }
            depth += 1;
        }

        let first_seen = self.nodes.len() as u32;
        let id = self.nodes.alloc(Node {
            record: TripletRecord {
                key,
                fingerprint,
                count: 0,
                first_seen,
            },
            left: None,
            right: None,
        })?;
        match link {
            Link::Root => self.root = Some(id),
            Link::Left(parent) => self.nodes.get_mut(parent).left = Some(id),
            Link::Right(parent) => self.nodes.get_mut(parent).right = Some(id),
        }

        self.max_depth = self.max_depth.max(depth);
        if collided {
            self.collisions += 1;
            debug!("fingerprint {fingerprint:#010x} shared by a new key: {key}");
        }
        Ok(&mut self.nodes.get_mut(id).record)
    }

    /// Look up `key` without inserting.
    pub fn get(&self, key: &Triplet<'t>, fingerprint: u32) -> Option<&TripletRecord<'t>> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            match fingerprint
                .cmp(&node.record.fingerprint)
                .then_with(|| key.cmp(&node.record.key))
            {
                Ordering::Less => cursor = node.left,
                Ordering::Greater => cursor = node.right,
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Pre-order walk over every record.
    pub fn iter(&self) -> Iter<'_, 't> {
        Iter {
            index: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Number of distinct triplets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn chunk_count(&self) -> usize {
        self.nodes.chunk_count()
    }

    /// Distinct keys inserted under a fingerprint another key already held.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Longest root-to-node path seen on insert (root is depth 0).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for TripletIndex<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, 't> {
    index: &'a TripletIndex<'t>,
    stack: Vec<NodeId>,
}

impl<'a, 't> Iterator for Iter<'a, 't> {
    type Item = &'a TripletRecord<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.index.nodes.get(id);
        // Right first so the left subtree is visited next.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.record)
    }
}
