//! Chunked bump allocator for index nodes.
//!
//! Nodes live in fixed-capacity chunks that are reserved up front and never
//! reallocated, so a [`NodeId`] stays valid for the arena's lifetime. Nothing
//! is freed individually; the whole arena drops at once.

use std::collections::TryReserveError;

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Handle to a node, numbered in allocation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("out of memory reserving a chunk of {chunk_size} nodes")]
    Exhausted {
        chunk_size: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("node limit of {limit} reached")]
    TooManyNodes { limit: usize },
}

#[derive(Debug)]
pub struct NodeArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// A `chunk_size` of zero is treated as one.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunks: Vec::new(),
            chunk_size: chunk_size.max(1),
            len: 0,
        }
    }

    pub fn alloc(&mut self, value: T) -> Result<NodeId, ArenaError> {
        let id = u32::try_from(self.len)
            .map(NodeId)
            .map_err(|_| ArenaError::TooManyNodes { limit: self.len })?;

        let full = self
            .chunks
            .last()
            .is_none_or(|chunk| chunk.len() == self.chunk_size);
        if full {
            self.grow()?;
        }
        let Some(chunk) = self.chunks.last_mut() else {
            unreachable!("grow always leaves a chunk with room");
        };
        chunk.push(value);
        self.len += 1;
        Ok(id)
    }

    fn grow(&mut self) -> Result<(), ArenaError> {
        let exhausted = |source| ArenaError::Exhausted {
            chunk_size: self.chunk_size,
            source,
        };
        self.chunks.try_reserve(1).map_err(exhausted)?;
        let mut chunk = Vec::new();
        chunk.try_reserve_exact(self.chunk_size).map_err(exhausted)?;
        self.chunks.push(chunk);
        debug!(
            "arena grew to {} chunks of {} nodes",
            self.chunks.len(),
            self.chunk_size
        );
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> &T {
        let (chunk, slot) = self.locate(id);
        &self.chunks[chunk][slot]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut T {
        let (chunk, slot) = self.locate(id);
        &mut self.chunks[chunk][slot]
    }

    fn locate(&self, id: NodeId) -> (usize, usize) {
        (id.index() / self.chunk_size, id.index() % self.chunk_size)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.chunks.iter().flatten()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
