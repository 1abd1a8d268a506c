use std::collections::HashMap;
use std::collections::HashSet;

use crate::module_graph::NodeId;
use crate::types::Chunk;

pub type ChunkId = usize;

/// Chunk membership and entry designation for the modules of one build.
///
/// The chunk graph is a read-only collaborator during identifier
/// assignment: the ranking pass queries it but never mutates it.
#[derive(Clone, Debug, Default)]
pub struct ChunkGraph {
  chunks: Vec<Chunk>,
  chunk_modules: Vec<HashSet<NodeId>>,
  chunk_entry_modules: Vec<Option<NodeId>>,
  module_chunks: HashMap<NodeId, Vec<ChunkId>>,
}

impl ChunkGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkId {
    let chunk_id = self.chunks.len();
    self.chunks.push(chunk);
    self.chunk_modules.push(HashSet::new());
    self.chunk_entry_modules.push(None);
    chunk_id
  }

  pub fn get_chunk(&self, chunk_id: &ChunkId) -> Option<&Chunk> {
    self.chunks.get(*chunk_id)
  }

  pub fn connect_chunk_and_module(&mut self, chunk_id: &ChunkId, module_id: &NodeId) {
    if self.chunk_modules[*chunk_id].insert(*module_id) {
      self.module_chunks.entry(*module_id).or_default().push(*chunk_id);
    }
  }

  /// Designates `module_id` as the chunk's entry module, implicitly adding
  /// it to the chunk.
  pub fn set_entry_module(&mut self, chunk_id: &ChunkId, module_id: &NodeId) {
    self.connect_chunk_and_module(chunk_id, module_id);
    self.chunk_entry_modules[*chunk_id] = Some(*module_id);
  }

  /// Chunks containing `module_id`, in the order the module was added to
  /// them. A module in no chunks yields an empty slice.
  pub fn module_chunks(&self, module_id: &NodeId) -> &[ChunkId] {
    self
      .module_chunks
      .get(module_id)
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  pub fn number_of_module_chunks(&self, module_id: &NodeId) -> usize {
    self.module_chunks(module_id).len()
  }

  pub fn is_entry_module_in_chunk(&self, module_id: &NodeId, chunk_id: &ChunkId) -> bool {
    self.chunk_entry_modules[*chunk_id] == Some(*module_id)
  }
}
