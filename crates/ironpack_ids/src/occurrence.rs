use ironpack_core::chunk_graph::ChunkGraph;
use ironpack_core::module_graph::ModuleGraph;
use ironpack_core::module_graph::NodeId;

/// Per-module occurrence scores for one ranking pass.
///
/// Tables are plain vectors indexed by the graph's dense node ids, so the
/// hot scoring loops never touch a hash map. Scores are a pure function of
/// the graph snapshot; computing them twice over an unchanged graph yields
/// identical values.
#[derive(Debug)]
pub struct OccurrenceScores {
  initial_chunk_counts: Vec<u32>,
  entry_counts: Vec<u32>,
  initial_occurrences: Vec<u32>,
  total_occurrences: Vec<u32>,
}

impl OccurrenceScores {
  /// Computes scores for the modules in `modules` (the working set of one
  /// invocation). `initial_occurrences` is only populated when
  /// `prioritize_initial` is set.
  pub fn compute(
    modules: &[NodeId],
    module_graph: &ModuleGraph,
    chunk_graph: &ChunkGraph,
    prioritize_initial: bool,
  ) -> Self {
    let node_count = module_graph.node_count();
    let mut scores = OccurrenceScores {
      initial_chunk_counts: vec![0; node_count],
      entry_counts: vec![0; node_count],
      initial_occurrences: vec![0; node_count],
      total_occurrences: vec![0; node_count],
    };

    // Cached primitives, one chunk-graph walk per module.
    for module_id in modules {
      let mut initial = 0;
      let mut entry = 0;
      for chunk_id in chunk_graph.module_chunks(module_id) {
        if chunk_graph
          .get_chunk(chunk_id)
          .is_some_and(|chunk| chunk.can_be_initial)
        {
          initial += 1;
        }
        if chunk_graph.is_entry_module_in_chunk(module_id, chunk_id) {
          entry += 1;
        }
      }
      scores.initial_chunk_counts[*module_id] = initial;
      scores.entry_counts[*module_id] = entry;
    }

    if prioritize_initial {
      for module_id in modules {
        let incoming: u32 = module_graph
          .incoming_connections(module_id)
          .iter()
          .filter_map(|connection| connection.origin_module)
          .map(|origin| scores.initial_chunk_counts[origin])
          .sum();

        scores.initial_occurrences[*module_id] =
          incoming + scores.initial_chunk_counts[*module_id] + scores.entry_counts[*module_id];
      }
    }

    for module_id in modules {
      let mut incoming = 0u32;
      for connection in module_graph.incoming_connections(module_id) {
        let Some(origin) = connection.origin_module else {
          continue;
        };
        let weight = connection.dependency.id_occurrence_weight;
        if weight == 0 {
          continue;
        }
        incoming += weight * chunk_graph.number_of_module_chunks(&origin) as u32;
      }

      scores.total_occurrences[*module_id] = incoming
        + chunk_graph.number_of_module_chunks(module_id) as u32
        + scores.entry_counts[*module_id];
    }

    scores
  }

  pub fn initial_occurrences(&self, module_id: &NodeId) -> u32 {
    self.initial_occurrences[*module_id]
  }

  pub fn total_occurrences(&self, module_id: &NodeId) -> u32 {
    self.total_occurrences[*module_id]
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use ironpack_core::types::Chunk;
  use ironpack_core::types::Dependency;
  use ironpack_core::types::Module;
  use pretty_assertions::assert_eq;

  use super::*;

  fn add_module(graph: &mut ModuleGraph, id: &str) -> NodeId {
    graph.add_module(Arc::new(Module::new(id, format!("{}|identifier", id))))
  }

  #[test]
  fn isolated_module_scores_its_entry_count() {
    let mut module_graph = ModuleGraph::new();
    let mut chunk_graph = ChunkGraph::new();
    let lonely = add_module(&mut module_graph, "lonely");
    let entry = add_module(&mut module_graph, "entry");

    let main = chunk_graph.add_chunk(Chunk::new("main", true));
    chunk_graph.set_entry_module(&main, &entry);

    let modules = vec![lonely, entry];
    let scores = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, true);

    assert_eq!(scores.total_occurrences(&lonely), 0);
    assert_eq!(scores.initial_occurrences(&lonely), 0);
    // entry contributes chunk membership (1) + entry designation (1).
    assert_eq!(scores.total_occurrences(&entry), 2);
    assert_eq!(scores.initial_occurrences(&entry), 2);
  }

  #[test]
  fn originless_connections_contribute_nothing() {
    let mut module_graph = ModuleGraph::new();
    let chunk_graph = ChunkGraph::new();
    let target = add_module(&mut module_graph, "target");

    let entry_dependency = module_graph.add_entry_dependency(Dependency::entry("entry"));
    module_graph.add_edge(&entry_dependency, &target);

    let modules = vec![target];
    let scores = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, true);

    assert_eq!(scores.total_occurrences(&target), 0);
    assert_eq!(scores.initial_occurrences(&target), 0);
  }

  #[test]
  fn zero_weight_connections_are_skipped() {
    // Two graphs identical except for the zero-weight connection's origin
    // chunk count must produce the same total score for the target.
    let build = |origin_chunks: usize| {
      let mut module_graph = ModuleGraph::new();
      let mut chunk_graph = ChunkGraph::new();
      let origin = add_module(&mut module_graph, "origin");
      let target = add_module(&mut module_graph, "target");
      module_graph.connect(&origin, Dependency::new("origin->target", 0), &target);

      for i in 0..origin_chunks {
        let chunk = chunk_graph.add_chunk(Chunk::new(format!("chunk-{}", i), false));
        chunk_graph.connect_chunk_and_module(&chunk, &origin);
      }

      let modules = vec![origin, target];
      let scores = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, false);
      scores.total_occurrences(&target)
    };

    assert_eq!(build(1), build(5));
    assert_eq!(build(0), 0);
  }

  #[test]
  fn weights_multiply_origin_chunk_counts() {
    let mut module_graph = ModuleGraph::new();
    let mut chunk_graph = ChunkGraph::new();
    let origin = add_module(&mut module_graph, "origin");
    let target = add_module(&mut module_graph, "target");
    module_graph.connect(&origin, Dependency::new("origin->target", 3), &target);

    let a = chunk_graph.add_chunk(Chunk::new("a", true));
    let b = chunk_graph.add_chunk(Chunk::new("b", false));
    chunk_graph.connect_chunk_and_module(&a, &origin);
    chunk_graph.connect_chunk_and_module(&b, &origin);
    chunk_graph.connect_chunk_and_module(&a, &target);

    let modules = vec![origin, target];
    let scores = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, true);

    // 3 occurrences x 2 origin chunks + 1 own chunk + 0 entries.
    assert_eq!(scores.total_occurrences(&target), 7);
    // Initial score only counts the origin's initial chunks (1) + own (1).
    assert_eq!(scores.initial_occurrences(&target), 2);
  }

  #[test]
  fn recomputation_is_deterministic() {
    let mut module_graph = ModuleGraph::new();
    let mut chunk_graph = ChunkGraph::new();
    let a = add_module(&mut module_graph, "a");
    let b = add_module(&mut module_graph, "b");
    let c = add_module(&mut module_graph, "c");
    module_graph.connect(&a, Dependency::new("a->b", 1), &b);
    module_graph.connect(&b, Dependency::new("b->c", 2), &c);
    module_graph.connect(&a, Dependency::new("a->c", 1), &c);

    let main = chunk_graph.add_chunk(Chunk::new("main", true));
    for module_id in [a, b, c] {
      chunk_graph.connect_chunk_and_module(&main, &module_id);
    }
    chunk_graph.set_entry_module(&main, &a);

    let modules = vec![a, b, c];
    let first = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, true);
    let second = OccurrenceScores::compute(&modules, &module_graph, &chunk_graph, true);

    for module_id in &modules {
      assert_eq!(
        first.total_occurrences(module_id),
        second.total_occurrences(module_id)
      );
      assert_eq!(
        first.initial_occurrences(module_id),
        second.initial_occurrences(module_id)
      );
    }
  }
}
