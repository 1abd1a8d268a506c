use ironpack_core::chunk_graph::ChunkGraph;
use ironpack_core::module_graph::ModuleGraph;
use ironpack_core::module_graph::NodeId;
use tracing::{debug, instrument};

use crate::assign::IdAssigner;
use crate::occurrence::OccurrenceScores;
use crate::options::OccurrenceIdsOptions;
use crate::ranking::sort_by_occurrence;

/// One stateless ranking pass over a snapshot of the modules needing an
/// identifier.
///
/// Builds the occurrence score tables, sorts the working set into a
/// deterministic total order, and hands the ordered sequence to the
/// [`IdAssigner`]. Score tables live only for the duration of the pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct OccurrenceModuleIds {
  options: OccurrenceIdsOptions,
}

impl OccurrenceModuleIds {
  pub fn new(options: OccurrenceIdsOptions) -> Self {
    OccurrenceModuleIds { options }
  }

  /// Ranks the working set, highest-ranked (cheapest identifier) first.
  ///
  /// A node id that is not a module node in `module_graph` is a caller
  /// precondition violation and surfaces as an error.
  #[instrument(level = "debug", skip_all, fields(modules = modules.len()))]
  pub fn rank(
    &self,
    modules: &[NodeId],
    module_graph: &ModuleGraph,
    chunk_graph: &ChunkGraph,
  ) -> anyhow::Result<Vec<NodeId>> {
    for module_id in modules {
      anyhow::ensure!(
        module_graph.get_module(module_id).is_some(),
        "node {module_id} in the working set is not a module in the module graph"
      );
    }

    let scores = OccurrenceScores::compute(
      modules,
      module_graph,
      chunk_graph,
      self.options.prioritize_initial,
    );
    let ordered = sort_by_occurrence(modules, &scores, module_graph, self.options.prioritize_initial);

    debug!(
      modules = ordered.len(),
      prioritize_initial = self.options.prioritize_initial,
      "occurrence ids: ranked modules"
    );

    Ok(ordered)
  }

  /// Ranks the working set and hands the order to `assigner`.
  pub fn assign_ids(
    &self,
    modules: &[NodeId],
    module_graph: &ModuleGraph,
    chunk_graph: &ChunkGraph,
    assigner: &mut dyn IdAssigner,
  ) -> anyhow::Result<()> {
    let ordered = self.rank(modules, module_graph, chunk_graph)?;
    assigner.assign_ids(&ordered);
    Ok(())
  }
}
