use std::cmp::Ordering;

use ironpack_core::comparators::compare_modules_by_index_or_identifier;
use ironpack_core::module_graph::ModuleGraph;
use ironpack_core::module_graph::NodeId;

use crate::occurrence::OccurrenceScores;

/// The ranking comparator, applied tier by tier:
///
/// 1. initial occurrence score, descending (only when `prioritize_initial`)
/// 2. total occurrence score, descending
/// 3. structural index / identifier fallback, ascending
///
/// Tier 3 is strict for distinct modules, so this is a total order.
pub fn occurrence_comparator<'a>(
  scores: &'a OccurrenceScores,
  module_graph: &'a ModuleGraph,
  prioritize_initial: bool,
) -> impl Fn(&NodeId, &NodeId) -> Ordering + 'a {
  let fallback = compare_modules_by_index_or_identifier(module_graph);

  move |a, b| {
    if prioritize_initial {
      let by_initial = scores
        .initial_occurrences(b)
        .cmp(&scores.initial_occurrences(a));
      if by_initial != Ordering::Equal {
        return by_initial;
      }
    }

    scores
      .total_occurrences(b)
      .cmp(&scores.total_occurrences(a))
      .then_with(|| fallback(a, b))
  }
}

/// Sorts the working set into final rank order, highest rank first.
///
/// The comparator is total, so the result is independent of the working
/// set's original iteration order.
pub fn sort_by_occurrence(
  modules: &[NodeId],
  scores: &OccurrenceScores,
  module_graph: &ModuleGraph,
  prioritize_initial: bool,
) -> Vec<NodeId> {
  let compare = occurrence_comparator(scores, module_graph, prioritize_initial);
  let mut ordered = modules.to_vec();
  ordered.sort_unstable_by(|a, b| compare(a, b));
  ordered
}
