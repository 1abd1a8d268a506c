use std::cmp::Ordering;

use crate::module_graph::ModuleGraph;
use crate::module_graph::NodeId;

/// Strict deterministic fallback order over modules.
///
/// Modules carrying a structural index sort by it and come before modules
/// without one; the rest sort by identifier string. The node id is the last
/// resort, so two distinct modules never compare equal. Because this is a
/// lexicographic comparison on (index presence, index-or-identifier, node
/// id), it is transitive, and any sort built on top of it is a valid total
/// order.
pub fn compare_modules_by_index_or_identifier(
  module_graph: &ModuleGraph,
) -> impl Fn(&NodeId, &NodeId) -> Ordering + '_ {
  move |a, b| {
    match (module_graph.module_index(a), module_graph.module_index(b)) {
      (Some(a_index), Some(b_index)) => a_index.cmp(&b_index).then_with(|| a.cmp(b)),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => {
        let a_identifier = module_graph.get_module(a).map(|m| m.identifier.as_str());
        let b_identifier = module_graph.get_module(b).map(|m| m.identifier.as_str());
        a_identifier.cmp(&b_identifier).then_with(|| a.cmp(b))
      }
    }
  }
}
