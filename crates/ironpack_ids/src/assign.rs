use std::collections::HashMap;

use ironpack_core::module_graph::NodeId;

/// Collaborator that turns a rank-ordered module sequence into concrete
/// identifiers. The ranking pass calls this exactly once per invocation with
/// the highest-ranked module first.
pub trait IdAssigner {
  fn assign_ids(&mut self, ordered_modules: &[NodeId]);
}

/// What to do when a ranked module already holds an identifier from a prior
/// invocation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReassignPolicy {
  /// Keep the existing identifier and skip the module.
  #[default]
  Keep,
  /// Hand out a fresh identifier, abandoning the old one.
  Reassign,
}

/// Assigns ascending numeric identifiers starting at 0.
///
/// The assigner is the only stateful piece of the pipeline: it remembers
/// identifiers across invocations so that re-ranking an unchanged graph
/// leaves assigned identifiers untouched under [`ReassignPolicy::Keep`].
#[derive(Debug, Default)]
pub struct AscendingIdAssigner {
  policy: ReassignPolicy,
  next_id: u32,
  ids: HashMap<NodeId, u32>,
}

impl AscendingIdAssigner {
  pub fn new(policy: ReassignPolicy) -> Self {
    AscendingIdAssigner {
      policy,
      ..Default::default()
    }
  }

  pub fn module_id(&self, module: &NodeId) -> Option<u32> {
    self.ids.get(module).copied()
  }

  pub fn ids(&self) -> &HashMap<NodeId, u32> {
    &self.ids
  }
}

impl IdAssigner for AscendingIdAssigner {
  fn assign_ids(&mut self, ordered_modules: &[NodeId]) {
    for module in ordered_modules {
      if self.policy == ReassignPolicy::Keep && self.ids.contains_key(module) {
        continue;
      }
      self.ids.insert(*module, self.next_id);
      self.next_id += 1;
    }
  }
}
