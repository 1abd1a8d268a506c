use serde::Deserialize;
use serde::Serialize;

/// A dependency denotes a reference from one module to another.
///
/// One dependency node sits between its origin module and its target module
/// in the [`crate::module_graph::ModuleGraph`]. Entry dependencies have no
/// origin module and hang off the graph root instead.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
  /// Content key, unique within one module graph.
  pub id: String,

  /// Whether this dependency is a build entry point.
  pub is_entry: bool,

  /// How many times this reference recurs syntactically in the origin
  /// module. A weight of 0 means the reference never needs the target's
  /// identifier in the output (e.g. a side-effect-only import).
  pub id_occurrence_weight: u32,
}

impl Default for Dependency {
  fn default() -> Self {
    Dependency {
      id: String::default(),
      is_entry: false,
      id_occurrence_weight: 1,
    }
  }
}

impl Dependency {
  pub fn new(id: impl Into<String>, id_occurrence_weight: u32) -> Self {
    Dependency {
      id: id.into(),
      is_entry: false,
      id_occurrence_weight,
    }
  }

  /// An entry dependency pointing at the given entry module content key.
  pub fn entry(id: impl Into<String>) -> Self {
    Dependency {
      id: id.into(),
      is_entry: true,
      id_occurrence_weight: 0,
    }
  }
}
