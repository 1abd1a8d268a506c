use serde::Deserialize;
use serde::Serialize;

/// A module is one unit of compiled source in the build graph.
///
/// Modules are opaque to identifier assignment: only the graph shape around
/// them matters. The `identifier` string is used purely as a deterministic
/// tie-break when no structural index is available.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
  /// Content key, unique within one module graph.
  pub id: String,

  /// Fallback identifier used for deterministic ordering.
  pub identifier: String,
}

impl Module {
  pub fn new(id: impl Into<String>, identifier: impl Into<String>) -> Self {
    Module {
      id: id.into(),
      identifier: identifier.into(),
    }
  }
}
