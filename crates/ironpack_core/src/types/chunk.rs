use serde::Deserialize;
use serde::Serialize;

/// A chunk is a named, possibly-overlapping set of modules destined for one
/// output artifact. Membership and entry designation live in the
/// [`crate::chunk_graph::ChunkGraph`], not on the chunk itself.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
  pub name: String,

  /// True when the chunk is reachable without crossing an async boundary.
  pub can_be_initial: bool,
}

impl Chunk {
  pub fn new(name: impl Into<String>, can_be_initial: bool) -> Self {
    Chunk {
      name: name.into(),
      can_be_initial,
    }
  }
}
