use serde::Deserialize;
use serde::Serialize;

/// Configuration for occurrence-ordered identifier assignment.
///
/// `prioritize_initial` is the only recognized option; unknown keys are
/// rejected at the deserialization boundary so typos never silently change
/// ranking behavior.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct OccurrenceIdsOptions {
  /// When true, modules occurring in more initial (non-async) chunks rank
  /// first, before the total occurrence score is considered.
  pub prioritize_initial: bool,
}
