//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use strategic_merge::MergeResult;

/// Scenario state shared between merge steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    /// Base document selected by a `Given` step.
    pub base: Slot<Value>,
    /// Patch document selected by a `Given` step.
    pub patch: Slot<Value>,
    /// Outcome of the most recent merge.
    pub result: Slot<MergeResult<Value>>,
}

/// Creates an empty merge context for each scenario.
#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}
