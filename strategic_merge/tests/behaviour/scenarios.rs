//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{MergeContext, merge_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/deployment_strategy.feature",
    fixtures = [merge_context: MergeContext]
);
scenarios!(
    "tests/features/null_handling.feature",
    fixtures = [merge_context: MergeContext]
);
