//! Steps that run merges and inspect their outcome.

use crate::fixtures::MergeContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{then, when};
use serde_json::Value;
use strategic_merge::{MergeError, merge};
use test_helpers::tree::{contains_key, require};

fn inputs(merge_context: &MergeContext) -> Result<(Value, Value)> {
    let base = merge_context
        .base
        .get()
        .ok_or_else(|| anyhow!("base document missing"))?;
    let patch = merge_context
        .patch
        .get()
        .ok_or_else(|| anyhow!("patch document missing"))?;
    Ok((base, patch))
}

fn merged(merge_context: &MergeContext) -> Result<Value> {
    merge_context
        .result
        .with_ref(|result| result.clone())
        .ok_or_else(|| anyhow!("merge result missing"))?
        .map_err(|err| anyhow!(err.to_string()))
}

#[when("the patch is merged")]
fn merge_once(merge_context: &MergeContext) -> Result<()> {
    let (base, patch) = inputs(merge_context)?;
    merge_context.result.set(merge(&base, &patch));
    Ok(())
}

#[when("the patch is merged twice")]
fn merge_twice(merge_context: &MergeContext) -> Result<()> {
    let (base, patch) = inputs(merge_context)?;
    let once = merge(&base, &patch).map_err(|err| anyhow!(err.to_string()))?;
    let twice = merge(&once, &patch);
    if let Ok(value) = &twice {
        ensure!(*value == once, "second merge changed the document");
    }
    merge_context.result.set(twice);
    Ok(())
}

#[then("the strategy type is {expected}")]
fn strategy_type_is(merge_context: &MergeContext, expected: String) -> Result<()> {
    let doc = merged(merge_context)?;
    let actual = require(&doc, "spec.strategy.type")?;
    ensure!(
        actual.as_str() == Some(expected.as_str()),
        "expected strategy {expected}, got {actual}"
    );
    Ok(())
}

#[then("no rollingUpdate key remains")]
fn rolling_update_absent(merge_context: &MergeContext) -> Result<()> {
    let doc = merged(merge_context)?;
    ensure!(
        !contains_key(&doc, "rollingUpdate"),
        "rollingUpdate survived the merge: {doc}"
    );
    Ok(())
}

#[then("the first container image is {expected}")]
fn first_container_image(merge_context: &MergeContext, expected: String) -> Result<()> {
    let doc = merged(merge_context)?;
    let image = require(&doc, "spec.template.spec.containers.0.image")?;
    ensure!(
        image.as_str() == Some(expected.as_str()),
        "expected image {expected}, got {image}"
    );
    Ok(())
}

#[then("the deployment has {count} containers")]
fn container_count(merge_context: &MergeContext, count: usize) -> Result<()> {
    let doc = merged(merge_context)?;
    let containers = require(&doc, "spec.template.spec.containers")?
        .as_array()
        .ok_or_else(|| anyhow!("containers is not a sequence"))?;
    ensure!(
        containers.len() == count,
        "expected {count} containers, got {}",
        containers.len()
    );
    Ok(())
}

#[then("the merged document keys are {expected}")]
fn merged_document_keys(merge_context: &MergeContext, expected: String) -> Result<()> {
    let doc = merged(merge_context)?;
    let keys: Vec<&str> = doc
        .as_object()
        .ok_or_else(|| anyhow!("merged document is not a mapping"))?
        .keys()
        .map(String::as_str)
        .collect();
    let expected_keys: Vec<&str> = expected.split(',').map(str::trim).collect();
    ensure!(keys == expected_keys, "expected keys {expected_keys:?}, got {keys:?}");
    Ok(())
}

#[then("the merged type is {expected}")]
fn merged_type_is(merge_context: &MergeContext, expected: String) -> Result<()> {
    let doc = merged(merge_context)?;
    let actual = require(&doc, "type")?;
    ensure!(
        actual.as_str() == Some(expected.as_str()),
        "expected type {expected}, got {actual}"
    );
    Ok(())
}

#[then("a malformed patch error is reported")]
fn malformed_patch_reported(merge_context: &MergeContext) -> Result<()> {
    let err = merge_context
        .result
        .take()
        .ok_or_else(|| anyhow!("merge result missing"))?
        .expect_err("expected merge to fail");
    ensure!(
        matches!(err.as_ref(), MergeError::MalformedPatch { .. }),
        "unexpected error variant: {err:?}"
    );
    Ok(())
}
