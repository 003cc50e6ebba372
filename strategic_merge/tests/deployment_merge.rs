//! End-to-end coverage for the Deployment strategy change.
//!
//! Switching `spec.strategy.type` to `Recreate` while nulling
//! `rollingUpdate` must drop the `rollingUpdate` block entirely, whichever
//! format the manifests arrive in.

mod common;

use anyhow::{Result, anyhow, ensure};
use common::deployment_fixtures::{
    DEPLOYMENT_BASE_YAML, RECREATE_PATCH_YAML, deployment_base, recreate_patch,
};
use rstest::rstest;
use serde_json::{Value, json};
use strategic_merge::codec::{self, Format};
use strategic_merge::{MergeOptions, MergeResult, merge};
use test_helpers::tree::{contains_key, require};

fn to_anyhow<T>(result: MergeResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

fn assert_recreate(merged: &Value) -> Result<()> {
    ensure!(
        !contains_key(merged, "rollingUpdate"),
        "rollingUpdate survived the merge: {merged}"
    );
    let strategy = require(merged, "spec.strategy")?;
    ensure!(
        *strategy == json!({"type": "Recreate"}),
        "unexpected strategy {strategy}"
    );
    let image = require(merged, "spec.template.spec.containers.0.image")?;
    ensure!(*image == json!("test:1.0"), "container image changed: {image}");
    let name = require(merged, "metadata.name")?;
    ensure!(*name == json!("test"), "metadata changed: {name}");
    Ok(())
}

#[rstest]
fn strategy_switch_drops_rolling_update() -> Result<()> {
    let merged = to_anyhow(merge(&deployment_base(), &recreate_patch()))?;
    assert_recreate(&merged)
}

#[cfg(feature = "yaml")]
#[rstest]
fn yaml_manifests_merge_end_to_end() -> Result<()> {
    let text = to_anyhow(codec::merge_documents(
        DEPLOYMENT_BASE_YAML,
        RECREATE_PATCH_YAML,
        Format::Yaml,
        &MergeOptions::default(),
    ))?;
    let merged = to_anyhow(codec::decode(&text, Format::Yaml))?;
    assert_recreate(&merged)?;
    ensure!(
        merged == to_anyhow(merge(&deployment_base(), &recreate_patch()))?,
        "YAML and tree merges disagree"
    );
    Ok(())
}

#[rstest]
fn json_manifests_merge_end_to_end() -> Result<()> {
    let base = to_anyhow(codec::encode(&deployment_base(), Format::Json))?;
    let patch = to_anyhow(codec::encode(&recreate_patch(), Format::Json))?;
    let text = to_anyhow(codec::merge_documents(
        &base,
        &patch,
        Format::Json,
        &MergeOptions::default(),
    ))?;
    assert_recreate(&to_anyhow(codec::decode(&text, Format::Json))?)
}

#[rstest]
fn switching_back_restores_only_what_the_patch_supplies() -> Result<()> {
    let recreated = to_anyhow(merge(&deployment_base(), &recreate_patch()))?;
    let patch = json!({"spec": {"strategy": {
        "type": "RollingUpdate",
        "rollingUpdate": {"maxSurge": "25%"}
    }}});
    let merged = to_anyhow(merge(&recreated, &patch))?;
    let strategy = require(&merged, "spec.strategy")?;
    ensure!(
        *strategy == json!({"type": "RollingUpdate", "rollingUpdate": {"maxSurge": "25%"}}),
        "unexpected strategy {strategy}"
    );
    Ok(())
}

#[rstest]
fn container_image_bump_merges_by_name() -> Result<()> {
    let patch = json!({"spec": {"template": {"spec": {"containers": [
        {"name": "test", "image": "test:2.0"}
    ]}}}});
    let merged = to_anyhow(merge(&deployment_base(), &patch))?;
    let containers = require(&merged, "spec.template.spec.containers")?;
    ensure!(
        *containers == json!([{"name": "test", "image": "test:2.0"}]),
        "unexpected containers {containers}"
    );
    Ok(())
}

#[rstest]
fn combined_patch_is_idempotent() -> Result<()> {
    let patch = json!({"spec": {
        "strategy": {"type": "Recreate", "rollingUpdate": null},
        "template": {"spec": {"containers": [{"name": "test", "image": "test:2.0"}]}}
    }});
    let once = to_anyhow(merge(&deployment_base(), &patch))?;
    let twice = to_anyhow(merge(&once, &patch))?;
    ensure!(once == twice, "second application changed the document");
    Ok(())
}
