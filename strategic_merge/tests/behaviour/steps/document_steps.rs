//! Steps that select base and patch documents.

use crate::fixtures::MergeContext;
use anyhow::Result;
use rstest_bdd_macros::given;
use serde_json::json;

#[given("the rolling update deployment base")]
fn rolling_update_base(merge_context: &MergeContext) -> Result<()> {
    merge_context.base.set(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {"name": "test"},
        "spec": {
            "strategy": {
                "type": "RollingUpdate",
                "rollingUpdate": {"maxSurge": 1, "maxUnavailable": 0}
            },
            "template": {"spec": {"containers": [{"name": "test", "image": "test:1.0"}]}}
        }
    }));
    Ok(())
}

#[given("a patch switching the strategy to Recreate with a null rollingUpdate")]
fn recreate_patch(merge_context: &MergeContext) -> Result<()> {
    merge_context.patch.set(json!({
        "spec": {"strategy": {"type": "Recreate", "rollingUpdate": null}}
    }));
    Ok(())
}

#[given("a patch setting the image of container {name} to {image}")]
fn container_image_patch(merge_context: &MergeContext, name: String, image: String) -> Result<()> {
    merge_context.patch.set(json!({
        "spec": {"template": {"spec": {"containers": [{"name": name, "image": image}]}}}
    }));
    Ok(())
}

#[given("a patch adding a container without a name")]
fn unnamed_container_patch(merge_context: &MergeContext) -> Result<()> {
    merge_context.patch.set(json!({
        "spec": {"template": {"spec": {"containers": [{"image": "orphan:1.0"}]}}}
    }));
    Ok(())
}

#[given("a base document with type A and detail x 1")]
fn discriminated_base(merge_context: &MergeContext) -> Result<()> {
    merge_context.base.set(json!({"type": "A", "detail": {"x": 1}}));
    Ok(())
}

#[given("a patch setting type to B and detail to null")]
fn discriminator_patch(merge_context: &MergeContext) -> Result<()> {
    merge_context.patch.set(json!({"type": "B", "detail": null}));
    Ok(())
}

#[given("a patch setting missing to null")]
fn absent_key_patch(merge_context: &MergeContext) -> Result<()> {
    merge_context.patch.set(json!({"missing": null}));
    Ok(())
}
