//! Deployment manifests exercising strategy changes.
//!
//! The base carries a `RollingUpdate` strategy with tuning parameters; the
//! patch switches to `Recreate` and nulls the now-invalid `rollingUpdate`
//! block in the same mapping.

use serde_json::{Value, json};

/// Base Deployment manifest as YAML text.
pub const DEPLOYMENT_BASE_YAML: &str = r"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: test
spec:
  strategy:
    type: RollingUpdate
    rollingUpdate:
      maxSurge: 1
      maxUnavailable: 0
  template:
    spec:
      containers:
      - name: test
        image: test:1.0
";

/// Patch switching the strategy to `Recreate` as YAML text.
pub const RECREATE_PATCH_YAML: &str = r"
spec:
  strategy:
    type: Recreate
    rollingUpdate: null
";

/// Base Deployment manifest as a document tree.
#[must_use]
pub fn deployment_base() -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {"name": "test"},
        "spec": {
            "strategy": {
                "type": "RollingUpdate",
                "rollingUpdate": {"maxSurge": 1, "maxUnavailable": 0}
            },
            "template": {
                "spec": {
                    "containers": [{"name": "test", "image": "test:1.0"}]
                }
            }
        }
    })
}

/// Patch switching the strategy to `Recreate` as a document tree.
#[must_use]
pub fn recreate_patch() -> Value {
    json!({
        "spec": {
            "strategy": {"type": "Recreate", "rollingUpdate": null}
        }
    })
}
