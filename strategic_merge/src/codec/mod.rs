//! Text codecs wrapped around the merge engine.
//!
//! Parsing and printing are delegated to `serde_json` and `serde-saphyr`;
//! this module only selects the codec, normalises its errors into
//! [`MergeError::Encoding`], and offers the text-in, text-out
//! [`merge_documents`] entry point.

mod format;

pub use format::Format;

use std::sync::Arc;

use serde_json::Value;

use crate::{MergeError, MergeOptions, MergeResult, engine};

/// Decode `text` as a document in `format`.
///
/// Blank input decodes to `null`. YAML is read with YAML 1.2 boolean
/// semantics, so `yes` and `on` remain strings.
///
/// # Errors
///
/// Returns [`MergeError::Encoding`] when the text is not valid in `format`.
pub fn decode(text: &str, format: Format) -> MergeResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match format {
        Format::Json => serde_json::from_str(text)
            .map_err(|err| Arc::new(MergeError::encoding(format, err))),
        Format::Yaml => decode_yaml(text),
    }
}

/// Encode `value` as text in `format`.
///
/// JSON output is pretty-printed.
///
/// # Errors
///
/// Returns [`MergeError::Encoding`] when the codec rejects the value.
pub fn encode(value: &Value, format: Format) -> MergeResult<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|err| Arc::new(MergeError::encoding(format, err))),
        Format::Yaml => encode_yaml(value),
    }
}

/// Decode `base` and `patch`, merge them with `options`, and encode the
/// result in the same format.
///
/// Either the fully merged text or an error is returned; nothing partial.
///
/// # Examples
///
/// ```
/// use strategic_merge::{MergeOptions, codec::{self, Format}};
///
/// let merged = codec::merge_documents(
///     r#"{"type": "RollingUpdate", "rollingUpdate": {"maxSurge": 1}}"#,
///     r#"{"type": "Recreate", "rollingUpdate": null}"#,
///     Format::Json,
///     &MergeOptions::default(),
/// )?;
/// assert_eq!(codec::decode(&merged, Format::Json)?, serde_json::json!({"type": "Recreate"}));
/// # Ok::<_, std::sync::Arc<strategic_merge::MergeError>>(())
/// ```
///
/// # Errors
///
/// Returns [`MergeError::Encoding`] for codec failures and the engine's
/// errors for merge failures.
pub fn merge_documents(
    base: &str,
    patch: &str,
    format: Format,
    options: &MergeOptions,
) -> MergeResult<String> {
    let base_doc = decode(base, format)?;
    let patch_doc = decode(patch, format)?;
    let merged = engine::merge_with(&base_doc, &patch_doc, options)?;
    encode(&merged, format)
}

#[cfg(feature = "yaml")]
fn decode_yaml(text: &str) -> MergeResult<Value> {
    serde_saphyr::from_str_with_options(
        text,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|err| Arc::new(MergeError::encoding(Format::Yaml, err)))
}

#[cfg(feature = "yaml")]
fn encode_yaml(value: &Value) -> MergeResult<String> {
    serde_saphyr::to_string(value).map_err(|err| Arc::new(MergeError::encoding(Format::Yaml, err)))
}

#[cfg(not(feature = "yaml"))]
fn decode_yaml(_text: &str) -> MergeResult<Value> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn encode_yaml(_value: &Value) -> MergeResult<String> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn yaml_disabled() -> Arc<MergeError> {
    Arc::new(MergeError::encoding(
        Format::Yaml,
        "yaml feature disabled: enable the 'yaml' feature to support this format",
    ))
}
