//! Layered loading of [`MergeOptions`] with Figment.
//!
//! Layers are applied in the order they are added, later layers taking
//! precedence: built-in defaults first, then any configuration files, then
//! environment variables.

use std::path::Path;
use std::sync::Arc;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
#[cfg(feature = "toml")]
use figment::providers::{Format as _, Toml};
use serde_json::Value;
use uncased::Uncased;

use super::MergeOptions;
use crate::codec::{self, Format};
use crate::{MergeError, MergeResult, MergeResultExt};

/// Environment prefix read by [`OptionsLoader::env`].
pub const DEFAULT_ENV_PREFIX: &str = "STRATEGIC_MERGE_";

/// Builder that layers configuration sources into [`MergeOptions`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strategic_merge::{OptionsLoader, SequenceStrategy};
///
/// let options = OptionsLoader::new()
///     .value(json!({"sequenceStrategy": "replace"}))
///     .load()?;
/// assert_eq!(options.sequence_strategy(), SequenceStrategy::Replace);
/// # Ok::<_, std::sync::Arc<strategic_merge::MergeError>>(())
/// ```
#[derive(Clone, Debug)]
pub struct OptionsLoader {
    figment: Figment,
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsLoader {
    /// Start from [`MergeOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(MergeOptions::default())),
        }
    }

    /// Layer an in-memory options document.
    #[must_use]
    pub fn value(self, value: Value) -> Self {
        Self {
            figment: self.figment.merge(Serialized::defaults(value)),
        }
    }

    /// Layer a configuration file, choosing the parser from its extension.
    ///
    /// `.toml` files are read through Figment's TOML provider; `.json`,
    /// `.yaml` and `.yml` files are decoded with [`codec::decode`].
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Options`] when the file cannot be read or the
    /// extension is not recognised, and [`MergeError::Encoding`] when the
    /// contents fail to decode.
    pub fn file(self, path: impl AsRef<Path>) -> MergeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Arc::new(MergeError::options(figment::Error::from(format!(
                "failed to read {}: {err}",
                path.display()
            ))))
        })?;
        if is_toml(path) {
            return self.toml_string(path, &contents);
        }
        let format = Format::from_path(path).ok_or_else(|| {
            Arc::new(MergeError::options(figment::Error::from(format!(
                "unsupported options file extension: {}",
                path.display()
            ))))
        })?;
        let value = codec::decode(&contents, format)?;
        tracing::debug!(path = %path.display(), %format, "layering merge options file");
        Ok(self.value(value))
    }

    #[cfg(feature = "toml")]
    fn toml_string(self, path: &Path, contents: &str) -> MergeResult<Self> {
        tracing::debug!(path = %path.display(), "layering merge options file");
        Ok(Self {
            figment: self.figment.merge(Toml::string(contents)),
        })
    }

    #[cfg(not(feature = "toml"))]
    fn toml_string(self, path: &Path, _contents: &str) -> MergeResult<Self> {
        Err(Arc::new(MergeError::options(figment::Error::from(format!(
            "toml feature disabled: cannot read {}",
            path.display()
        )))))
    }

    /// Layer environment variables prefixed with [`DEFAULT_ENV_PREFIX`].
    #[must_use]
    pub fn env(self) -> Self {
        self.env_prefixed(DEFAULT_ENV_PREFIX)
    }

    /// Layer environment variables carrying `prefix`.
    ///
    /// `STRATEGIC_MERGE_SEQUENCE_STRATEGY=replace` sets `sequenceStrategy`:
    /// variable names are mapped to the camelCase field names used by every
    /// other layer.
    #[must_use]
    pub fn env_prefixed(self, prefix: &str) -> Self {
        let env = Env::prefixed(prefix)
            .map(|key| Uncased::from(camel_case(key.as_str())))
            .lowercase(false);
        Self {
            figment: self.figment.merge(env),
        }
    }

    /// Extract the layered options.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Options`] when a layer holds an unknown field or
    /// a value of the wrong type.
    pub fn load(&self) -> MergeResult<MergeOptions> {
        self.figment.extract::<MergeOptions>().into_merge()
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Convert `SEQUENCE_STRATEGY` or `sequence_strategy` into `sequenceStrategy`.
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}
