//! Conversions into `MergeError` for foreign error types.

use super::MergeError;
use crate::codec::Format;

impl From<figment::Error> for MergeError {
    fn from(value: figment::Error) -> Self {
        Self::options(value)
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(value: serde_json::Error) -> Self {
        Self::encoding(Format::Json, value)
    }
}
