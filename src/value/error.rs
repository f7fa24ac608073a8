// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::ValueKind;

/// Errors raised when reading a [`Value`](super::Value) through the wrong accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The requested case is not the one currently stored.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl ValueError {
    pub(crate) fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        log::debug!("value accessor for {expected} used on {actual}");
        ValueError::TypeMismatch { expected, actual }
    }
}
