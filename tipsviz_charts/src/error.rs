// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration errors.

extern crate alloc;

use alloc::string::String;

/// Errors returned by scales and chart renders.
///
/// These all signal a configuration problem. Missing or empty data is never an error: renders
/// return empty geometry instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// A category was looked up in a scale or color mapping that does not know it.
    #[error("unknown category `{key}`")]
    UnknownCategory {
        /// The offending key.
        key: String,
    },
    /// A discrete scale was given the same category twice.
    #[error("duplicate category `{key}` in scale domain")]
    DuplicateCategory {
        /// The repeated key.
        key: String,
    },
    /// An ordinal scale was given no range values for a non-empty domain.
    #[error("ordinal scale has an empty range")]
    EmptyRange,
}

impl ChartError {
    pub(crate) fn unknown(key: &str) -> Self {
        Self::UnknownCategory {
            key: String::from(key),
        }
    }
}
