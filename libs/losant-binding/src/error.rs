// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for losant-binding

use thiserror::Error;

/// Errors a caller can cause while binding parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A required field was absent under both key representations
    #[error("{0} is required")]
    MissingParameter(String),
}

impl BindError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            BindError::MissingParameter(name) => name,
        }
    }
}

/// Defects in a static action definition.
///
/// These never depend on caller input. [`crate::Action::validate`] reports
/// them so tests can check every table; the assembler panics if it meets one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedFieldTable {
    /// A path placeholder has no routed path value
    #[error("placeholder {{{0}}} has no routed path value")]
    UnfilledPlaceholder(String),

    /// A `{` in the path template is never closed
    #[error("unterminated placeholder in path template {0:?}")]
    UnterminatedPlaceholder(String),

    /// A path field has no placeholder to fill
    #[error("path field {0} does not appear in the path template")]
    UnusedPathField(String),

    /// A path field is not marked required
    #[error("path field {0} must be required")]
    OptionalPathField(String),

    /// Two fields share one name
    #[error("field {0} is declared more than once")]
    DuplicateField(String),

    /// More than one field is routed to the body
    #[error("fields {0} and {1} are both routed to the body")]
    MultipleBodies(String, String),
}
