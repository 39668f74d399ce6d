// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Report failed calls with a remediation hint.
//!
//! The samples do not retry or propagate service errors. They classify the
//! error, print a message telling the user what to fix, and return normally.

use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::Code;
use std::io::Write;

/// The error kinds a sample distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    PermissionDenied,
    InvalidArgument,
    Other,
}

impl ErrorKind {
    /// Classifies `error` using its status code.
    ///
    /// Errors without a status, such as binding, authentication, or transport
    /// errors, are [ErrorKind::Other].
    pub fn classify(error: &Error) -> Self {
        match error.status().map(|s| s.code) {
            Some(Code::NotFound) => Self::NotFound,
            Some(Code::AlreadyExists) => Self::AlreadyExists,
            Some(Code::FailedPrecondition) => Self::FailedPrecondition,
            Some(Code::PermissionDenied) => Self::PermissionDenied,
            Some(Code::InvalidArgument) => Self::InvalidArgument,
            _ => Self::Other,
        }
    }
}

/// The hints printed for each [ErrorKind].
///
/// # Example
/// ```
/// # use cloud_samples::diagnostics::{ErrorKind, Remediation};
/// let remediation = Remediation::new()
///     .on_not_found("Secret projects/p/secrets/s not found.")
///     .on_permission_denied("Grant roles/secretmanager.viewer to the caller.");
/// assert_eq!(
///     remediation.hint(ErrorKind::NotFound),
///     Some("Secret projects/p/secrets/s not found.")
/// );
/// assert_eq!(remediation.hint(ErrorKind::AlreadyExists), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Remediation {
    not_found: Option<String>,
    already_exists: Option<String>,
    failed_precondition: Option<String>,
    permission_denied: Option<String>,
    invalid_argument: Option<String>,
}

impl Remediation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_not_found<V: Into<String>>(mut self, v: V) -> Self {
        self.not_found = Some(v.into());
        self
    }

    pub fn on_already_exists<V: Into<String>>(mut self, v: V) -> Self {
        self.already_exists = Some(v.into());
        self
    }

    pub fn on_failed_precondition<V: Into<String>>(mut self, v: V) -> Self {
        self.failed_precondition = Some(v.into());
        self
    }

    pub fn on_permission_denied<V: Into<String>>(mut self, v: V) -> Self {
        self.permission_denied = Some(v.into());
        self
    }

    pub fn on_invalid_argument<V: Into<String>>(mut self, v: V) -> Self {
        self.invalid_argument = Some(v.into());
        self
    }

    pub fn hint(&self, kind: ErrorKind) -> Option<&str> {
        let hint = match kind {
            ErrorKind::NotFound => &self.not_found,
            ErrorKind::AlreadyExists => &self.already_exists,
            ErrorKind::FailedPrecondition => &self.failed_precondition,
            ErrorKind::PermissionDenied => &self.permission_denied,
            ErrorKind::InvalidArgument => &self.invalid_argument,
            ErrorKind::Other => &None,
        };
        hint.as_deref()
    }

    /// Prints the hint for `error` to `out`.
    ///
    /// Kinds without a hint print the error itself.
    pub fn report<W: Write>(&self, out: &mut W, error: &Error) -> std::io::Result<ErrorKind> {
        let kind = ErrorKind::classify(error);
        tracing::warn!(?kind, "request failed: {error}");
        match self.hint(kind) {
            Some(hint) => writeln!(out, "{hint}")?,
            None => writeln!(out, "Unexpected error: {error}")?,
        }
        Ok(kind)
    }
}
