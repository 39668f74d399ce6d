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

//! Samples for Google Cloud services using the Rust client libraries.
//!
//! Each sample builds a client, makes one request, and prints the most
//! interesting fields of the response. Service errors are not propagated, the
//! samples classify them with [diagnostics::ErrorKind] and print a hint to fix
//! the problem. Only errors building the request or the client, and errors
//! writing the output, are returned to the caller.
//!
//! The samples receive the client as a parameter, tests create clients with
//! mocked stubs. See the `mocks` module in each service.

pub mod args;
pub mod diagnostics;
pub mod display;
pub mod logging;
pub mod names;
pub mod options;

pub mod bigquery_datapolicies;
pub mod dataproc;
pub mod dlp;
pub mod documentai;
pub mod eventarc;
pub mod monitoring;
pub mod retail;
pub mod secretmanager;
pub mod speech;
pub mod storage_control;
pub mod translation;

#[cfg(test)]
mod testing;
