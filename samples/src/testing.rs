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

//! Helpers shared by the unit tests.

use google_cloud_gax as gax;
use google_cloud_longrunning as longrunning;
use google_cloud_rpc as rpc;
use google_cloud_wkt as wkt;

use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use longrunning::model::Operation;
use longrunning::model::operation::Result as OperationResult;

pub type Result<T> = gax::Result<Response<T>>;

/// Simulates a service error.
pub fn service_error(code: Code, message: &str) -> Error {
    Error::service(Status::default().set_code(code).set_message(message))
}

pub fn not_found() -> Error {
    service_error(Code::NotFound, "Resource not found")
}

pub fn already_exists() -> Error {
    service_error(Code::AlreadyExists, "Resource already exists")
}

pub fn permission_denied() -> Error {
    service_error(Code::PermissionDenied, "Permission denied")
}

pub fn failed_precondition() -> Error {
    service_error(Code::FailedPrecondition, "Precondition failed")
}

pub fn invalid_argument() -> Error {
    service_error(Code::InvalidArgument, "Invalid argument")
}

/// Wraps a successful response.
pub fn ok<T>(response: T) -> Result<T> {
    Ok(Response::from(response))
}

/// A long-running operation that completed successfully with `response`.
///
/// Use `wkt::Any::from_msg()` to create the payload.
pub fn operation_done(response: wkt::Any) -> Result<Operation> {
    let operation = Operation::new()
        .set_name("operations/test-only")
        .set_done(true)
        .set_result(OperationResult::Response(response.into()));
    Ok(Response::from(operation))
}

/// A long-running operation that completed with an error.
pub fn operation_failed(code: Code, message: &str) -> Result<Operation> {
    let status = rpc::model::Status::default()
        .set_code(code as i32)
        .set_message(message);
    let operation = Operation::new()
        .set_name("operations/test-only")
        .set_done(true)
        .set_result(OperationResult::Error(status.into()));
    Ok(Response::from(operation))
}

/// A long-running operation that completed with an empty response.
pub fn operation_empty() -> Result<Operation> {
    let any = wkt::Any::from_msg(&wkt::Empty::default()).expect("empty message should succeed");
    operation_done(any)
}

/// Converts the captured sample output into a string.
pub fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("sample output should be UTF-8")
}
