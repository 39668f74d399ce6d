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

use crate::diagnostics::Remediation;
use crate::names::SECRET_VERSION;
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

/// Prints the payload of a secret version.
///
/// Use `latest` as the `version_id` to access the most recent enabled
/// version. The sample verifies the payload checksum before printing it.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET_VERSION.expand(&[project_id, secret_id, version_id])?;
    let response = match client.access_secret_version().set_name(&name).send().await {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Secret version {name} not found."))
                .on_failed_precondition(format!(
                    "Secret version {name} is disabled or destroyed. Enable it or access another version."
                ))
                .on_permission_denied(format!(
                    "The caller cannot access {name}. Grant the roles/secretmanager.secretAccessor role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let payload = response.payload.unwrap_or_default();
    let checksum = crc32c::crc32c(&payload.data) as i64;
    if payload.data_crc32c.is_some_and(|want| want != checksum) {
        tracing::warn!(
            expected = payload.data_crc32c,
            actual = checksum,
            "checksum mismatch for {}",
            response.name
        );
        writeln!(out, "Data corruption detected in {}", response.name)?;
        return Ok(());
    }
    writeln!(out, "Accessed secret version {}", response.name)?;
    writeln!(out, "  payload: {}", String::from_utf8_lossy(&payload.data))?;
    Ok(())
}
