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
use crate::display;
use crate::names::SECRET_VERSION;
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

/// Irrevocably destroys the payload of a secret version.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET_VERSION.expand(&[project_id, secret_id, version_id])?;
    let version = match client.destroy_secret_version().set_name(&name).send().await {
        Ok(v) => v,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Secret version {name} not found."))
                .on_failed_precondition(format!("Secret version {name} is already destroyed."))
                .on_permission_denied(format!(
                    "The caller cannot destroy {name}. Grant the roles/secretmanager.secretVersionManager role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Destroyed secret version {}", version.name)?;
    writeln!(
        out,
        "  destroyed: {}",
        display::timestamp(version.destroy_time.as_ref())
    )?;
    Ok(())
}
