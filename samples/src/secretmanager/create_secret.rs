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
use crate::names::{PROJECT, SECRET};
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

/// Creates a secret with automatic replication.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET.expand(&[project_id, secret_id])?;
    let result = client
        .create_secret()
        .set_parent(PROJECT.expand(&[project_id])?)
        .set_secret_id(secret_id)
        .set_secret(
            sm::model::Secret::new().set_replication(
                sm::model::Replication::new()
                    .set_automatic(sm::model::replication::Automatic::new()),
            ),
        )
        .send()
        .await;
    let secret = match result {
        Ok(s) => s,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Secret {name} already exists. Choose a different secret id."
                ))
                .on_permission_denied(format!(
                    "The caller cannot create secrets in project {project_id}. Grant the roles/secretmanager.admin role."
                ))
                .on_invalid_argument(format!(
                    "Invalid secret id {secret_id:?}. Use letters, numbers, `-` and `_`, up to 255 characters."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created secret {}", secret.name)?;
    Ok(())
}
