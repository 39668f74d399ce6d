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
use crate::names::SECRET;
use google_cloud_secretmanager_v1 as sm;
use google_cloud_wkt as wkt;
use std::io::Write;

/// Replaces the labels of a secret.
///
/// Only the `labels` field is in the update mask, other fields are unchanged.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
    labels: &[(String, String)],
) -> anyhow::Result<()> {
    let name = SECRET.expand(&[project_id, secret_id])?;
    let result = client
        .update_secret()
        .set_secret(
            sm::model::Secret::new()
                .set_name(&name)
                .set_labels(labels.to_vec()),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["labels"]))
        .send()
        .await;
    let secret = match result {
        Ok(s) => s,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Secret {name} not found."))
                .on_invalid_argument(
                    "Invalid labels. Keys must start with a lowercase letter, and use lowercase letters, numbers, `-` and `_`.",
                )
                .on_permission_denied(format!(
                    "The caller cannot update {name}. Grant the roles/secretmanager.admin role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Updated secret {}", secret.name)?;
    writeln!(out, "  labels: {}", display::labels(&secret.labels))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secretmanager::mocks::MockSecretManagerService;
    use crate::testing::{not_found, ok, output};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_update_secret()
            .withf(|r, _| {
                let secret = r.secret.as_ref();
                secret.map(|s| s.name.as_str()) == Some("projects/p/secrets/s")
                    && secret.and_then(|s| s.labels.get("env")).map(String::as_str)
                        == Some("prod")
                    && r.update_mask.as_ref().map(|m| m.paths.clone())
                        == Some(vec!["labels".to_string()])
            })
            .return_once(|r, _| ok(r.secret.unwrap_or_default()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        let labels = [("env".to_string(), "prod".to_string())];
        sample(&mut out, &client, "p", "s", &labels).await?;
        assert_eq!(
            output(out),
            "Updated secret projects/p/secrets/s\n  labels: env=prod\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_update_secret()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", &[]).await?;
        assert_eq!(output(out), "Secret projects/p/secrets/s not found.\n");
        Ok(())
    }
}
