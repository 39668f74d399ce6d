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
use crate::names::SECRET;
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

/// Deletes a secret and all its versions.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET.expand(&[project_id, secret_id])?;
    if let Err(e) = client.delete_secret().set_name(&name).send().await {
        Remediation::new()
            .on_not_found(format!("Secret {name} not found, nothing to delete."))
            .on_permission_denied(format!(
                "The caller cannot delete {name}. Grant the roles/secretmanager.admin role."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted secret {name}")?;
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
        mock.expect_delete_secret()
            .withf(|r, _| r.name == "projects/p/secrets/s")
            .return_once(|_, _| ok(()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s").await?;
        assert_eq!(output(out), "Deleted secret projects/p/secrets/s\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_delete_secret()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s").await?;
        assert_eq!(
            output(out),
            "Secret projects/p/secrets/s not found, nothing to delete.\n"
        );
        Ok(())
    }
}
