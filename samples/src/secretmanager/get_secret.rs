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
use std::io::Write;

/// Prints the metadata of a secret.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET.expand(&[project_id, secret_id])?;
    let secret = match client.get_secret().set_name(&name).send().await {
        Ok(s) => s,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Secret {name} not found. Verify the project and secret ids."
                ))
                .on_permission_denied(format!(
                    "The caller cannot read {name}. Grant the roles/secretmanager.viewer role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let replication = match secret.replication.as_ref() {
        Some(r) if r.automatic().is_some() => "automatic",
        Some(r) if r.user_managed().is_some() => "user-managed",
        _ => "unspecified",
    };
    writeln!(out, "Secret {}", secret.name)?;
    writeln!(out, "  replication: {replication}")?;
    writeln!(
        out,
        "  created: {}",
        display::timestamp(secret.create_time.as_ref())
    )?;
    writeln!(out, "  labels: {}", display::labels(&secret.labels))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secretmanager::mocks::MockSecretManagerService;
    use crate::testing::{not_found, ok, output, permission_denied};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_get_secret()
            .withf(|r, _| r.name == "projects/p/secrets/s")
            .return_once(|_, _| {
                ok(sm::model::Secret::new()
                    .set_name("projects/p/secrets/s")
                    .set_replication(
                        sm::model::Replication::new()
                            .set_automatic(sm::model::replication::Automatic::new()),
                    )
                    .set_labels([("env", "test")]))
            });
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s").await?;
        let got = output(out);
        let lines = got.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "Secret projects/p/secrets/s",
                "  replication: automatic",
                "  created: unset",
                "  labels: env=test",
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_get_secret()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s").await?;
        assert_eq!(
            output(out),
            "Secret projects/p/secrets/s not found. Verify the project and secret ids.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn denied() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_get_secret()
            .return_once(|_, _| Err(permission_denied()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s").await?;
        let got = output(out);
        assert!(got.contains("roles/secretmanager.viewer"), "{got}");
        Ok(())
    }
}
