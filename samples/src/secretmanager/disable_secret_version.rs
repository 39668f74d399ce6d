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

/// Disables a secret version. Disabled versions cannot be accessed.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
) -> anyhow::Result<()> {
    let name = SECRET_VERSION.expand(&[project_id, secret_id, version_id])?;
    let version = match client.disable_secret_version().set_name(&name).send().await {
        Ok(v) => v,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Secret version {name} not found."))
                .on_failed_precondition(format!(
                    "Secret version {name} is destroyed and cannot be disabled."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Disabled secret version {}", version.name)?;
    writeln!(out, "  state: {:?}", version.state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secretmanager::mocks::MockSecretManagerService;
    use crate::testing::{failed_precondition, not_found, ok, output};
    use pretty_assertions::assert_eq;
    use sm::model::secret_version::State;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_disable_secret_version()
            .withf(|r, _| r.name == "projects/p/secrets/s/versions/2")
            .return_once(|r, _| {
                ok(sm::model::SecretVersion::new()
                    .set_name(r.name)
                    .set_state(State::Disabled))
            });
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", "2").await?;
        assert_eq!(
            output(out),
            format!(
                "Disabled secret version projects/p/secrets/s/versions/2\n  state: {:?}\n",
                State::Disabled
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn destroyed() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_disable_secret_version()
            .return_once(|_, _| Err(failed_precondition()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", "2").await?;
        assert_eq!(
            output(out),
            "Secret version projects/p/secrets/s/versions/2 is destroyed and cannot be disabled.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_disable_secret_version()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", "2").await?;
        assert_eq!(
            output(out),
            "Secret version projects/p/secrets/s/versions/2 not found.\n"
        );
        Ok(())
    }
}
