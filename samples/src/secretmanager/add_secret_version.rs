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

/// Adds a new version to a secret.
///
/// The request includes the CRC32C checksum of the payload, the service
/// rejects the request if the payload is corrupted in transit.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    secret_id: &str,
    payload: &[u8],
) -> anyhow::Result<()> {
    let parent = SECRET.expand(&[project_id, secret_id])?;
    let checksum = crc32c::crc32c(payload) as i64;
    let result = client
        .add_secret_version()
        .set_parent(&parent)
        .set_payload(
            sm::model::SecretPayload::new()
                .set_data(bytes::Bytes::copy_from_slice(payload))
                .set_data_crc32c(checksum),
        )
        .send()
        .await;
    let version = match result {
        Ok(v) => v,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Secret {parent} not found. Create the secret before adding versions."
                ))
                .on_failed_precondition(format!(
                    "Cannot add versions to {parent}. The secret may be scheduled for deletion."
                ))
                .on_invalid_argument("The payload checksum does not match, try again.")
                .on_permission_denied(format!(
                    "The caller cannot add versions to {parent}. Grant the roles/secretmanager.secretVersionAdder role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Added secret version {}", version.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secretmanager::mocks::MockSecretManagerService;
    use crate::testing::{failed_precondition, not_found, ok, output};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        const DATA: &[u8] = b"The quick brown fox jumps over the lazy dog";
        let mut mock = MockSecretManagerService::new();
        mock.expect_add_secret_version()
            .withf(|r, _| {
                let payload = r.payload.as_ref();
                r.parent == "projects/p/secrets/s"
                    && payload.map(|p| p.data.as_ref()) == Some(DATA)
                    && payload.and_then(|p| p.data_crc32c)
                        == Some(crc32c::crc32c(DATA) as i64)
            })
            .return_once(|_, _| {
                ok(sm::model::SecretVersion::new().set_name("projects/p/secrets/s/versions/1"))
            });
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", DATA).await?;
        assert_eq!(
            output(out),
            "Added secret version projects/p/secrets/s/versions/1\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_add_secret_version()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", b"data").await?;
        let got = output(out);
        assert!(got.starts_with("Secret projects/p/secrets/s not found."), "{got}");
        Ok(())
    }

    #[tokio::test]
    async fn precondition() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_add_secret_version()
            .return_once(|_, _| Err(failed_precondition()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "s", b"data").await?;
        let got = output(out);
        assert!(got.contains("scheduled for deletion"), "{got}");
        Ok(())
    }
}
