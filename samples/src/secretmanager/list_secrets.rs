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
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

/// Lists the secrets in a project, optionally filtered.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &sm::client::SecretManagerService,
    project_id: &str,
    filter: Option<&str>,
) -> anyhow::Result<()> {
    let remediation = Remediation::new()
        .on_not_found(format!("Project {project_id} not found."))
        .on_permission_denied(format!(
            "The caller cannot list secrets in project {project_id}. Grant the roles/secretmanager.viewer role."
        ))
        .on_invalid_argument(format!("Invalid filter {:?}.", filter.unwrap_or_default()));

    let mut items = client
        .list_secrets()
        .set_parent(PROJECT.expand(&[project_id])?)
        .set_filter(filter.unwrap_or_default())
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let secret = match item {
            Ok(s) => s,
            Err(e) => {
                remediation.report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(out, "{}", SECRET.short_id(&secret.name))?;
    }
    tracing::info!(count, "listed secrets in {project_id}");
    if count == 0 {
        writeln!(out, "No secrets found in project {project_id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secretmanager::mocks::MockSecretManagerService;
    use crate::testing::{invalid_argument, not_found, ok, output};
    use pretty_assertions::assert_eq;

    fn secret(id: &str) -> sm::model::Secret {
        sm::model::Secret::new().set_name(format!("projects/p/secrets/{id}"))
    }

    #[tokio::test]
    async fn pages() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p" && r.page_token.is_empty())
            .return_once(|_, _| {
                ok(sm::model::ListSecretsResponse::new()
                    .set_secrets([secret("a"), secret("b")])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "page-2")
            .return_once(|_, _| {
                ok(sm::model::ListSecretsResponse::new().set_secrets([secret("c")]))
            });
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", None).await?;
        assert_eq!(output(out), "a\nb\nc\n");
        Ok(())
    }

    #[tokio::test]
    async fn empty() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secrets()
            .withf(|r, _| r.filter == "labels.env=test")
            .return_once(|_, _| ok(sm::model::ListSecretsResponse::new()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", Some("labels.env=test")).await?;
        assert_eq!(output(out), "No secrets found in project p\n");
        Ok(())
    }

    #[tokio::test]
    async fn bad_filter() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secrets()
            .return_once(|_, _| Err(invalid_argument()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", Some("labels.env=")).await?;
        assert_eq!(output(out), "Invalid filter \"labels.env=\".\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secrets()
            .return_once(|_, _| Err(not_found()));
        let client = sm::client::SecretManagerService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", None).await?;
        assert_eq!(output(out), "Project p not found.\n");
        Ok(())
    }
}
