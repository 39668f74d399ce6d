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
use crate::names::INSPECT_TEMPLATE;
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    project_id: &str,
    location: &str,
    template_id: &str,
) -> anyhow::Result<()> {
    let name = INSPECT_TEMPLATE.expand(&[project_id, location, template_id])?;
    if let Err(e) = client.delete_inspect_template().set_name(&name).send().await {
        Remediation::new()
            .on_not_found(format!(
                "Inspect template {name} not found, nothing to delete."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted inspect template {name}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dlp::mocks::MockDlpService;
    use crate::testing::{not_found, ok, output};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_delete_inspect_template()
            .withf(|r, _| r.name == "projects/p/locations/global/inspectTemplates/t")
            .return_once(|_, _| ok(()));
        let client = dlp::client::DlpService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "global", "t").await?;
        assert_eq!(
            output(out),
            "Deleted inspect template projects/p/locations/global/inspectTemplates/t\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_delete_inspect_template()
            .return_once(|_, _| Err(not_found()));
        let client = dlp::client::DlpService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "global", "t").await?;
        assert_eq!(
            output(out),
            "Inspect template projects/p/locations/global/inspectTemplates/t not found, nothing to delete.\n"
        );
        Ok(())
    }
}
