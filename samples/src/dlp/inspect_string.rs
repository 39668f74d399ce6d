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

use super::info_types;
use crate::diagnostics::Remediation;
use crate::names::LOCATION;
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

use dlp::model::{ContentItem, InspectConfig, Likelihood};

/// Inspects `text` and prints each finding.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    project_id: &str,
    location: &str,
    info_type_names: &[String],
    text: &str,
) -> anyhow::Result<()> {
    let result = client
        .inspect_content()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types(info_types(info_type_names))
                .set_min_likelihood(Likelihood::Possible)
                .set_include_quote(true),
        )
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(format!(
                    "Invalid request. Verify that the info types {info_type_names:?} exist, use list-info-types."
                ))
                .on_permission_denied(format!(
                    "The caller cannot use Sensitive Data Protection in {project_id}. Enable the API and grant the roles/dlp.user role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let findings = response
        .result
        .map(|r| r.findings)
        .unwrap_or_default();
    if findings.is_empty() {
        writeln!(out, "No findings.")?;
        return Ok(());
    }
    for finding in findings {
        let info_type = finding.info_type.as_ref().map_or("", |t| t.name.as_str());
        writeln!(
            out,
            "{info_type} ({:?}): {}",
            finding.likelihood, finding.quote
        )?;
    }
    Ok(())
}
