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
use crate::names::{INSPECT_TEMPLATE, LOCATION};
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

use dlp::model::{InspectConfig, InspectTemplate, Likelihood};

/// Creates a reusable inspect template for `info_type_names`.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    project_id: &str,
    location: &str,
    template_id: &str,
    display_name: Option<&str>,
    info_type_names: &[String],
) -> anyhow::Result<()> {
    let name = INSPECT_TEMPLATE.expand(&[project_id, location, template_id])?;
    let template = InspectTemplate::new()
        .set_display_name(display_name.unwrap_or(template_id))
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types(info_types(info_type_names))
                .set_min_likelihood(Likelihood::Possible)
                .set_include_quote(true),
        );
    let result = client
        .create_inspect_template()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_template_id(template_id)
        .set_inspect_template(template)
        .send()
        .await;
    let template = match result {
        Ok(t) => t,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Inspect template {name} already exists. Choose a different template id."
                ))
                .on_invalid_argument(format!(
                    "Invalid template id {template_id:?}. Use letters, numbers, `-` and `_`, at most 100 characters."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created inspect template {}", template.name)?;
    Ok(())
}
