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
use crate::names::{INSPECT_TEMPLATE, LOCATION};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client
        .list_inspect_templates()
        .set_parent(&parent)
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let template = match item {
            Ok(t) => t,
            Err(e) => {
                Remediation::new()
                    .on_permission_denied(format!(
                        "The caller cannot list inspect templates in {parent}. Grant the roles/dlp.inspectTemplatesReader role."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{}: {}",
            INSPECT_TEMPLATE.short_id(&template.name),
            template.display_name
        )?;
    }
    if count == 0 {
        writeln!(out, "No inspect templates found in {parent}")?;
    }
    Ok(())
}
