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
use crate::names::{GROUP, PROJECT};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::GroupService,
    project_id: &str,
) -> anyhow::Result<()> {
    let mut items = client
        .list_groups()
        .set_name(PROJECT.expand(&[project_id])?)
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let group = match item {
            Ok(g) => g,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!("Project {project_id} not found."))
                    .on_permission_denied(format!(
                        "The caller cannot list groups in project {project_id}. Grant the roles/monitoring.viewer role."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{}: {}",
            GROUP.short_id(&group.name),
            group.display_name
        )?;
    }
    if count == 0 {
        writeln!(out, "No groups found in project {project_id}")?;
    }
    Ok(())
}
