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
use crate::names::PROJECT;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

/// Creates a group, the service assigns the group id.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::GroupService,
    project_id: &str,
    display_name: &str,
    filter: &str,
) -> anyhow::Result<()> {
    let result = client
        .create_group()
        .set_name(PROJECT.expand(&[project_id])?)
        .set_group(
            monitoring::model::Group::new()
                .set_display_name(display_name)
                .set_filter(filter),
        )
        .send()
        .await;
    let group = match result {
        Ok(g) => g,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Project {project_id} not found."))
                .on_invalid_argument(format!(
                    "Invalid group filter {filter:?}. See https://cloud.google.com/monitoring/api/v3/filters."
                ))
                .on_permission_denied(format!(
                    "The caller cannot create groups in project {project_id}. Grant the roles/monitoring.editor role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created group {}", group.name)?;
    writeln!(out, "  display name: {}", group.display_name)?;
    writeln!(out, "  filter: {}", group.filter)?;
    Ok(())
}
