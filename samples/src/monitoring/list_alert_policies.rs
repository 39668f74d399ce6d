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
use crate::names::{ALERT_POLICY, PROJECT};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

/// Lists the alert policies in a project, with their enabled state.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::AlertPolicyService,
    project_id: &str,
) -> anyhow::Result<()> {
    let mut items = client
        .list_alert_policies()
        .set_name(PROJECT.expand(&[project_id])?)
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let policy = match item {
            Ok(p) => p,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!("Project {project_id} not found."))
                    .on_permission_denied(format!(
                        "The caller cannot list alert policies in project {project_id}. Grant the roles/monitoring.alertPolicyViewer role."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        let state = match policy.enabled {
            Some(false) => "disabled",
            _ => "enabled",
        };
        writeln!(
            out,
            "{} [{state}]: {}",
            ALERT_POLICY.short_id(&policy.name),
            policy.display_name
        )?;
    }
    if count == 0 {
        writeln!(out, "No alert policies found in project {project_id}")?;
    }
    Ok(())
}
