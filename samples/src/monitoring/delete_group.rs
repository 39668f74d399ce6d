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
use crate::names::GROUP;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

/// Deletes a group. Groups with child groups cannot be deleted.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::GroupService,
    project_id: &str,
    group_id: &str,
) -> anyhow::Result<()> {
    let name = GROUP.expand(&[project_id, group_id])?;
    if let Err(e) = client.delete_group().set_name(&name).send().await {
        Remediation::new()
            .on_not_found(format!("Group {name} not found, nothing to delete."))
            .on_failed_precondition(format!(
                "Group {name} has child groups. Delete the children first."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted group {name}")?;
    Ok(())
}
