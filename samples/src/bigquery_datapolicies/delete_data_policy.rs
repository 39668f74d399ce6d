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
use crate::names::DATA_POLICY;
use google_cloud_bigquery_datapolicies_v1 as datapolicies;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    data_policy_id: &str,
) -> anyhow::Result<()> {
    let name = DATA_POLICY.expand(&[project_id, location, data_policy_id])?;
    if let Err(e) = client.delete_data_policy().set_name(&name).send().await {
        Remediation::new()
            .on_not_found(format!("Data policy {name} not found, nothing to delete."))
            .on_permission_denied(format!(
                "The caller cannot delete {name}. Grant the roles/bigquerydatapolicy.admin role."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted data policy {name}")?;
    Ok(())
}
