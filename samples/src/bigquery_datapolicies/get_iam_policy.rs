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

/// Prints the role bindings on a data policy.
///
/// Principals with `roles/bigquerydatapolicy.maskedReader` see masked values.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    data_policy_id: &str,
) -> anyhow::Result<()> {
    let name = DATA_POLICY.expand(&[project_id, location, data_policy_id])?;
    let policy = match client.get_iam_policy().set_resource(&name).send().await {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Data policy {name} not found."))
                .on_permission_denied(format!(
                    "The caller cannot read the IAM policy of {name}. Grant the roles/bigquerydatapolicy.admin role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "IAM policy for {name}")?;
    if policy.bindings.is_empty() {
        writeln!(out, "  no bindings")?;
    }
    for binding in &policy.bindings {
        writeln!(out, "  {}: {}", binding.role, binding.members.join(", "))?;
    }
    Ok(())
}
