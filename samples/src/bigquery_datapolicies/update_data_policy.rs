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

use super::masking_rule;
use crate::diagnostics::Remediation;
use crate::names::DATA_POLICY;
use google_cloud_bigquery_datapolicies_v1 as datapolicies;
use google_cloud_wkt as wkt;
use std::io::Write;

use datapolicies::model::data_masking_policy::PredefinedExpression;
use datapolicies::model::{DataMaskingPolicy, DataPolicy};

/// Changes the masking expression of a data policy.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    data_policy_id: &str,
    expression: PredefinedExpression,
) -> anyhow::Result<()> {
    let name = DATA_POLICY.expand(&[project_id, location, data_policy_id])?;
    let result = client
        .update_data_policy()
        .set_data_policy(
            DataPolicy::new().set_name(&name).set_data_masking_policy(
                DataMaskingPolicy::new().set_predefined_expression(expression),
            ),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["data_masking_policy"]))
        .send()
        .await;
    let policy = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Data policy {name} not found."))
                .on_invalid_argument(format!(
                    "Data policy {name} is not a data masking policy."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Updated data policy {}", policy.name)?;
    writeln!(out, "  masking: {}", masking_rule(&policy))?;
    Ok(())
}
