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
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    data_policy_id: &str,
) -> anyhow::Result<()> {
    let name = DATA_POLICY.expand(&[project_id, location, data_policy_id])?;
    let policy = match client.get_data_policy().set_name(&name).send().await {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Data policy {name} not found. Verify the location and data policy id."
                ))
                .on_permission_denied(format!(
                    "The caller cannot read {name}. Grant the roles/bigquerydatapolicy.viewer role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Data policy {}", policy.name)?;
    writeln!(out, "  id: {}", policy.data_policy_id)?;
    writeln!(out, "  type: {:?}", policy.data_policy_type)?;
    writeln!(out, "  policy tag: {}", policy.policy_tag().map_or("", |t| t.as_str()))?;
    writeln!(out, "  masking: {}", masking_rule(&policy))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigquery_datapolicies::mocks::MockDataPolicyService;
    use crate::testing::{not_found, ok, output};
    use datapolicies::model::data_masking_policy::PredefinedExpression;
    use datapolicies::model::data_policy::DataPolicyType;
    use datapolicies::model::{DataMaskingPolicy, DataPolicy};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockDataPolicyService::new();
        mock.expect_get_data_policy()
            .withf(|r, _| r.name == "projects/p/locations/us/dataPolicies/d")
            .return_once(|r, _| {
                ok(DataPolicy::new()
                    .set_name(r.name)
                    .set_data_policy_id("d")
                    .set_data_policy_type(DataPolicyType::DataMaskingPolicy)
                    .set_policy_tag("projects/p/locations/us/taxonomies/t/policyTags/pt")
                    .set_data_masking_policy(
                        DataMaskingPolicy::new()
                            .set_predefined_expression(PredefinedExpression::AlwaysNull),
                    ))
            });
        let client = datapolicies::client::DataPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "d").await?;
        let got = output(out);
        assert_eq!(
            got.lines().collect::<Vec<_>>(),
            [
                "Data policy projects/p/locations/us/dataPolicies/d".to_string(),
                "  id: d".to_string(),
                format!("  type: {:?}", DataPolicyType::DataMaskingPolicy),
                "  policy tag: projects/p/locations/us/taxonomies/t/policyTags/pt".to_string(),
                format!("  masking: {:?}", PredefinedExpression::AlwaysNull),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockDataPolicyService::new();
        mock.expect_get_data_policy()
            .return_once(|_, _| Err(not_found()));
        let client = datapolicies::client::DataPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "d").await?;
        assert_eq!(
            output(out),
            "Data policy projects/p/locations/us/dataPolicies/d not found. Verify the location and data policy id.\n"
        );
        Ok(())
    }
}
