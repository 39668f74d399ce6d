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
use crate::names::{DATA_POLICY, LOCATION, POLICY_TAG};
use google_cloud_bigquery_datapolicies_v1 as datapolicies;
use std::io::Write;

use datapolicies::model::data_masking_policy::PredefinedExpression;
use datapolicies::model::data_policy::DataPolicyType;
use datapolicies::model::{DataMaskingPolicy, DataPolicy};

/// Creates a data masking policy for the columns tagged with a policy tag.
#[allow(clippy::too_many_arguments)]
pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    data_policy_id: &str,
    taxonomy_id: &str,
    policy_tag_id: &str,
    expression: PredefinedExpression,
) -> anyhow::Result<()> {
    let name = DATA_POLICY.expand(&[project_id, location, data_policy_id])?;
    let policy_tag = POLICY_TAG.expand(&[project_id, location, taxonomy_id, policy_tag_id])?;
    let result = client
        .create_data_policy()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_data_policy(
            DataPolicy::new()
                .set_data_policy_id(data_policy_id)
                .set_data_policy_type(DataPolicyType::DataMaskingPolicy)
                .set_policy_tag(&policy_tag)
                .set_data_masking_policy(
                    DataMaskingPolicy::new().set_predefined_expression(expression),
                ),
        )
        .send()
        .await;
    let policy = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Data policy {name} already exists. Choose a different data policy id."
                ))
                .on_not_found(format!(
                    "Policy tag {policy_tag} not found. Create the taxonomy and policy tag first."
                ))
                .on_invalid_argument(format!(
                    "Invalid data policy {data_policy_id:?}. Ids use letters, numbers and `_`, and the policy tag must be in {location}."
                ))
                .on_permission_denied(format!(
                    "The caller cannot create data policies in {project_id}. Grant the roles/bigquerydatapolicy.admin role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created data policy {}", policy.name)?;
    writeln!(out, "  policy tag: {}", policy.policy_tag().map_or("", |t| t.as_str()))?;
    writeln!(out, "  masking: {}", masking_rule(&policy))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigquery_datapolicies::mocks::MockDataPolicyService;
    use crate::testing::{already_exists, not_found, ok, output};
    use pretty_assertions::assert_eq;

    const TAG: &str = "projects/p/locations/us/taxonomies/t/policyTags/pt";

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockDataPolicyService::new();
        mock.expect_create_data_policy()
            .withf(|r, _| {
                let policy = r.data_policy.as_ref();
                r.parent == "projects/p/locations/us"
                    && policy.map(|p| p.data_policy_id.as_str()) == Some("d")
                    && policy.map(|p| p.data_policy_type.clone())
                        == Some(DataPolicyType::DataMaskingPolicy)
                    && policy.and_then(|p| p.policy_tag()).map(String::as_str) == Some(TAG)
                    && policy
                        .and_then(|p| p.data_masking_policy())
                        .and_then(|m| m.predefined_expression())
                        == Some(&PredefinedExpression::Sha256)
            })
            .return_once(|r, _| {
                ok(r.data_policy
                    .unwrap_or_default()
                    .set_name("projects/p/locations/us/dataPolicies/d"))
            });
        let client = datapolicies::client::DataPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "d", "t", "pt", PredefinedExpression::Sha256).await?;
        assert_eq!(
            output(out),
            format!(
                "Created data policy projects/p/locations/us/dataPolicies/d\n  policy tag: {TAG}\n  masking: {:?}\n",
                PredefinedExpression::Sha256
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn exists() -> anyhow::Result<()> {
        let mut mock = MockDataPolicyService::new();
        mock.expect_create_data_policy()
            .return_once(|_, _| Err(already_exists()));
        let client = datapolicies::client::DataPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "d", "t", "pt", PredefinedExpression::Sha256).await?;
        assert_eq!(
            output(out),
            "Data policy projects/p/locations/us/dataPolicies/d already exists. Choose a different data policy id.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_tag() -> anyhow::Result<()> {
        let mut mock = MockDataPolicyService::new();
        mock.expect_create_data_policy()
            .return_once(|_, _| Err(not_found()));
        let client = datapolicies::client::DataPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "d", "t", "pt", PredefinedExpression::Sha256).await?;
        let got = output(out);
        assert!(got.starts_with(&format!("Policy tag {TAG} not found.")), "{got}");
        Ok(())
    }
}
