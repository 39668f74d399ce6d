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
use crate::names::{DATA_POLICY, LOCATION};
use google_cloud_bigquery_datapolicies_v1 as datapolicies;
use google_cloud_gax::paginator::ItemPaginator as _;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &datapolicies::client::DataPolicyService,
    project_id: &str,
    location: &str,
    filter: Option<&str>,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client
        .list_data_policies()
        .set_parent(&parent)
        .set_filter(filter.unwrap_or_default())
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let policy = match item {
            Ok(p) => p,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!("Location {parent} not found."))
                    .on_invalid_argument(format!(
                        "Invalid filter {:?}. Only `policy_tag` filters are supported.",
                        filter.unwrap_or_default()
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{} ({})",
            DATA_POLICY.short_id(&policy.name),
            masking_rule(&policy)
        )?;
    }
    if count == 0 {
        writeln!(out, "No data policies found in {parent}")?;
    }
    Ok(())
}
