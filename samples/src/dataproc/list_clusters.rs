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

use super::state;
use crate::diagnostics::Remediation;
use google_cloud_dataproc_v1 as dataproc;
use google_cloud_gax::paginator::ItemPaginator as _;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &dataproc::client::ClusterController,
    project_id: &str,
    region: &str,
) -> anyhow::Result<()> {
    let mut items = client
        .list_clusters()
        .set_project_id(project_id)
        .set_region(region)
        .by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let cluster = match item {
            Ok(c) => c,
            Err(e) => {
                Remediation::new()
                    .on_permission_denied(format!(
                        "The caller cannot list clusters in {project_id}. Grant the roles/dataproc.viewer role."
                    ))
                    .on_invalid_argument(format!("Invalid region {region:?}."))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(out, "{} [{}]", cluster.cluster_name, state(&cluster))?;
    }
    if count == 0 {
        writeln!(out, "No clusters found in {project_id}/{region}")?;
    }
    Ok(())
}
