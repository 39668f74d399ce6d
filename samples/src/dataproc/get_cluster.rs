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

use super::{state, workers};
use crate::diagnostics::Remediation;
use crate::display;
use crate::names::CLUSTER;
use google_cloud_dataproc_v1 as dataproc;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &dataproc::client::ClusterController,
    project_id: &str,
    region: &str,
    cluster_name: &str,
) -> anyhow::Result<()> {
    let name = CLUSTER.expand(&[project_id, region, cluster_name])?;
    let result = client
        .get_cluster()
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
        .send()
        .await;
    let cluster = match result {
        Ok(c) => c,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Cluster {name} not found. Verify the region and cluster name."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Cluster {}", cluster.cluster_name)?;
    writeln!(out, "  uuid: {}", cluster.cluster_uuid)?;
    writeln!(out, "  state: {}", state(&cluster))?;
    writeln!(out, "  workers: {}", workers(&cluster))?;
    writeln!(out, "  labels: {}", display::labels(&cluster.labels))?;
    Ok(())
}
