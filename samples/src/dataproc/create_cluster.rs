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
use crate::names::CLUSTER;
use google_cloud_dataproc_v1 as dataproc;
use google_cloud_lro::Poller;
use std::io::Write;

use dataproc::model::{Cluster, ClusterConfig, InstanceGroupConfig};

/// Creates a cluster and waits until it is running.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dataproc::client::ClusterController,
    project_id: &str,
    region: &str,
    cluster_name: &str,
    num_workers: i32,
    machine_type: &str,
) -> anyhow::Result<()> {
    let name = CLUSTER.expand(&[project_id, region, cluster_name])?;
    let config = ClusterConfig::new()
        .set_master_config(
            InstanceGroupConfig::new()
                .set_num_instances(1)
                .set_machine_type_uri(machine_type),
        )
        .set_worker_config(
            InstanceGroupConfig::new()
                .set_num_instances(num_workers)
                .set_machine_type_uri(machine_type),
        );
    let result = client
        .create_cluster()
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster(
            Cluster::new()
                .set_project_id(project_id)
                .set_cluster_name(cluster_name)
                .set_config(config),
        )
        .poller()
        .until_done()
        .await;
    let cluster = match result {
        Ok(c) => c,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Cluster {name} already exists. Choose a different cluster name."
                ))
                .on_invalid_argument(format!(
                    "Invalid cluster configuration. Verify that {machine_type} is available in {region} and that the cluster name is a valid DNS label."
                ))
                .on_permission_denied(format!(
                    "The caller cannot create clusters in {project_id}. Grant the roles/dataproc.editor role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created cluster {}", cluster.cluster_name)?;
    writeln!(out, "  uuid: {}", cluster.cluster_uuid)?;
    writeln!(out, "  state: {}", state(&cluster))?;
    writeln!(out, "  workers: {}", workers(&cluster))?;
    Ok(())
}
