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

use super::workers;
use crate::diagnostics::Remediation;
use crate::names::CLUSTER;
use google_cloud_dataproc_v1 as dataproc;
use google_cloud_lro::Poller;
use google_cloud_wkt as wkt;
use std::io::Write;

use dataproc::model::{Cluster, ClusterConfig, InstanceGroupConfig};

/// Scales the primary workers of a cluster.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dataproc::client::ClusterController,
    project_id: &str,
    region: &str,
    cluster_name: &str,
    num_workers: i32,
) -> anyhow::Result<()> {
    let name = CLUSTER.expand(&[project_id, region, cluster_name])?;
    let cluster = Cluster::new().set_config(
        ClusterConfig::new()
            .set_worker_config(InstanceGroupConfig::new().set_num_instances(num_workers)),
    );
    let result = client
        .update_cluster()
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
        .set_cluster(cluster)
        .set_update_mask(
            wkt::FieldMask::default().set_paths(["config.worker_config.num_instances"]),
        )
        .poller()
        .until_done()
        .await;
    let cluster = match result {
        Ok(c) => c,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Cluster {name} not found."))
                .on_failed_precondition(format!(
                    "Cluster {name} is not running. Wait for pending operations to finish."
                ))
                .on_invalid_argument(format!(
                    "Cannot scale {name} to {num_workers} workers. Standard clusters need at least 2."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(
        out,
        "Updated cluster {}, workers: {}",
        cluster.cluster_name,
        workers(&cluster)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataproc::mocks::MockClusterController;
    use crate::testing::{operation_done, operation_failed, output};
    use google_cloud_gax::error::rpc::Code;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let updated = Cluster::new().set_cluster_name("c").set_config(
            ClusterConfig::new().set_worker_config(InstanceGroupConfig::new().set_num_instances(5)),
        );
        let any = wkt::Any::from_msg(&updated)?;
        let mut mock = MockClusterController::new();
        mock.expect_update_cluster()
            .withf(|r, _| {
                r.cluster_name == "c"
                    && r.update_mask.as_ref().map(|m| m.paths.clone())
                        == Some(vec!["config.worker_config.num_instances".to_string()])
                    && r.cluster
                        .as_ref()
                        .and_then(|c| c.config.as_ref())
                        .and_then(|c| c.worker_config.as_ref())
                        .map(|w| w.num_instances)
                        == Some(5)
            })
            .return_once(move |_, _| operation_done(any));
        let client = dataproc::client::ClusterController::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "r", "c", 5).await?;
        assert_eq!(output(out), "Updated cluster c, workers: 5\n");
        Ok(())
    }

    #[tokio::test]
    async fn not_running() -> anyhow::Result<()> {
        let mut mock = MockClusterController::new();
        mock.expect_update_cluster()
            .return_once(|_, _| operation_failed(Code::FailedPrecondition, "cluster is updating"));
        let client = dataproc::client::ClusterController::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "r", "c", 5).await?;
        assert_eq!(
            output(out),
            "Cluster projects/p/regions/r/clusters/c is not running. Wait for pending operations to finish.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockClusterController::new();
        mock.expect_update_cluster()
            .return_once(|_, _| operation_failed(Code::NotFound, "cluster not found"));
        let client = dataproc::client::ClusterController::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "r", "c", 5).await?;
        assert_eq!(output(out), "Cluster projects/p/regions/r/clusters/c not found.\n");
        Ok(())
    }
}
