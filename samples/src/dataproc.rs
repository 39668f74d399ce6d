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

//! Samples for [Dataproc](https://cloud.google.com/dataproc).
//!
//! Dataproc requests go to the endpoint of the cluster region, for example
//! `https://us-central1-dataproc.googleapis.com`. Cluster mutations and job
//! submissions are long-running operations.

pub mod create_cluster;
pub mod delete_cluster;
pub mod get_cluster;
pub mod list_clusters;
pub mod submit_job;
pub mod update_cluster;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_dataproc_v1 as dataproc;
use std::io::Write;

const SERVICE: &str = "dataproc";
const DEFAULT_REGION: &str = "us-central1";

#[derive(Clone, Debug, clap::Args)]
pub struct ClusterArgs {
    #[command(flatten)]
    pub project: ProjectArg,
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,
    #[arg(long, alias = "cluster_name")]
    pub cluster_name: String,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a cluster with one master and `--num-workers` workers.
    CreateCluster {
        #[command(flatten)]
        cluster: ClusterArgs,
        #[arg(long, default_value_t = 2)]
        num_workers: i32,
        #[arg(long, default_value = "n1-standard-2")]
        machine_type: String,
    },
    /// Print a cluster.
    GetCluster {
        #[command(flatten)]
        cluster: ClusterArgs,
    },
    /// List the clusters in a region.
    ListClusters {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_REGION)]
        region: String,
    },
    /// Change the number of workers in a cluster.
    UpdateCluster {
        #[command(flatten)]
        cluster: ClusterArgs,
        #[arg(long)]
        num_workers: i32,
    },
    /// Delete a cluster.
    DeleteCluster {
        #[command(flatten)]
        cluster: ClusterArgs,
    },
    /// Run a PySpark job on a cluster and wait for it to finish.
    SubmitJob {
        #[command(flatten)]
        cluster: ClusterArgs,
        /// The main Python file, e.g. `gs://my-bucket/word_count.py`.
        #[arg(long, alias = "main_python_file_uri")]
        main_python_file_uri: String,
        /// Arguments passed to the job.
        #[arg(last = true)]
        args: Vec<String>,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::CreateCluster {
            cluster,
            num_workers,
            machine_type,
        } => {
            let client = clusters(options, &cluster.region).await?;
            create_cluster::sample(
                out,
                &client,
                &cluster.project.project_id,
                &cluster.region,
                &cluster.cluster_name,
                num_workers,
                &machine_type,
            )
            .await
        }
        Command::GetCluster { cluster } => {
            let client = clusters(options, &cluster.region).await?;
            get_cluster::sample(
                out,
                &client,
                &cluster.project.project_id,
                &cluster.region,
                &cluster.cluster_name,
            )
            .await
        }
        Command::ListClusters { project, region } => {
            let client = clusters(options, &region).await?;
            list_clusters::sample(out, &client, &project.project_id, &region).await
        }
        Command::UpdateCluster {
            cluster,
            num_workers,
        } => {
            let client = clusters(options, &cluster.region).await?;
            update_cluster::sample(
                out,
                &client,
                &cluster.project.project_id,
                &cluster.region,
                &cluster.cluster_name,
                num_workers,
            )
            .await
        }
        Command::DeleteCluster { cluster } => {
            let client = clusters(options, &cluster.region).await?;
            delete_cluster::sample(
                out,
                &client,
                &cluster.project.project_id,
                &cluster.region,
                &cluster.cluster_name,
            )
            .await
        }
        Command::SubmitJob {
            cluster,
            main_python_file_uri,
            args,
        } => {
            let client = options
                .configure_regional(
                    dataproc::client::JobController::builder(),
                    SERVICE,
                    &cluster.region,
                )
                .build()
                .await?;
            submit_job::sample(
                out,
                &client,
                &cluster.project.project_id,
                &cluster.region,
                &cluster.cluster_name,
                &main_python_file_uri,
                &args,
            )
            .await
        }
    }
}

async fn clusters(
    options: &ClientOptions,
    region: &str,
) -> anyhow::Result<dataproc::client::ClusterController> {
    let client = options
        .configure_regional(dataproc::client::ClusterController::builder(), SERVICE, region)
        .build()
        .await?;
    Ok(client)
}

/// The number of workers in `cluster`, zero for single node clusters.
fn workers(cluster: &dataproc::model::Cluster) -> i32 {
    cluster
        .config
        .as_ref()
        .and_then(|c| c.worker_config.as_ref())
        .map_or(0, |w| w.num_instances)
}

fn state(cluster: &dataproc::model::Cluster) -> String {
    cluster
        .status
        .as_ref()
        .map_or_else(|| "UNKNOWN".to_string(), |s| format!("{:?}", s.state))
}

#[cfg(test)]
pub(crate) mod mocks {
    use google_cloud_dataproc_v1 as dataproc;
    use google_cloud_gax as gax;
    use google_cloud_longrunning as longrunning;

    mockall::mock! {
        #[derive(Debug)]
        pub ClusterController {}
        impl dataproc::stub::ClusterController for ClusterController {
            async fn create_cluster(&self, req: dataproc::model::CreateClusterRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn update_cluster(&self, req: dataproc::model::UpdateClusterRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn delete_cluster(&self, req: dataproc::model::DeleteClusterRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn get_cluster(&self, req: dataproc::model::GetClusterRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dataproc::model::Cluster>>;
            async fn list_clusters(&self, req: dataproc::model::ListClustersRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dataproc::model::ListClustersResponse>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub JobController {}
        impl dataproc::stub::JobController for JobController {
            async fn submit_job_as_operation(&self, req: dataproc::model::SubmitJobRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataproc::model::cluster_status::State;
    use dataproc::model::{Cluster, ClusterConfig, ClusterStatus, InstanceGroupConfig};

    #[test]
    fn cluster_summary() {
        let cluster = Cluster::new();
        assert_eq!(workers(&cluster), 0);
        assert_eq!(state(&cluster), "UNKNOWN");

        let cluster = Cluster::new()
            .set_config(
                ClusterConfig::new()
                    .set_worker_config(InstanceGroupConfig::new().set_num_instances(3)),
            )
            .set_status(ClusterStatus::new().set_state(State::Running));
        assert_eq!(workers(&cluster), 3);
        assert_eq!(state(&cluster), format!("{:?}", State::Running));
    }
}
