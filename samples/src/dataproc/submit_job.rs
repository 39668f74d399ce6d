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
use crate::names::CLUSTER;
use google_cloud_dataproc_v1 as dataproc;
use google_cloud_lro::Poller;
use std::io::Write;

use dataproc::model::{Job, JobPlacement, PySparkJob};

/// Submits a PySpark job and waits for it to finish.
///
/// The driver output is stored in Cloud Storage, the sample prints its
/// location rather than downloading it.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dataproc::client::JobController,
    project_id: &str,
    region: &str,
    cluster_name: &str,
    main_python_file_uri: &str,
    args: &[String],
) -> anyhow::Result<()> {
    let name = CLUSTER.expand(&[project_id, region, cluster_name])?;
    let job = Job::new()
        .set_placement(JobPlacement::new().set_cluster_name(cluster_name))
        .set_pyspark_job(
            PySparkJob::new()
                .set_main_python_file_uri(main_python_file_uri)
                .set_args(args.iter().cloned()),
        );
    let result = client
        .submit_job_as_operation()
        .set_project_id(project_id)
        .set_region(region)
        .set_job(job)
        .poller()
        .until_done()
        .await;
    let job = match result {
        Ok(j) => j,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Cluster {name} not found."))
                .on_invalid_argument(format!(
                    "Invalid job. Verify that {main_python_file_uri} is a gs:// URI."
                ))
                .on_failed_precondition(format!(
                    "The job failed. Inspect the driver output of the jobs in {name}."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let job_id = job.reference.as_ref().map_or("", |r| r.job_id.as_str());
    let state = job
        .status
        .as_ref()
        .map_or_else(|| "UNKNOWN".to_string(), |s| format!("{:?}", s.state));
    writeln!(out, "Job {job_id} finished with state {state}")?;
    writeln!(out, "  driver output: {}", job.driver_output_resource_uri)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataproc::mocks::MockJobController;
    use crate::testing::{operation_done, operation_failed, output};
    use dataproc::model::job_status::State;
    use dataproc::model::{JobReference, JobStatus};
    use google_cloud_gax::error::rpc::Code;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let done = Job::new()
            .set_reference(JobReference::new().set_job_id("job-1"))
            .set_status(JobStatus::new().set_state(State::Done))
            .set_driver_output_resource_uri("gs://staging/driveroutput");
        let any = wkt::Any::from_msg(&done)?;
        let mut mock = MockJobController::new();
        mock.expect_submit_job_as_operation()
            .withf(|r, _| {
                let job = r.job.as_ref();
                let pyspark = job.and_then(|j| j.pyspark_job());
                r.project_id == "p"
                    && r.region == "r"
                    && job
                        .and_then(|j| j.placement.as_ref())
                        .map(|p| p.cluster_name.as_str())
                        == Some("c")
                    && pyspark.map(|p| p.main_python_file_uri.as_str())
                        == Some("gs://b/word_count.py")
                    && pyspark.map(|p| p.args.clone())
                        == Some(vec!["gs://b/input.txt".to_string()])
            })
            .return_once(move |_, _| operation_done(any));
        let client = dataproc::client::JobController::from_stub(mock);

        let mut out = Vec::new();
        let args = ["gs://b/input.txt".to_string()];
        sample(&mut out, &client, "p", "r", "c", "gs://b/word_count.py", &args).await?;
        assert_eq!(
            output(out),
            format!(
                "Job job-1 finished with state {:?}\n  driver output: gs://staging/driveroutput\n",
                State::Done
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn job_failed() -> anyhow::Result<()> {
        let mut mock = MockJobController::new();
        mock.expect_submit_job_as_operation()
            .return_once(|_, _| operation_failed(Code::FailedPrecondition, "job failed"));
        let client = dataproc::client::JobController::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "r", "c", "gs://b/word_count.py", &[]).await?;
        assert_eq!(
            output(out),
            "The job failed. Inspect the driver output of the jobs in projects/p/regions/r/clusters/c.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockJobController::new();
        mock.expect_submit_job_as_operation()
            .return_once(|_, _| operation_failed(Code::NotFound, "cluster not found"));
        let client = dataproc::client::JobController::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "r", "c", "gs://b/word_count.py", &[]).await?;
        assert_eq!(output(out), "Cluster projects/p/regions/r/clusters/c not found.\n");
        Ok(())
    }
}
