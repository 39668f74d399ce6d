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
use crate::names::PROJECT;
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

/// Lists the metric types available in a project.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::MetricService,
    project_id: &str,
    filter: Option<&str>,
) -> anyhow::Result<()> {
    let mut items = client
        .list_metric_descriptors()
        .set_name(PROJECT.expand(&[project_id])?)
        .set_filter(filter.unwrap_or_default())
        .by_item();
    while let Some(item) = items.next().await {
        let descriptor = match item {
            Ok(d) => d,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!("Project {project_id} not found."))
                    .on_invalid_argument(format!(
                        "Invalid filter {:?}. See https://cloud.google.com/monitoring/api/v3/filters.",
                        filter.unwrap_or_default()
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        writeln!(out, "{}", descriptor.r#type)?;
        if !descriptor.description.is_empty() {
            writeln!(out, "  {}", descriptor.description)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::mocks::MockMetricService;
    use crate::testing::{invalid_argument, not_found, ok, output};
    use google_cloud_api::model::MetricDescriptor;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockMetricService::new();
        mock.expect_list_metric_descriptors()
            .withf(|r, _| r.name == "projects/p" && r.filter == "metric.type = starts_with(\"custom.\")")
            .return_once(|_, _| {
                ok(
                    monitoring::model::ListMetricDescriptorsResponse::new().set_metric_descriptors([
                        MetricDescriptor::new()
                            .set_type("custom.googleapis.com/a")
                            .set_description("The a metric."),
                        MetricDescriptor::new().set_type("custom.googleapis.com/b"),
                    ]),
                )
            });
        let client = monitoring::client::MetricService::from_stub(mock);

        let mut out = Vec::new();
        sample(
            &mut out,
            &client,
            "p",
            Some("metric.type = starts_with(\"custom.\")"),
        )
        .await?;
        assert_eq!(
            output(out),
            "custom.googleapis.com/a\n  The a metric.\ncustom.googleapis.com/b\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_filter() -> anyhow::Result<()> {
        let mut mock = MockMetricService::new();
        mock.expect_list_metric_descriptors()
            .return_once(|_, _| Err(invalid_argument()));
        let client = monitoring::client::MetricService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", Some("bad")).await?;
        let got = output(out);
        assert!(got.starts_with("Invalid filter \"bad\"."), "{got}");
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockMetricService::new();
        mock.expect_list_metric_descriptors()
            .return_once(|_, _| Err(not_found()));
        let client = monitoring::client::MetricService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", None).await?;
        assert_eq!(output(out), "Project p not found.\n");
        Ok(())
    }
}
