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

use super::filters;
use crate::diagnostics::Remediation;
use crate::names::{LOCATION, TRIGGER};
use google_cloud_eventarc_v1 as eventarc;
use google_cloud_lro::Poller;
use std::io::Write;

use eventarc::model::{CloudRun, Destination, EventFilter, Trigger};

/// The Cloud Run service receiving the events of a trigger.
#[derive(Clone, Copy, Debug)]
pub struct CloudRunDestination<'a> {
    pub service: &'a str,
    pub region: &'a str,
}

/// Creates a trigger and waits for the long-running operation.
#[allow(clippy::too_many_arguments)]
pub async fn sample<W: Write>(
    out: &mut W,
    client: &eventarc::client::Eventarc,
    project_id: &str,
    location: &str,
    trigger_id: &str,
    event_filters: &[(String, String)],
    destination: CloudRunDestination<'_>,
    service_account: Option<&str>,
) -> anyhow::Result<()> {
    let name = TRIGGER.expand(&[project_id, location, trigger_id])?;
    let trigger = Trigger::new()
        .set_name(&name)
        .set_event_filters(
            event_filters
                .iter()
                .map(|(k, v)| EventFilter::new().set_attribute(k).set_value(v)),
        )
        .set_destination(
            Destination::new().set_cloud_run(
                CloudRun::new()
                    .set_service(destination.service)
                    .set_region(destination.region),
            ),
        )
        .set_service_account(service_account.unwrap_or_default());
    let result = client
        .create_trigger()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_trigger_id(trigger_id)
        .set_trigger(trigger)
        .poller()
        .until_done()
        .await;
    let trigger = match result {
        Ok(t) => t,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Trigger {name} already exists. Choose a different trigger id."
                ))
                .on_invalid_argument(
                    "Invalid event filters. Use list-providers to find the supported event types and attributes.",
                )
                .on_failed_precondition(format!(
                    "Cloud Run service {} not found in {}. Deploy it before creating the trigger.",
                    destination.service, destination.region
                ))
                .on_permission_denied(format!(
                    "The caller cannot create triggers in {project_id}. Grant the roles/eventarc.admin role and roles/iam.serviceAccountUser on the service account."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created trigger {}", trigger.name)?;
    writeln!(out, "  filters: {}", filters(&trigger))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventarc::mocks::MockEventarc;
    use crate::testing::{already_exists, operation_done, operation_failed, output};
    use google_cloud_gax::error::rpc::Code;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;

    const DESTINATION: CloudRunDestination<'static> = CloudRunDestination {
        service: "hello",
        region: "us-central1",
    };

    fn event_filters() -> Vec<(String, String)> {
        vec![(
            "type".to_string(),
            "google.cloud.pubsub.topic.v1.messagePublished".to_string(),
        )]
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let created = Trigger::new()
            .set_name("projects/p/locations/us-central1/triggers/t")
            .set_event_filters([EventFilter::new()
                .set_attribute("type")
                .set_value("google.cloud.pubsub.topic.v1.messagePublished")]);
        let any = wkt::Any::from_msg(&created)?;
        let mut mock = MockEventarc::new();
        mock.expect_create_trigger()
            .withf(|r, _| {
                let trigger = r.trigger.as_ref();
                let run = trigger
                    .and_then(|t| t.destination.as_ref())
                    .and_then(|d| d.cloud_run());
                r.parent == "projects/p/locations/us-central1"
                    && r.trigger_id == "t"
                    && trigger.map(|t| t.event_filters.len()) == Some(1)
                    && trigger.map(|t| t.service_account.as_str())
                        == Some("sa@p.iam.gserviceaccount.com")
                    && run.map(|c| c.service.as_str()) == Some("hello")
                    && run.map(|c| c.region.as_str()) == Some("us-central1")
            })
            .return_once(move |_, _| operation_done(any));
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(
            &mut out,
            &client,
            "p",
            "us-central1",
            "t",
            &event_filters(),
            DESTINATION,
            Some("sa@p.iam.gserviceaccount.com"),
        )
        .await?;
        assert_eq!(
            output(out),
            "Created trigger projects/p/locations/us-central1/triggers/t\n  filters: type=google.cloud.pubsub.topic.v1.messagePublished\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn exists() -> anyhow::Result<()> {
        let mut mock = MockEventarc::new();
        mock.expect_create_trigger()
            .return_once(|_, _| Err(already_exists()));
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "t", &event_filters(), DESTINATION, None).await?;
        assert_eq!(
            output(out),
            "Trigger projects/p/locations/us-central1/triggers/t already exists. Choose a different trigger id.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_service() -> anyhow::Result<()> {
        let mut mock = MockEventarc::new();
        mock.expect_create_trigger()
            .return_once(|_, _| operation_failed(Code::FailedPrecondition, "service not found"));
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "t", &event_filters(), DESTINATION, None).await?;
        assert_eq!(
            output(out),
            "Cloud Run service hello not found in us-central1. Deploy it before creating the trigger.\n"
        );
        Ok(())
    }
}
