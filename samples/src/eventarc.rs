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

//! Samples for [Eventarc](https://cloud.google.com/eventarc).

pub mod create_trigger;
pub mod delete_trigger;
pub mod get_trigger;
pub mod list_providers;
pub mod list_triggers;
pub mod update_trigger;

use crate::args::ProjectArg;
use crate::display::parse_key_value;
use crate::options::ClientOptions;
use google_cloud_eventarc_v1 as eventarc;
use std::io::Write;

const DEFAULT_LOCATION: &str = "us-central1";

#[derive(Clone, Debug, clap::Args)]
pub struct TriggerArgs {
    #[command(flatten)]
    pub project: ProjectArg,
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,
    #[arg(long, alias = "trigger_id")]
    pub trigger_id: String,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a trigger routing events to a Cloud Run service.
    CreateTrigger {
        #[command(flatten)]
        trigger: TriggerArgs,
        /// An event filter, e.g. `type=google.cloud.pubsub.topic.v1.messagePublished`. May be repeated.
        #[arg(long = "event-filter", value_parser = parse_key_value, required = true)]
        event_filters: Vec<(String, String)>,
        /// The Cloud Run service receiving the events.
        #[arg(long)]
        service: String,
        /// The region of the Cloud Run service, defaults to the trigger location.
        #[arg(long, alias = "service_region")]
        service_region: Option<String>,
        /// The service account used to invoke the Cloud Run service.
        #[arg(long, alias = "service_account")]
        service_account: Option<String>,
    },
    /// Print a trigger.
    GetTrigger {
        #[command(flatten)]
        trigger: TriggerArgs,
    },
    /// List the triggers in a location.
    ListTriggers {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Replace the labels of a trigger.
    UpdateTrigger {
        #[command(flatten)]
        trigger: TriggerArgs,
        /// A label, as `key=value`. May be repeated.
        #[arg(long = "label", value_parser = parse_key_value)]
        labels: Vec<(String, String)>,
    },
    /// Delete a trigger.
    DeleteTrigger {
        #[command(flatten)]
        trigger: TriggerArgs,
    },
    /// List the event providers in a location.
    ListProviders {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(eventarc::client::Eventarc::builder())
        .build()
        .await?;
    match command {
        Command::CreateTrigger {
            trigger,
            event_filters,
            service,
            service_region,
            service_account,
        } => {
            let destination = create_trigger::CloudRunDestination {
                service: &service,
                region: service_region.as_deref().unwrap_or(&trigger.location),
            };
            create_trigger::sample(
                out,
                &client,
                &trigger.project.project_id,
                &trigger.location,
                &trigger.trigger_id,
                &event_filters,
                destination,
                service_account.as_deref(),
            )
            .await
        }
        Command::GetTrigger { trigger } => {
            get_trigger::sample(
                out,
                &client,
                &trigger.project.project_id,
                &trigger.location,
                &trigger.trigger_id,
            )
            .await
        }
        Command::ListTriggers { project, location } => {
            list_triggers::sample(out, &client, &project.project_id, &location).await
        }
        Command::UpdateTrigger { trigger, labels } => {
            update_trigger::sample(
                out,
                &client,
                &trigger.project.project_id,
                &trigger.location,
                &trigger.trigger_id,
                &labels,
            )
            .await
        }
        Command::DeleteTrigger { trigger } => {
            delete_trigger::sample(
                out,
                &client,
                &trigger.project.project_id,
                &trigger.location,
                &trigger.trigger_id,
            )
            .await
        }
        Command::ListProviders { project, location } => {
            list_providers::sample(out, &client, &project.project_id, &location).await
        }
    }
}

/// Formats the event filters of a trigger as `attribute=value` pairs.
fn filters(trigger: &eventarc::model::Trigger) -> String {
    trigger
        .event_filters
        .iter()
        .map(|f| format!("{}={}", f.attribute, f.value))
        .collect::<Vec<_>>()
        .join(", ")
}


#[cfg(test)]
mod tests {
    use super::*;
    use eventarc::model::{EventFilter, Trigger};

    #[test]
    fn event_filters() {
        assert_eq!(filters(&Trigger::new()), "");
        let trigger = Trigger::new().set_event_filters([
            EventFilter::new()
                .set_attribute("type")
                .set_value("google.cloud.storage.object.v1.finalized"),
            EventFilter::new().set_attribute("bucket").set_value("b"),
        ]);
        assert_eq!(
            filters(&trigger),
            "type=google.cloud.storage.object.v1.finalized, bucket=b"
        );
    }
}
