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

//! Samples for [Cloud Monitoring](https://cloud.google.com/monitoring).
//!
//! The API has a separate client for groups, alert policies, and metrics.

pub mod create_group;
pub mod delete_group;
pub mod enable_alert_policies;
pub mod get_group;
pub mod list_alert_policies;
pub mod list_groups;
pub mod list_metric_descriptors;
pub mod update_group;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_monitoring_v3 as monitoring;
use std::io::Write;

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a group of monitored resources.
    CreateGroup {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "display_name")]
        display_name: String,
        /// The filter selecting the group members, e.g. `resource.type = "gce_instance"`.
        #[arg(long)]
        filter: String,
    },
    /// Print a group.
    GetGroup {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "group_id")]
        group_id: String,
    },
    /// List the groups in a project.
    ListGroups {
        #[command(flatten)]
        project: ProjectArg,
    },
    /// Replace the display name and filter of a group.
    UpdateGroup {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "group_id")]
        group_id: String,
        #[arg(long, alias = "display_name")]
        display_name: String,
        #[arg(long)]
        filter: String,
    },
    /// Delete a group.
    DeleteGroup {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "group_id")]
        group_id: String,
    },
    /// List the alert policies in a project.
    ListAlertPolicies {
        #[command(flatten)]
        project: ProjectArg,
    },
    /// Enable or disable an alert policy.
    EnableAlertPolicies {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "alert_policy_id")]
        alert_policy_id: String,
        /// Disable the policy instead.
        #[arg(long, default_value_t = false)]
        disable: bool,
    },
    /// List the metric descriptors in a project.
    ListMetricDescriptors {
        #[command(flatten)]
        project: ProjectArg,
        /// Only list descriptors matching this filter, e.g. `metric.type = starts_with("custom.")`.
        #[arg(long)]
        filter: Option<String>,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::CreateGroup {
            project,
            display_name,
            filter,
        } => {
            let client = groups(options).await?;
            create_group::sample(out, &client, &project.project_id, &display_name, &filter).await
        }
        Command::GetGroup { project, group_id } => {
            let client = groups(options).await?;
            get_group::sample(out, &client, &project.project_id, &group_id).await
        }
        Command::ListGroups { project } => {
            let client = groups(options).await?;
            list_groups::sample(out, &client, &project.project_id).await
        }
        Command::UpdateGroup {
            project,
            group_id,
            display_name,
            filter,
        } => {
            let client = groups(options).await?;
            update_group::sample(
                out,
                &client,
                &project.project_id,
                &group_id,
                &display_name,
                &filter,
            )
            .await
        }
        Command::DeleteGroup { project, group_id } => {
            let client = groups(options).await?;
            delete_group::sample(out, &client, &project.project_id, &group_id).await
        }
        Command::ListAlertPolicies { project } => {
            let client = alert_policies(options).await?;
            list_alert_policies::sample(out, &client, &project.project_id).await
        }
        Command::EnableAlertPolicies {
            project,
            alert_policy_id,
            disable,
        } => {
            let client = alert_policies(options).await?;
            enable_alert_policies::sample(
                out,
                &client,
                &project.project_id,
                &alert_policy_id,
                !disable,
            )
            .await
        }
        Command::ListMetricDescriptors { project, filter } => {
            let client = options
                .configure(monitoring::client::MetricService::builder())
                .build()
                .await?;
            list_metric_descriptors::sample(out, &client, &project.project_id, filter.as_deref())
                .await
        }
    }
}

async fn groups(options: &ClientOptions) -> anyhow::Result<monitoring::client::GroupService> {
    let client = options
        .configure(monitoring::client::GroupService::builder())
        .build()
        .await?;
    Ok(client)
}

async fn alert_policies(
    options: &ClientOptions,
) -> anyhow::Result<monitoring::client::AlertPolicyService> {
    let client = options
        .configure(monitoring::client::AlertPolicyService::builder())
        .build()
        .await?;
    Ok(client)
}
