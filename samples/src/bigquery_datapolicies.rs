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

//! Samples for [BigQuery data policies].
//!
//! Data policies mask the values of columns tagged with a policy tag.
//!
//! [BigQuery data policies]: https://cloud.google.com/bigquery/docs/column-data-masking-intro

pub mod create_data_policy;
pub mod delete_data_policy;
pub mod get_data_policy;
pub mod get_iam_policy;
pub mod list_data_policies;
pub mod rename_data_policy;
pub mod update_data_policy;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_bigquery_datapolicies_v1 as datapolicies;
use std::io::Write;

use datapolicies::model::data_masking_policy::PredefinedExpression;

const DEFAULT_LOCATION: &str = "us";

/// The masking rules selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MaskingExpression {
    Sha256,
    AlwaysNull,
    DefaultMaskingValue,
    LastFourCharacters,
    FirstFourCharacters,
    EmailMask,
    DateYearMask,
}

impl From<MaskingExpression> for PredefinedExpression {
    fn from(value: MaskingExpression) -> Self {
        match value {
            MaskingExpression::Sha256 => Self::Sha256,
            MaskingExpression::AlwaysNull => Self::AlwaysNull,
            MaskingExpression::DefaultMaskingValue => Self::DefaultMaskingValue,
            MaskingExpression::LastFourCharacters => Self::LastFourCharacters,
            MaskingExpression::FirstFourCharacters => Self::FirstFourCharacters,
            MaskingExpression::EmailMask => Self::EmailMask,
            MaskingExpression::DateYearMask => Self::DateYearMask,
        }
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a data masking policy for a policy tag.
    CreateDataPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
        /// The taxonomy containing the policy tag.
        #[arg(long, alias = "taxonomy_id")]
        taxonomy_id: String,
        #[arg(long, alias = "policy_tag_id")]
        policy_tag_id: String,
        #[arg(long, value_enum, default_value_t = MaskingExpression::Sha256)]
        expression: MaskingExpression,
    },
    /// Print a data policy.
    GetDataPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
    },
    /// List the data policies in a location.
    ListDataPolicies {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        /// Only list policies matching this filter, e.g. `policy_tag:projects/p/locations/us/taxonomies/1/policyTags/*`.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Change the masking expression of a data policy.
    UpdateDataPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
        #[arg(long, value_enum)]
        expression: MaskingExpression,
    },
    /// Rename a data policy.
    RenameDataPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
        #[arg(long, alias = "new_data_policy_id")]
        new_data_policy_id: String,
    },
    /// Delete a data policy.
    DeleteDataPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
    },
    /// Print the IAM policy of a data policy.
    GetIamPolicy {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "data_policy_id")]
        data_policy_id: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(datapolicies::client::DataPolicyService::builder())
        .build()
        .await?;
    match command {
        Command::CreateDataPolicy {
            project,
            location,
            data_policy_id,
            taxonomy_id,
            policy_tag_id,
            expression,
        } => {
            create_data_policy::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &data_policy_id,
                &taxonomy_id,
                &policy_tag_id,
                expression.into(),
            )
            .await
        }
        Command::GetDataPolicy {
            project,
            location,
            data_policy_id,
        } => {
            get_data_policy::sample(out, &client, &project.project_id, &location, &data_policy_id)
                .await
        }
        Command::ListDataPolicies {
            project,
            location,
            filter,
        } => {
            list_data_policies::sample(
                out,
                &client,
                &project.project_id,
                &location,
                filter.as_deref(),
            )
            .await
        }
        Command::UpdateDataPolicy {
            project,
            location,
            data_policy_id,
            expression,
        } => {
            update_data_policy::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &data_policy_id,
                expression.into(),
            )
            .await
        }
        Command::RenameDataPolicy {
            project,
            location,
            data_policy_id,
            new_data_policy_id,
        } => {
            rename_data_policy::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &data_policy_id,
                &new_data_policy_id,
            )
            .await
        }
        Command::DeleteDataPolicy {
            project,
            location,
            data_policy_id,
        } => {
            delete_data_policy::sample(out, &client, &project.project_id, &location, &data_policy_id)
                .await
        }
        Command::GetIamPolicy {
            project,
            location,
            data_policy_id,
        } => {
            get_iam_policy::sample(out, &client, &project.project_id, &location, &data_policy_id)
                .await
        }
    }
}

/// A short description of the masking rule in `policy`.
fn masking_rule(policy: &datapolicies::model::DataPolicy) -> String {
    match policy.data_masking_policy() {
        None => "none".to_string(),
        Some(m) => match (m.predefined_expression(), m.routine()) {
            (Some(e), _) => format!("{e:?}"),
            (None, Some(r)) => format!("routine {r}"),
            (None, None) => "unspecified".to_string(),
        },
    }
}
