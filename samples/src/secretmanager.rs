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

//! Samples for [Secret Manager](https://cloud.google.com/secret-manager).

pub mod access_secret_version;
pub mod add_secret_version;
pub mod create_secret;
pub mod delete_secret;
pub mod destroy_secret_version;
pub mod disable_secret_version;
pub mod get_secret;
pub mod list_secrets;
pub mod update_secret;

use crate::args::ProjectArg;
use crate::display::parse_key_value;
use crate::options::ClientOptions;
use google_cloud_secretmanager_v1 as sm;
use std::io::Write;

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a secret with automatic replication.
    CreateSecret {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
    },
    /// Print the metadata of a secret.
    GetSecret {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
    },
    /// List the secrets in a project.
    ListSecrets {
        #[command(flatten)]
        project: ProjectArg,
        /// Only list secrets matching this filter, e.g. `labels.env=test`.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Replace the labels of a secret.
    UpdateSecret {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
        /// A label in `key=value` format, may be repeated.
        #[arg(long = "label", value_parser = parse_key_value)]
        labels: Vec<(String, String)>,
    },
    /// Delete a secret and all its versions.
    DeleteSecret {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
    },
    /// Add a new version with the given payload.
    AddSecretVersion {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
        #[arg(long)]
        payload: String,
    },
    /// Print the payload of a secret version.
    AccessSecretVersion {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
        #[arg(long, alias = "version_id", default_value = "latest")]
        version_id: String,
    },
    /// Disable a secret version.
    DisableSecretVersion {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
        #[arg(long, alias = "version_id")]
        version_id: String,
    },
    /// Destroy the payload of a secret version.
    DestroySecretVersion {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, alias = "secret_id")]
        secret_id: String,
        #[arg(long, alias = "version_id")]
        version_id: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(sm::client::SecretManagerService::builder())
        .build()
        .await?;
    match command {
        Command::CreateSecret { project, secret_id } => {
            create_secret::sample(out, &client, &project.project_id, &secret_id).await
        }
        Command::GetSecret { project, secret_id } => {
            get_secret::sample(out, &client, &project.project_id, &secret_id).await
        }
        Command::ListSecrets { project, filter } => {
            list_secrets::sample(out, &client, &project.project_id, filter.as_deref()).await
        }
        Command::UpdateSecret {
            project,
            secret_id,
            labels,
        } => update_secret::sample(out, &client, &project.project_id, &secret_id, &labels).await,
        Command::DeleteSecret { project, secret_id } => {
            delete_secret::sample(out, &client, &project.project_id, &secret_id).await
        }
        Command::AddSecretVersion {
            project,
            secret_id,
            payload,
        } => {
            add_secret_version::sample(
                out,
                &client,
                &project.project_id,
                &secret_id,
                payload.as_bytes(),
            )
            .await
        }
        Command::AccessSecretVersion {
            project,
            secret_id,
            version_id,
        } => {
            access_secret_version::sample(
                out,
                &client,
                &project.project_id,
                &secret_id,
                &version_id,
            )
            .await
        }
        Command::DisableSecretVersion {
            project,
            secret_id,
            version_id,
        } => {
            disable_secret_version::sample(
                out,
                &client,
                &project.project_id,
                &secret_id,
                &version_id,
            )
            .await
        }
        Command::DestroySecretVersion {
            project,
            secret_id,
            version_id,
        } => {
            destroy_secret_version::sample(
                out,
                &client,
                &project.project_id,
                &secret_id,
                &version_id,
            )
            .await
        }
    }
}
