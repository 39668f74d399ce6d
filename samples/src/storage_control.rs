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

//! Samples for the Cloud Storage control plane.
//!
//! Folders require a bucket with hierarchical namespace enabled. Managed
//! folders work on any bucket with uniform bucket-level access.

pub mod create_folder;
pub mod create_managed_folder;
pub mod delete_folder;
pub mod delete_managed_folder;
pub mod get_folder;
pub mod get_managed_folder;
pub mod list_folders;
pub mod list_managed_folders;
pub mod rename_folder;

use crate::options::ClientOptions;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a folder in a hierarchical namespace bucket.
    CreateFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        /// The folder id, e.g. `reports/2025/`.
        #[arg(long, alias = "folder_id")]
        folder_id: String,
    },
    /// Print a folder.
    GetFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "folder_id")]
        folder_id: String,
    },
    /// List the folders in a bucket.
    ListFolders {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        /// Only list folders with this prefix.
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Rename a folder, including all its objects and sub-folders.
    RenameFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "folder_id")]
        folder_id: String,
        #[arg(long, alias = "destination_folder_id")]
        destination_folder_id: String,
    },
    /// Delete an empty folder.
    DeleteFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "folder_id")]
        folder_id: String,
    },
    /// Create a managed folder.
    CreateManagedFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "managed_folder_id")]
        managed_folder_id: String,
    },
    /// Print a managed folder.
    GetManagedFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "managed_folder_id")]
        managed_folder_id: String,
    },
    /// List the managed folders in a bucket.
    ListManagedFolders {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
    },
    /// Delete a managed folder.
    DeleteManagedFolder {
        #[arg(long, alias = "bucket_id")]
        bucket_id: String,
        #[arg(long, alias = "managed_folder_id")]
        managed_folder_id: String,
        /// Delete the managed folder even if it contains objects.
        #[arg(long, alias = "allow_non_empty", default_value_t = false)]
        allow_non_empty: bool,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options.configure(StorageControl::builder()).build().await?;
    match command {
        Command::CreateFolder {
            bucket_id,
            folder_id,
        } => create_folder::sample(out, &client, &bucket_id, &folder_id).await,
        Command::GetFolder {
            bucket_id,
            folder_id,
        } => get_folder::sample(out, &client, &bucket_id, &folder_id).await,
        Command::ListFolders { bucket_id, prefix } => {
            list_folders::sample(out, &client, &bucket_id, prefix.as_deref()).await
        }
        Command::RenameFolder {
            bucket_id,
            folder_id,
            destination_folder_id,
        } => {
            rename_folder::sample(out, &client, &bucket_id, &folder_id, &destination_folder_id)
                .await
        }
        Command::DeleteFolder {
            bucket_id,
            folder_id,
        } => delete_folder::sample(out, &client, &bucket_id, &folder_id).await,
        Command::CreateManagedFolder {
            bucket_id,
            managed_folder_id,
        } => create_managed_folder::sample(out, &client, &bucket_id, &managed_folder_id).await,
        Command::GetManagedFolder {
            bucket_id,
            managed_folder_id,
        } => get_managed_folder::sample(out, &client, &bucket_id, &managed_folder_id).await,
        Command::ListManagedFolders { bucket_id } => {
            list_managed_folders::sample(out, &client, &bucket_id).await
        }
        Command::DeleteManagedFolder {
            bucket_id,
            managed_folder_id,
            allow_non_empty,
        } => {
            delete_managed_folder::sample(
                out,
                &client,
                &bucket_id,
                &managed_folder_id,
                allow_non_empty,
            )
            .await
        }
    }
}
