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
use crate::names::FOLDER;
use google_cloud_lro::Poller;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

/// Renames a folder and waits for the long-running operation to complete.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    folder_id: &str,
    destination_folder_id: &str,
) -> anyhow::Result<()> {
    let name = FOLDER.expand(&["_", bucket_id, folder_id])?;
    let result = client
        .rename_folder()
        .set_name(&name)
        .set_destination_folder_id(destination_folder_id)
        .poller()
        .until_done()
        .await;
    let folder = match result {
        Ok(f) => f,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Folder {name} not found."))
                .on_already_exists(format!(
                    "Folder {destination_folder_id} already exists in bucket {bucket_id}."
                ))
                .on_failed_precondition(format!(
                    "Folder {name} has a rename in progress, or the destination parent does not exist."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Renamed folder {name} to {}", folder.name)?;
    Ok(())
}
