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
use crate::names;
use google_cloud_storage::{client::StorageControl, model::ManagedFolder};
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    managed_folder_id: &str,
) -> anyhow::Result<()> {
    let result = client
        .create_managed_folder()
        .set_parent(names::bucket(bucket_id)?)
        .set_managed_folder_id(managed_folder_id)
        .set_managed_folder(ManagedFolder::new())
        .send()
        .await;
    let folder = match result {
        Ok(f) => f,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Bucket {bucket_id} not found."))
                .on_already_exists(format!(
                    "Managed folder {managed_folder_id} already exists in bucket {bucket_id}."
                ))
                .on_failed_precondition(format!(
                    "Bucket {bucket_id} does not have uniform bucket-level access enabled."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created managed folder {}", folder.name)?;
    Ok(())
}
