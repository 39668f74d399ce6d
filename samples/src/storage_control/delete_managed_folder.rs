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
use crate::names::MANAGED_FOLDER;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    managed_folder_id: &str,
    allow_non_empty: bool,
) -> anyhow::Result<()> {
    let name = MANAGED_FOLDER.expand(&["_", bucket_id, managed_folder_id])?;
    let result = client
        .delete_managed_folder()
        .set_name(&name)
        .set_allow_non_empty(allow_non_empty)
        .send()
        .await;
    if let Err(e) = result {
        Remediation::new()
            .on_not_found(format!(
                "Managed folder {name} not found, nothing to delete."
            ))
            .on_failed_precondition(format!(
                "Managed folder {name} is not empty. Use --allow-non-empty to delete it anyway."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted managed folder {name}")?;
    Ok(())
}
