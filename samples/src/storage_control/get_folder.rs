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
use crate::display;
use crate::names::FOLDER;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    folder_id: &str,
) -> anyhow::Result<()> {
    let name = FOLDER.expand(&["_", bucket_id, folder_id])?;
    let folder = match client.get_folder().set_name(&name).send().await {
        Ok(f) => f,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Folder {name} not found."))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Folder {}", folder.name)?;
    writeln!(out, "  metageneration: {}", folder.metageneration)?;
    writeln!(
        out,
        "  created: {}",
        display::timestamp(folder.create_time.as_ref())
    )?;
    Ok(())
}
