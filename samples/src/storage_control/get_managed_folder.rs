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
use crate::names::MANAGED_FOLDER;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    managed_folder_id: &str,
) -> anyhow::Result<()> {
    let name = MANAGED_FOLDER.expand(&["_", bucket_id, managed_folder_id])?;
    let folder = match client.get_managed_folder().set_name(&name).send().await {
        Ok(f) => f,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Managed folder {name} not found."))
                .on_permission_denied(format!(
                    "The caller cannot read {name}. Grant the roles/storage.objectViewer role on the bucket."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Managed folder {}", folder.name)?;
    writeln!(out, "  metageneration: {}", folder.metageneration)?;
    writeln!(
        out,
        "  updated: {}",
        display::timestamp(folder.update_time.as_ref())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_control::mocks::MockStorageControl;
    use crate::testing::{not_found, ok, output};
    use google_cloud_storage::model::ManagedFolder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_managed_folder()
            .withf(|r, _| r.name == "projects/_/buckets/b/managedFolders/m")
            .return_once(|r, _| ok(ManagedFolder::new().set_name(r.name).set_metageneration(1)));
        let client = StorageControl::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "b", "m").await?;
        assert_eq!(
            output(out),
            "Managed folder projects/_/buckets/b/managedFolders/m\n  metageneration: 1\n  updated: unset\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_managed_folder()
            .return_once(|_, _| Err(not_found()));
        let client = StorageControl::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "b", "m").await?;
        assert_eq!(
            output(out),
            "Managed folder projects/_/buckets/b/managedFolders/m not found.\n"
        );
        Ok(())
    }
}
