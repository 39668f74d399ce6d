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
use crate::names::{self, FOLDER};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_storage::client::StorageControl;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
    prefix: Option<&str>,
) -> anyhow::Result<()> {
    let mut items = client
        .list_folders()
        .set_parent(names::bucket(bucket_id)?)
        .set_prefix(prefix.unwrap_or_default())
        .by_item();
    while let Some(item) = items.next().await {
        let folder = match item {
            Ok(f) => f,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!("Bucket {bucket_id} not found."))
                    .on_failed_precondition(format!(
                        "Bucket {bucket_id} does not have hierarchical namespace enabled."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        writeln!(out, "{}", FOLDER.short_id(&folder.name))?;
    }
    Ok(())
}
