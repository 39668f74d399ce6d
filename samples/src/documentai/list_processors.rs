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
use crate::names::{LOCATION, PROCESSOR};
use google_cloud_documentai_v1 as documentai;
use google_cloud_gax::paginator::ItemPaginator as _;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &documentai::client::DocumentProcessorService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client.list_processors().set_parent(&parent).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let processor = match item {
            Ok(p) => p,
            Err(e) => {
                Remediation::new()
                    .on_permission_denied(format!(
                        "The caller cannot list processors in {parent}. Grant the roles/documentai.viewer role."
                    ))
                    .on_invalid_argument(format!(
                        "Invalid location {location:?}. Document AI uses `us` or `eu`."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{} [{:?}]: {} ({})",
            PROCESSOR.short_id(&processor.name),
            processor.state,
            processor.display_name,
            processor.r#type
        )?;
    }
    if count == 0 {
        writeln!(out, "No processors found in {parent}")?;
    }
    Ok(())
}
