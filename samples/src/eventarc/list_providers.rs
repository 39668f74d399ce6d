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
use crate::names::{LOCATION, PROVIDER};
use google_cloud_eventarc_v1 as eventarc;
use google_cloud_gax::paginator::ItemPaginator as _;
use std::io::Write;

/// Lists the event providers and the event types they emit.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &eventarc::client::Eventarc,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client.list_providers().set_parent(&parent).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let provider = match item {
            Ok(p) => p,
            Err(e) => {
                Remediation::new()
                    .on_invalid_argument(format!("Invalid location {location:?}."))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{}: {}",
            PROVIDER.short_id(&provider.name),
            provider.display_name
        )?;
        for event_type in &provider.event_types {
            writeln!(out, "  {}", event_type.r#type)?;
        }
    }
    if count == 0 {
        writeln!(out, "No providers found in {parent}")?;
    }
    Ok(())
}
