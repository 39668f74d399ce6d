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
use crate::names::{LOCATION, RECOGNIZER};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_speech_v2 as speech;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client.list_recognizers().set_parent(&parent).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let recognizer = match item {
            Ok(r) => r,
            Err(e) => {
                Remediation::new()
                    .on_permission_denied(format!(
                        "The caller cannot list recognizers in {parent}. Grant the roles/speech.editor role."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{} [{:?}]",
            RECOGNIZER.short_id(&recognizer.name),
            recognizer.state
        )?;
    }
    if count == 0 {
        writeln!(out, "No recognizers found in {parent}")?;
    }
    Ok(())
}
