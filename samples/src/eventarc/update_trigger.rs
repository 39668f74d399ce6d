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
use crate::names::TRIGGER;
use google_cloud_eventarc_v1 as eventarc;
use google_cloud_lro::Poller;
use google_cloud_wkt as wkt;
use std::io::Write;

/// Replaces the labels of a trigger, leaving the other fields unchanged.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &eventarc::client::Eventarc,
    project_id: &str,
    location: &str,
    trigger_id: &str,
    labels: &[(String, String)],
) -> anyhow::Result<()> {
    let name = TRIGGER.expand(&[project_id, location, trigger_id])?;
    let result = client
        .update_trigger()
        .set_trigger(
            eventarc::model::Trigger::new()
                .set_name(&name)
                .set_labels(labels.to_vec()),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["labels"]))
        .poller()
        .until_done()
        .await;
    let trigger = match result {
        Ok(t) => t,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Trigger {name} not found."))
                .on_invalid_argument(
                    "Invalid labels. Keys start with a lowercase letter and use lowercase letters, numbers, `-` and `_`.",
                )
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(
        out,
        "Updated trigger {}, labels: {}",
        trigger.name,
        display::labels(&trigger.labels)
    )?;
    Ok(())
}
