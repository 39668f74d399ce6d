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
use crate::names::TRIGGER;
use google_cloud_eventarc_v1 as eventarc;
use google_cloud_lro::Poller;
use std::io::Write;

/// Deletes a trigger. The operation returns the deleted trigger.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &eventarc::client::Eventarc,
    project_id: &str,
    location: &str,
    trigger_id: &str,
) -> anyhow::Result<()> {
    let name = TRIGGER.expand(&[project_id, location, trigger_id])?;
    let result = client
        .delete_trigger()
        .set_name(&name)
        .poller()
        .until_done()
        .await;
    let trigger = match result {
        Ok(t) => t,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Trigger {name} not found, nothing to delete."))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Deleted trigger {}", trigger.name)?;
    Ok(())
}
