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
use crate::names::PROCESSOR;
use google_cloud_documentai_v1 as documentai;
use google_cloud_lro::Poller;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &documentai::client::DocumentProcessorService,
    project_id: &str,
    location: &str,
    processor_id: &str,
) -> anyhow::Result<()> {
    let name = PROCESSOR.expand(&[project_id, location, processor_id])?;
    let result = client
        .delete_processor()
        .set_name(&name)
        .poller()
        .until_done()
        .await;
    if let Err(e) = result {
        Remediation::new()
            .on_not_found(format!("Processor {name} not found, nothing to delete."))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted processor {name}")?;
    Ok(())
}
