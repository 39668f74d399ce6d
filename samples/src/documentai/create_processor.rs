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
use crate::names::LOCATION;
use google_cloud_documentai_v1 as documentai;
use std::io::Write;

use documentai::model::Processor;

/// Creates a processor. The service assigns the processor id.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &documentai::client::DocumentProcessorService,
    project_id: &str,
    location: &str,
    display_name: &str,
    processor_type: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let result = client
        .create_processor()
        .set_parent(&parent)
        .set_processor(
            Processor::new()
                .set_display_name(display_name)
                .set_type(processor_type),
        )
        .send()
        .await;
    let processor = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "A processor named {display_name:?} already exists in {parent}."
                ))
                .on_invalid_argument(format!(
                    "Invalid processor type {processor_type:?}. Use a type available in {location}, e.g. OCR_PROCESSOR."
                ))
                .on_permission_denied(format!(
                    "The caller cannot create processors in {project_id}. Grant the roles/documentai.editor role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created processor {}", processor.name)?;
    writeln!(out, "  state: {:?}", processor.state)?;
    Ok(())
}
