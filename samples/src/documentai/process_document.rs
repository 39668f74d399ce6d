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
use crate::names::PROCESSOR;
use google_cloud_documentai_v1 as documentai;
use std::io::Write;

use documentai::model::RawDocument;

const MAX_TEXT: usize = 200;

/// Sends `content` inline to a processor and prints the extracted text.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &documentai::client::DocumentProcessorService,
    project_id: &str,
    location: &str,
    processor_id: &str,
    content: bytes::Bytes,
    mime_type: &str,
) -> anyhow::Result<()> {
    let name = PROCESSOR.expand(&[project_id, location, processor_id])?;
    let result = client
        .process_document()
        .set_name(&name)
        .set_raw_document(
            RawDocument::new()
                .set_content(content)
                .set_mime_type(mime_type),
        )
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Processor {name} not found. Verify the location and processor id."
                ))
                .on_invalid_argument(format!(
                    "The processor rejected the document. Verify that the MIME type {mime_type} matches the file."
                ))
                .on_failed_precondition(format!(
                    "Processor {name} is not enabled. Use enable-processor first."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let document = response.document.unwrap_or_default();
    writeln!(out, "Pages: {}", document.pages.len())?;
    writeln!(out, "Text: {}", display::truncate(&document.text, MAX_TEXT))?;
    Ok(())
}
