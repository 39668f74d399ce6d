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
use google_cloud_translation_v3 as translation;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
    text: &str,
) -> anyhow::Result<()> {
    let result = client
        .detect_language()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_mime_type("text/plain")
        .set_content(text)
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_permission_denied(format!(
                    "The caller cannot use Cloud Translation in {project_id}. Enable the API and grant the roles/cloudtranslate.user role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    if response.languages.is_empty() {
        writeln!(out, "No language detected.")?;
    }
    for language in &response.languages {
        writeln!(
            out,
            "{} (confidence {:.2})",
            language.language_code, language.confidence
        )?;
    }
    Ok(())
}
