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

/// Lists the supported languages. With `display_language_code` the service
/// also returns the name of each language in that language.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
    display_language_code: Option<&str>,
) -> anyhow::Result<()> {
    let mut builder = client
        .get_supported_languages()
        .set_parent(LOCATION.expand(&[project_id, location])?);
    if let Some(code) = display_language_code {
        builder = builder.set_display_language_code(code);
    }
    let response = match builder.send().await {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(format!(
                    "Unsupported display language {:?}.",
                    display_language_code.unwrap_or_default()
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    for language in &response.languages {
        if language.display_name.is_empty() {
            writeln!(out, "{}", language.language_code)?;
        } else {
            writeln!(out, "{}: {}", language.language_code, language.display_name)?;
        }
    }
    writeln!(out, "{} languages", response.languages.len())?;
    Ok(())
}
