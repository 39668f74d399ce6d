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
use crate::names::{GLOSSARY, LOCATION};
use google_cloud_translation_v3 as translation;
use std::io::Write;

use translation::model::TranslateTextGlossaryConfig;

/// The source and target languages of a translation.
#[derive(Clone, Copy, Debug)]
pub struct Languages<'a> {
    /// When `None` the service detects the source language.
    pub source: Option<&'a str>,
    pub target: &'a str,
}

/// Translates `contents`, optionally applying a glossary.
///
/// Each translation is printed on its own line, with the detected source
/// language when the request does not set one.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
    languages: Languages<'_>,
    glossary_id: Option<&str>,
    contents: &[String],
) -> anyhow::Result<()> {
    let mut builder = client
        .translate_text()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_mime_type("text/plain")
        .set_target_language_code(languages.target)
        .set_contents(contents.iter().cloned());
    if let Some(source) = languages.source {
        builder = builder.set_source_language_code(source);
    }
    if let Some(id) = glossary_id {
        let glossary = GLOSSARY.expand(&[project_id, location, id])?;
        builder = builder
            .set_glossary_config(TranslateTextGlossaryConfig::new().set_glossary(glossary));
    }
    let response = match builder.send().await {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(format!(
                    "Invalid translation request. Check the language codes, glossaries need a source language and a location other than global, got {location}."
                ))
                .on_not_found(format!(
                    "Glossary {} not found in {location}.",
                    glossary_id.unwrap_or_default()
                ))
                .on_permission_denied(format!(
                    "The caller cannot use Cloud Translation in {project_id}. Enable the API and grant the roles/cloudtranslate.user role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    // Glossary translations are returned in addition to the plain ones.
    let translations = if response.glossary_translations.is_empty() {
        &response.translations
    } else {
        &response.glossary_translations
    };
    for t in translations {
        if t.detected_language_code.is_empty() {
            writeln!(out, "{}", t.translated_text)?;
        } else {
            writeln!(out, "[{}] {}", t.detected_language_code, t.translated_text)?;
        }
    }
    Ok(())
}
