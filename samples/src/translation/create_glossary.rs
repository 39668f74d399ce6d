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

use super::glossary_languages;
use crate::diagnostics::Remediation;
use crate::names::{GLOSSARY, LOCATION};
use google_cloud_lro::Poller;
use google_cloud_translation_v3 as translation;
use std::io::Write;

use translation::model::glossary::LanguageCodesSet;
use translation::model::{GcsSource, Glossary, GlossaryInputConfig};

/// Creates an equivalent-term set glossary.
///
/// Each row of the CSV file at `input_uri` holds the same term in each of
/// `language_codes`, in the order of the header row.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
    glossary_id: &str,
    input_uri: &str,
    language_codes: &[String],
) -> anyhow::Result<()> {
    let name = GLOSSARY.expand(&[project_id, location, glossary_id])?;
    let glossary = Glossary::new()
        .set_name(&name)
        .set_language_codes_set(
            LanguageCodesSet::new().set_language_codes(language_codes.iter().cloned()),
        )
        .set_input_config(
            GlossaryInputConfig::new().set_gcs_source(GcsSource::new().set_input_uri(input_uri)),
        );
    let result = client
        .create_glossary()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_glossary(glossary)
        .poller()
        .until_done()
        .await;
    let glossary = match result {
        Ok(g) => g,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Glossary {name} already exists. Delete it or choose a different glossary id."
                ))
                .on_invalid_argument(format!(
                    "Invalid glossary. Glossaries are only available in us-central1, got {location}, and need at least two languages."
                ))
                .on_permission_denied(format!(
                    "The Cloud Translation service agent cannot read {input_uri}. Grant it roles/storage.objectViewer on the bucket."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created glossary {}", glossary.name)?;
    writeln!(out, "  languages: {}", glossary_languages(&glossary))?;
    writeln!(out, "  entries: {}", glossary.entry_count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{already_exists, operation_done, output};
    use crate::translation::mocks::MockTranslationService;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;

    const CSV: &str = "gs://cloud-samples-data/translation/glossary.csv";
    const NAME: &str = "projects/p/locations/us-central1/glossaries/g";

    fn languages() -> Vec<String> {
        ["en", "es"].map(str::to_string).to_vec()
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let created = Glossary::new()
            .set_name(NAME)
            .set_language_codes_set(LanguageCodesSet::new().set_language_codes(["en", "es"]))
            .set_entry_count(42);
        let any = wkt::Any::from_msg(&created)?;
        let mut mock = MockTranslationService::new();
        mock.expect_create_glossary()
            .withf(|r, _| {
                let Some(g) = r.glossary.as_ref() else {
                    return false;
                };
                r.parent == "projects/p/locations/us-central1"
                    && g.name == NAME
                    && g.language_codes_set().map(|s| s.language_codes.clone())
                        == Some(vec!["en".to_string(), "es".to_string()])
                    && g.input_config
                        .as_ref()
                        .and_then(|c| c.gcs_source())
                        .map(|s| s.input_uri.as_str())
                        == Some(CSV)
            })
            .return_once(move |_, _| operation_done(any));
        let client = translation::client::TranslationService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "g", CSV, &languages()).await?;
        assert_eq!(
            output(out),
            format!("Created glossary {NAME}\n  languages: en, es\n  entries: 42\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn exists() -> anyhow::Result<()> {
        let mut mock = MockTranslationService::new();
        mock.expect_create_glossary()
            .return_once(|_, _| Err(already_exists()));
        let client = translation::client::TranslationService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "g", CSV, &languages()).await?;
        assert_eq!(
            output(out),
            format!(
                "Glossary {NAME} already exists. Delete it or choose a different glossary id.\n"
            )
        );
        Ok(())
    }
}
