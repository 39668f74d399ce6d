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
use crate::display;
use crate::names::GLOSSARY;
use google_cloud_translation_v3 as translation;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
    glossary_id: &str,
) -> anyhow::Result<()> {
    let name = GLOSSARY.expand(&[project_id, location, glossary_id])?;
    let glossary = match client.get_glossary().set_name(&name).send().await {
        Ok(g) => g,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Glossary {name} not found. Verify the location and glossary id."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let source = glossary
        .input_config
        .as_ref()
        .and_then(|c| c.gcs_source())
        .map_or("unknown", |s| s.input_uri.as_str());
    writeln!(out, "Glossary {}", glossary.name)?;
    writeln!(out, "  languages: {}", glossary_languages(&glossary))?;
    writeln!(out, "  entries: {}", glossary.entry_count)?;
    writeln!(out, "  source: {source}")?;
    writeln!(
        out,
        "  submitted: {}",
        display::timestamp(glossary.submit_time.as_ref())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{not_found, ok, output};
    use crate::translation::mocks::MockTranslationService;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;
    use translation::model::glossary::LanguageCodePair;
    use translation::model::{GcsSource, Glossary, GlossaryInputConfig};

    const NAME: &str = "projects/p/locations/us-central1/glossaries/g";

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockTranslationService::new();
        mock.expect_get_glossary()
            .withf(|r, _| r.name == NAME)
            .return_once(|r, _| {
                ok(Glossary::new()
                    .set_name(r.name)
                    .set_language_pair(
                        LanguageCodePair::new()
                            .set_source_language_code("en")
                            .set_target_language_code("de"),
                    )
                    .set_input_config(
                        GlossaryInputConfig::new()
                            .set_gcs_source(GcsSource::new().set_input_uri("gs://b/g.tsv")),
                    )
                    .set_entry_count(3)
                    .set_submit_time(wkt::Timestamp::default()))
            });
        let client = translation::client::TranslationService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "g").await?;
        assert_eq!(
            output(out),
            format!(
                "Glossary {NAME}\n  languages: en -> de\n  entries: 3\n  source: gs://b/g.tsv\n  submitted: 1970-01-01T00:00:00Z\n"
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockTranslationService::new();
        mock.expect_get_glossary()
            .return_once(|_, _| Err(not_found()));
        let client = translation::client::TranslationService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us-central1", "g").await?;
        assert_eq!(
            output(out),
            format!("Glossary {NAME} not found. Verify the location and glossary id.\n")
        );
        Ok(())
    }
}
