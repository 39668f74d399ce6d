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

//! Samples for [Cloud Translation](https://cloud.google.com/translate/docs/advanced/translating-text-v3).
//!
//! Glossaries are regional resources, they are only available in
//! `us-central1`. Text translation without a glossary can use `global`.

pub mod create_glossary;
pub mod delete_glossary;
pub mod detect_language;
pub mod get_glossary;
pub mod get_supported_languages;
pub mod list_glossaries;
pub mod translate_text;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_translation_v3 as translation;
use std::io::Write;

const GLOSSARY_LOCATION: &str = "us-central1";

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Translate text into the target language.
    TranslateText {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = "global")]
        location: String,
        /// The target language, e.g. `fr`.
        #[arg(long = "target", alias = "target_language_code")]
        target_language_code: String,
        /// The source language. The service detects it when unset.
        #[arg(long = "source", alias = "source_language_code")]
        source_language_code: Option<String>,
        /// Apply this glossary, which requires a source language and a
        /// regional location.
        #[arg(long, alias = "glossary_id", requires = "source_language_code")]
        glossary_id: Option<String>,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Detect the language of some text.
    DetectLanguage {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = "global")]
        location: String,
        text: String,
    },
    /// List the supported languages.
    GetSupportedLanguages {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = "global")]
        location: String,
        /// Print the language names in this language.
        #[arg(long, alias = "display_language_code")]
        display_language_code: Option<String>,
    },
    /// Create a glossary from a CSV file of equivalent terms.
    CreateGlossary {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = GLOSSARY_LOCATION)]
        location: String,
        #[arg(long, alias = "glossary_id")]
        glossary_id: String,
        /// The CSV file, e.g. `gs://cloud-samples-data/translation/glossary.csv`.
        #[arg(long, alias = "input_uri")]
        input_uri: String,
        /// A language in the glossary, may be repeated.
        #[arg(long = "language-code", num_args = 1, required = true)]
        language_codes: Vec<String>,
    },
    /// Print a glossary.
    GetGlossary {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = GLOSSARY_LOCATION)]
        location: String,
        #[arg(long, alias = "glossary_id")]
        glossary_id: String,
    },
    /// List the glossaries in a location.
    ListGlossaries {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = GLOSSARY_LOCATION)]
        location: String,
    },
    /// Delete a glossary.
    DeleteGlossary {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = GLOSSARY_LOCATION)]
        location: String,
        #[arg(long, alias = "glossary_id")]
        glossary_id: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(translation::client::TranslationService::builder())
        .build()
        .await?;
    match command {
        Command::TranslateText {
            project,
            location,
            target_language_code,
            source_language_code,
            glossary_id,
            text,
        } => {
            let languages = translate_text::Languages {
                source: source_language_code.as_deref(),
                target: &target_language_code,
            };
            translate_text::sample(
                out,
                &client,
                &project.project_id,
                &location,
                languages,
                glossary_id.as_deref(),
                &text,
            )
            .await
        }
        Command::DetectLanguage {
            project,
            location,
            text,
        } => detect_language::sample(out, &client, &project.project_id, &location, &text).await,
        Command::GetSupportedLanguages {
            project,
            location,
            display_language_code,
        } => {
            get_supported_languages::sample(
                out,
                &client,
                &project.project_id,
                &location,
                display_language_code.as_deref(),
            )
            .await
        }
        Command::CreateGlossary {
            project,
            location,
            glossary_id,
            input_uri,
            language_codes,
        } => {
            create_glossary::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &glossary_id,
                &input_uri,
                &language_codes,
            )
            .await
        }
        Command::GetGlossary {
            project,
            location,
            glossary_id,
        } => get_glossary::sample(out, &client, &project.project_id, &location, &glossary_id).await,
        Command::ListGlossaries { project, location } => {
            list_glossaries::sample(out, &client, &project.project_id, &location).await
        }
        Command::DeleteGlossary {
            project,
            location,
            glossary_id,
        } => {
            delete_glossary::sample(out, &client, &project.project_id, &location, &glossary_id)
                .await
        }
    }
}

/// The languages of a glossary, either a pair or an equivalent-term set.
fn glossary_languages(glossary: &translation::model::Glossary) -> String {
    if let Some(pair) = glossary.language_pair() {
        return format!(
            "{} -> {}",
            pair.source_language_code, pair.target_language_code
        );
    }
    glossary
        .language_codes_set()
        .map(|set| set.language_codes.join(", "))
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use translation::model::Glossary;
    use translation::model::glossary::{LanguageCodePair, LanguageCodesSet};

    #[test]
    fn languages() {
        let pair = Glossary::new().set_language_pair(
            LanguageCodePair::new()
                .set_source_language_code("en")
                .set_target_language_code("es"),
        );
        assert_eq!(glossary_languages(&pair), "en -> es");

        let set = Glossary::new()
            .set_language_codes_set(LanguageCodesSet::new().set_language_codes(["en", "es", "fr"]));
        assert_eq!(glossary_languages(&set), "en, es, fr");

        assert_eq!(glossary_languages(&Glossary::new()), "");
    }
}
