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
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_translation_v3 as translation;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &translation::client::TranslationService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client.list_glossaries().set_parent(&parent).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let glossary = match item {
            Ok(g) => g,
            Err(e) => {
                Remediation::new()
                    .on_invalid_argument(format!(
                        "Glossaries are only available in us-central1, got {location}."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{} [{}] {} entries",
            GLOSSARY.short_id(&glossary.name),
            glossary_languages(&glossary),
            glossary.entry_count
        )?;
    }
    if count == 0 {
        writeln!(out, "No glossaries found in {parent}")?;
    }
    Ok(())
}
