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
use crate::names::GLOSSARY;
use google_cloud_lro::Poller;
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
    let result = client
        .delete_glossary()
        .set_name(&name)
        .poller()
        .until_done()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Glossary {name} not found, nothing to delete."))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Deleted glossary {}", response.name)?;
    Ok(())
}
