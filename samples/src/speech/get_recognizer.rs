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
use crate::names::RECOGNIZER;
use google_cloud_speech_v2 as speech;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
    recognizer_id: &str,
) -> anyhow::Result<()> {
    let name = RECOGNIZER.expand(&[project_id, location, recognizer_id])?;
    let recognizer = match client.get_recognizer().set_name(&name).send().await {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!(
                    "Recognizer {name} not found. Verify the location and recognizer id."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let config = recognizer.default_recognition_config.as_ref();
    writeln!(out, "Recognizer {}", recognizer.name)?;
    writeln!(out, "  state: {:?}", recognizer.state)?;
    writeln!(out, "  model: {}", config.map_or("", |c| c.model.as_str()))?;
    writeln!(
        out,
        "  languages: {}",
        config.map(|c| c.language_codes.join(", ")).unwrap_or_default()
    )?;
    writeln!(
        out,
        "  created: {}",
        display::timestamp(recognizer.create_time.as_ref())
    )?;
    Ok(())
}
