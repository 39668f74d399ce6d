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
use crate::names::{LOCATION, RECOGNIZER};
use google_cloud_lro::Poller;
use google_cloud_speech_v2 as speech;
use std::io::Write;

use speech::model::{RecognitionConfig, Recognizer};

/// Creates a recognizer with `config` as its default configuration.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
    recognizer_id: &str,
    config: RecognitionConfig,
) -> anyhow::Result<()> {
    let name = RECOGNIZER.expand(&[project_id, location, recognizer_id])?;
    let result = client
        .create_recognizer()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_recognizer_id(recognizer_id)
        .set_recognizer(Recognizer::new().set_default_recognition_config(config))
        .poller()
        .until_done()
        .await;
    let recognizer = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Recognizer {name} already exists. Choose a different recognizer id."
                ))
                .on_invalid_argument(format!(
                    "Invalid recognizer. Ids use lowercase letters, numbers and `-`, and the model must be available in {location}."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created recognizer {}", recognizer.name)?;
    writeln!(out, "  state: {:?}", recognizer.state)?;
    Ok(())
}
