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

use super::print_transcripts;
use crate::diagnostics::Remediation;
use crate::names::RECOGNIZER;
use google_cloud_speech_v2 as speech;
use std::io::Write;

use speech::model::RecognitionConfig;

/// Transcribes audio stored in Cloud Storage.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
    config: RecognitionConfig,
    uri: &str,
) -> anyhow::Result<()> {
    let recognizer = RECOGNIZER.expand(&[project_id, location, "_"])?;
    let result = client
        .recognize()
        .set_recognizer(&recognizer)
        .set_config(config)
        .set_uri(uri)
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Audio file {uri} not found."))
                .on_permission_denied(format!(
                    "The Speech-to-Text service agent cannot read {uri}. Grant it roles/storage.objectViewer on the bucket."
                ))
                .on_invalid_argument(format!(
                    "Invalid audio URI {uri:?}. Use a gs:// URI for audio up to 60 seconds long."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    print_transcripts(out, &response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::mocks::MockSpeech;
    use crate::speech::recognition_config;
    use crate::testing::{not_found, ok, output};
    use pretty_assertions::assert_eq;
    use speech::model::RecognizeResponse;

    const URI: &str = "gs://cloud-samples-data/speech/brooklyn_bridge.flac";

    #[tokio::test]
    async fn silence() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .withf(|r, _| {
                r.recognizer == "projects/p/locations/us/recognizers/_"
                    && r.uri().map(String::as_str) == Some(URI)
            })
            .return_once(|_, _| ok(RecognizeResponse::new()));
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", recognition_config("long", "en-US"), URI).await?;
        assert_eq!(output(out), "No speech recognized.\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .return_once(|_, _| Err(not_found()));
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", recognition_config("long", "en-US"), URI).await?;
        assert_eq!(output(out), format!("Audio file {URI} not found.\n"));
        Ok(())
    }
}
