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

/// Transcribes inline audio with the `_` recognizer.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
    config: RecognitionConfig,
    content: bytes::Bytes,
) -> anyhow::Result<()> {
    let recognizer = RECOGNIZER.expand(&[project_id, location, "_"])?;
    let result = client
        .recognize()
        .set_recognizer(&recognizer)
        .set_config(config)
        .set_content(content)
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(
                    "The audio was rejected. Inline audio must be at most 10 MB and 60 seconds long, use transcribe-gcs for longer files.",
                )
                .on_permission_denied(format!(
                    "The caller cannot use Speech-to-Text in {project_id}. Enable the API and grant the roles/speech.client role."
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
    use crate::testing::{invalid_argument, ok, output};
    use pretty_assertions::assert_eq;
    use speech::model::{RecognizeResponse, SpeechRecognitionAlternative, SpeechRecognitionResult};

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .withf(|r, _| {
                r.recognizer == "projects/p/locations/global/recognizers/_"
                    && r.content() == Some(&bytes::Bytes::from_static(b"audio"))
                    && r.config.as_ref().map(|c| c.language_codes.clone())
                        == Some(vec!["en-US".to_string()])
            })
            .return_once(|_, _| {
                ok(RecognizeResponse::new().set_results([SpeechRecognitionResult::new()
                    .set_alternatives([SpeechRecognitionAlternative::new()
                        .set_transcript("hello")
                        .set_confidence(0.5_f32)])]))
            });
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        let content = bytes::Bytes::from_static(b"audio");
        sample(&mut out, &client, "p", "global", recognition_config("short", "en-US"), content).await?;
        assert_eq!(output(out), "Transcript: hello (confidence 0.50)\n");
        Ok(())
    }

    #[tokio::test]
    async fn too_long() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .return_once(|_, _| Err(invalid_argument()));
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        let config = recognition_config("short", "en-US");
        sample(&mut out, &client, "p", "global", config, bytes::Bytes::new()).await?;
        let got = output(out);
        assert!(got.starts_with("The audio was rejected."), "{got}");
        Ok(())
    }
}
