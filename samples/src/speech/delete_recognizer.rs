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
use crate::names::RECOGNIZER;
use google_cloud_lro::Poller;
use google_cloud_speech_v2 as speech;
use std::io::Write;

/// Deletes a recognizer. Deleted recognizers are purged after 30 days.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &speech::client::Speech,
    project_id: &str,
    location: &str,
    recognizer_id: &str,
) -> anyhow::Result<()> {
    let name = RECOGNIZER.expand(&[project_id, location, recognizer_id])?;
    let result = client
        .delete_recognizer()
        .set_name(&name)
        .poller()
        .until_done()
        .await;
    let recognizer = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Recognizer {name} not found, nothing to delete."))
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Deleted recognizer {}", recognizer.name)?;
    writeln!(out, "  state: {:?}", recognizer.state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::mocks::MockSpeech;
    use crate::testing::{not_found, operation_done, output};
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;
    use speech::model::Recognizer;
    use speech::model::recognizer::State;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let deleted = Recognizer::new()
            .set_name("projects/p/locations/global/recognizers/r")
            .set_state(State::Deleted);
        let any = wkt::Any::from_msg(&deleted)?;
        let mut mock = MockSpeech::new();
        mock.expect_delete_recognizer()
            .withf(|r, _| r.name == "projects/p/locations/global/recognizers/r")
            .return_once(move |_, _| operation_done(any));
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "global", "r").await?;
        assert_eq!(
            output(out),
            format!(
                "Deleted recognizer projects/p/locations/global/recognizers/r\n  state: {:?}\n",
                State::Deleted
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_delete_recognizer()
            .return_once(|_, _| Err(not_found()));
        let client = speech::client::Speech::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "global", "r").await?;
        assert_eq!(
            output(out),
            "Recognizer projects/p/locations/global/recognizers/r not found, nothing to delete.\n"
        );
        Ok(())
    }
}
