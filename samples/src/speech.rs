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

//! Samples for [Speech-to-Text](https://cloud.google.com/speech-to-text/v2/docs).
//!
//! Recognizers hold a default recognition configuration. The transcription
//! samples use the `_` recognizer, which has no defaults, and send the full
//! configuration in each request.

pub mod create_recognizer;
pub mod delete_recognizer;
pub mod get_recognizer;
pub mod list_recognizers;
pub mod transcribe_file;
pub mod transcribe_gcs;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_speech_v2 as speech;
use std::io::Write;
use std::path::PathBuf;

use speech::model::{AutoDetectDecodingConfig, RecognitionConfig, RecognizeResponse};

const SERVICE: &str = "speech";
const DEFAULT_LOCATION: &str = "global";

/// The recognition model and language.
#[derive(Clone, Debug, clap::Args)]
pub struct ModelArgs {
    /// The model, e.g. `short`, `long` or `chirp_2`.
    #[arg(long, default_value = "short")]
    pub model: String,
    #[arg(long, alias = "language_code", default_value = "en-US")]
    pub language_code: String,
}

impl ModelArgs {
    pub fn config(&self) -> RecognitionConfig {
        recognition_config(&self.model, &self.language_code)
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a recognizer with a default model and language.
    CreateRecognizer {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "recognizer_id")]
        recognizer_id: String,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Print a recognizer.
    GetRecognizer {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "recognizer_id")]
        recognizer_id: String,
    },
    /// List the recognizers in a location.
    ListRecognizers {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Delete a recognizer.
    DeleteRecognizer {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "recognizer_id")]
        recognizer_id: String,
    },
    /// Transcribe a local audio file, up to 60 seconds long.
    TranscribeFile {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[command(flatten)]
        model: ModelArgs,
        file: PathBuf,
    },
    /// Transcribe an audio file in Cloud Storage.
    TranscribeGcs {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[command(flatten)]
        model: ModelArgs,
        /// The audio URI, e.g. `gs://cloud-samples-data/speech/brooklyn_bridge.flac`.
        uri: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::CreateRecognizer {
            project,
            location,
            recognizer_id,
            model,
        } => {
            let client = client(options, &location).await?;
            create_recognizer::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &recognizer_id,
                model.config(),
            )
            .await
        }
        Command::GetRecognizer {
            project,
            location,
            recognizer_id,
        } => {
            let client = client(options, &location).await?;
            get_recognizer::sample(out, &client, &project.project_id, &location, &recognizer_id)
                .await
        }
        Command::ListRecognizers { project, location } => {
            let client = client(options, &location).await?;
            list_recognizers::sample(out, &client, &project.project_id, &location).await
        }
        Command::DeleteRecognizer {
            project,
            location,
            recognizer_id,
        } => {
            let client = client(options, &location).await?;
            delete_recognizer::sample(out, &client, &project.project_id, &location, &recognizer_id)
                .await
        }
        Command::TranscribeFile {
            project,
            location,
            model,
            file,
        } => {
            let client = client(options, &location).await?;
            let content = tokio::fs::read(&file).await?;
            tracing::debug!(?file, size = content.len(), "read audio");
            transcribe_file::sample(
                out,
                &client,
                &project.project_id,
                &location,
                model.config(),
                content.into(),
            )
            .await
        }
        Command::TranscribeGcs {
            project,
            location,
            model,
            uri,
        } => {
            let client = client(options, &location).await?;
            transcribe_gcs::sample(
                out,
                &client,
                &project.project_id,
                &location,
                model.config(),
                &uri,
            )
            .await
        }
    }
}

async fn client(options: &ClientOptions, location: &str) -> anyhow::Result<speech::client::Speech> {
    let client = options
        .configure_regional(speech::client::Speech::builder(), SERVICE, location)
        .build()
        .await?;
    Ok(client)
}

/// A configuration that detects the audio encoding.
fn recognition_config(model: &str, language_code: &str) -> RecognitionConfig {
    RecognitionConfig::new()
        .set_auto_decoding_config(AutoDetectDecodingConfig::new())
        .set_model(model)
        .set_language_codes([language_code])
}

/// Prints the most likely transcript of each result.
fn print_transcripts<W: Write>(out: &mut W, response: &RecognizeResponse) -> std::io::Result<()> {
    let mut count = 0;
    for result in &response.results {
        let Some(best) = result.alternatives.first() else {
            continue;
        };
        count += 1;
        writeln!(
            out,
            "Transcript: {} (confidence {:.2})",
            best.transcript, best.confidence
        )?;
    }
    if count == 0 {
        writeln!(out, "No speech recognized.")?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod mocks {
    use google_cloud_gax as gax;
    use google_cloud_longrunning as longrunning;
    use google_cloud_speech_v2 as speech;

    mockall::mock! {
        #[derive(Debug)]
        pub Speech {}
        impl speech::stub::Speech for Speech {
            async fn create_recognizer(&self, req: speech::model::CreateRecognizerRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn list_recognizers(&self, req: speech::model::ListRecognizersRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<speech::model::ListRecognizersResponse>>;
            async fn get_recognizer(&self, req: speech::model::GetRecognizerRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<speech::model::Recognizer>>;
            async fn delete_recognizer(&self, req: speech::model::DeleteRecognizerRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn recognize(&self, req: speech::model::RecognizeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<speech::model::RecognizeResponse>>;
        }
    }
}
