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

//! Samples for [Document AI](https://cloud.google.com/document-ai).
//!
//! Processors live in the `us` or `eu` multi-region, requests go to the
//! matching regional endpoint.

pub mod create_processor;
pub mod delete_processor;
pub mod disable_processor;
pub mod enable_processor;
pub mod get_processor;
pub mod list_processors;
pub mod process_document;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_documentai_v1 as documentai;
use std::io::Write;
use std::path::{Path, PathBuf};

const SERVICE: &str = "documentai";
const DEFAULT_LOCATION: &str = "us";

#[derive(Clone, Debug, clap::Args)]
pub struct ProcessorArgs {
    #[command(flatten)]
    pub project: ProjectArg,
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,
    #[arg(long, alias = "processor_id")]
    pub processor_id: String,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Extract the text from a local file.
    ProcessDocument {
        #[command(flatten)]
        processor: ProcessorArgs,
        /// The MIME type of the file, guessed from its extension if not set.
        #[arg(long, alias = "mime_type")]
        mime_type: Option<String>,
        file: PathBuf,
    },
    /// Create a processor.
    CreateProcessor {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "display_name")]
        display_name: String,
        /// The processor type, e.g. `OCR_PROCESSOR` or `FORM_PARSER_PROCESSOR`.
        #[arg(long = "type", default_value = "OCR_PROCESSOR")]
        processor_type: String,
    },
    /// Print a processor.
    GetProcessor {
        #[command(flatten)]
        processor: ProcessorArgs,
    },
    /// List the processors in a location.
    ListProcessors {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Enable a processor.
    EnableProcessor {
        #[command(flatten)]
        processor: ProcessorArgs,
    },
    /// Disable a processor.
    DisableProcessor {
        #[command(flatten)]
        processor: ProcessorArgs,
    },
    /// Delete a processor.
    DeleteProcessor {
        #[command(flatten)]
        processor: ProcessorArgs,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::ProcessDocument {
            processor,
            mime_type,
            file,
        } => {
            let client = client(options, &processor.location).await?;
            let content = tokio::fs::read(&file).await?;
            let mime_type = mime_type.unwrap_or_else(|| guess_mime_type(&file).to_string());
            tracing::debug!(?file, %mime_type, size = content.len(), "read document");
            process_document::sample(
                out,
                &client,
                &processor.project.project_id,
                &processor.location,
                &processor.processor_id,
                content.into(),
                &mime_type,
            )
            .await
        }
        Command::CreateProcessor {
            project,
            location,
            display_name,
            processor_type,
        } => {
            let client = client(options, &location).await?;
            create_processor::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &display_name,
                &processor_type,
            )
            .await
        }
        Command::GetProcessor { processor } => {
            let client = client(options, &processor.location).await?;
            get_processor::sample(
                out,
                &client,
                &processor.project.project_id,
                &processor.location,
                &processor.processor_id,
            )
            .await
        }
        Command::ListProcessors { project, location } => {
            let client = client(options, &location).await?;
            list_processors::sample(out, &client, &project.project_id, &location).await
        }
        Command::EnableProcessor { processor } => {
            let client = client(options, &processor.location).await?;
            enable_processor::sample(
                out,
                &client,
                &processor.project.project_id,
                &processor.location,
                &processor.processor_id,
            )
            .await
        }
        Command::DisableProcessor { processor } => {
            let client = client(options, &processor.location).await?;
            disable_processor::sample(
                out,
                &client,
                &processor.project.project_id,
                &processor.location,
                &processor.processor_id,
            )
            .await
        }
        Command::DeleteProcessor { processor } => {
            let client = client(options, &processor.location).await?;
            delete_processor::sample(
                out,
                &client,
                &processor.project.project_id,
                &processor.location,
                &processor.processor_id,
            )
            .await
        }
    }
}

async fn client(
    options: &ClientOptions,
    location: &str,
) -> anyhow::Result<documentai::client::DocumentProcessorService> {
    let client = options
        .configure_regional(
            documentai::client::DocumentProcessorService::builder(),
            SERVICE,
            location,
        )
        .build()
        .await?;
    Ok(client)
}

/// Guesses the MIME type of a document from its extension.
///
/// Defaults to `application/pdf`.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("tif" | "tiff") => "image/tiff",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/pdf",
    }
}
