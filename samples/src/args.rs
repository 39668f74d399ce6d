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

//! Command-line arguments for the samples driver.

use crate::options::ClientOptions;
use crate::{
    bigquery_datapolicies, dataproc, dlp, documentai, eventarc, monitoring, retail,
    secretmanager, speech, storage_control, translation,
};
use clap::Parser;
use std::io::Write;

const DESCRIPTION: &str = concat!(
    "Run samples for Google Cloud services.",
    " Each sample makes one request, prints the interesting fields of the",
    " response, and prints a hint to fix the most common errors."
);

/// Run one sample.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
pub struct Cli {
    #[command(flatten)]
    pub options: ClientOptions,

    /// Increase the logging verbosity, may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub service: Service,
}

/// The services with samples.
#[derive(Clone, Debug, clap::Subcommand)]
pub enum Service {
    /// BigQuery data policies.
    #[command(subcommand)]
    BigqueryDatapolicies(bigquery_datapolicies::Command),
    /// Dataproc clusters and jobs.
    #[command(subcommand)]
    Dataproc(dataproc::Command),
    /// Sensitive Data Protection (DLP).
    #[command(subcommand)]
    Dlp(dlp::Command),
    /// Document AI processors.
    #[command(subcommand)]
    Documentai(documentai::Command),
    /// Eventarc triggers.
    #[command(subcommand)]
    Eventarc(eventarc::Command),
    /// Cloud Monitoring groups, alert policies, and metrics.
    #[command(subcommand)]
    Monitoring(monitoring::Command),
    /// Retail catalog products.
    #[command(subcommand)]
    Retail(retail::Command),
    /// Secret Manager secrets and versions.
    #[command(subcommand)]
    Secretmanager(secretmanager::Command),
    /// Speech-to-Text recognizers and transcription.
    #[command(subcommand)]
    Speech(speech::Command),
    /// Cloud Storage folders and managed folders.
    #[command(subcommand)]
    StorageControl(storage_control::Command),
    /// Cloud Translation text and glossaries.
    #[command(subcommand)]
    Translation(translation::Command),
}

/// The project that owns the resources.
#[derive(Clone, Debug, clap::Args)]
pub struct ProjectArg {
    /// The Google Cloud project id.
    #[arg(long = "project-id", alias = "project_id", env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,
}

impl Cli {
    /// The log verbosity, `--tracing` implies at least `-v`.
    pub fn verbosity(&self) -> u8 {
        if self.options.tracing {
            self.verbose.max(1)
        } else {
            self.verbose
        }
    }

    /// Runs the selected sample, printing its output to `out`.
    pub async fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        let options = &self.options;
        tracing::info!("running {:?}", self.service);
        match self.service {
            Service::BigqueryDatapolicies(c) => bigquery_datapolicies::run(c, options, out).await,
            Service::Dataproc(c) => dataproc::run(c, options, out).await,
            Service::Dlp(c) => dlp::run(c, options, out).await,
            Service::Documentai(c) => documentai::run(c, options, out).await,
            Service::Eventarc(c) => eventarc::run(c, options, out).await,
            Service::Monitoring(c) => monitoring::run(c, options, out).await,
            Service::Retail(c) => retail::run(c, options, out).await,
            Service::Secretmanager(c) => secretmanager::run(c, options, out).await,
            Service::Speech(c) => speech::run(c, options, out).await,
            Service::StorageControl(c) => storage_control::run(c, options, out).await,
            Service::Translation(c) => translation::run(c, options, out).await,
        }
    }
}
