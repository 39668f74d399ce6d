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

//! Client configuration shared by all the samples.

use clap::Args;
use google_cloud_gax::client_builder::ClientBuilder;

/// Options applied to every client the samples create.
#[derive(Clone, Debug, Default, Args)]
pub struct ClientOptions {
    /// Override the default service endpoint.
    ///
    /// For example, use `https://secretmanager.us-central1.rep.googleapis.com`
    /// to send requests to a regional endpoint.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Enable tracing in the client libraries.
    #[arg(long, global = true, default_value_t = false)]
    pub tracing: bool,
}

impl ClientOptions {
    /// Applies the options to a client builder.
    ///
    /// # Example
    /// ```no_run
    /// # use cloud_samples::options::ClientOptions;
    /// # async fn sample(options: &ClientOptions) -> anyhow::Result<()> {
    /// use google_cloud_secretmanager_v1::client::SecretManagerService;
    /// let client = options
    ///     .configure(SecretManagerService::builder())
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn configure<F, Cr>(&self, builder: ClientBuilder<F, Cr>) -> ClientBuilder<F, Cr> {
        let builder = match &self.endpoint {
            Some(endpoint) => builder.with_endpoint(endpoint),
            None => builder,
        };
        if self.tracing {
            builder.with_tracing()
        } else {
            builder
        }
    }

    /// Applies the options to a client builder for a regional service.
    ///
    /// Without an explicit `--endpoint`, requests for a non-global `region`
    /// go to the regional endpoint of `service`.
    pub fn configure_regional<F, Cr>(
        &self,
        builder: ClientBuilder<F, Cr>,
        service: &str,
        region: &str,
    ) -> ClientBuilder<F, Cr> {
        let builder = match (&self.endpoint, regional_endpoint(service, region)) {
            (None, Some(endpoint)) => builder.with_endpoint(endpoint),
            _ => builder,
        };
        self.configure(builder)
    }
}

/// The regional endpoint for `service` in `region`.
///
/// Returns `None` for the `global` location, which uses the default endpoint.
///
/// # Example
/// ```
/// # use cloud_samples::options::regional_endpoint;
/// assert_eq!(
///     regional_endpoint("dataproc", "us-central1").as_deref(),
///     Some("https://us-central1-dataproc.googleapis.com")
/// );
/// assert_eq!(regional_endpoint("speech", "global"), None);
/// ```
pub fn regional_endpoint(service: &str, region: &str) -> Option<String> {
    match region {
        "" | "global" => None,
        r => Some(format!("https://{r}-{service}.googleapis.com")),
    }
}
