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

//! Samples for [Sensitive Data Protection](https://cloud.google.com/sensitive-data-protection).

pub mod create_inspect_template;
pub mod deidentify_with_mask;
pub mod delete_inspect_template;
pub mod inspect_string;
pub mod list_info_types;
pub mod list_inspect_templates;

use crate::args::ProjectArg;
use crate::options::ClientOptions;
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

const DEFAULT_LOCATION: &str = "global";

/// The info types inspected when none are given on the command line.
pub const DEFAULT_INFO_TYPES: [&str; 3] = ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"];

#[derive(Clone, Debug, clap::Args)]
pub struct InfoTypeArgs {
    /// The info types to look for, e.g. `EMAIL_ADDRESS`. May be repeated.
    #[arg(long = "info-type", alias = "info_type")]
    pub info_types: Vec<String>,
}

impl InfoTypeArgs {
    pub fn names(&self) -> Vec<String> {
        if self.info_types.is_empty() {
            return DEFAULT_INFO_TYPES.iter().map(|s| s.to_string()).collect();
        }
        self.info_types.clone()
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Find sensitive data in a string.
    InspectString {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[command(flatten)]
        info_types: InfoTypeArgs,
        text: String,
    },
    /// Replace the sensitive data in a string with a masking character.
    DeidentifyWithMask {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[command(flatten)]
        info_types: InfoTypeArgs,
        #[arg(long, default_value = "*")]
        masking_character: String,
        /// Mask at most this many characters, zero masks all of them.
        #[arg(long, default_value_t = 0)]
        number_to_mask: i32,
        text: String,
    },
    /// List the built-in info types.
    ListInfoTypes {
        /// Only list info types matching this filter, e.g. `supported_by=INSPECT`.
        #[arg(long)]
        filter: Option<String>,
        /// Localize the display names, e.g. `es`.
        #[arg(long, alias = "language_code")]
        language_code: Option<String>,
    },
    /// Create an inspect template.
    CreateInspectTemplate {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "template_id")]
        template_id: String,
        #[arg(long, alias = "display_name")]
        display_name: Option<String>,
        #[command(flatten)]
        info_types: InfoTypeArgs,
    },
    /// List the inspect templates in a location.
    ListInspectTemplates {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Delete an inspect template.
    DeleteInspectTemplate {
        #[command(flatten)]
        project: ProjectArg,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, alias = "template_id")]
        template_id: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(dlp::client::DlpService::builder())
        .build()
        .await?;
    match command {
        Command::InspectString {
            project,
            location,
            info_types,
            text,
        } => {
            inspect_string::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &info_types.names(),
                &text,
            )
            .await
        }
        Command::DeidentifyWithMask {
            project,
            location,
            info_types,
            masking_character,
            number_to_mask,
            text,
        } => {
            deidentify_with_mask::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &info_types.names(),
                &masking_character,
                number_to_mask,
                &text,
            )
            .await
        }
        Command::ListInfoTypes {
            filter,
            language_code,
        } => {
            list_info_types::sample(out, &client, filter.as_deref(), language_code.as_deref())
                .await
        }
        Command::CreateInspectTemplate {
            project,
            location,
            template_id,
            display_name,
            info_types,
        } => {
            create_inspect_template::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &template_id,
                display_name.as_deref(),
                &info_types.names(),
            )
            .await
        }
        Command::ListInspectTemplates { project, location } => {
            list_inspect_templates::sample(out, &client, &project.project_id, &location).await
        }
        Command::DeleteInspectTemplate {
            project,
            location,
            template_id,
        } => {
            delete_inspect_template::sample(
                out,
                &client,
                &project.project_id,
                &location,
                &template_id,
            )
            .await
        }
    }
}

fn info_types(names: &[String]) -> Vec<dlp::model::InfoType> {
    names
        .iter()
        .map(|n| dlp::model::InfoType::new().set_name(n))
        .collect()
}

#[cfg(test)]
pub(crate) mod mocks {
    use google_cloud_gax as gax;
    use google_cloud_privacy_dlp_v2 as dlp;

    mockall::mock! {
        #[derive(Debug)]
        pub DlpService {}
        impl dlp::stub::DlpService for DlpService {
            async fn inspect_content(&self, req: dlp::model::InspectContentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dlp::model::InspectContentResponse>>;
            async fn deidentify_content(&self, req: dlp::model::DeidentifyContentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dlp::model::DeidentifyContentResponse>>;
            async fn list_info_types(&self, req: dlp::model::ListInfoTypesRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dlp::model::ListInfoTypesResponse>>;
            async fn create_inspect_template(&self, req: dlp::model::CreateInspectTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dlp::model::InspectTemplate>>;
            async fn list_inspect_templates(&self, req: dlp::model::ListInspectTemplatesRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dlp::model::ListInspectTemplatesResponse>>;
            async fn delete_inspect_template(&self, req: dlp::model::DeleteInspectTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_info_types() {
        let args = InfoTypeArgs { info_types: vec![] };
        assert_eq!(args.names(), DEFAULT_INFO_TYPES);
        let args = InfoTypeArgs {
            info_types: vec!["US_SOCIAL_SECURITY_NUMBER".to_string()],
        };
        assert_eq!(args.names(), ["US_SOCIAL_SECURITY_NUMBER"]);
    }

    #[test]
    fn to_info_types() {
        let got = info_types(&["EMAIL_ADDRESS".to_string()]);
        assert_eq!(got, vec![dlp::model::InfoType::new().set_name("EMAIL_ADDRESS")]);
    }
}
