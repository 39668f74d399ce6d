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

use super::info_types;
use crate::diagnostics::Remediation;
use crate::names::LOCATION;
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

use dlp::model::info_type_transformations::InfoTypeTransformation;
use dlp::model::{
    CharacterMaskConfig, ContentItem, DeidentifyConfig, InfoTypeTransformations, InspectConfig,
    PrimitiveTransformation,
};

/// Masks the sensitive values in `text` with `masking_character`.
#[allow(clippy::too_many_arguments)]
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    project_id: &str,
    location: &str,
    info_type_names: &[String],
    masking_character: &str,
    number_to_mask: i32,
    text: &str,
) -> anyhow::Result<()> {
    let mask = CharacterMaskConfig::new()
        .set_masking_character(masking_character)
        .set_number_to_mask(number_to_mask);
    let transformation = InfoTypeTransformation::new()
        .set_primitive_transformation(PrimitiveTransformation::new().set_character_mask_config(mask));
    let config = DeidentifyConfig::new().set_info_type_transformations(
        InfoTypeTransformations::new().set_transformations([transformation]),
    );
    let result = client
        .deidentify_content()
        .set_parent(LOCATION.expand(&[project_id, location])?)
        .set_deidentify_config(config)
        .set_inspect_config(InspectConfig::new().set_info_types(info_types(info_type_names)))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(format!(
                    "Invalid masking configuration. The masking character must be a single character, got {masking_character:?}."
                ))
                .on_permission_denied(format!(
                    "The caller cannot use Sensitive Data Protection in {project_id}. Grant the roles/dlp.user role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let masked = response
        .item
        .as_ref()
        .and_then(|i| i.value())
        .map_or("", |v| v.as_str());
    writeln!(out, "{masked}")?;
    Ok(())
}
