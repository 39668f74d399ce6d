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
use google_cloud_privacy_dlp_v2 as dlp;
use std::io::Write;

/// Lists the built-in info types. The response is not paginated.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &dlp::client::DlpService,
    filter: Option<&str>,
    language_code: Option<&str>,
) -> anyhow::Result<()> {
    let result = client
        .list_info_types()
        .set_filter(filter.unwrap_or_default())
        .set_language_code(language_code.unwrap_or_default())
        .send()
        .await;
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            Remediation::new()
                .on_invalid_argument(format!(
                    "Invalid filter {:?}, use `supported_by=INSPECT` or `supported_by=RISK_ANALYSIS`.",
                    filter.unwrap_or_default()
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    if response.info_types.is_empty() {
        writeln!(out, "No info types found.")?;
    }
    for info_type in &response.info_types {
        writeln!(out, "{}: {}", info_type.name, info_type.display_name)?;
    }
    Ok(())
}
