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
use crate::names::ALERT_POLICY;
use google_cloud_monitoring_v3 as monitoring;
use google_cloud_wkt as wkt;
use std::io::Write;

/// Enables or disables an alert policy.
///
/// The update mask contains only `enabled`, the conditions and notification
/// channels of the policy are unchanged.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &monitoring::client::AlertPolicyService,
    project_id: &str,
    alert_policy_id: &str,
    enable: bool,
) -> anyhow::Result<()> {
    let name = ALERT_POLICY.expand(&[project_id, alert_policy_id])?;
    let result = client
        .update_alert_policy()
        .set_alert_policy(
            monitoring::model::AlertPolicy::new()
                .set_name(&name)
                .set_enabled(enable),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["enabled"]))
        .send()
        .await;
    let policy = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Alert policy {name} not found."))
                .on_permission_denied(format!(
                    "The caller cannot update {name}. Grant the roles/monitoring.alertPolicyEditor role."
                ))
                .report(out, &e)?;
            return Ok(());
        }
    };
    let verb = if policy.enabled.unwrap_or(enable) {
        "Enabled"
    } else {
        "Disabled"
    };
    writeln!(out, "{verb} alert policy {}", policy.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::mocks::MockAlertPolicyService;
    use crate::testing::{not_found, ok, output};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(true, "Enabled")]
    #[test_case(false, "Disabled")]
    #[tokio::test]
    async fn success(enable: bool, verb: &str) -> anyhow::Result<()> {
        let mut mock = MockAlertPolicyService::new();
        mock.expect_update_alert_policy()
            .withf(move |r, _| {
                r.alert_policy.as_ref().and_then(|p| p.enabled) == Some(enable)
                    && r.update_mask.as_ref().map(|m| m.paths.clone())
                        == Some(vec!["enabled".to_string()])
            })
            .return_once(|r, _| ok(r.alert_policy.unwrap_or_default()));
        let client = monitoring::client::AlertPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "42", enable).await?;
        assert_eq!(
            output(out),
            format!("{verb} alert policy projects/p/alertPolicies/42\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockAlertPolicyService::new();
        mock.expect_update_alert_policy()
            .return_once(|_, _| Err(not_found()));
        let client = monitoring::client::AlertPolicyService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "42", true).await?;
        assert_eq!(
            output(out),
            "Alert policy projects/p/alertPolicies/42 not found.\n"
        );
        Ok(())
    }
}
