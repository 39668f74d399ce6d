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

use super::filters;
use crate::diagnostics::Remediation;
use crate::names::{LOCATION, TRIGGER};
use google_cloud_eventarc_v1 as eventarc;
use google_cloud_gax::paginator::ItemPaginator as _;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &eventarc::client::Eventarc,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let parent = LOCATION.expand(&[project_id, location])?;
    let mut items = client.list_triggers().set_parent(&parent).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let trigger = match item {
            Ok(t) => t,
            Err(e) => {
                Remediation::new()
                    .on_permission_denied(format!(
                        "The caller cannot list triggers in {parent}. Grant the roles/eventarc.viewer role."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(
            out,
            "{}: {}",
            TRIGGER.short_id(&trigger.name),
            filters(&trigger)
        )?;
    }
    if count == 0 {
        writeln!(out, "No triggers found in {parent}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventarc::mocks::MockEventarc;
    use crate::testing::{ok, output, permission_denied};
    use eventarc::model::{EventFilter, ListTriggersResponse, Trigger};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockEventarc::new();
        mock.expect_list_triggers()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p/locations/l" && r.page_token.is_empty())
            .return_once(|_, _| {
                ok(ListTriggersResponse::new()
                    .set_triggers([Trigger::new()
                        .set_name("projects/p/locations/l/triggers/a")
                        .set_event_filters([EventFilter::new().set_attribute("type").set_value("x")])])
                    .set_next_page_token("next"))
            });
        mock.expect_list_triggers()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "next")
            .return_once(|_, _| {
                ok(ListTriggersResponse::new()
                    .set_triggers([Trigger::new().set_name("projects/p/locations/l/triggers/b")]))
            });
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "l").await?;
        assert_eq!(output(out), "a: type=x\nb: \n");
        Ok(())
    }

    #[tokio::test]
    async fn empty() -> anyhow::Result<()> {
        let mut mock = MockEventarc::new();
        mock.expect_list_triggers()
            .return_once(|_, _| ok(ListTriggersResponse::new()));
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "l").await?;
        assert_eq!(output(out), "No triggers found in projects/p/locations/l\n");
        Ok(())
    }

    #[tokio::test]
    async fn denied() -> anyhow::Result<()> {
        let mut mock = MockEventarc::new();
        mock.expect_list_triggers()
            .return_once(|_, _| Err(permission_denied()));
        let client = eventarc::client::Eventarc::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "l").await?;
        assert_eq!(
            output(out),
            "The caller cannot list triggers in projects/p/locations/l. Grant the roles/eventarc.viewer role.\n"
        );
        Ok(())
    }
}
