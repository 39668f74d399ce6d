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
use crate::names::PROCESSOR;
use google_cloud_documentai_v1 as documentai;
use google_cloud_lro::Poller;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &documentai::client::DocumentProcessorService,
    project_id: &str,
    location: &str,
    processor_id: &str,
) -> anyhow::Result<()> {
    let name = PROCESSOR.expand(&[project_id, location, processor_id])?;
    let result = client
        .enable_processor()
        .set_name(&name)
        .poller()
        .until_done()
        .await;
    if let Err(e) = result {
        Remediation::new()
            .on_not_found(format!("Processor {name} not found."))
            .on_failed_precondition(format!("Processor {name} is already enabled."))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Enabled processor {name}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documentai::mocks::MockDocumentProcessorService;
    use crate::testing::{operation_done, operation_failed, output};
    use documentai::model::EnableProcessorResponse;
    use google_cloud_gax::error::rpc::Code;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&EnableProcessorResponse::new())?;
        let mut mock = MockDocumentProcessorService::new();
        mock.expect_enable_processor()
            .withf(|r, _| r.name == "projects/p/locations/us/processors/abc")
            .return_once(move |_, _| operation_done(any));
        let client = documentai::client::DocumentProcessorService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "abc").await?;
        assert_eq!(
            output(out),
            "Enabled processor projects/p/locations/us/processors/abc\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn already_enabled() -> anyhow::Result<()> {
        let mut mock = MockDocumentProcessorService::new();
        mock.expect_enable_processor()
            .return_once(|_, _| operation_failed(Code::FailedPrecondition, "already enabled"));
        let client = documentai::client::DocumentProcessorService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "abc").await?;
        assert_eq!(
            output(out),
            "Processor projects/p/locations/us/processors/abc is already enabled.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing() -> anyhow::Result<()> {
        let mut mock = MockDocumentProcessorService::new();
        mock.expect_enable_processor()
            .return_once(|_, _| operation_failed(Code::NotFound, "processor not found"));
        let client = documentai::client::DocumentProcessorService::from_stub(mock);

        let mut out = Vec::new();
        sample(&mut out, &client, "p", "us", "abc").await?;
        assert_eq!(
            output(out),
            "Processor projects/p/locations/us/processors/abc not found.\n"
        );
        Ok(())
    }
}
