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

use super::product_name;
use crate::diagnostics::Remediation;
use google_cloud_retail_v2 as retail;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &retail::client::ProductService,
    branch: &str,
    product_id: &str,
) -> anyhow::Result<()> {
    let name = product_name(branch, product_id)?;
    if let Err(e) = client.delete_product().set_name(&name).send().await {
        Remediation::new()
            .on_not_found(format!("Product {name} not found, nothing to delete."))
            .on_failed_precondition(format!(
                "Product {name} has variants. Delete the variants first."
            ))
            .report(out, &e)?;
        return Ok(());
    }
    writeln!(out, "Deleted product {name}")?;
    Ok(())
}
