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
use crate::names::PRODUCT;
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_retail_v2 as retail;
use std::io::Write;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &retail::client::ProductService,
    branch: &str,
) -> anyhow::Result<()> {
    let mut items = client.list_products().set_parent(branch).by_item();
    let mut count = 0;
    while let Some(item) = items.next().await {
        let product = match item {
            Ok(p) => p,
            Err(e) => {
                Remediation::new()
                    .on_not_found(format!(
                        "Branch {branch} not found. Verify the catalog and branch."
                    ))
                    .report(out, &e)?;
                return Ok(());
            }
        };
        count += 1;
        writeln!(out, "{}: {}", PRODUCT.short_id(&product.name), product.title)?;
    }
    if count == 0 {
        writeln!(out, "No products found in {branch}")?;
    }
    Ok(())
}
