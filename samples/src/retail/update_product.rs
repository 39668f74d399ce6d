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

use super::{ProductUpdate, price, product_name};
use crate::diagnostics::Remediation;
use google_cloud_retail_v2 as retail;
use google_cloud_wkt as wkt;
use std::io::Write;

use retail::model::{PriceInfo, Product};

/// Changes the fields set in `update`, the field mask leaves the others
/// untouched.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &retail::client::ProductService,
    branch: &str,
    product_id: &str,
    update: ProductUpdate,
) -> anyhow::Result<()> {
    let name = product_name(branch, product_id)?;
    let mut product = Product::new().set_name(&name);
    let mut paths = Vec::new();
    if let Some(title) = update.title {
        product = product.set_title(title);
        paths.push("title");
    }
    if let Some(amount) = update.price {
        // The mask replaces `price_info` as a whole.
        product = product.set_price_info(
            PriceInfo::new()
                .set_price(amount)
                .set_original_price(amount)
                .set_currency_code("USD"),
        );
        paths.push("price_info");
    }
    if let Some(availability) = update.availability {
        product = product.set_availability(availability);
        paths.push("availability");
    }
    if paths.is_empty() {
        writeln!(
            out,
            "Nothing to update, set at least one of --title, --price, or --availability."
        )?;
        return Ok(());
    }
    let result = client
        .update_product()
        .set_product(product)
        .set_update_mask(wkt::FieldMask::default().set_paths(paths))
        .send()
        .await;
    let product = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_not_found(format!("Product {name} not found."))
                .on_invalid_argument("Invalid update. Prices cannot be negative.")
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Updated product {}", product.name)?;
    writeln!(out, "  title: {}", product.title)?;
    writeln!(out, "  price: {}", price(&product))?;
    writeln!(out, "  availability: {:?}", product.availability)?;
    Ok(())
}
