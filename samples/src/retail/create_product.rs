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

use super::price;
use crate::diagnostics::Remediation;
use google_cloud_retail_v2 as retail;
use std::io::Write;

use retail::model::product::{Availability, Type};
use retail::model::{PriceInfo, Product};

/// Creates an in-stock primary product in `branch`.
///
/// `price_info` is the amount and its ISO 4217 currency code.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &retail::client::ProductService,
    branch: &str,
    product_id: &str,
    title: &str,
    categories: &[String],
    price_info: Option<(f32, &str)>,
) -> anyhow::Result<()> {
    let product = Product::new()
        .set_type(Type::Primary)
        .set_title(title)
        .set_categories(categories.iter().cloned())
        .set_availability(Availability::InStock);
    let product = match price_info {
        None => product,
        Some((amount, currency)) => product.set_price_info(
            PriceInfo::new()
                .set_price(amount)
                .set_original_price(amount)
                .set_currency_code(currency),
        ),
    };
    let result = client
        .create_product()
        .set_parent(branch)
        .set_product_id(product_id)
        .set_product(product)
        .send()
        .await;
    let product = match result {
        Ok(p) => p,
        Err(e) => {
            Remediation::new()
                .on_already_exists(format!(
                    "Product {product_id} already exists in {branch}. Choose a different product id."
                ))
                .on_not_found(format!(
                    "Branch {branch} not found. Verify the catalog and branch."
                ))
                .on_invalid_argument(
                    "Invalid product. Primary products need a title and at most 250 categories.",
                )
                .report(out, &e)?;
            return Ok(());
        }
    };
    writeln!(out, "Created product {}", product.name)?;
    writeln!(out, "  title: {}", product.title)?;
    writeln!(out, "  price: {}", price(&product))?;
    Ok(())
}
