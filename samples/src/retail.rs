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

//! Samples for [Vertex AI Search for commerce](https://cloud.google.com/retail).
//!
//! Products live in a branch of a catalog. Most projects have a single
//! `default_catalog` in the `global` location, with the `default_branch`.

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

use crate::args::ProjectArg;
use crate::names::{BRANCH, NameError, PRODUCT};
use crate::options::ClientOptions;
use google_cloud_retail_v2 as retail;
use std::io::Write;

use retail::model::product::Availability;

/// Identifies a branch in a catalog.
#[derive(Clone, Debug, clap::Args)]
pub struct BranchArgs {
    #[command(flatten)]
    pub project: ProjectArg,
    #[arg(long, default_value = "global")]
    pub location: String,
    #[arg(long, default_value = "default_catalog")]
    pub catalog: String,
    #[arg(long, default_value = "default_branch")]
    pub branch: String,
}

impl BranchArgs {
    pub fn name(&self) -> Result<String, NameError> {
        BRANCH.expand(&[
            &self.project.project_id,
            &self.location,
            &self.catalog,
            &self.branch,
        ])
    }
}

/// Product availability, as selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Stock {
    InStock,
    OutOfStock,
    Preorder,
    Backorder,
}

impl From<Stock> for Availability {
    fn from(value: Stock) -> Self {
        match value {
            Stock::InStock => Self::InStock,
            Stock::OutOfStock => Self::OutOfStock,
            Stock::Preorder => Self::Preorder,
            Stock::Backorder => Self::Backorder,
        }
    }
}

/// The fields `update-product` changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub price: Option<f32>,
    pub availability: Option<Availability>,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Create a primary product.
    CreateProduct {
        #[command(flatten)]
        branch: BranchArgs,
        #[arg(long, alias = "product_id")]
        product_id: String,
        #[arg(long)]
        title: String,
        /// A product category, e.g. `Apparel > Shoes`. May be repeated.
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long)]
        price: Option<f32>,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Print a product.
    GetProduct {
        #[command(flatten)]
        branch: BranchArgs,
        #[arg(long, alias = "product_id")]
        product_id: String,
    },
    /// List the products in a branch.
    ListProducts {
        #[command(flatten)]
        branch: BranchArgs,
    },
    /// Change the title, price, or availability of a product.
    UpdateProduct {
        #[command(flatten)]
        branch: BranchArgs,
        #[arg(long, alias = "product_id")]
        product_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        price: Option<f32>,
        #[arg(long, value_enum)]
        availability: Option<Stock>,
    },
    /// Delete a product.
    DeleteProduct {
        #[command(flatten)]
        branch: BranchArgs,
        #[arg(long, alias = "product_id")]
        product_id: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    options: &ClientOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = options
        .configure(retail::client::ProductService::builder())
        .build()
        .await?;
    match command {
        Command::CreateProduct {
            branch,
            product_id,
            title,
            categories,
            price,
            currency,
        } => {
            let price = price.map(|p| (p, currency.as_str()));
            create_product::sample(
                out,
                &client,
                &branch.name()?,
                &product_id,
                &title,
                &categories,
                price,
            )
            .await
        }
        Command::GetProduct { branch, product_id } => {
            get_product::sample(out, &client, &branch.name()?, &product_id).await
        }
        Command::ListProducts { branch } => {
            list_products::sample(out, &client, &branch.name()?).await
        }
        Command::UpdateProduct {
            branch,
            product_id,
            title,
            price,
            availability,
        } => {
            let update = ProductUpdate {
                title,
                price,
                availability: availability.map(Availability::from),
            };
            update_product::sample(out, &client, &branch.name()?, &product_id, update).await
        }
        Command::DeleteProduct { branch, product_id } => {
            delete_product::sample(out, &client, &branch.name()?, &product_id).await
        }
    }
}

/// The name of `product_id` in `branch`.
fn product_name(branch: &str, product_id: &str) -> Result<String, NameError> {
    let mut values = BRANCH.parse(branch)?;
    values.push(product_id);
    PRODUCT.expand(&values)
}

/// Formats the price of a product, e.g. `19.99 USD`.
fn price(product: &retail::model::Product) -> String {
    product
        .price_info
        .as_ref()
        .map_or_else(|| "unset".to_string(), |p| format!("{:.2} {}", p.price, p.currency_code))
}
