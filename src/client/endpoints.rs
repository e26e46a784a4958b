//! Table of upstream REST operations.
//!
//! Each constant pairs a verb with a path template relative to the API root.
//! Placeholders are written `{name}` and are filled verbatim from
//! [`PathParams`] when a request is built.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde_json::{Map, Value};

use super::{
    error::ApiError,
    request::{ApiRequest, HttpMethod},
};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("placeholder regex"));

pub type PathParams = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub template: &'static str,
}

/// Where the non-path arguments of a call go.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Query(Map<String, Value>),
    Body(Value),
}

impl Endpoint {
    pub const fn get(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            template,
        }
    }

    pub const fn post(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            template,
        }
    }

    pub const fn put(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Put,
            template,
        }
    }

    pub const fn patch(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Patch,
            template,
        }
    }

    pub const fn delete(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Delete,
            template,
        }
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.template)
            .filter_map(|captures| captures.get(1))
            .map(|name| name.as_str())
            .collect()
    }

    pub fn path(&self, params: &PathParams) -> Result<String, ApiError> {
        let mut path = String::with_capacity(self.template.len());
        let mut cursor = 0;

        for captures in PLACEHOLDER.captures_iter(self.template) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let value = params
                .get(name.as_str())
                .ok_or_else(|| ApiError::MissingPathParam {
                    template: self.template,
                    name: name.as_str().to_string(),
                })?;

            path.push_str(&self.template[cursor..whole.start()]);
            path.push_str(value);
            cursor = whole.end();
        }

        path.push_str(&self.template[cursor..]);
        Ok(path)
    }

    pub fn request(&self, params: &PathParams, payload: Payload) -> Result<ApiRequest, ApiError> {
        let request = ApiRequest::new(self.method, self.path(params)?);
        Ok(match payload {
            Payload::None => request,
            Payload::Query(query) => request.with_query(&query),
            Payload::Body(body) => request.with_body(body),
        })
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.template)
    }
}

// products
pub const CREATE_PRODUCT: Endpoint = Endpoint::post("/products");
pub const LIST_PRODUCTS: Endpoint = Endpoint::get("/products");
pub const GET_PRODUCT: Endpoint = Endpoint::get("/products/{id}");
pub const UPDATE_PRODUCT: Endpoint = Endpoint::put("/products/{id}");
pub const DELETE_PRODUCT: Endpoint = Endpoint::delete("/products/{id}");
pub const GET_PRODUCT_BY_HANDLE: Endpoint = Endpoint::get("/products/handle/{handle}");

// categories
pub const CREATE_CATEGORY: Endpoint = Endpoint::post("/categories");
pub const LIST_CATEGORIES: Endpoint = Endpoint::get("/categories");
pub const GET_CATEGORY_TREE: Endpoint = Endpoint::get("/categories/tree");
pub const GET_CATEGORY: Endpoint = Endpoint::get("/categories/{id}");
pub const UPDATE_CATEGORY: Endpoint = Endpoint::put("/categories/{id}");
pub const DELETE_CATEGORY: Endpoint = Endpoint::delete("/categories/{id}");

// pricing rules
pub const CREATE_PRICING_RULE: Endpoint = Endpoint::post("/pricing-rules");
pub const LIST_PRICING_RULES: Endpoint = Endpoint::get("/pricing-rules");
pub const GET_PRICING_RULE: Endpoint = Endpoint::get("/pricing-rules/{id}");
pub const UPDATE_PRICING_RULE: Endpoint = Endpoint::put("/pricing-rules/{id}");
pub const DELETE_PRICING_RULE: Endpoint = Endpoint::delete("/pricing-rules/{id}");
pub const APPLY_PRICING_RULES: Endpoint = Endpoint::post("/pricing-rules/apply");
pub const VALIDATE_PRICING_RULE: Endpoint = Endpoint::post("/pricing-rules/validate");
pub const GET_PRICING_RULE_BY_NAME: Endpoint = Endpoint::get("/pricing-rules/name/{name}");
pub const UPDATE_PRICING_RULE_STATUS: Endpoint = Endpoint::patch("/pricing-rules/{id}/status");
pub const GET_ACTIVE_PRICING_RULES: Endpoint = Endpoint::get("/pricing-rules/active");
pub const BULK_CALCULATE_PRICE: Endpoint = Endpoint::post("/pricing-rules/bulk-calculate");
pub const GET_PRICING_RULES_BY_PRIORITY: Endpoint =
    Endpoint::get("/pricing-rules/priority/{priority}");
pub const BULK_UPDATE_PRICING_RULE_STATUS: Endpoint =
    Endpoint::patch("/pricing-rules/bulk-status");
pub const GET_PRICING_RULE_STATS: Endpoint = Endpoint::get("/pricing-rules/{id}/stats");
pub const DUPLICATE_PRICING_RULE: Endpoint = Endpoint::post("/pricing-rules/{id}/duplicate");

// carts
pub const CREATE_CART: Endpoint = Endpoint::post("/carts");
pub const GET_CART: Endpoint = Endpoint::get("/carts/{cartId}");
pub const ADD_CART_ITEM: Endpoint = Endpoint::post("/carts/{cartId}/items");
pub const GET_CART_ITEMS: Endpoint = Endpoint::get("/carts/{cartId}/items");
pub const UPDATE_CART_ITEM: Endpoint = Endpoint::put("/carts/{cartId}/items/{itemId}");
pub const REMOVE_CART_ITEM: Endpoint = Endpoint::delete("/carts/{cartId}/items/{itemId}");
pub const GET_CART_SUMMARY: Endpoint = Endpoint::get("/carts/{cartId}/summary");
pub const CLEAR_CART: Endpoint = Endpoint::delete("/carts/{cartId}/items");

// inventory
pub const CREATE_INVENTORY: Endpoint = Endpoint::post("/inventory");
pub const LIST_INVENTORY: Endpoint = Endpoint::get("/inventory");
pub const GET_INVENTORY_BY_PRODUCT: Endpoint = Endpoint::get("/inventory/product/{productId}");
pub const CHECK_INVENTORY_AVAILABILITY: Endpoint =
    Endpoint::post("/inventory/check-availability");
pub const RESERVE_INVENTORY: Endpoint = Endpoint::post("/inventory/reserve");
pub const UPDATE_INVENTORY: Endpoint = Endpoint::put("/inventory/{id}");

// media
pub const UPLOAD_MEDIA: Endpoint = Endpoint::post("/media/upload");
pub const LIST_MEDIA: Endpoint = Endpoint::get("/media");
pub const GET_MEDIA: Endpoint = Endpoint::get("/media/{id}");
pub const UPDATE_MEDIA: Endpoint = Endpoint::put("/media/{id}");
pub const DELETE_MEDIA: Endpoint = Endpoint::delete("/media/{id}");

// partners
pub const CREATE_PARTNER: Endpoint = Endpoint::post("/partners");
pub const LIST_PARTNERS: Endpoint = Endpoint::get("/partners");
pub const GET_PARTNER: Endpoint = Endpoint::get("/partners/{id}");
pub const UPDATE_PARTNER: Endpoint = Endpoint::put("/partners/{id}");
pub const DELETE_PARTNER: Endpoint = Endpoint::delete("/partners/{id}");

// sales channels
pub const CREATE_SALES_CHANNEL: Endpoint = Endpoint::post("/sales-channels");
pub const LIST_SALES_CHANNELS: Endpoint = Endpoint::get("/sales-channels");
pub const GET_SALES_CHANNEL: Endpoint = Endpoint::get("/sales-channels/{id}");
pub const GET_SALES_CHANNEL_BY_CODE: Endpoint = Endpoint::get("/sales-channels/code/{code}");
pub const UPDATE_SALES_CHANNEL: Endpoint = Endpoint::put("/sales-channels/{id}");
pub const DELETE_SALES_CHANNEL: Endpoint = Endpoint::delete("/sales-channels/{id}");
pub const ACTIVATE_SALES_CHANNEL: Endpoint = Endpoint::post("/sales-channels/{id}/activate");
pub const DEACTIVATE_SALES_CHANNEL: Endpoint = Endpoint::post("/sales-channels/{id}/deactivate");
pub const GET_SALES_CHANNEL_STATISTICS: Endpoint =
    Endpoint::get("/sales-channels/{id}/statistics");

// translations
pub const CREATE_TRANSLATION: Endpoint = Endpoint::post("/translations/products");
pub const GET_TRANSLATION: Endpoint =
    Endpoint::get("/translations/products/{entityId}/{languageCode}");
pub const UPDATE_TRANSLATION: Endpoint =
    Endpoint::put("/translations/products/{entityId}/{languageCode}");
pub const DELETE_TRANSLATION: Endpoint =
    Endpoint::delete("/translations/products/{entityId}/{languageCode}");
pub const GET_SUPPORTED_LANGUAGES: Endpoint = Endpoint::get("/translations/languages");

pub const CREATE_PRODUCT_TRANSLATION: Endpoint = Endpoint::post("/translations/products");
pub const GET_PRODUCT_TRANSLATION: Endpoint =
    Endpoint::get("/translations/products/{productId}/{language}");
pub const UPDATE_PRODUCT_TRANSLATION: Endpoint =
    Endpoint::put("/translations/products/{productId}/{language}");
pub const DELETE_PRODUCT_TRANSLATION: Endpoint =
    Endpoint::delete("/translations/products/{productId}/{language}");
pub const LIST_PRODUCT_TRANSLATIONS: Endpoint =
    Endpoint::get("/translations/products/{productId}");

pub const CREATE_CATEGORY_TRANSLATION: Endpoint = Endpoint::post("/translations/categories");
pub const GET_CATEGORY_TRANSLATION: Endpoint =
    Endpoint::get("/translations/categories/{categoryId}/{language}");
pub const UPDATE_CATEGORY_TRANSLATION: Endpoint =
    Endpoint::put("/translations/categories/{categoryId}/{language}");
pub const DELETE_CATEGORY_TRANSLATION: Endpoint =
    Endpoint::delete("/translations/categories/{categoryId}/{language}");
pub const LIST_CATEGORY_TRANSLATIONS: Endpoint =
    Endpoint::get("/translations/categories/{categoryId}");

pub const CREATE_PRODUCT_ATTRIBUTE_TRANSLATION: Endpoint =
    Endpoint::post("/translations/product-attributes");
pub const GET_PRODUCT_ATTRIBUTE_TRANSLATION: Endpoint =
    Endpoint::get("/translations/product-attributes/{attributeId}/{language}");
pub const UPDATE_PRODUCT_ATTRIBUTE_TRANSLATION: Endpoint =
    Endpoint::put("/translations/product-attributes/{attributeId}/{language}");
pub const DELETE_PRODUCT_ATTRIBUTE_TRANSLATION: Endpoint =
    Endpoint::delete("/translations/product-attributes/{attributeId}/{language}");
pub const LIST_PRODUCT_ATTRIBUTE_TRANSLATIONS: Endpoint =
    Endpoint::get("/translations/product-attributes/{attributeId}");

pub const CREATE_PRODUCT_VARIANT_TRANSLATION: Endpoint =
    Endpoint::post("/translations/product-variants");
pub const GET_PRODUCT_VARIANT_TRANSLATION: Endpoint =
    Endpoint::get("/translations/product-variants/{variantId}/{language}");
pub const UPDATE_PRODUCT_VARIANT_TRANSLATION: Endpoint =
    Endpoint::put("/translations/product-variants/{variantId}/{language}");
pub const DELETE_PRODUCT_VARIANT_TRANSLATION: Endpoint =
    Endpoint::delete("/translations/product-variants/{variantId}/{language}");
pub const LIST_PRODUCT_VARIANT_TRANSLATIONS: Endpoint =
    Endpoint::get("/translations/product-variants/{variantId}");

pub const BULK_CREATE_TRANSLATIONS: Endpoint = Endpoint::post("/translations/bulk");
pub const BULK_DELETE_TRANSLATIONS: Endpoint = Endpoint::delete("/translations/bulk");
pub const GET_TRANSLATION_STATS: Endpoint = Endpoint::get("/translations/stats");

// product attributes
pub const CREATE_ATTRIBUTE: Endpoint = Endpoint::post("/product-attributes");
pub const LIST_ATTRIBUTES: Endpoint = Endpoint::get("/product-attributes");
pub const GET_ATTRIBUTE: Endpoint = Endpoint::get("/product-attributes/{id}");
pub const GET_ATTRIBUTE_BY_NAME: Endpoint = Endpoint::get("/product-attributes/name/{name}");
pub const UPDATE_ATTRIBUTE: Endpoint = Endpoint::put("/product-attributes/{id}");
pub const DELETE_ATTRIBUTE: Endpoint = Endpoint::delete("/product-attributes/{id}");
pub const GET_ATTRIBUTE_USAGE: Endpoint = Endpoint::get("/product-attributes/{id}/usage");
pub const CREATE_ATTRIBUTE_VALUE: Endpoint =
    Endpoint::post("/product-attributes/{attributeId}/values");
pub const GET_ATTRIBUTE_VALUES: Endpoint =
    Endpoint::get("/product-attributes/{attributeId}/values");
pub const UPDATE_ATTRIBUTE_VALUE: Endpoint =
    Endpoint::put("/product-attributes/{attributeId}/values/{valueId}");
pub const DELETE_ATTRIBUTE_VALUE: Endpoint =
    Endpoint::delete("/product-attributes/{attributeId}/values/{valueId}");
pub const BULK_CREATE_ATTRIBUTE_VALUES: Endpoint =
    Endpoint::post("/product-attributes/{attributeId}/values/bulk");

// system
pub const HEALTH: Endpoint = Endpoint::get("/health");
