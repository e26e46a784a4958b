//! Binds each tool name to the upstream call that implements it.

use crate::client::endpoints::{self as ep, Endpoint};

/// How the arguments left over after path substitution are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Leftovers are dropped.
    Ignore,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Endpoint {
        endpoint: Endpoint,
        payload: PayloadShape,
    },
    /// `GET /categories` or, with `tree: true`, `GET /categories/tree`.
    CategoryListing,
    HealthCheck,
    SystemInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRoute {
    pub tool: &'static str,
    pub handler: Handler,
    pub message: &'static str,
    pub next_steps: &'static [&'static str],
}

impl ToolRoute {
    const fn new(tool: &'static str, handler: Handler, message: &'static str) -> Self {
        Self {
            tool,
            handler,
            message,
            next_steps: &[],
        }
    }

    const fn with_next_steps(self, next_steps: &'static [&'static str]) -> Self {
        Self { next_steps, ..self }
    }

    /// Upstream endpoints this route may call, for documentation.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match self.handler {
            Handler::Endpoint { endpoint, .. } => vec![endpoint],
            Handler::CategoryListing => vec![ep::LIST_CATEGORIES, ep::GET_CATEGORY_TREE],
            Handler::HealthCheck | Handler::SystemInfo => vec![ep::HEALTH],
        }
    }
}

const fn plain(tool: &'static str, endpoint: Endpoint, message: &'static str) -> ToolRoute {
    ToolRoute::new(
        tool,
        Handler::Endpoint {
            endpoint,
            payload: PayloadShape::Ignore,
        },
        message,
    )
}

const fn query(tool: &'static str, endpoint: Endpoint, message: &'static str) -> ToolRoute {
    ToolRoute::new(
        tool,
        Handler::Endpoint {
            endpoint,
            payload: PayloadShape::Query,
        },
        message,
    )
}

const fn body(tool: &'static str, endpoint: Endpoint, message: &'static str) -> ToolRoute {
    ToolRoute::new(
        tool,
        Handler::Endpoint {
            endpoint,
            payload: PayloadShape::Body,
        },
        message,
    )
}

pub const ROUTES: &[ToolRoute] = &[
    // products
    body("create_product", ep::CREATE_PRODUCT, "Product created successfully").with_next_steps(&[
        "Add product images using upload_media",
        "Set up inventory using create_inventory",
        "Configure pricing rules if needed",
        "Add the product to categories",
    ]),
    query("search_products", ep::LIST_PRODUCTS, "Products retrieved successfully"),
    query("get_product", ep::GET_PRODUCT, "Product retrieved successfully"),
    body("update_product", ep::UPDATE_PRODUCT, "Product updated successfully"),
    plain("delete_product", ep::DELETE_PRODUCT, "Product deleted successfully"),
    plain("get_product_by_handle", ep::GET_PRODUCT_BY_HANDLE, "Product retrieved successfully"),
    // categories
    body("create_category", ep::CREATE_CATEGORY, "Category created successfully").with_next_steps(&[
        "Add products to this category",
        "Create subcategories if needed",
        "Set up category-specific attributes",
    ]),
    ToolRoute::new("list_categories", Handler::CategoryListing, "Categories listed successfully"),
    plain("get_category", ep::GET_CATEGORY, "Category retrieved successfully"),
    body("update_category", ep::UPDATE_CATEGORY, "Category updated successfully"),
    plain("delete_category", ep::DELETE_CATEGORY, "Category deleted successfully"),
    // pricing rules
    body("create_pricing_rule", ep::CREATE_PRICING_RULE, "Pricing rule created successfully")
        .with_next_steps(&[
            "Test the rule with apply_pricing_rules",
            "Monitor rule usage with get_pricing_rule_stats",
            "Adjust priority if needed",
        ]),
    plain("get_pricing_rule", ep::GET_PRICING_RULE, "Pricing rule retrieved successfully"),
    body("update_pricing_rule", ep::UPDATE_PRICING_RULE, "Pricing rule updated successfully"),
    plain("delete_pricing_rule", ep::DELETE_PRICING_RULE, "Pricing rule deleted successfully"),
    body("apply_pricing_rules", ep::APPLY_PRICING_RULES, "Pricing rules applied successfully"),
    query("list_pricing_rules", ep::LIST_PRICING_RULES, "Pricing rules listed successfully"),
    body("validate_pricing_rule", ep::VALIDATE_PRICING_RULE, "Pricing rule validation completed"),
    plain(
        "get_pricing_rule_by_name",
        ep::GET_PRICING_RULE_BY_NAME,
        "Pricing rule retrieved successfully",
    ),
    body(
        "update_pricing_rule_status",
        ep::UPDATE_PRICING_RULE_STATUS,
        "Pricing rule status updated successfully",
    ),
    query(
        "get_active_pricing_rules",
        ep::GET_ACTIVE_PRICING_RULES,
        "Active pricing rules retrieved successfully",
    ),
    body(
        "bulk_calculate_price",
        ep::BULK_CALCULATE_PRICE,
        "Bulk price calculation completed successfully",
    ),
    plain(
        "get_pricing_rules_by_priority",
        ep::GET_PRICING_RULES_BY_PRIORITY,
        "Pricing rules by priority retrieved successfully",
    ),
    body(
        "bulk_update_pricing_rule_status",
        ep::BULK_UPDATE_PRICING_RULE_STATUS,
        "Pricing rule statuses updated successfully",
    ),
    plain(
        "get_pricing_rule_stats",
        ep::GET_PRICING_RULE_STATS,
        "Pricing rule statistics retrieved successfully",
    ),
    body(
        "duplicate_pricing_rule",
        ep::DUPLICATE_PRICING_RULE,
        "Pricing rule duplicated successfully",
    ),
    // carts
    body("create_cart", ep::CREATE_CART, "Cart created successfully").with_next_steps(&[
        "Add items using add_cart_item",
        "Calculate totals with get_cart_summary",
    ]),
    body("add_cart_item", ep::ADD_CART_ITEM, "Item added to cart successfully"),
    body("update_cart_item", ep::UPDATE_CART_ITEM, "Cart item updated successfully"),
    plain("remove_cart_item", ep::REMOVE_CART_ITEM, "Item removed from cart successfully"),
    plain("get_cart", ep::GET_CART, "Cart retrieved successfully"),
    query("get_cart_items", ep::GET_CART_ITEMS, "Cart items retrieved successfully"),
    plain("get_cart_summary", ep::GET_CART_SUMMARY, "Cart summary retrieved successfully"),
    plain("clear_cart", ep::CLEAR_CART, "Cart cleared successfully"),
    // inventory
    body("create_inventory", ep::CREATE_INVENTORY, "Inventory created successfully"),
    body(
        "check_inventory",
        ep::CHECK_INVENTORY_AVAILABILITY,
        "Inventory availability checked successfully",
    ),
    body("reserve_inventory", ep::RESERVE_INVENTORY, "Inventory reserved successfully"),
    query("get_inventory", ep::GET_INVENTORY_BY_PRODUCT, "Inventory retrieved successfully"),
    query("list_inventory", ep::LIST_INVENTORY, "Inventory listed successfully"),
    body("update_inventory", ep::UPDATE_INVENTORY, "Inventory updated successfully"),
    // media
    body("upload_media", ep::UPLOAD_MEDIA, "Media uploaded successfully"),
    plain("get_media", ep::GET_MEDIA, "Media retrieved successfully"),
    query("list_media", ep::LIST_MEDIA, "Media files listed successfully"),
    body("update_media", ep::UPDATE_MEDIA, "Media updated successfully"),
    plain("delete_media", ep::DELETE_MEDIA, "Media deleted successfully"),
    // partners
    body("create_partner", ep::CREATE_PARTNER, "Partner created successfully"),
    plain("get_partner", ep::GET_PARTNER, "Partner retrieved successfully"),
    query("list_partners", ep::LIST_PARTNERS, "Partners listed successfully"),
    body("update_partner", ep::UPDATE_PARTNER, "Partner updated successfully"),
    plain("delete_partner", ep::DELETE_PARTNER, "Partner deleted successfully"),
    // sales channels
    body("create_sales_channel", ep::CREATE_SALES_CHANNEL, "Sales channel created successfully"),
    plain("get_sales_channel", ep::GET_SALES_CHANNEL, "Sales channel retrieved successfully"),
    plain(
        "get_sales_channel_by_code",
        ep::GET_SALES_CHANNEL_BY_CODE,
        "Sales channel retrieved successfully",
    ),
    query("list_sales_channels", ep::LIST_SALES_CHANNELS, "Sales channels listed successfully"),
    body("update_sales_channel", ep::UPDATE_SALES_CHANNEL, "Sales channel updated successfully"),
    plain("delete_sales_channel", ep::DELETE_SALES_CHANNEL, "Sales channel deleted successfully"),
    plain(
        "activate_sales_channel",
        ep::ACTIVATE_SALES_CHANNEL,
        "Sales channel activated successfully",
    ),
    plain(
        "deactivate_sales_channel",
        ep::DEACTIVATE_SALES_CHANNEL,
        "Sales channel deactivated successfully",
    ),
    plain(
        "get_sales_channel_statistics",
        ep::GET_SALES_CHANNEL_STATISTICS,
        "Sales channel statistics retrieved successfully",
    ),
    // translations
    body("create_translation", ep::CREATE_TRANSLATION, "Translation created successfully"),
    plain("get_translation", ep::GET_TRANSLATION, "Translation retrieved successfully"),
    body("update_translation", ep::UPDATE_TRANSLATION, "Translation updated successfully"),
    plain("delete_translation", ep::DELETE_TRANSLATION, "Translation deleted successfully"),
    plain(
        "get_supported_languages",
        ep::GET_SUPPORTED_LANGUAGES,
        "Supported languages retrieved successfully",
    ),
    body(
        "create_product_translation",
        ep::CREATE_PRODUCT_TRANSLATION,
        "Product translation created successfully",
    ),
    plain(
        "get_product_translation",
        ep::GET_PRODUCT_TRANSLATION,
        "Product translation retrieved successfully",
    ),
    body(
        "update_product_translation",
        ep::UPDATE_PRODUCT_TRANSLATION,
        "Product translation updated successfully",
    ),
    plain(
        "delete_product_translation",
        ep::DELETE_PRODUCT_TRANSLATION,
        "Product translation deleted successfully",
    ),
    plain(
        "list_product_translations",
        ep::LIST_PRODUCT_TRANSLATIONS,
        "Product translations listed successfully",
    ),
    body(
        "create_category_translation",
        ep::CREATE_CATEGORY_TRANSLATION,
        "Category translation created successfully",
    ),
    plain(
        "get_category_translation",
        ep::GET_CATEGORY_TRANSLATION,
        "Category translation retrieved successfully",
    ),
    body(
        "update_category_translation",
        ep::UPDATE_CATEGORY_TRANSLATION,
        "Category translation updated successfully",
    ),
    plain(
        "delete_category_translation",
        ep::DELETE_CATEGORY_TRANSLATION,
        "Category translation deleted successfully",
    ),
    plain(
        "list_category_translations",
        ep::LIST_CATEGORY_TRANSLATIONS,
        "Category translations listed successfully",
    ),
    body(
        "create_product_attribute_translation",
        ep::CREATE_PRODUCT_ATTRIBUTE_TRANSLATION,
        "Product attribute translation created successfully",
    ),
    plain(
        "get_product_attribute_translation",
        ep::GET_PRODUCT_ATTRIBUTE_TRANSLATION,
        "Product attribute translation retrieved successfully",
    ),
    body(
        "update_product_attribute_translation",
        ep::UPDATE_PRODUCT_ATTRIBUTE_TRANSLATION,
        "Product attribute translation updated successfully",
    ),
    plain(
        "delete_product_attribute_translation",
        ep::DELETE_PRODUCT_ATTRIBUTE_TRANSLATION,
        "Product attribute translation deleted successfully",
    ),
    plain(
        "list_product_attribute_translations",
        ep::LIST_PRODUCT_ATTRIBUTE_TRANSLATIONS,
        "Product attribute translations listed successfully",
    ),
    body(
        "create_product_variant_translation",
        ep::CREATE_PRODUCT_VARIANT_TRANSLATION,
        "Product variant translation created successfully",
    ),
    plain(
        "get_product_variant_translation",
        ep::GET_PRODUCT_VARIANT_TRANSLATION,
        "Product variant translation retrieved successfully",
    ),
    body(
        "update_product_variant_translation",
        ep::UPDATE_PRODUCT_VARIANT_TRANSLATION,
        "Product variant translation updated successfully",
    ),
    plain(
        "delete_product_variant_translation",
        ep::DELETE_PRODUCT_VARIANT_TRANSLATION,
        "Product variant translation deleted successfully",
    ),
    plain(
        "list_product_variant_translations",
        ep::LIST_PRODUCT_VARIANT_TRANSLATIONS,
        "Product variant translations listed successfully",
    ),
    body(
        "bulk_create_translations",
        ep::BULK_CREATE_TRANSLATIONS,
        "Translations created successfully",
    ),
    body(
        "bulk_delete_translations",
        ep::BULK_DELETE_TRANSLATIONS,
        "Translations deleted successfully",
    ),
    query(
        "get_translation_stats",
        ep::GET_TRANSLATION_STATS,
        "Translation statistics retrieved successfully",
    ),
    // product attributes
    body("create_attribute", ep::CREATE_ATTRIBUTE, "Attribute created successfully"),
    plain("get_attribute", ep::GET_ATTRIBUTE, "Attribute retrieved successfully"),
    plain("get_attribute_by_name", ep::GET_ATTRIBUTE_BY_NAME, "Attribute retrieved successfully"),
    query("list_attributes", ep::LIST_ATTRIBUTES, "Attributes listed successfully"),
    body("update_attribute", ep::UPDATE_ATTRIBUTE, "Attribute updated successfully"),
    plain("delete_attribute", ep::DELETE_ATTRIBUTE, "Attribute deleted successfully"),
    body(
        "create_attribute_value",
        ep::CREATE_ATTRIBUTE_VALUE,
        "Attribute value created successfully",
    ),
    plain(
        "get_attribute_values",
        ep::GET_ATTRIBUTE_VALUES,
        "Attribute values retrieved successfully",
    ),
    body(
        "update_attribute_value",
        ep::UPDATE_ATTRIBUTE_VALUE,
        "Attribute value updated successfully",
    ),
    plain(
        "delete_attribute_value",
        ep::DELETE_ATTRIBUTE_VALUE,
        "Attribute value deleted successfully",
    ),
    body(
        "bulk_create_attribute_values",
        ep::BULK_CREATE_ATTRIBUTE_VALUES,
        "Attribute values created successfully",
    ),
    plain("get_attribute_usage", ep::GET_ATTRIBUTE_USAGE, "Attribute usage retrieved successfully"),
    // system
    plain(
        "get_system_health",
        ep::HEALTH,
        "System health retrieved successfully",
    ),
    ToolRoute::new("health_check", Handler::HealthCheck, "Health check completed successfully"),
    ToolRoute::new(
        "get_system_info",
        Handler::SystemInfo,
        "System information retrieved successfully",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;

    fn route(tool: &str) -> &'static ToolRoute {
        ROUTES
            .iter()
            .find(|route| route.tool == tool)
            .expect("route should exist")
    }

    #[test]
    fn mutations_send_bodies_and_reads_do_not() {
        for route in ROUTES {
            if let Handler::Endpoint { endpoint, payload } = route.handler {
                if payload == PayloadShape::Body {
                    assert_ne!(endpoint.method, HttpMethod::Get, "{}", route.tool);
                }
                if endpoint.method == HttpMethod::Get {
                    assert_ne!(payload, PayloadShape::Body, "{}", route.tool);
                }
            }
        }
    }

    #[test]
    fn clear_cart_deletes_every_item() {
        let Handler::Endpoint { endpoint, .. } = route("clear_cart").handler else {
            panic!("clear_cart is an endpoint route");
        };
        assert_eq!(endpoint.method, HttpMethod::Delete);
        assert_eq!(endpoint.template, "/carts/{cartId}/items");
    }

    #[test]
    fn category_listing_documents_both_endpoints() {
        let endpoints = route("list_categories").endpoints();
        assert_eq!(endpoints, vec![ep::LIST_CATEGORIES, ep::GET_CATEGORY_TREE]);
    }

    #[test]
    fn creation_routes_carry_next_steps() {
        assert!(!route("create_product").next_steps.is_empty());
        assert!(route("get_product").next_steps.is_empty());
    }
}
