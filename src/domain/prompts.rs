//! Guided conversation prompts exposed via Model Context Protocol
//!
//! Each prompt renders a single assistant message. Arguments are optional
//! strings; absent ones fall back to per-prompt defaults.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::mcp::rpc::{json_rpc_error, json_rpc_error_with_data, json_rpc_result};

type Arguments = HashMap<String, String>;

pub struct PromptDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [(&'static str, &'static str)],
    render: fn(&Arguments) -> String,
}

impl PromptDefinition {
    fn to_value(&self) -> Value {
        let arguments = self
            .arguments
            .iter()
            .map(|(name, description)| {
                json!({ "name": name, "description": description, "required": false })
            })
            .collect::<Vec<_>>();

        json!({
            "name": self.name,
            "description": self.description,
            "arguments": arguments,
        })
    }

    pub fn render(&self, arguments: &Arguments) -> Value {
        json!({
            "description": self.description,
            "messages": [{
                "role": "assistant",
                "content": {
                    "type": "text",
                    "text": (self.render)(arguments),
                },
            }],
        })
    }
}

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: Option<serde_json::Map<String, Value>>,
}

pub const PROMPTS: &[PromptDefinition] = &[
    PromptDefinition {
        name: "create-product-wizard",
        description: "Interactive wizard that walks the user through creating a product",
        arguments: &[
            ("productType", "Kind of product to create (simple, configurable, bundle, ...)"),
            ("category", "Target category for the product"),
        ],
        render: create_product_wizard,
    },
    PromptDefinition {
        name: "setup-pricing-rule",
        description: "Guide for setting up pricing rules and promotions",
        arguments: &[
            ("ruleType", "Pricing rule type (percentage discount, fixed discount, ...)"),
            ("targetProducts", "Products or categories the rule applies to"),
        ],
        render: setup_pricing_rule,
    },
    PromptDefinition {
        name: "troubleshoot-api",
        description: "Helps diagnose and resolve API integration issues",
        arguments: &[
            ("issue", "Kind of issue (authentication, rate limiting, validation, ...)"),
            ("endpoint", "API endpoint showing the problem"),
            ("errorCode", "HTTP status or error code received"),
        ],
        render: troubleshoot_api,
    },
    PromptDefinition {
        name: "ecommerce-consultant",
        description: "Acts as an eCommerce strategy consultant giving business advice",
        arguments: &[
            (
                "topic",
                "Focus area (product strategy, pricing, inventory, customer experience, ...)",
            ),
            ("businessType", "Business model (B2B, B2C, marketplace, ...)"),
            ("industry", "Industry vertical (fashion, electronics, food, ...)"),
        ],
        render: ecommerce_consultant,
    },
    PromptDefinition {
        name: "optimize-catalog",
        description: "Recommendations for optimizing the product catalog structure",
        arguments: &[
            ("catalogSize", "Approximate number of products in the catalog"),
            ("categories", "Number of categories currently in use"),
            ("challenges", "Specific challenges with the current catalog"),
        ],
        render: optimize_catalog,
    },
    PromptDefinition {
        name: "pricing-strategy-advisor",
        description: "Strategic advice on pricing models and competitive positioning",
        arguments: &[
            ("pricingModel", "Current pricing model (fixed, dynamic, tiered, ...)"),
            ("competitivePosition", "Position against competitors (premium, value, budget)"),
            ("margins", "Target profit margins"),
        ],
        render: pricing_strategy_advisor,
    },
    PromptDefinition {
        name: "inventory-optimization",
        description: "Helps optimize inventory management and reduce stockouts and overstock",
        arguments: &[
            ("inventoryTurnover", "Current inventory turnover rate"),
            ("stockoutFrequency", "How often stockouts happen"),
            ("seasonality", "Whether products follow seasonal demand"),
        ],
        render: inventory_optimization,
    },
    PromptDefinition {
        name: "api-integration-planner",
        description: "Plans and designs an API integration architecture",
        arguments: &[
            ("integrationType", "Integration kind (frontend, mobile, third party, ...)"),
            ("expectedVolume", "Expected API call volume"),
            ("realTimeRequirements", "Whether real-time data sync is needed"),
        ],
        render: api_integration_planner,
    },
    PromptDefinition {
        name: "cart-optimization",
        description: "Optimizes the cart experience and reduces abandonment",
        arguments: &[
            ("abandonmentRate", "Current cart abandonment rate"),
            ("checkoutSteps", "Number of steps in the current checkout"),
            ("paymentMethods", "Available payment methods"),
        ],
        render: cart_optimization,
    },
    PromptDefinition {
        name: "multi-channel-strategy",
        description: "Develops a strategy for managing multiple sales channels",
        arguments: &[
            ("currentChannels", "Sales channels currently active"),
            ("targetChannels", "Channels planned for expansion"),
            ("inventorySync", "Whether inventory must be synchronized across channels"),
        ],
        render: multi_channel_strategy,
    },
    PromptDefinition {
        name: "performance-audit",
        description: "Audits platform performance and recommends optimizations",
        arguments: &[
            ("responseTime", "Current average API response time"),
            ("throughput", "Current requests per second"),
            ("bottlenecks", "Known performance bottlenecks"),
        ],
        render: performance_audit,
    },
    PromptDefinition {
        name: "security-assessment",
        description: "Assesses the security posture and gives recommendations",
        arguments: &[
            ("authMethod", "Current authentication method"),
            ("dataTypes", "Kinds of sensitive data handled"),
            ("complianceRequirements", "Compliance requirements (PCI DSS, GDPR, ...)"),
        ],
        render: security_assessment,
    },
    PromptDefinition {
        name: "migration-planner",
        description: "Plans a migration from an existing eCommerce platform",
        arguments: &[
            ("currentPlatform", "Current eCommerce platform"),
            ("dataVolume", "Amount of data to migrate"),
            ("downtime", "Acceptable downtime for the migration"),
        ],
        render: migration_planner,
    },
    PromptDefinition {
        name: "testing-strategy",
        description: "Develops a testing strategy for an eCommerce rollout",
        arguments: &[
            ("testingTypes", "Testing kinds needed (unit, integration, performance, ...)"),
            ("automationLevel", "Desired level of test automation"),
            ("criticalFlows", "Most important user flows to cover"),
        ],
        render: testing_strategy,
    },
];

pub fn find_prompt(name: &str) -> Option<&'static PromptDefinition> {
    PROMPTS.iter().find(|prompt| prompt.name == name)
}

pub fn build_prompts_list() -> Value {
    json!({ "prompts": PROMPTS.iter().map(PromptDefinition::to_value).collect::<Vec<_>>() })
}

pub fn handle_prompts_get(id: Option<Value>, params: Option<Value>) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let request: GetPromptParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    let Some(prompt) = find_prompt(&request.name) else {
        return json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "prompt_not_found",
                "message": "unknown prompt name",
                "details": {
                    "name": request.name,
                },
            })),
        );
    };

    json_rpc_result(id, prompt.render(&string_arguments(request.arguments)))
}

/// Blank values count as absent; non-string values are rendered as JSON text.
fn string_arguments(arguments: Option<serde_json::Map<String, Value>>) -> Arguments {
    arguments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(text) => text.trim().to_string(),
                other => other.to_string(),
            };
            (!text.is_empty()).then_some((key, text))
        })
        .collect()
}

fn arg<'a>(arguments: &'a Arguments, name: &str, default: &'a str) -> &'a str {
    arguments.get(name).map(String::as_str).unwrap_or(default)
}

/// Renders the supplied arguments as a context block, or nothing if none were given.
fn context(arguments: &Arguments, names: &[(&str, &str)]) -> String {
    let lines = names
        .iter()
        .filter_map(|(name, label)| {
            arguments
                .get(*name)
                .map(|value| format!("- {label}: {value}"))
        })
        .collect::<Vec<_>>();

    if lines.is_empty() {
        String::new()
    } else {
        format!("**Your context:**\n{}\n\n", lines.join("\n"))
    }
}

fn create_product_wizard(arguments: &Arguments) -> String {
    let context = context(
        arguments,
        &[("productType", "Product type"), ("category", "Category")],
    );
    format!(
        "I'll help you create a new product step by step. Let's start with the basics:

{context}1. **Product Name**: What would you like to call your product?
2. **Product Type**: Choose from:
   - Simple (single variant)
   - Configurable (multiple variants)
   - Bundle (multiple products sold together)
   - Virtual (no physical shipping)

3. **Category**: Which category should this product belong to?
4. **SKU**: Unique product identifier
5. **Pricing**: Base price and any special pricing rules

Please provide the product name and type to get started."
    )
}

fn setup_pricing_rule(arguments: &Arguments) -> String {
    let rule_type = arg(arguments, "ruleType", "percentage_discount");
    let targets = arguments
        .get("targetProducts")
        .map(|targets| format!("\n**Applies to:** {targets}\n"))
        .unwrap_or_default();
    format!(
        "Let's set up a {rule_type} pricing rule. Here's what we need:
{targets}
**Rule Configuration:**
1. **Name**: Descriptive name for the rule
2. **Type**: {rule_type}
3. **Discount Value**: Amount or percentage
4. **Conditions**: When should this rule apply?
   - Minimum quantity
   - Customer groups
   - Product categories
   - Date range

**Example for {rule_type}:**
- Name: \"Summer Sale 20% Off\"
- Discount: 20%
- Conditions: Category = \"Summer Collection\", Valid from June 1-30
- Priority: 10

What type of discount would you like to create?"
    )
}

fn troubleshoot_api(arguments: &Arguments) -> String {
    let issue = arg(arguments, "issue", "general");
    let context = context(
        arguments,
        &[("endpoint", "Endpoint"), ("errorCode", "Error code")],
    );
    format!(
        "I'll help you troubleshoot API issues (focus: {issue}). Common problems and solutions:

{context}**Authentication Issues:**
- Check if your API token is valid and not expired
- Ensure the Authorization header is properly formatted: \"Bearer YOUR_TOKEN\"

**Rate Limiting:**
- You may be hitting rate limits (1000 requests/hour)
- Implement exponential backoff for retries

**404 Errors:**
- Verify the endpoint URL is correct
- Check if the resource ID exists

**Validation Errors:**
- Review required fields in the request body
- Check data types and formats (UUIDs, dates, etc.)

**Network Issues:**
- Verify the base URL is accessible
- Check firewall and proxy settings

What specific issue are you experiencing? Please share:
1. The API endpoint you're calling
2. The error message or status code
3. Your request payload (without sensitive data)"
    )
}

fn ecommerce_consultant(arguments: &Arguments) -> String {
    let topic = arg(arguments, "topic", "general");
    let context = context(
        arguments,
        &[("businessType", "Business type"), ("industry", "Industry")],
    );
    format!(
        "Welcome! I'm your eCommerce consultant for the Sun eCommerce Platform. Today's focus: {topic}.

{context}I can help with:

**Product Strategy:**
- Product catalog organization
- Category structure optimization
- Attribute management
- SEO best practices

**Pricing Strategy:**
- Dynamic pricing rules
- Promotional campaigns
- Tier pricing strategies
- Competitive pricing analysis

**Inventory Management:**
- Stock level optimization
- Demand forecasting
- Multi-location inventory
- Backorder management

**Customer Experience:**
- Cart optimization
- Checkout flow improvement
- Personalization strategies
- Multi-language support

**Technical Integration:**
- API best practices
- Performance optimization
- Scalability planning
- Third-party integrations

What aspect of your eCommerce strategy would you like to discuss? I can provide specific recommendations based on your business needs."
    )
}

fn advisory(title: &str, context: String, areas: &[(&str, &[&str])], closing: &str) -> String {
    let sections = areas
        .iter()
        .map(|(heading, points)| {
            let points = points
                .iter()
                .map(|point| format!("- {point}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("**{heading}:**\n{points}")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{title}\n\n{context}{sections}\n\n{closing}")
}

fn optimize_catalog(arguments: &Arguments) -> String {
    advisory(
        "Let's review your product catalog structure.",
        context(
            arguments,
            &[
                ("catalogSize", "Catalog size"),
                ("categories", "Categories"),
                ("challenges", "Challenges"),
            ],
        ),
        &[
            (
                "Category Structure",
                &[
                    "Keep the tree shallow; three levels cover most catalogs",
                    "Use list_categories with tree enabled to spot empty or overloaded branches",
                    "Give every category a stable, SEO-friendly slug",
                ],
            ),
            (
                "Product Data",
                &[
                    "Standardize attributes with list_attributes",
                    "Use variants instead of near-duplicate products",
                    "Fill in translations for every active language",
                ],
            ),
        ],
        "Share a few example products and I'll suggest a concrete structure.",
    )
}

fn pricing_strategy_advisor(arguments: &Arguments) -> String {
    advisory(
        "Let's work out a pricing strategy that fits your market.",
        context(
            arguments,
            &[
                ("pricingModel", "Pricing model"),
                ("competitivePosition", "Competitive position"),
                ("margins", "Target margins"),
            ],
        ),
        &[
            (
                "Pricing Models",
                &[
                    "Fixed list prices with periodic promotions",
                    "Tiered pricing for volume buyers",
                    "Customer-group pricing for B2B accounts",
                ],
            ),
            (
                "Using Pricing Rules",
                &[
                    "Model each promotion as a pricing rule with a clear priority",
                    "Check conflicts with validate_pricing_rule before activating",
                    "Track effectiveness with get_pricing_rule_stats",
                ],
            ),
        ],
        "Which products or segments should we price first?",
    )
}

fn inventory_optimization(arguments: &Arguments) -> String {
    advisory(
        "Let's tune your inventory so stock matches demand.",
        context(
            arguments,
            &[
                ("inventoryTurnover", "Inventory turnover"),
                ("stockoutFrequency", "Stockout frequency"),
                ("seasonality", "Seasonality"),
            ],
        ),
        &[
            (
                "Stock Levels",
                &[
                    "Set reorder points per product from recent sales velocity",
                    "Reserve stock for open carts with reserve_inventory",
                    "Review low-stock items regularly with list_inventory",
                ],
            ),
            (
                "Demand Planning",
                &[
                    "Plan seasonal peaks ahead of time",
                    "Allow backorders only where lead times are reliable",
                    "Balance stock across locations before reordering",
                ],
            ),
        ],
        "Which product lines cause the most stock problems today?",
    )
}

fn api_integration_planner(arguments: &Arguments) -> String {
    advisory(
        "Let's plan your integration with the Sun eCommerce API.",
        context(
            arguments,
            &[
                ("integrationType", "Integration type"),
                ("expectedVolume", "Expected volume"),
                ("realTimeRequirements", "Real-time requirements"),
            ],
        ),
        &[
            (
                "Architecture",
                &[
                    "Authenticate every call with a bearer token",
                    "Page through large listings instead of fetching everything",
                    "Cache reference data such as categories and languages",
                ],
            ),
            (
                "Reliability",
                &[
                    "Retry transient failures with exponential backoff",
                    "Make create operations idempotent on your side",
                    "Monitor the platform with health_check",
                ],
            ),
        ],
        "What systems will call the API, and how often?",
    )
}

fn cart_optimization(arguments: &Arguments) -> String {
    advisory(
        "Let's reduce cart abandonment and smooth out checkout.",
        context(
            arguments,
            &[
                ("abandonmentRate", "Abandonment rate"),
                ("checkoutSteps", "Checkout steps"),
                ("paymentMethods", "Payment methods"),
            ],
        ),
        &[
            (
                "Cart Experience",
                &[
                    "Show the full price with get_cart_summary before checkout",
                    "Apply eligible pricing rules automatically",
                    "Keep carts alive across sessions for returning customers",
                ],
            ),
            (
                "Checkout",
                &[
                    "Cut checkout to as few steps as possible",
                    "Offer the payment methods your customers expect",
                    "Confirm stock availability before payment",
                ],
            ),
        ],
        "Where in the funnel do most customers drop off?",
    )
}

fn multi_channel_strategy(arguments: &Arguments) -> String {
    advisory(
        "Let's design how you sell across channels.",
        context(
            arguments,
            &[
                ("currentChannels", "Current channels"),
                ("targetChannels", "Target channels"),
                ("inventorySync", "Inventory sync"),
            ],
        ),
        &[
            (
                "Channel Setup",
                &[
                    "Model each storefront or marketplace as a sales channel",
                    "Activate new channels only after catalog and pricing are ready",
                    "Compare channels with get_sales_channel_statistics",
                ],
            ),
            (
                "Operations",
                &[
                    "Share a single inventory pool or allocate stock per channel",
                    "Use channel-specific pricing rules where margins differ",
                    "Localize product content per channel language",
                ],
            ),
        ],
        "Which channel would you like to launch or improve next?",
    )
}

fn performance_audit(arguments: &Arguments) -> String {
    advisory(
        "Let's audit how your integration performs.",
        context(
            arguments,
            &[
                ("responseTime", "Response time"),
                ("throughput", "Throughput"),
                ("bottlenecks", "Known bottlenecks"),
            ],
        ),
        &[
            (
                "Measurements",
                &[
                    "Track latency per endpoint, not only overall",
                    "Watch retry counts as an early warning signal",
                    "Check platform status with get_system_info",
                ],
            ),
            (
                "Improvements",
                &[
                    "Request smaller pages and only the fields you need",
                    "Batch bulk changes with the bulk endpoints",
                    "Cache slow-changing data close to the caller",
                ],
            ),
        ],
        "Which operations feel slow today?",
    )
}

fn security_assessment(arguments: &Arguments) -> String {
    advisory(
        "Let's review the security of your eCommerce setup.",
        context(
            arguments,
            &[
                ("authMethod", "Authentication method"),
                ("dataTypes", "Sensitive data"),
                ("complianceRequirements", "Compliance requirements"),
            ],
        ),
        &[
            (
                "Access Control",
                &[
                    "Keep API tokens out of source control and rotate them",
                    "Grant each integration only the access it needs",
                    "Use TLS for every connection to the API",
                ],
            ),
            (
                "Data Protection",
                &[
                    "Never store raw card data outside a PCI DSS scope",
                    "Minimize personal data held in carts and partner records",
                    "Log access without logging secrets",
                ],
            ),
        ],
        "Which compliance requirements apply to your business?",
    )
}

fn migration_planner(arguments: &Arguments) -> String {
    advisory(
        "Let's plan your migration to the Sun eCommerce Platform.",
        context(
            arguments,
            &[
                ("currentPlatform", "Current platform"),
                ("dataVolume", "Data volume"),
                ("downtime", "Acceptable downtime"),
            ],
        ),
        &[
            (
                "Preparation",
                &[
                    "Map source categories and attributes before moving products",
                    "Migrate in order: categories, attributes, products, inventory, pricing",
                    "Rehearse with a subset of the catalog first",
                ],
            ),
            (
                "Cutover",
                &[
                    "Freeze catalog changes during the final sync",
                    "Verify counts and spot-check products after import",
                    "Keep the old platform read-only until sign-off",
                ],
            ),
        ],
        "Which platform are you moving from, and how large is the catalog?",
    )
}

fn testing_strategy(arguments: &Arguments) -> String {
    advisory(
        "Let's build a testing strategy for your rollout.",
        context(
            arguments,
            &[
                ("testingTypes", "Testing types"),
                ("automationLevel", "Automation level"),
                ("criticalFlows", "Critical flows"),
            ],
        ),
        &[
            (
                "Coverage",
                &[
                    "Automate the browse, cart and checkout flows end to end",
                    "Test pricing rules against known carts and expected totals",
                    "Exercise failure paths such as timeouts and invalid input",
                ],
            ),
            (
                "Environments",
                &[
                    "Run tests against a dedicated staging API",
                    "Seed predictable test data before each run",
                    "Load test the busiest endpoints before launch",
                ],
            ),
        ],
        "Which user flows matter most to your business?",
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn prompt_names_are_unique() {
        let names = PROMPTS.iter().map(|prompt| prompt.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), PROMPTS.len());
        assert_eq!(PROMPTS.len(), 14);
    }

    #[test]
    fn pricing_rule_prompt_defaults_rule_type() {
        let prompt = find_prompt("setup-pricing-rule").expect("prompt exists");
        let rendered = prompt.render(&Arguments::new());
        let text = rendered["messages"][0]["content"]["text"]
            .as_str()
            .expect("text");

        assert!(text.contains("percentage_discount"));
    }

    #[test]
    fn supplied_arguments_are_interpolated() {
        let response = handle_prompts_get(
            Some(json!(1)),
            Some(json!({
                "name": "troubleshoot-api",
                "arguments": {"issue": "authentication", "errorCode": 401}
            })),
        );

        let text = response["result"]["messages"][0]["content"]["text"]
            .as_str()
            .expect("text");
        assert!(text.contains("focus: authentication"));
        assert!(text.contains("Error code: 401"));
        assert_eq!(response["result"]["messages"][0]["role"], "assistant");
    }

    #[test]
    fn unknown_prompt_is_reported() {
        let response = handle_prompts_get(Some(json!(2)), Some(json!({"name": "nope"})));

        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(response["error"]["data"]["code"], "prompt_not_found");
    }

    #[test]
    fn list_includes_optional_arguments() {
        let list = build_prompts_list();
        let first = &list["prompts"][0];

        assert_eq!(first["name"], "create-product-wizard");
        assert_eq!(first["arguments"][0]["required"], false);
    }
}
