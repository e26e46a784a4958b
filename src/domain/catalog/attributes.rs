use serde_json::json;

use super::{boolean, by_id, paged, string, string_enum, ToolDescriptor};

const ATTRIBUTE_TYPES: &[&str] = &["text", "number", "boolean", "select", "multiselect"];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_attribute",
            "Create a new product attribute",
            json!({
                "name": string("Attribute name"),
                "type": string_enum(ATTRIBUTE_TYPES, "Attribute type"),
                "isRequired": { "type": "boolean", "default": false },
                "isFilterable": { "type": "boolean", "default": false },
                "description": string("Attribute description")
            }),
            &["name", "type"],
        ),
        by_id(
            "get_attribute",
            "Get detailed information about a product attribute",
            "Attribute UUID",
        ),
        ToolDescriptor::new(
            "get_attribute_by_name",
            "Get a product attribute by its name",
            json!({ "name": string("Attribute name") }),
            &["name"],
        ),
        ToolDescriptor::new(
            "list_attributes",
            "List product attributes",
            paged(
                json!({
                    "type": string_enum(ATTRIBUTE_TYPES, "Filter by attribute type"),
                    "isRequired": boolean("Filter by required attributes")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "update_attribute",
            "Update an existing product attribute",
            json!({
                "id": string("Attribute UUID"),
                "name": string("Attribute name"),
                "isRequired": { "type": "boolean" },
                "isFilterable": { "type": "boolean" },
                "description": string("Attribute description")
            }),
            &["id"],
        ),
        by_id(
            "delete_attribute",
            "Delete a product attribute",
            "UUID of the attribute to delete",
        ),
        ToolDescriptor::new(
            "create_attribute_value",
            "Add a value to an attribute",
            json!({
                "attributeId": string("Attribute UUID"),
                "value": string("Attribute value"),
                "sortOrder": { "type": "number", "default": 0, "description": "Sort order" }
            }),
            &["attributeId", "value"],
        ),
        ToolDescriptor::new(
            "get_attribute_values",
            "List the values of an attribute",
            json!({ "attributeId": string("Attribute UUID") }),
            &["attributeId"],
        ),
        ToolDescriptor::new(
            "update_attribute_value",
            "Update an attribute value",
            json!({
                "attributeId": string("Attribute UUID"),
                "valueId": string("Attribute value UUID"),
                "value": string("New value"),
                "sortOrder": { "type": "number", "description": "Sort order" }
            }),
            &["attributeId", "valueId"],
        ),
        ToolDescriptor::new(
            "delete_attribute_value",
            "Delete an attribute value",
            json!({
                "attributeId": string("Attribute UUID"),
                "valueId": string("UUID of the value to delete")
            }),
            &["attributeId", "valueId"],
        ),
        ToolDescriptor::new(
            "bulk_create_attribute_values",
            "Add many values to an attribute in one call",
            json!({
                "attributeId": string("Attribute UUID"),
                "values": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "value": { "type": "string", "description": "Attribute value" },
                            "sortOrder": { "type": "number", "default": 0 }
                        },
                        "required": ["value"]
                    }
                }
            }),
            &["attributeId", "values"],
        ),
        by_id(
            "get_attribute_usage",
            "Get where a product attribute is used",
            "Attribute UUID",
        ),
    ]
}
