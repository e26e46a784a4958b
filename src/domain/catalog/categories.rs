use serde_json::json;

use super::{boolean, by_id, paged, string, ToolDescriptor};

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_category",
            "Create a new product category",
            json!({
                "name": string("Category name"),
                "description": string("Category description"),
                "parentId": string("Parent category UUID"),
                "slug": string("URL-friendly slug"),
                "isActive": { "type": "boolean", "default": true },
                "sortOrder": { "type": "number", "default": 0 }
            }),
            &["name", "slug"],
        ),
        ToolDescriptor::new(
            "list_categories",
            "List all categories or fetch the category tree",
            paged(
                json!({
                    "tree": {
                        "type": "boolean",
                        "default": false,
                        "description": "Return the hierarchical tree instead of a flat page"
                    }
                }),
                50,
            ),
            &[],
        ),
        by_id(
            "get_category",
            "Get detailed information about a category",
            "Category UUID",
        ),
        ToolDescriptor::new(
            "update_category",
            "Update an existing category",
            json!({
                "id": string("Category UUID"),
                "name": string("Category name"),
                "description": string("Category description"),
                "parentId": string("Parent category UUID"),
                "slug": string("URL-friendly slug"),
                "isActive": boolean("Whether the category is active"),
                "sortOrder": { "type": "number" }
            }),
            &["id"],
        ),
        by_id(
            "delete_category",
            "Delete a category from the platform",
            "UUID of the category to delete",
        ),
    ]
}
