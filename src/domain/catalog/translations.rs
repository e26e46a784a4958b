use serde_json::{json, Map, Value};

use super::{string, string_enum, ToolDescriptor};

const LANGUAGE_CODES: &[&str] = &["en", "vi", "fr", "de", "ja", "ko", "zh"];
const BULK_ENTITY_TYPES: &[&str] = &["product", "category", "product_attribute", "product_variant"];

/// Tool names and fields for one translatable entity kind.
struct EntityTranslations {
    id_field: &'static str,
    id_description: &'static str,
    create: (&'static str, &'static str),
    get: (&'static str, &'static str),
    update: (&'static str, &'static str),
    delete: (&'static str, &'static str),
    list: (&'static str, &'static str),
    /// Translatable text fields; the first one is required on create.
    fields: &'static [(&'static str, &'static str)],
}

const PRODUCT: EntityTranslations = EntityTranslations {
    id_field: "productId",
    id_description: "Product UUID",
    create: ("create_product_translation", "Create a translation for a product"),
    get: ("get_product_translation", "Get a product translation for a language"),
    update: ("update_product_translation", "Update a product translation"),
    delete: ("delete_product_translation", "Delete a product translation"),
    list: ("list_product_translations", "List every translation of a product"),
    fields: &[
        ("title", "Product title"),
        ("description", "Product description"),
        ("metaTitle", "SEO meta title"),
        ("metaDescription", "SEO meta description"),
    ],
};

const CATEGORY: EntityTranslations = EntityTranslations {
    id_field: "categoryId",
    id_description: "Category UUID",
    create: ("create_category_translation", "Create a translation for a category"),
    get: ("get_category_translation", "Get a category translation for a language"),
    update: ("update_category_translation", "Update a category translation"),
    delete: ("delete_category_translation", "Delete a category translation"),
    list: ("list_category_translations", "List every translation of a category"),
    fields: &[
        ("name", "Category name"),
        ("description", "Category description"),
        ("metaTitle", "SEO meta title"),
        ("metaDescription", "SEO meta description"),
    ],
};

const PRODUCT_ATTRIBUTE: EntityTranslations = EntityTranslations {
    id_field: "attributeId",
    id_description: "Attribute UUID",
    create: (
        "create_product_attribute_translation",
        "Create a translation for a product attribute",
    ),
    get: (
        "get_product_attribute_translation",
        "Get a product attribute translation for a language",
    ),
    update: (
        "update_product_attribute_translation",
        "Update a product attribute translation",
    ),
    delete: (
        "delete_product_attribute_translation",
        "Delete a product attribute translation",
    ),
    list: (
        "list_product_attribute_translations",
        "List every translation of a product attribute",
    ),
    fields: &[
        ("name", "Attribute name"),
        ("description", "Attribute description"),
    ],
};

const PRODUCT_VARIANT: EntityTranslations = EntityTranslations {
    id_field: "variantId",
    id_description: "Product variant UUID",
    create: (
        "create_product_variant_translation",
        "Create a translation for a product variant",
    ),
    get: (
        "get_product_variant_translation",
        "Get a product variant translation for a language",
    ),
    update: (
        "update_product_variant_translation",
        "Update a product variant translation",
    ),
    delete: (
        "delete_product_variant_translation",
        "Delete a product variant translation",
    ),
    list: (
        "list_product_variant_translations",
        "List every translation of a product variant",
    ),
    fields: &[
        ("name", "Variant name"),
        ("description", "Variant description"),
    ],
};

impl EntityTranslations {
    fn key_properties(&self, with_language: bool) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(self.id_field.to_string(), string(self.id_description));
        if with_language {
            properties.insert(
                "language".to_string(),
                string("Language code, for example en or vi"),
            );
        }
        properties
    }

    fn with_fields(&self) -> Value {
        let mut properties = self.key_properties(true);
        for (name, description) in self.fields {
            properties.insert(name.to_string(), string(description));
        }
        Value::Object(properties)
    }

    fn descriptors(&self) -> Vec<ToolDescriptor> {
        let first_field = self.fields.first().map(|(name, _)| *name).unwrap_or("name");
        vec![
            ToolDescriptor::new(
                self.create.0,
                self.create.1,
                self.with_fields(),
                &[self.id_field, "language", first_field],
            ),
            ToolDescriptor::new(
                self.get.0,
                self.get.1,
                Value::Object(self.key_properties(true)),
                &[self.id_field, "language"],
            ),
            ToolDescriptor::new(
                self.update.0,
                self.update.1,
                self.with_fields(),
                &[self.id_field, "language"],
            ),
            ToolDescriptor::new(
                self.delete.0,
                self.delete.1,
                Value::Object(self.key_properties(true)),
                &[self.id_field, "language"],
            ),
            ToolDescriptor::new(
                self.list.0,
                self.list.1,
                Value::Object(self.key_properties(false)),
                &[self.id_field],
            ),
        ]
    }
}

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    let mut descriptors = vec![
        ToolDescriptor::new(
            "create_translation",
            "Create a translation for a product or category",
            json!({
                "entityType": string_enum(
                    &["product", "category", "attribute"],
                    "Kind of entity to translate"
                ),
                "entityId": string("Entity UUID"),
                "languageCode": string_enum(LANGUAGE_CODES, "Language code"),
                "fields": {
                    "type": "object",
                    "description": "Translated fields (name, description, ...)"
                }
            }),
            &["entityType", "entityId", "languageCode", "fields"],
        ),
        ToolDescriptor::new(
            "get_translation",
            "Get the translation of an entity for a language",
            json!({
                "entityId": string("Entity UUID"),
                "languageCode": string("Language code")
            }),
            &["entityId", "languageCode"],
        ),
        ToolDescriptor::new(
            "update_translation",
            "Update an existing translation",
            json!({
                "entityId": string("Entity UUID"),
                "languageCode": string("Language code"),
                "fields": { "type": "object", "description": "Fields to update" }
            }),
            &["entityId", "languageCode", "fields"],
        ),
        ToolDescriptor::new(
            "delete_translation",
            "Delete a translation",
            json!({
                "entityId": string("Entity UUID"),
                "languageCode": string("Language code")
            }),
            &["entityId", "languageCode"],
        ),
        ToolDescriptor::new(
            "get_supported_languages",
            "List the languages supported by the platform",
            json!({}),
            &[],
        ),
    ];

    for entity in [&PRODUCT, &CATEGORY, &PRODUCT_ATTRIBUTE, &PRODUCT_VARIANT] {
        descriptors.extend(entity.descriptors());
    }

    descriptors.extend([
        ToolDescriptor::new(
            "bulk_create_translations",
            "Create many translations in one call",
            json!({
                "translations": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "entityType": { "type": "string", "enum": BULK_ENTITY_TYPES },
                            "entityId": { "type": "string" },
                            "language": { "type": "string" },
                            "data": { "type": "object" }
                        },
                        "required": ["entityType", "entityId", "language", "data"]
                    }
                }
            }),
            &["translations"],
        ),
        ToolDescriptor::new(
            "bulk_delete_translations",
            "Delete many translations in one call",
            json!({
                "translations": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "entityType": { "type": "string", "enum": BULK_ENTITY_TYPES },
                            "entityId": { "type": "string" },
                            "language": { "type": "string" }
                        },
                        "required": ["entityType", "entityId", "language"]
                    }
                }
            }),
            &["translations"],
        ),
        ToolDescriptor::new(
            "get_translation_stats",
            "Get translation coverage statistics",
            json!({
                "entityType": { "type": "string", "enum": BULK_ENTITY_TYPES },
                "language": string("Language code")
            }),
            &[],
        ),
    ]);

    descriptors
}
