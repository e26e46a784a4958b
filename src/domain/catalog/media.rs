use serde_json::json;

use super::{by_id, paged, string, string_enum, ToolDescriptor};

const ENTITY_TYPES: &[&str] = &["product", "category", "user", "order"];
const MEDIA_TYPES: &[&str] = &["image", "video", "document", "audio"];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "upload_media",
            "Register a media file (image, video, document) for an entity",
            json!({
                "entityType": string_enum(ENTITY_TYPES, "Kind of entity the file belongs to"),
                "entityId": string("Entity UUID"),
                "fileName": string("File name"),
                "mediaType": string_enum(MEDIA_TYPES, "Kind of media"),
                "altText": string("Alternative text for accessibility"),
                "title": string("Media title")
            }),
            &["entityType", "entityId", "fileName", "mediaType"],
        ),
        by_id(
            "get_media",
            "Get detailed information about a media file",
            "Media file UUID",
        ),
        ToolDescriptor::new(
            "list_media",
            "List media files with optional filters",
            paged(
                json!({
                    "entityType": string_enum(ENTITY_TYPES, "Filter by entity kind"),
                    "entityId": string("Filter by entity UUID"),
                    "mediaType": string_enum(MEDIA_TYPES, "Filter by media kind")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "update_media",
            "Update the metadata of a media file",
            json!({
                "id": string("Media file UUID"),
                "altText": string("Alternative text"),
                "title": string("Media title"),
                "description": string("Media description")
            }),
            &["id"],
        ),
        by_id(
            "delete_media",
            "Delete a media file",
            "UUID of the media file to delete",
        ),
    ]
}
