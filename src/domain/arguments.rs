//! Tool argument preparation shared by every route.

use serde_json::{Map, Value};

use super::{catalog::ToolDescriptor, dispatcher::DispatchError};
use crate::client::{Endpoint, PathParams};

/// Fills schema defaults for absent properties and checks that every
/// `required` property is present. Values are otherwise passed through
/// untouched; the upstream API owns full validation.
pub fn prepare(
    descriptor: &ToolDescriptor,
    mut arguments: Map<String, Value>,
) -> Result<Map<String, Value>, DispatchError> {
    if let Some(properties) = descriptor.properties() {
        for (name, property) in properties {
            if arguments.get(name).is_some_and(|value| !value.is_null()) {
                continue;
            }
            if let Some(default) = property.get("default") {
                arguments.insert(name.clone(), default.clone());
            }
        }
    }

    for name in descriptor.required() {
        if arguments.get(name).map_or(true, Value::is_null) {
            return Err(DispatchError::MissingArgument(name.to_string()));
        }
    }

    Ok(arguments)
}

/// Moves the arguments named by the endpoint's placeholders into path
/// parameters and returns them with the remaining arguments.
pub fn split_path_args(
    endpoint: &Endpoint,
    mut arguments: Map<String, Value>,
) -> Result<(PathParams, Map<String, Value>), DispatchError> {
    let mut params = PathParams::new();
    for name in endpoint.placeholders() {
        let value = arguments
            .remove(name)
            .ok_or_else(|| DispatchError::MissingArgument(name.to_string()))?;
        params.insert(name.to_string(), path_segment(name, &value)?);
    }
    Ok((params, arguments))
}

fn path_segment(name: &str, value: &Value) -> Result<String, DispatchError> {
    let segment = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(DispatchError::InvalidArgument {
                name: name.to_string(),
                reason: "must be a string or number".to_string(),
            })
        }
    };

    if segment.is_empty() {
        return Err(DispatchError::InvalidArgument {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(segment)
}

pub fn flag(arguments: &Map<String, Value>, name: &str) -> bool {
    arguments.get(name).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::endpoints;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object arguments")
    }

    fn search_products() -> ToolDescriptor {
        ToolDescriptor::new(
            "search_products",
            "search",
            json!({
                "search": { "type": "string" },
                "page": { "type": "number", "default": 1 },
                "pageSize": { "type": "number", "default": 20 }
            }),
            &[],
        )
    }

    #[test]
    fn fills_defaults_for_absent_properties() {
        let prepared = prepare(&search_products(), args(json!({"search": "mug"})))
            .expect("arguments are valid");

        assert_eq!(prepared["search"], "mug");
        assert_eq!(prepared["page"], 1);
        assert_eq!(prepared["pageSize"], 20);
    }

    #[test]
    fn caller_values_win_over_defaults() {
        let prepared = prepare(&search_products(), args(json!({"pageSize": 5})))
            .expect("arguments are valid");
        assert_eq!(prepared["pageSize"], 5);
    }

    #[test]
    fn missing_required_argument_is_reported() {
        let descriptor = ToolDescriptor::new(
            "get_product",
            "get",
            json!({ "id": { "type": "string" } }),
            &["id"],
        );

        let err = prepare(&descriptor, args(json!({"id": null}))).expect_err("id is null");
        assert!(matches!(err, DispatchError::MissingArgument(ref name) if name == "id"));
    }

    #[test]
    fn splits_path_arguments_from_payload() {
        let (params, rest) = split_path_args(
            &endpoints::UPDATE_CART_ITEM,
            args(json!({"cartId": "c-1", "itemId": 42, "quantity": 3})),
        )
        .expect("split succeeds");

        assert_eq!(params.get("cartId").map(String::as_str), Some("c-1"));
        assert_eq!(params.get("itemId").map(String::as_str), Some("42"));
        assert_eq!(rest, args(json!({"quantity": 3})));
    }

    #[test]
    fn rejects_empty_or_structured_path_values() {
        let err = split_path_args(&endpoints::GET_PRODUCT, args(json!({"id": ""})))
            .expect_err("empty id");
        assert!(matches!(err, DispatchError::InvalidArgument { .. }));

        let err = split_path_args(&endpoints::GET_PRODUCT, args(json!({"id": {"x": 1}})))
            .expect_err("object id");
        assert!(matches!(err, DispatchError::InvalidArgument { .. }));
    }

    #[test]
    fn path_values_are_kept_verbatim() {
        let (params, _) = split_path_args(&endpoints::GET_PRODUCT, args(json!({"id": " a b "})))
            .expect("whitespace is a legal value");
        assert_eq!(params["id"], " a b ");
    }

    #[test]
    fn flag_defaults_to_false() {
        assert!(flag(&args(json!({"tree": true})), "tree"));
        assert!(!flag(&args(json!({"tree": "yes"})), "tree"));
        assert!(!flag(&Map::new(), "tree"));
    }
}
