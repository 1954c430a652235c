//! Schema validation helpers – compiled into WASM.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref ACTION_SCHEMA: JSONSchema = {
        // At compile-time embed the schema JSON string.
        let raw = include_str!("schema/action_schema.json");
        let parsed: Value = serde_json::from_str(raw)
            .expect("Action JSON schema must be valid JSON");
        JSONSchema::compile(&parsed).expect("valid action schema")
    };
}

/// Validate a raw action against the *Action* schema.
/// Returns `true` when valid, `false` otherwise.
///
/// Unrecognised `type` values pass; they decode to a no-op update.
pub fn validate_action(value: &Value) -> bool {
    ACTION_SCHEMA.validate(value).is_ok()
}
