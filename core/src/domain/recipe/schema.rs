use serde_json::json;

/// Returns the JSON schema structured-mode answers are constrained to: a
/// top-level array of recipe entries, every field required.
pub fn get_recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "time": { "type": "string" },
                "steps": { "type": "string" },
                "missing_ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["name", "time", "steps", "missing_ingredients"]
        }
    })
}
