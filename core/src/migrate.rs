//! On-read upgrades for records written by earlier releases.
//!
//! Applied once, at load time, to each raw meal record before typed
//! deserialization; the rest of the engine only ever sees the current
//! schema. Running an upgrade twice is a no-op.

use serde_json::{Value, json};

/// Upgrade a raw meal record in place.
///
/// - `dayIndex` (the original field name) becomes `day`; records already
///   carrying `day` pass through unchanged.
/// - Ingredient lists stored as plain strings (the first schema had no
///   quantities) become `{name, quantity: 1}` objects.
pub fn upgrade_meal_record(record: &mut Value) {
    let Some(fields) = record.as_object_mut() else {
        return;
    };

    if fields.contains_key("day") {
        fields.remove("dayIndex");
    } else if let Some(day) = fields.remove("dayIndex") {
        fields.insert("day".to_string(), day);
    }

    if let Some(Value::Array(ingredients)) = fields.get_mut("ingredients") {
        for entry in ingredients.iter_mut() {
            if let Value::String(name) = entry {
                let upgraded = json!({ "name": name.as_str(), "quantity": 1 });
                *entry = upgraded;
            }
        }
    }
}
