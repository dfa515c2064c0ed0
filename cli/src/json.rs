/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use bridge::{Array, Object, Value};

/// Builds a dynamic [Value] tree from a parsed JSON document.
pub fn to_value(json: &serde_json::Value) -> Value {
	to_value_with_null(json, &Value::Null)
}

/// Builds a dynamic [Value] tree, using `null` wherever the document has `null`.
pub fn to_value_with_null(json: &serde_json::Value, null: &Value) -> Value {
	match json {
		serde_json::Value::Null => null.clone(),
		serde_json::Value::Bool(b) => Value::Boolean(*b),
		serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
		serde_json::Value::String(str) => Value::String(str.clone()),
		serde_json::Value::Array(elements) => Value::Array(
			elements
				.iter()
				.map(|element| to_value_with_null(element, null))
				.collect::<Array>(),
		),
		serde_json::Value::Object(map) => Value::Object(
			map.iter()
				.map(|(key, value)| (key.as_str(), to_value_with_null(value, null)))
				.collect::<Object>(),
		),
	}
}
