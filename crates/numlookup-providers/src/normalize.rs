//! Response normalizers — provider JSON → [`PhoneDetails`].
//!
//! Field access is explicit: an absent or `null` field is "missing" and gets the
//! stated default. Strings are taken verbatim; other values use mapping notation
//! (`True`, `{'name': 'Verizon'}`).

use numlookup_core::PhoneDetails;
use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";

/// String value of `key`, or `None` if absent or `null`.
///
/// Non-object `value`s have no fields. Non-string values use [`display_value`].
pub fn field_str(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        other => Some(display_value(other)),
    }
}

/// Text of a value: strings bare, everything else in [`compact_repr`] notation.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => compact_repr(other),
    }
}

/// Whether `key` holds a non-empty value (not `null`, `false`, `0`, `""`, `[]` or `{}`).
fn field_is_set(value: &Value, key: &str) -> bool {
    match value.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Bool(true)) => true,
    }
}

// ─────────────────────────────────────────────
// Twilio
// ─────────────────────────────────────────────

/// Map a Twilio Lookup v1 response.
///
/// ```text
/// { "phone_number": "+15551234567", "national_format": "(555) 123-4567",
///   "country_code": "US",
///   "carrier": { "name": "AT&T", "type": "mobile" },
///   "caller_name": { "caller_name": "Jane Smith" } }
/// ```
///
/// `carrier` and `caller_name` may be absent, `null`, or empty.
pub fn normalize_twilio(data: &Value, number: &str) -> PhoneDetails {
    let carrier = data.get("carrier").unwrap_or(&Value::Null);
    let caller = data.get("caller_name").unwrap_or(&Value::Null);

    PhoneDetails {
        number: field_str(data, "phone_number").unwrap_or_else(|| number.to_string()),
        // An empty caller name is as good as none.
        name: if field_is_set(caller, "caller_name") {
            field_str(caller, "caller_name").unwrap_or_default()
        } else {
            NOT_AVAILABLE.to_string()
        },
        location: field_str(data, "national_format")
            .unwrap_or_default()
            .trim()
            .to_string(),
        carrier: field_str(carrier, "name").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        country_code: field_str(data, "country_code")
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        phone_type: field_str(carrier, "type").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

// ─────────────────────────────────────────────
// Generic API
// ─────────────────────────────────────────────

/// Map a generic lookup API response.
///
/// Fallback orders are literal: `name` then `owner`; `phone_type` then `type`.
/// Location is `"<city> <region>"` with `city` defaulting to `N/A`.
pub fn normalize_generic(data: &Value, number: &str) -> PhoneDetails {
    let city = field_str(data, "city").unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let region = field_str(data, "region").unwrap_or_default();

    PhoneDetails {
        number: field_str(data, "number").unwrap_or_else(|| number.to_string()),
        name: field_str(data, "name")
            .or_else(|| field_str(data, "owner"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        location: format!("{city} {region}").trim().to_string(),
        carrier: field_str(data, "carrier").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        country_code: field_str(data, "country_code")
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        phone_type: field_str(data, "phone_type")
            .or_else(|| field_str(data, "type"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

// ─────────────────────────────────────────────
// Error bodies
// ─────────────────────────────────────────────

/// Render a JSON value in single-quoted mapping notation.
///
/// `{"message": "not found", "code": 20404}` → `{'message': 'not found', 'code': 20404}`.
/// Key order follows the response body.
pub fn compact_repr(value: &Value) -> String {
    let mut out = String::new();
    write_repr(value, &mut out);
    out
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

/// Single quotes unless the text contains `'` and no `"`.
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_twilio_full_response() {
        let data = json!({
            "phone_number": "+15551234567",
            "carrier": { "name": "AT&T", "type": "mobile" },
            "caller_name": { "caller_name": "Jane Smith" },
            "country_code": "US",
            "national_format": "(555) 123-4567"
        });

        let details = normalize_twilio(&data, "5551234567");
        assert_eq!(
            details,
            PhoneDetails {
                number: "+15551234567".into(),
                name: "Jane Smith".into(),
                location: "(555) 123-4567".into(),
                carrier: "AT&T".into(),
                country_code: "US".into(),
                phone_type: "mobile".into(),
            }
        );
    }

    #[test]
    fn test_twilio_missing_everything() {
        let details = normalize_twilio(&json!({}), "+15550000000");
        assert_eq!(details.number, "+15550000000");
        assert_eq!(details.name, "N/A");
        assert_eq!(details.location, "");
        assert_eq!(details.carrier, "N/A");
        assert_eq!(details.country_code, "N/A");
        assert_eq!(details.phone_type, "N/A");
    }

    #[test]
    fn test_twilio_null_sub_objects() {
        let data = json!({
            "phone_number": "+15551234567",
            "carrier": null,
            "caller_name": null,
            "national_format": "  (555) 123-4567 "
        });
        let details = normalize_twilio(&data, "x");
        assert_eq!(details.carrier, "N/A");
        assert_eq!(details.phone_type, "N/A");
        assert_eq!(details.name, "N/A");
        assert_eq!(details.location, "(555) 123-4567");
    }

    #[test]
    fn test_twilio_empty_caller_name_is_na() {
        let data = json!({ "caller_name": { "caller_name": "" } });
        assert_eq!(normalize_twilio(&data, "x").name, "N/A");
    }

    #[test]
    fn test_twilio_empty_carrier_name_kept() {
        let data = json!({ "carrier": { "name": "", "type": "voip" } });
        let details = normalize_twilio(&data, "x");
        assert_eq!(details.carrier, "");
        assert_eq!(details.phone_type, "voip");
    }

    #[test]
    fn test_generic_city_region() {
        let data = json!({
            "number": "+1555",
            "city": "Austin",
            "region": "TX",
            "carrier": "Verizon",
            "country_code": "+1",
            "type": "landline"
        });

        let details = normalize_generic(&data, "ignored");
        assert_eq!(
            details,
            PhoneDetails {
                number: "+1555".into(),
                name: "N/A".into(),
                location: "Austin TX".into(),
                carrier: "Verizon".into(),
                country_code: "+1".into(),
                phone_type: "landline".into(),
            }
        );
    }

    #[test]
    fn test_generic_defaults() {
        let details = normalize_generic(&json!({}), "+1999");
        assert_eq!(details.number, "+1999");
        assert_eq!(details.location, "N/A");
        assert_eq!(details.phone_type, "N/A");
    }

    #[test]
    fn test_generic_name_precedence() {
        let both = json!({ "name": "Alice", "owner": "Bob" });
        assert_eq!(normalize_generic(&both, "x").name, "Alice");

        let owner_only = json!({ "owner": "Bob" });
        assert_eq!(normalize_generic(&owner_only, "x").name, "Bob");
    }

    #[test]
    fn test_generic_phone_type_precedence() {
        let data = json!({ "phone_type": "mobile", "type": "landline" });
        assert_eq!(normalize_generic(&data, "x").phone_type, "mobile");
    }

    #[test]
    fn test_generic_region_only() {
        let data = json!({ "city": "", "region": "TX" });
        assert_eq!(normalize_generic(&data, "x").location, "TX");
    }

    #[test]
    fn test_non_string_scalars() {
        let data = json!({ "country_code": 1, "carrier": true, "name": null });
        let details = normalize_generic(&data, "x");
        assert_eq!(details.country_code, "1");
        assert_eq!(details.carrier, "True");
        assert_eq!(details.name, "N/A");
    }

    #[test]
    fn test_nested_values_use_mapping_notation() {
        let data = json!({ "carrier": { "name": "Verizon" }, "region": ["TX", false] });
        let details = normalize_generic(&data, "x");
        assert_eq!(details.carrier, "{'name': 'Verizon'}");
        assert_eq!(details.location, "N/A ['TX', False]");
    }

    #[test]
    fn test_twilio_falsy_caller_name_is_na() {
        for falsy in [json!(false), json!(0), json!({}), json!([])] {
            let data = json!({ "caller_name": { "caller_name": falsy } });
            assert_eq!(normalize_twilio(&data, "x").name, "N/A");
        }
        let data = json!({ "caller_name": { "caller_name": 42 } });
        assert_eq!(normalize_twilio(&data, "x").name, "42");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("not found")), "not found");
        assert_eq!(display_value(&json!(null)), "None");
        assert_eq!(display_value(&json!({ "message": "x" })), "{'message': 'x'}");
    }

    #[test]
    fn test_non_object_body() {
        let details = normalize_generic(&json!(["a", "b"]), "+1");
        assert_eq!(details.number, "+1");
        assert_eq!(details.name, "N/A");
    }

    #[test]
    fn test_compact_repr_object() {
        let value: Value = serde_json::from_str(
            r#"{"message": "not found", "code": 20404, "more_info": null, "ok": false}"#,
        )
        .unwrap();
        assert_eq!(
            compact_repr(&value),
            "{'message': 'not found', 'code': 20404, 'more_info': None, 'ok': False}"
        );
    }

    #[test]
    fn test_compact_repr_nested() {
        let value = json!({ "errors": [1, "two", { "x": true }] });
        assert_eq!(compact_repr(&value), "{'errors': [1, 'two', {'x': True}]}");
    }

    #[test]
    fn test_compact_repr_quotes() {
        assert_eq!(compact_repr(&json!("it's")), "\"it's\"");
        assert_eq!(compact_repr(&json!("say \"hi\"")), "'say \"hi\"'");
        assert_eq!(compact_repr(&json!("both ' and \"")), "'both \\' and \"'");
        assert_eq!(compact_repr(&json!("a\nb")), "'a\\nb'");
    }
}
