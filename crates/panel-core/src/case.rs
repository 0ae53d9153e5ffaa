// ── Key-case normalizer ──
//
// Fallback for endpoints without a typed transformer: rewrites every
// object key in a JSON graph from snake_case to camelCase. Typed
// conversions in `crate::convert` always take precedence; they fail loudly
// on shape changes this function would paper over.

use serde_json::{Map, Value};

/// `snake_case` → `camelCase`. Only an underscore followed by a lowercase
/// ASCII letter is folded; every other character is kept as-is, so an
/// already camelCase key is returned unchanged.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some_and(char::is_ascii_lowercase) {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Recursively camelize every object key. Arrays map element-wise in
/// order; scalars pass through untouched.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (to_camel_case(&k), camelize_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn converts_keys() {
        assert_eq!(to_camel_case("is_node_under_maintenance"), "isNodeUnderMaintenance");
        assert_eq!(to_camel_case("network_rx_bytes"), "networkRxBytes");
        assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
        assert_eq!(to_camel_case("_leading"), "Leading");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
        assert_eq!(to_camel_case("a__b"), "a_B");
        assert_eq!(to_camel_case("ip_4_addr"), "ip_4Addr");
    }

    #[test]
    fn nested_arrays_keep_order() {
        let input = json!({
            "server_list": [
                {"internal_id": 1, "sftp_details": {"ip_address": "10.0.0.1"}},
                {"internal_id": 2, "sftp_details": {"ip_address": "10.0.0.2"}}
            ],
            "page_meta": [[{"per_page": 20}], "raw_string_value", null, 3.5]
        });
        let expected = json!({
            "serverList": [
                {"internalId": 1, "sftpDetails": {"ipAddress": "10.0.0.1"}},
                {"internalId": 2, "sftpDetails": {"ipAddress": "10.0.0.2"}}
            ],
            "pageMeta": [[{"perPage": 20}], "raw_string_value", null, 3.5]
        });
        assert_eq!(camelize_keys(input), expected);
    }

    #[test]
    fn idempotent() {
        let input = json!({"outer_key": [{"inner_key": {"deep_key": true}}], "x": "y_z"});
        let once = camelize_keys(input);
        let twice = camelize_keys(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn scalars_untouched() {
        assert_eq!(camelize_keys(json!("snake_value")), json!("snake_value"));
        assert_eq!(camelize_keys(json!(42)), json!(42));
        assert_eq!(camelize_keys(Value::Null), Value::Null);
    }
}
