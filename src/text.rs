use crate::model::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Local part of a qualified name: the substring after the last `:`.
pub fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Clean raw fact text: strip any inline markup, collapse whitespace runs
/// (including newlines) to single spaces, and trim.
///
/// Fact content in real filings often carries HTML that was escaped into the
/// XML text; by the time it reaches us the entities are decoded and the tags
/// are literal, so they are stripped here.
pub fn clean_text(value: &str) -> String {
    let stripped = if value.contains('<') {
        let fragment = Html::parse_fragment(value);
        fragment.root_element().text().collect::<Vec<_>>().join(" ")
    } else {
        value.to_string()
    };
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Coerce raw fact text to a typed value.
///
/// Attempts are strictly ordered: boolean literal, then signed 64-bit
/// integer, then 64-bit float, then cleaned text. "1" is therefore an
/// integer, never a float, and "true"/"false" never fall through to text.
pub fn coerce_value(value: &str) -> Value {
    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int_value) = value.parse::<i64>() {
        return Value::Int(int_value);
    }
    if let Ok(float_value) = value.parse::<f64>() {
        return Value::Float(float_value);
    }
    Value::Text(clean_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("iso4217:USD"), "USD");
        assert_eq!(local_name("USD"), "USD");
        assert_eq!(local_name("a:b:c"), "c");
        assert_eq!(local_name("trailing:"), "");
    }

    #[test]
    fn test_clean_text_strips_markup() {
        assert_eq!(clean_text("hello <b>world</b>\n"), "hello world");
        assert_eq!(
            clean_text("<p>first</p>\n<p>second   line</p>"),
            "first second line"
        );
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a\n\tb   c "), "a b c");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("hello <b>world</b>\n  again");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_coerce_order() {
        assert_eq!(coerce_value("true"), Value::Bool(true));
        assert_eq!(coerce_value("false"), Value::Bool(false));
        assert_eq!(coerce_value("42"), Value::Int(42));
        assert_eq!(coerce_value("-7"), Value::Int(-7));
        assert_eq!(coerce_value("42.5"), Value::Float(42.5));
        assert_eq!(
            coerce_value("not a number"),
            Value::Text("not a number".to_string())
        );
    }

    #[test]
    fn test_coerce_rejects_loose_booleans() {
        // Only the exact lowercase literals count as booleans.
        assert_eq!(coerce_value("True"), Value::Text("True".to_string()));
        assert_eq!(coerce_value("1"), Value::Int(1));
        assert_eq!(coerce_value("t"), Value::Text("t".to_string()));
    }

    #[test]
    fn test_coerce_empty() {
        assert_eq!(coerce_value(""), Value::Text(String::new()));
    }
}
