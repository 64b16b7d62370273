use crate::advisor::error::ParseError;
use serde_json::Value;

const FENCE: &str = "```";

/// Texts worth handing to `serde_json`, in the order they are tried: the reply itself, the
/// body of its first fenced block, then its outermost `{ ... }` span.
fn candidates(text: &str) -> impl Iterator<Item = &str> {
    let trimmed = text.trim();
    [Some(trimmed), fenced_body(trimmed), brace_span(trimmed)]
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
}

fn fenced_body(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let body = strip_language_tag(&text[open + FENCE.len()..]);
    let inner = match body.find(FENCE) {
        Some(close) => &body[..close],
        None => body,
    };
    Some(inner.trim())
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

// "```json\n{...", "```json {..." and "```json{...": drop the info string.
fn strip_language_tag(s: &str) -> &str {
    let tag_len = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    if tag_len > 0
        && s[tag_len..].starts_with(|c: char| c.is_whitespace() || c == '{' || c == '[')
    {
        &s[tag_len..]
    } else {
        s
    }
}

/// Parses the reply into a JSON object. Anything else is a [`ParseError`].
///
/// The first candidate that parses decides the outcome; a reply that is already valid JSON is
/// never second-guessed by fence or brace extraction.
pub fn parse_object(text: &str) -> Result<Value, ParseError> {
    let mut last_err = None;
    for candidate in candidates(text) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value @ Value::Object(_)) => return Ok(value),
            Ok(other) => {
                return Err(ParseError {
                    detail: format!("expected a JSON object, got {}", json_kind(&other)),
                    raw_output: text.to_string(),
                })
            }
            Err(err) => last_err = Some(err.to_string()),
        }
    }

    Err(ParseError {
        detail: last_err.unwrap_or_else(|| "empty reply".to_string()),
        raw_output: text.to_string(),
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_block_is_unwrapped() {
        let v = parse_object("```json\n{\"a\":1}\n```\n").unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn fence_after_prose_is_found() {
        let v = parse_object("Here is your build:\n```\n{\"a\":{\"b\":2}}\n```\nGood luck!").unwrap();
        assert_eq!(v["a"]["b"], 2);
    }

    #[test]
    fn inline_fence_with_or_without_space_after_tag() {
        assert_eq!(parse_object("```json {\"a\":1}```").unwrap()["a"], 1);
        assert_eq!(parse_object("```json{\"a\":1}```").unwrap()["a"], 1);
        assert_eq!(fenced_body("```json[1]```"), Some("[1]"));
    }

    #[test]
    fn falls_back_to_braces() {
        let v = parse_object("prefix {\"a\":1} suffix").unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn valid_json_with_fence_inside_a_string_is_kept() {
        let raw = r#"{"summary": "Bind skills like ```1 2 3 4``` for speed", "playstyle": "p"}"#;
        let v = parse_object(raw).unwrap();
        assert_eq!(v["summary"], "Bind skills like ```1 2 3 4``` for speed");
        assert_eq!(v["playstyle"], "p");
    }

    #[test]
    fn stray_closing_fence_after_object_is_ignored() {
        let v = parse_object("{\"summary\": \"ok\"}\n```").unwrap();
        assert_eq!(v["summary"], "ok");
    }

    #[test]
    fn parse_object_rejects_prose() {
        let err = parse_object("not json at all").unwrap_err();
        assert_eq!(err.raw_output, "not json at all");
    }

    #[test]
    fn parse_object_rejects_empty_reply() {
        let err = parse_object("   \n").unwrap_err();
        assert_eq!(err.detail, "empty reply");
    }

    #[test]
    fn parse_object_rejects_non_object_payloads() {
        let err = parse_object("[1, 2, 3]").unwrap_err();
        assert!(err.detail.contains("an array"), "{}", err.detail);
    }

    #[test]
    fn parse_object_accepts_unterminated_fence() {
        let v = parse_object("```json\n{\"a\":1}\n").unwrap();
        assert_eq!(v["a"], 1);
    }
}
