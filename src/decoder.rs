//! Unwrapping of SNS notification envelopes.
//!
//! When an SNS topic fans out to SQS without raw message delivery, every body
//! is a JSON object tracking the notification, with the published payload
//! embedded as an escaped string under `"Message"`.

use std::borrow::Cow;

use serde_json::{Map, Value};
use tracing::trace;

/// The envelope field holding the published payload.
pub const ENVELOPE_MESSAGE_FIELD: &str = "Message";

/// Returns the payload of a notification envelope, or `body` unchanged.
///
/// Exactly one level is unwrapped. Bodies that are not JSON objects, or whose
/// `"Message"` field is missing or not a string, pass through as they are.
pub fn decode(body: &str) -> Cow<'_, str> {
    let Ok(mut envelope) = serde_json::from_str::<Map<String, Value>>(body) else {
        return Cow::Borrowed(body);
    };

    match envelope.remove(ENVELOPE_MESSAGE_FIELD) {
        Some(Value::String(message)) => {
            trace!("unwrapped notification envelope");
            Cow::Owned(message)
        }
        _ => Cow::Borrowed(body),
    }
}

/// [`decode`] lifted over an optional body.
pub fn decode_body(body: Option<&str>) -> Option<Cow<'_, str>> {
    body.map(decode)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_body_stays_absent() {
        assert_eq!(decode_body(None), None);
    }

    #[test]
    fn unwraps_envelope_message() {
        let body = r#"{"Type":"Notification","MessageId":"4b1b","Message":"{\"event\":\"login\"}"}"#;

        assert_eq!(decode(body), r#"{"event":"login"}"#);
    }

    #[test]
    fn unwraps_only_one_level() {
        let inner = r#"{"Message":"deeper"}"#;
        let body = serde_json::json!({ "Message": inner }).to_string();

        assert_eq!(decode(&body), inner);
    }

    #[test]
    fn plain_text_passes_through() {
        let body = "order 1234 shipped";

        assert!(matches!(decode(body), Cow::Borrowed(b) if b == body));
    }

    #[test]
    fn non_object_json_passes_through() {
        for body in [r#"["Message"]"#, "42", r#""Message""#, "null"] {
            assert_eq!(decode(body), body);
        }
    }

    #[test]
    fn object_without_message_passes_through() {
        let body = r#"{"event":"login","user":"alice"}"#;

        assert_eq!(decode(body), body);
    }

    #[test]
    fn non_string_message_passes_through() {
        let body = r#"{"Message":{"event":"login"}}"#;

        assert_eq!(decode(body), body);
    }

    #[test]
    fn malformed_json_passes_through() {
        let body = r#"{"Message": "unterminated"#;

        assert_eq!(decode(body), body);
    }
}
