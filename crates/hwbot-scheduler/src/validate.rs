//! Shape checks for the decoded API response.

use hwbot_core::error::{HwBotError, Result};
use serde_json::Value;

/// Check the API response against the documented shape and return the
/// `homeworks` array.
///
/// Checks run in a fixed order and the first failing one is reported:
/// object, `homeworks` present, `homeworks` is an array, `current_date` present.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(map) = response.as_object() else {
        return Err(HwBotError::Schema("Response is not a dictionary".into()));
    };

    let Some(homeworks) = map.get("homeworks") else {
        return Err(HwBotError::Schema(
            "Response does not contain \"homeworks\" key".into(),
        ));
    };

    let Some(homeworks) = homeworks.as_array() else {
        return Err(HwBotError::Schema("\"homeworks\" value is not a list".into()));
    };

    if !map.contains_key("current_date") {
        return Err(HwBotError::Schema(
            "Response does not contain \"current_date\" key".into(),
        ));
    }

    Ok(homeworks.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema_message(response: Value) -> String {
        match check_response(&response) {
            Err(HwBotError::Schema(msg)) => msg,
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_response() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
    }

    #[test]
    fn test_empty_homeworks_is_valid() {
        let response = json!({"homeworks": [], "current_date": 1000});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn test_not_an_object() {
        assert!(schema_message(json!([1, 2])).contains("not a dictionary"));
        assert!(schema_message(json!("homeworks")).contains("not a dictionary"));
    }

    #[test]
    fn test_missing_homeworks() {
        let msg = schema_message(json!({"current_date": 1000}));
        assert!(msg.contains("\"homeworks\" key"));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let msg = schema_message(json!({"homeworks": {"a": 1}, "current_date": 1000}));
        assert!(msg.contains("not a list"));
    }

    #[test]
    fn test_missing_current_date() {
        let msg = schema_message(json!({"homeworks": []}));
        assert!(msg.contains("\"current_date\" key"));
    }

    #[test]
    fn test_first_violation_wins() {
        // Both homeworks type and current_date are wrong; the type check comes first.
        let msg = schema_message(json!({"homeworks": 5}));
        assert!(msg.contains("not a list"));
    }
}
