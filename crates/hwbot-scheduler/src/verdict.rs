//! Homework status → notification text.

use hwbot_core::error::{HwBotError, Result};
use hwbot_core::types::ReviewStatus;
use serde_json::Value;

/// Build the notification text for a single homework record.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| HwBotError::Field("No key for homework_name in API response".into()))?;

    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .and_then(ReviewStatus::from_key)
        .ok_or_else(|| HwBotError::Value("Invalid status value in API response".into()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_status_maps_to_its_verdict() {
        for status in ReviewStatus::ALL {
            let record = json!({"homework_name": "hw_api", "status": status.key()});
            let message = parse_status(&record).unwrap();
            assert!(message.contains("\"hw_api\""));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_exact_format() {
        let record = json!({"homework_name": "hw1", "status": "approved", "id": 5});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_missing_name() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, HwBotError::Field(_)));
    }

    #[test]
    fn test_name_checked_before_status() {
        let err = parse_status(&json!({"status": "bogus"})).unwrap_err();
        assert!(matches!(err, HwBotError::Field(_)));
    }

    #[test]
    fn test_unknown_status() {
        let err = parse_status(&json!({"homework_name": "hw1", "status": "lost"})).unwrap_err();
        assert!(matches!(err, HwBotError::Value(_)));
    }

    #[test]
    fn test_missing_or_null_status() {
        let err = parse_status(&json!({"homework_name": "hw1"})).unwrap_err();
        assert!(matches!(err, HwBotError::Value(_)));
        let err = parse_status(&json!({"homework_name": "hw1", "status": null})).unwrap_err();
        assert!(matches!(err, HwBotError::Value(_)));
    }
}
