use serde_json::Value;

use crate::{error::excerpt, Error, Result};

/// Check that the API response looks like what we expect and get the
/// list of homeworks out of it. An empty list is fine; it just means nothing
/// changed.
///
/// # Errors
/// Errors if the response isn't an object, has no `homeworks` key, or that
/// key doesn't hold a list.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Value::Object(response) = response else {
        log::error!("API response is not an object.");
        return Err(Error::Shape("API response is not an object".to_string()));
    };

    let homeworks = response
        .get("homeworks")
        .ok_or(Error::MissingField("homeworks"))?;

    let Value::Array(homeworks) = homeworks else {
        log::error!("Invalid homework list: {}", excerpt(&homeworks.to_string()));
        return Err(Error::Shape("homeworks is not a list".to_string()));
    };

    if homeworks.is_empty() {
        log::debug!("No status changes.");
    }

    Ok(homeworks.as_slice())
}

/// Get the timestamp the next poll should start from.
///
/// # Errors
/// Errors if `current_date` is absent or isn't an integer.
pub fn current_date(response: &Value) -> Result<i64> {
    let current_date = response
        .get("current_date")
        .ok_or(Error::MissingField("current_date"))?;

    current_date.as_i64().ok_or_else(|| {
        Error::Shape(format!(
            "current_date is not an integer: {}",
            excerpt(&current_date.to_string())
        ))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn homeworks_are_returned_as_is() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "approved"},
                {"homework_name": "hw2", "status": "rejected"},
            ],
            "current_date": 1700000000,
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[1]["homework_name"], "hw2");
        assert_eq!(current_date(&response).unwrap(), 1700000000);
    }

    #[test]
    fn empty_list_is_fine() {
        let response = json!({"homeworks": [], "current_date": 1});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn not_an_object() {
        for response in [json!([]), json!("homeworks"), json!(null)] {
            assert!(matches!(check_response(&response), Err(Error::Shape(_))));
        }
    }

    #[test]
    fn missing_homeworks() {
        let response = json!({"current_date": 1});
        assert!(matches!(
            check_response(&response),
            Err(Error::MissingField("homeworks"))
        ));
    }

    #[test]
    fn homeworks_not_a_list() {
        let response = json!({"homeworks": {"homework_name": "hw1"}, "current_date": 1});
        assert!(matches!(check_response(&response), Err(Error::Shape(_))));
    }

    #[test]
    fn bad_current_date() {
        assert!(matches!(
            current_date(&json!({"homeworks": []})),
            Err(Error::MissingField("current_date"))
        ));
        assert!(matches!(
            current_date(&json!({"homeworks": [], "current_date": "yesterday"})),
            Err(Error::Shape(_))
        ));
    }

    #[test]
    fn huge_current_date_is_not_copied_whole() {
        let response = json!({"homeworks": [], "current_date": "x".repeat(10_000)});
        let Err(e) = current_date(&response) else {
            panic!("a string is not a timestamp");
        };
        assert!(e.to_string().len() < 200, "{e}");
    }
}
