use error_stack::report;
use google_sheets4::Error as Sheets4Error;
use serde_json::Value;
use tracing::instrument;

use super::spreadsheet_manager::SpreadsheetManager;
use crate::{
    domain::sheets::a1_notation::A1Notation,
    ports::sheet_source::{SheetSourceError, SheetValues},
};

const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

#[async_trait::async_trait]
impl SheetValues for SpreadsheetManager {
    #[instrument]
    async fn read_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SheetSourceError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range.as_ref())
            .add_scope(READONLY_SCOPE)
            .doit()
            .await
            .map_err(|err| {
                let context = match &err {
                    Sheets4Error::BadRequest(body) => upstream_error(body),
                    _ => None,
                };
                report!(context.unwrap_or(SheetSourceError::FailedToFetchRange))
                    .attach_printable(err.to_string())
                    .attach_printable(format!("Failed to fetch values for range {}", range))
            })?;

        Ok(response.1.values.unwrap_or_default())
    }
}

/// The `error` object Google puts in the body of a rejected call, if there is one.
pub fn upstream_error(body: &Value) -> Option<SheetSourceError> {
    match body.get("error")? {
        Value::Object(error) => Some(SheetSourceError::Upstream {
            code: error
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .filter(|code| *code != 0),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }),
        Value::String(message) if !message.is_empty() => Some(SheetSourceError::Upstream {
            code: None,
            message: message.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_error_from_google_body() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The caller does not have permission",
                "status": "PERMISSION_DENIED"
            }
        });

        assert_eq!(
            upstream_error(&body),
            Some(SheetSourceError::Upstream {
                code: Some(403),
                message: "The caller does not have permission".to_string(),
            })
        );
    }

    #[test]
    fn test_upstream_error_without_code() {
        let body = json!({ "error": { "message": "Unable to parse range" } });

        assert_eq!(
            upstream_error(&body),
            Some(SheetSourceError::Upstream {
                code: None,
                message: "Unable to parse range".to_string(),
            })
        );
    }

    #[test]
    fn test_upstream_error_string() {
        let body = json!({ "error": "invalid_grant" });

        assert_eq!(
            upstream_error(&body),
            Some(SheetSourceError::Upstream {
                code: None,
                message: "invalid_grant".to_string(),
            })
        );
    }

    #[test]
    fn test_no_upstream_error() {
        assert_eq!(upstream_error(&json!({ "values": [] })), None);
        assert_eq!(upstream_error(&json!({ "error": null })), None);
        assert_eq!(upstream_error(&json!("plain")), None);
    }
}
