use serde::Deserialize;

/// Response body of POST /parse/image.
///
/// `ErrorMessage` is a string on some failures and an array of strings on
/// others, so it is kept as a raw value and flattened by `error_text`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParseImageResponse {
    #[serde(default)]
    pub parsed_results: Option<Vec<ParsedResult>>,
    #[serde(rename = "OCRExitCode", default)]
    pub ocr_exit_code: i32,
    #[serde(default)]
    pub is_errored_on_processing: bool,
    #[serde(default)]
    pub error_message: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    #[serde(default)]
    pub parsed_text: String,
    #[serde(default)]
    pub file_parse_exit_code: i32,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ParseImageResponse {
    /// First parsed result, if any. Single-page inputs produce exactly one.
    pub fn first_result(&self) -> Option<&ParsedResult> {
        self.parsed_results.as_ref().and_then(|r| r.first())
    }

    /// Human-readable error message, flattening the string/array ambiguity.
    pub fn error_text(&self) -> String {
        match &self.error_message {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            Some(other) => other.to_string(),
            None => "unknown OCR error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let body = r#"{
            "ParsedResults": [
                {"ParsedText": "GOVERNMENT OF INDIA\nAadhaar", "FileParseExitCode": 1}
            ],
            "OCRExitCode": 1,
            "IsErroredOnProcessing": false
        }"#;

        let response: ParseImageResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_errored_on_processing);
        let first = response.first_result().unwrap();
        assert_eq!(first.file_parse_exit_code, 1);
        assert!(first.parsed_text.contains("Aadhaar"));
    }

    #[test]
    fn test_error_message_as_array() {
        let body = r#"{
            "OCRExitCode": 99,
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Unable to download the file", "Timed out"]
        }"#;

        let response: ParseImageResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_errored_on_processing);
        assert_eq!(
            response.error_text(),
            "Unable to download the file; Timed out"
        );
    }

    #[test]
    fn test_error_message_as_string() {
        let body = r#"{"IsErroredOnProcessing": true, "ErrorMessage": "Invalid API key"}"#;

        let response: ParseImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error_text(), "Invalid API key");
    }

    #[test]
    fn test_empty_results() {
        let body = r#"{"OCRExitCode": 1, "IsErroredOnProcessing": false}"#;

        let response: ParseImageResponse = serde_json::from_str(body).unwrap();
        assert!(response.first_result().is_none());
    }
}
