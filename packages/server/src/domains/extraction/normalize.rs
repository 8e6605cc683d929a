// Field normalization for LLM extraction output.
//
// The model transcribes what the documents say; these rules coerce that
// into the canonical shapes the forms expect. Rules mirror how the
// documents actually look: mobile numbers with +91 prefixes, Aadhaar
// numbers grouped in fours, gender written in Hindi, PANs with stray
// spaces from OCR.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"\D").expect("regex is valid");
    static ref WHITESPACE: Regex = Regex::new(r"\s").expect("regex is valid");
}

/// Map a gender value to Male/Female/Transgender, accepting abbreviations,
/// honorifics and Hindi terms. Unrecognized values return None and the
/// field is dropped for the user to fill during review.
pub fn canonical_gender(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "female" | "f" | "mrs" | "ms" | "महिला" | "औरत" => Some("Female"),
        "male" | "m" | "mr" | "मर्द" | "पुरुष" => Some("Male"),
        "transgender" | "t" | "tg" | "ट्रांसजेंडर" => Some("Transgender"),
        _ => None,
    }
}

fn digits_only(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// 10-digit Indian mobile number: strip punctuation, strip a leading 91
/// country code when all 12 digits survived, otherwise keep the last 10
/// digits. Fewer than 10 digits means misread: drop.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let cleaned = digits_only(raw);
    if cleaned.len() >= 12 && cleaned.starts_with("91") {
        Some(cleaned[2..12].to_string())
    } else if cleaned.len() >= 10 {
        Some(cleaned[cleaned.len() - 10..].to_string())
    } else {
        None
    }
}

/// Aadhaar: digits only, first 12. Shorter values are kept as-is so the
/// review UI can show them for correction.
pub fn normalize_aadhaar(raw: &str) -> Option<String> {
    let cleaned = digits_only(raw);
    if cleaned.len() >= 12 {
        Some(cleaned[..12].to_string())
    } else if !cleaned.is_empty() {
        Some(cleaned)
    } else {
        None
    }
}

/// PAN: uppercase, no whitespace, at most 10 characters.
pub fn normalize_pan(raw: &str) -> String {
    WHITESPACE
        .replace_all(&raw.to_uppercase(), "")
        .chars()
        .take(10)
        .collect()
}

/// 6-digit PIN code; shorter digit runs kept for user correction.
pub fn normalize_postal_code(raw: &str) -> Option<String> {
    let cleaned = digits_only(raw);
    if cleaned.len() >= 6 {
        Some(cleaned[..6].to_string())
    } else if !cleaned.is_empty() {
        Some(cleaned)
    } else {
        None
    }
}

/// Coerce a JSON value to a usable trimmed string. Numbers are accepted
/// because models emit Aadhaar/PIN values unquoted; null/arrays/objects
/// are not.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Apply all normalization rules to a parsed extraction object.
/// Empty and unusable values are removed entirely.
pub fn normalize_extracted(data: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::new();

    for (key, value) in data {
        let Some(text) = value_as_string(value) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        let cleaned = match key.as_str() {
            "gender" => canonical_gender(&text).map(|g| g.to_string()),
            "mobileNumber" => normalize_mobile(&text),
            "aadhaarNumber" => normalize_aadhaar(&text),
            "panNumber" => Some(normalize_pan(&text)),
            "postalCode" => normalize_postal_code(&text),
            _ => Some(text),
        };

        if let Some(cleaned) = cleaned {
            if !cleaned.is_empty() {
                normalized.insert(key.clone(), Value::String(cleaned));
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_english_synonyms() {
        assert_eq!(canonical_gender("Female"), Some("Female"));
        assert_eq!(canonical_gender("F"), Some("Female"));
        assert_eq!(canonical_gender("mrs"), Some("Female"));
        assert_eq!(canonical_gender("Ms"), Some("Female"));
        assert_eq!(canonical_gender("MALE"), Some("Male"));
        assert_eq!(canonical_gender(" m "), Some("Male"));
        assert_eq!(canonical_gender("Mr"), Some("Male"));
        assert_eq!(canonical_gender("tg"), Some("Transgender"));
        assert_eq!(canonical_gender("T"), Some("Transgender"));
    }

    #[test]
    fn test_gender_hindi_synonyms() {
        assert_eq!(canonical_gender("महिला"), Some("Female"));
        assert_eq!(canonical_gender("औरत"), Some("Female"));
        assert_eq!(canonical_gender("पुरुष"), Some("Male"));
        assert_eq!(canonical_gender("मर्द"), Some("Male"));
        assert_eq!(canonical_gender("ट्रांसजेंडर"), Some("Transgender"));
    }

    #[test]
    fn test_gender_unknown_dropped() {
        assert_eq!(canonical_gender("other"), None);
        assert_eq!(canonical_gender(""), None);
    }

    #[test]
    fn test_mobile_strips_country_code() {
        assert_eq!(
            normalize_mobile("+91 98765 43210"),
            Some("9876543210".to_string())
        );
        assert_eq!(
            normalize_mobile("919876543210"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_mobile_keeps_last_ten_digits() {
        assert_eq!(
            normalize_mobile("09876543210"),
            Some("9876543210".to_string())
        );
        assert_eq!(
            normalize_mobile("98765-43210"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_mobile_too_short_dropped() {
        assert_eq!(normalize_mobile("12345"), None);
        assert_eq!(normalize_mobile("phone"), None);
    }

    #[test]
    fn test_mobile_eleven_digits_starting_91_keeps_last_ten() {
        // 11 digits opening with 91: likely a digit lost to OCR, not a
        // full country code, so the last-10 rule applies instead
        assert_eq!(
            normalize_mobile("91987654321"),
            Some("1987654321".to_string())
        );
        assert_eq!(
            normalize_mobile("+91 98765 4321"),
            Some("1987654321".to_string())
        );
    }

    #[test]
    fn test_aadhaar_strips_separators() {
        assert_eq!(
            normalize_aadhaar("1234 5678 9012"),
            Some("123456789012".to_string())
        );
        assert_eq!(
            normalize_aadhaar("1234-5678-9012-99"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn test_aadhaar_short_value_kept_for_review() {
        assert_eq!(normalize_aadhaar("1234 5678"), Some("12345678".to_string()));
        assert_eq!(normalize_aadhaar("none"), None);
    }

    #[test]
    fn test_pan_uppercased_and_truncated() {
        assert_eq!(normalize_pan("abcde 1234 f"), "ABCDE1234F");
        assert_eq!(normalize_pan("ABCDE1234FXYZ"), "ABCDE1234F");
    }

    #[test]
    fn test_postal_code() {
        assert_eq!(normalize_postal_code("400 001"), Some("400001".to_string()));
        assert_eq!(normalize_postal_code("4000012"), Some("400001".to_string()));
        assert_eq!(normalize_postal_code("400"), Some("400".to_string()));
        assert_eq!(normalize_postal_code("PIN"), None);
    }

    #[test]
    fn test_normalize_extracted_drops_empty_and_null() {
        let data = json!({
            "fullName": "Asha Patel",
            "email": "",
            "motherName": null,
            "gender": "महिला",
            "mobileNumber": "+91-98765-43210"
        });
        let normalized = normalize_extracted(data.as_object().unwrap());

        assert_eq!(normalized["fullName"], "Asha Patel");
        assert_eq!(normalized["gender"], "Female");
        assert_eq!(normalized["mobileNumber"], "9876543210");
        assert!(!normalized.contains_key("email"));
        assert!(!normalized.contains_key("motherName"));
    }

    #[test]
    fn test_normalize_extracted_accepts_numeric_values() {
        // Models sometimes emit numbers unquoted
        let data = json!({ "postalCode": 400001, "aadhaarNumber": 123456789012u64 });
        let normalized = normalize_extracted(data.as_object().unwrap());

        assert_eq!(normalized["postalCode"], "400001");
        assert_eq!(normalized["aadhaarNumber"], "123456789012");
    }

    #[test]
    fn test_normalize_extracted_trims_dates() {
        let data = json!({ "dateOfBirth": " 1990-01-01 " });
        let normalized = normalize_extracted(data.as_object().unwrap());
        assert_eq!(normalized["dateOfBirth"], "1990-01-01");
    }
}
