// Field categorization for the review UI and the exported document.
//
// Fields arrive as a flat camelCase map; grouping is keyword
// reclassification on the lowercased name. Match order matters: "mobile"
// wins over "name" so contact fields never land in Personal.

use serde_json::{Map, Value};

pub const PERSONAL: &str = "Personal Information";
pub const CONTACT: &str = "Contact Information";
pub const ADDRESS: &str = "Address Information";
pub const FAMILY: &str = "Family Information";
pub const DOCUMENT: &str = "Document Information";
pub const EMPLOYMENT: &str = "Employment & Education";
pub const VISA: &str = "Visa & Nationality";
pub const ADDITIONAL: &str = "Additional Information";

/// Display order of categories in the review UI and export document.
pub const CATEGORY_ORDER: [&str; 8] = [
    PERSONAL, CONTACT, ADDRESS, FAMILY, DOCUMENT, EMPLOYMENT, VISA, ADDITIONAL,
];

const CONTACT_KEYWORDS: [&str; 4] = ["mobile", "email", "phone", "contact"];
const ADDRESS_KEYWORDS: [&str; 10] = [
    "address", "city", "state", "postal", "village", "district", "house", "street", "pincode",
    "zip",
];
const FAMILY_KEYWORDS: [&str; 4] = ["father", "mother", "spouse", "guardian"];
const DOCUMENT_KEYWORDS: [&str; 5] = ["aadhaar", "pan", "passport", "voter", "license"];
const EMPLOYMENT_KEYWORDS: [&str; 5] = [
    "employment",
    "employer",
    "occupation",
    "education",
    "qualification",
];
const VISA_KEYWORDS: [&str; 3] = ["visa", "nationality", "citizen"];
const PERSONAL_KEYWORDS: [&str; 7] = [
    "name",
    "dateofbirth",
    "dob",
    "gender",
    "marital",
    "blood",
    "nationality",
];

fn matches_any(key: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| key.contains(keyword))
}

/// Assign a field name to its display category.
pub fn categorize_field(field_name: &str) -> &'static str {
    let key = field_name.to_lowercase();

    if matches_any(&key, &CONTACT_KEYWORDS) {
        CONTACT
    } else if matches_any(&key, &ADDRESS_KEYWORDS) {
        ADDRESS
    } else if matches_any(&key, &FAMILY_KEYWORDS) {
        FAMILY
    } else if matches_any(&key, &DOCUMENT_KEYWORDS) {
        DOCUMENT
    } else if matches_any(&key, &EMPLOYMENT_KEYWORDS) {
        EMPLOYMENT
    } else if matches_any(&key, &VISA_KEYWORDS) {
        VISA
    } else if matches_any(&key, &PERSONAL_KEYWORDS) {
        PERSONAL
    } else {
        ADDITIONAL
    }
}

/// Group non-empty fields into ordered (category, fields) sections.
/// Empty categories are omitted; field order within a category follows
/// the input map.
pub fn group_fields(fields: &Map<String, Value>) -> Vec<(&'static str, Vec<(String, String)>)> {
    let mut grouped: Vec<(&'static str, Vec<(String, String)>)> = CATEGORY_ORDER
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for (key, value) in fields {
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }

        let category = categorize_field(key);
        if let Some((_, entries)) = grouped.iter_mut().find(|(name, _)| *name == category) {
            entries.push((key.clone(), text));
        }
    }

    grouped
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_beats_personal() {
        // "mobileNumber" also contains "name"; contact is checked first
        assert_eq!(categorize_field("mobileNumber"), CONTACT);
        assert_eq!(categorize_field("email"), CONTACT);
    }

    #[test]
    fn test_address_fields() {
        assert_eq!(categorize_field("postalCode"), ADDRESS);
        assert_eq!(categorize_field("village"), ADDRESS);
        assert_eq!(categorize_field("addressInIndia"), ADDRESS);
    }

    #[test]
    fn test_family_beats_personal_name() {
        // "fatherName" contains "name" but family wins by match order
        assert_eq!(categorize_field("fatherName"), FAMILY);
        assert_eq!(categorize_field("fatherOrHusbandName"), FAMILY);
    }

    #[test]
    fn test_document_numbers() {
        assert_eq!(categorize_field("aadhaarNumber"), DOCUMENT);
        assert_eq!(categorize_field("panNumber"), DOCUMENT);
        assert_eq!(categorize_field("passportDateOfExpiry"), DOCUMENT);
    }

    #[test]
    fn test_personal_fields() {
        assert_eq!(categorize_field("fullName"), PERSONAL);
        assert_eq!(categorize_field("dateOfBirth"), PERSONAL);
        assert_eq!(categorize_field("gender"), PERSONAL);
        assert_eq!(categorize_field("bloodGroup"), PERSONAL);
    }

    #[test]
    fn test_unknown_goes_to_additional() {
        assert_eq!(categorize_field("remarks"), ADDITIONAL);
    }

    #[test]
    fn test_group_fields_skips_empty_and_orders_sections() {
        let fields = json!({
            "fullName": "Asha Patel",
            "mobileNumber": "9876543210",
            "email": "",
            "panNumber": "ABCDE1234F"
        });
        let grouped = group_fields(fields.as_object().unwrap());

        let categories: Vec<&str> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec![PERSONAL, CONTACT, DOCUMENT]);

        let (_, contact) = grouped.iter().find(|(c, _)| *c == CONTACT).unwrap();
        assert_eq!(contact.len(), 1);
        assert_eq!(contact[0].0, "mobileNumber");
    }
}
