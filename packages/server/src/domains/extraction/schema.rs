// Per-form-type field schemas.
//
// Field names are the camelCase keys the review UI and the LLM prompt
// share. Every field is optional and string-valued; validation's job is
// to discard what the model invented, not to demand completeness.

use serde_json::{Map, Value};

use crate::common::FormType;

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub form_type: FormType,
    pub fields: &'static [FieldSpec],
}

const GENDER_VALUES: [&str; 3] = ["Male", "Female", "Transgender"];

macro_rules! fields {
    ($(($name:literal, $desc:literal)),* $(,)?) => {
        &[$(FieldSpec { name: $name, description: $desc }),*]
    };
}

static AADHAAR_FIELDS: &[FieldSpec] = fields![
    ("aadhaarNumber", "12-digit number"),
    ("fullName", "full name"),
    ("dateOfBirth", "YYYY-MM-DD"),
    ("gender", "Male/Female/Transgender"),
    ("fatherName", "father's name"),
    ("motherName", "mother's name"),
    ("address", "complete address"),
    ("village", "village name"),
    ("district", "district"),
    ("state", "state"),
    ("postalCode", "6-digit PIN"),
    ("mobileNumber", "10-digit number"),
    ("email", "email address"),
];

static PASSPORT_FIELDS: &[FieldSpec] = fields![
    ("givenName", "first name"),
    ("surname", "last name"),
    ("dateOfBirth", "YYYY-MM-DD"),
    ("placeOfBirth", "birth place"),
    ("gender", "Male/Female/Transgender"),
    ("maritalStatus", "marital status"),
    ("passportNumber", "passport number"),
    ("fatherName", "father's name"),
    ("motherName", "mother's name"),
    ("mobileNumber", "10-digit number"),
    ("email", "email"),
    ("address", "address"),
    ("city", "city"),
    ("state", "state"),
    ("postalCode", "PIN code"),
];

static DRIVING_LICENSE_FIELDS: &[FieldSpec] = fields![
    ("fullName", "full name"),
    ("fatherOrHusbandName", "father/husband name"),
    ("dateOfBirth", "YYYY-MM-DD"),
    ("gender", "Male/Female/Transgender"),
    ("bloodGroup", "blood group"),
    ("mobileNumber", "10-digit number"),
    ("address", "address"),
    ("city", "city"),
    ("district", "district"),
    ("state", "state"),
    ("postalCode", "PIN code"),
    ("aadhaarNumber", "12-digit number"),
];

static PAN_FIELDS: &[FieldSpec] = fields![
    ("firstName", "first name"),
    ("middleName", "middle name"),
    ("lastName", "last name"),
    ("dateOfBirth", "YYYY-MM-DD"),
    ("fatherName", "father's name"),
    ("panNumber", "10-character PAN"),
    ("aadhaarNumber", "12-digit number"),
    ("mobileNumber", "10-digit number"),
    ("email", "email"),
    ("address", "address"),
    ("city", "city"),
    ("state", "state"),
    ("postalCode", "PIN code"),
];

static VISA_FIELDS: &[FieldSpec] = fields![
    ("surname", "last name"),
    ("givenName", "first name"),
    ("nationality", "country"),
    ("dateOfBirth", "YYYY-MM-DD"),
    ("placeOfBirth", "birth place"),
    ("gender", "Male/Female/Transgender"),
    ("passportNumber", "passport number"),
    ("passportDateOfIssue", "YYYY-MM-DD"),
    ("passportDateOfExpiry", "YYYY-MM-DD"),
    ("fatherName", "father's name"),
    ("motherName", "mother's name"),
    ("mobileNumber", "10-digit number"),
    ("email", "email"),
    ("homeAddress", "home address"),
    ("addressInIndia", "address in India"),
];

static AADHAAR_SCHEMA: FormSchema = FormSchema {
    form_type: FormType::AadhaarUpdate,
    fields: AADHAAR_FIELDS,
};
static PASSPORT_SCHEMA: FormSchema = FormSchema {
    form_type: FormType::Passport,
    fields: PASSPORT_FIELDS,
};
static DRIVING_LICENSE_SCHEMA: FormSchema = FormSchema {
    form_type: FormType::DrivingLicense,
    fields: DRIVING_LICENSE_FIELDS,
};
static PAN_SCHEMA: FormSchema = FormSchema {
    form_type: FormType::PanRegistration,
    fields: PAN_FIELDS,
};
static VISA_SCHEMA: FormSchema = FormSchema {
    form_type: FormType::Visa,
    fields: VISA_FIELDS,
};

pub fn schema_for(form_type: FormType) -> &'static FormSchema {
    match form_type {
        FormType::AadhaarUpdate => &AADHAAR_SCHEMA,
        FormType::Passport => &PASSPORT_SCHEMA,
        FormType::DrivingLicense => &DRIVING_LICENSE_SCHEMA,
        FormType::PanRegistration => &PAN_SCHEMA,
        FormType::Visa => &VISA_SCHEMA,
    }
}

impl FormSchema {
    pub fn contains(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f.name == field_name)
    }

    /// JSON-shaped description of the expected output, embedded verbatim
    /// in the system prompt.
    pub fn shape_description(&self) -> String {
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("  \"{}\": \"{}\"", f.name, f.description))
            .collect();
        format!("{{\n{}\n}}", lines.join(",\n"))
    }

    /// Keep only schema fields with non-empty string values. Gender must
    /// already be canonical (normalization handles synonyms); anything
    /// else is discarded rather than stored.
    pub fn validate(&self, data: &Map<String, Value>) -> Map<String, Value> {
        let mut valid = Map::new();

        for (key, value) in data {
            if !self.contains(key) {
                tracing::debug!(field = %key, "Discarding field not in form schema");
                continue;
            }
            let Some(text) = value.as_str() else { continue };
            if text.trim().is_empty() {
                continue;
            }
            if key == "gender" && !GENDER_VALUES.contains(&text) {
                continue;
            }
            valid.insert(key.clone(), Value::String(text.to_string()));
        }

        valid
    }
}
