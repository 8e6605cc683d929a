// Shared enums for the form-filling domain.
//
// Submission rows store these as plain text columns; the enums exist for
// validation and for the places (extraction, export) that branch on them.

use serde::{Deserialize, Serialize};

/// The government forms the assistant can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    AadhaarUpdate,
    Passport,
    DrivingLicense,
    PanRegistration,
    Visa,
}

impl FormType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aadhaar_update" => Some(Self::AadhaarUpdate),
            "passport" => Some(Self::Passport),
            "driving_license" => Some(Self::DrivingLicense),
            "pan_registration" => Some(Self::PanRegistration),
            "visa" => Some(Self::Visa),
            _ => None,
        }
    }

    /// Unknown form types fall back to the Aadhaar schema, the broadest one.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::AadhaarUpdate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AadhaarUpdate => "aadhaar_update",
            Self::Passport => "passport",
            Self::DrivingLicense => "driving_license",
            Self::PanRegistration => "pan_registration",
            Self::Visa => "visa",
        }
    }

    /// Printable title used on the exported form document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::AadhaarUpdate => "AADHAAR UPDATE REQUEST FORM",
            Self::Passport => "PASSPORT APPLICATION FORM",
            Self::DrivingLicense => "DRIVING LICENSE APPLICATION FORM",
            Self::PanRegistration => "PAN CARD APPLICATION FORM",
            Self::Visa => "INDIAN VISA APPLICATION FORM",
        }
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Approved,
}

impl SubmissionStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_round_trip() {
        for form_type in [
            FormType::AadhaarUpdate,
            FormType::Passport,
            FormType::DrivingLicense,
            FormType::PanRegistration,
            FormType::Visa,
        ] {
            assert_eq!(FormType::parse(form_type.as_str()), Some(form_type));
        }
    }

    #[test]
    fn test_unknown_form_type_falls_back_to_aadhaar() {
        assert_eq!(
            FormType::parse_or_default("ration_card"),
            FormType::AadhaarUpdate
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            SubmissionStatus::parse("submitted"),
            Some(SubmissionStatus::Submitted)
        );
        assert_eq!(SubmissionStatus::parse("rejected"), None);
    }
}
