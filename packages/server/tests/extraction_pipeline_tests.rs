// End-to-end tests of the extraction pipeline with a mocked LLM:
// OCR text in, normalized and schema-validated fields out.

use server_core::common::FormType;
use server_core::domains::extraction::{extract_fields, DocumentText, ExtractionError};
use server_core::kernel::test_dependencies::{FailingAI, MockAI};

fn doc(document_type: &str, text: &str) -> DocumentText {
    DocumentText {
        document_type: document_type.to_string(),
        extracted_text: text.to_string(),
    }
}

#[tokio::test]
async fn extracts_fields_from_json_wrapped_in_prose() {
    let ai = MockAI::returning(
        "Here is the extracted data:\n\
         {\"fullName\": \"Asha Patel\", \"aadhaarNumber\": \"1234 5678 9012\"}\n\
         Let me know if you need anything else.",
    );

    let documents = [doc("aadhaar", "Name: Asha Patel\nAadhaar: 1234 5678 9012")];
    let outcome = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap();

    assert_eq!(outcome.fields["fullName"], "Asha Patel");
    assert_eq!(outcome.fields["aadhaarNumber"], "123456789012");
    assert_eq!(outcome.documents_processed, 1);
}

#[tokio::test]
async fn normalizes_and_validates_model_output() {
    // Hindi gender, prefixed mobile, an empty value and an invented field
    let ai = MockAI::returning(
        r#"{
            "fullName": "Asha Patel",
            "gender": "महिला",
            "mobileNumber": "+91 98765 43210",
            "email": "",
            "favouriteColour": "blue"
        }"#,
    );

    let documents = [doc("aadhaar", "some scanned text")];
    let outcome = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap();

    assert_eq!(outcome.fields["gender"], "Female");
    assert_eq!(outcome.fields["mobileNumber"], "9876543210");
    assert!(!outcome.fields.contains_key("email"));
    assert!(!outcome.fields.contains_key("favouriteColour"));
}

#[tokio::test]
async fn survives_mobile_number_with_truncated_country_code() {
    // 11 digits opening with 91: a +91 number that lost a digit in OCR
    let ai = MockAI::returning(
        r#"{"fullName": "Asha Patel", "mobileNumber": "91987654321"}"#,
    );

    let documents = [doc("aadhaar", "Mob: 91987654321")];
    let outcome = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap();

    assert_eq!(outcome.fields["mobileNumber"], "1987654321");
}

#[tokio::test]
async fn skips_unreadable_documents_but_counts_the_rest() {
    let ai = MockAI::returning(r#"{"fullName": "Asha Patel"}"#);

    let documents = [
        doc("aadhaar", "Name: Asha Patel"),
        doc("pan", "   "),
        doc("passport", ""),
    ];
    let outcome = extract_fields(&ai, FormType::Passport, &documents)
        .await
        .unwrap();

    assert_eq!(outcome.documents_processed, 1);

    // Only the readable document's text reaches the prompt
    let prompts = ai.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("=== Document 1 (aadhaar) ==="));
    assert!(!prompts[0].contains("Document 2"));
}

#[tokio::test]
async fn all_blank_documents_is_no_readable_text() {
    let ai = MockAI::returning(r#"{"fullName": "never called"}"#);

    let documents = [doc("aadhaar", ""), doc("pan", "  \n ")];
    let error = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::NoReadableText));
    assert!(ai.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn response_without_json_is_unparseable() {
    let ai = MockAI::returning("I could not find any information in these documents.");

    let documents = [doc("aadhaar", "blurry scan")];
    let error = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::UnparseableResponse));
}

#[tokio::test]
async fn valid_json_with_no_usable_fields_is_nothing_extracted() {
    // Parses fine, but nothing survives normalization + validation
    let ai = MockAI::returning(r#"{"favouriteColour": "blue", "email": ""}"#);

    let documents = [doc("aadhaar", "some text")];
    let error = extract_fields(&ai, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::NothingExtracted));
}

#[tokio::test]
async fn llm_failure_propagates() {
    let documents = [doc("aadhaar", "some text")];
    let error = extract_fields(&FailingAI, FormType::AadhaarUpdate, &documents)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::Ai(_)));
}

#[tokio::test]
async fn prompt_carries_schema_and_form_type() {
    let ai = MockAI::returning(r#"{"passportNumber": "N1234567"}"#);

    let documents = [doc("passport", "Passport No: N1234567")];
    extract_fields(&ai, FormType::Visa, &documents)
        .await
        .unwrap();

    let prompts = ai.prompts.lock().unwrap();
    assert!(prompts[0].contains("\"passportDateOfExpiry\""));
    assert!(prompts[0].contains("for a visa form"));
}
