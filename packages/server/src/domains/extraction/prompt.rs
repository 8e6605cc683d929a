// Prompt assembly for the extraction LLM call.

use crate::common::FormType;

use super::pipeline::DocumentText;
use super::schema::FormSchema;

/// Concatenate per-document OCR text with numbered headers so the model
/// can attribute fields to the right document.
pub fn combine_documents(documents: &[&DocumentText]) -> String {
    documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let doc_type = if doc.document_type.is_empty() {
                "Unknown"
            } else {
                doc.document_type.as_str()
            };
            format!(
                "=== Document {} ({}) ===\n{}",
                index + 1,
                doc_type,
                doc.extracted_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn system_prompt(schema: &FormSchema) -> String {
    format!(
        r#"You are an expert at extracting information from Indian government documents with >90% accuracy.
Extract information exactly as it appears in the documents.
Return ONLY a valid JSON object with the extracted data, no additional text.
For dates, use YYYY-MM-DD format.
For Aadhaar numbers, extract all 12 digits.
For phone numbers, extract 10 digits without country code.
If information is unclear or not present, omit that field.
Handle both printed and handwritten text carefully.

Expected JSON format:
{}"#,
        schema.shape_description()
    )
}

pub fn user_prompt(form_type: FormType, combined_text: &str) -> String {
    format!(
        "Extract all relevant information from these documents for a {} form and return ONLY the JSON object:\n\n{}",
        form_type.as_str(),
        combined_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::extraction::schema_for;

    fn doc(document_type: &str, text: &str) -> DocumentText {
        DocumentText {
            document_type: document_type.to_string(),
            extracted_text: text.to_string(),
        }
    }

    #[test]
    fn test_combine_documents_numbers_and_types() {
        let a = doc("aadhaar", "Name: Asha Patel");
        let b = doc("", "PAN ABCDE1234F");
        let combined = combine_documents(&[&a, &b]);

        assert!(combined.starts_with("=== Document 1 (aadhaar) ==="));
        assert!(combined.contains("=== Document 2 (Unknown) ==="));
        assert!(combined.contains("Name: Asha Patel"));
        assert!(combined.contains("PAN ABCDE1234F"));
    }

    #[test]
    fn test_system_prompt_embeds_schema_shape() {
        let prompt = system_prompt(schema_for(crate::common::FormType::Visa));
        assert!(prompt.contains("Return ONLY a valid JSON object"));
        assert!(prompt.contains("\"passportDateOfExpiry\""));
    }

    #[test]
    fn test_user_prompt_names_form_type() {
        let prompt = user_prompt(crate::common::FormType::Passport, "text");
        assert!(prompt.contains("for a passport form"));
    }
}
