// https://ocr.space/ocrapi - free tier works with the "helloworld" key

use std::collections::HashMap;

pub mod models;

use reqwest::Client;

use crate::models::ParseImageResponse;

/// OCR engine 2 supports handwritten text, which the identity documents
/// we process frequently contain.
pub const HANDWRITING_ENGINE: u8 = 2;

#[derive(Debug, Clone)]
pub struct OcrSpaceOptions {
    pub api_key: String,
    pub language: String,
    pub engine: u8,
}

impl OcrSpaceOptions {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            language: "eng".to_string(),
            engine: HANDWRITING_ENGINE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OcrSpaceService {
    options: OcrSpaceOptions,
}

impl OcrSpaceService {
    pub fn new(options: OcrSpaceOptions) -> Self {
        Self { options }
    }

    /// Run OCR over a file reachable at a public URL.
    ///
    /// Orientation detection, scaling and table mode are always on; scanned
    /// government forms are routinely rotated and tabular.
    pub async fn parse_url(&self, file_url: &str) -> Result<ParseImageResponse, &'static str> {
        let url = "https://api.ocr.space/parse/image";

        let mut form_body: HashMap<&str, String> = HashMap::new();
        form_body.insert("url", file_url.to_string());
        form_body.insert("language", self.options.language.clone());
        form_body.insert("isOverlayRequired", "false".to_string());
        form_body.insert("detectOrientation", "true".to_string());
        form_body.insert("scale", "true".to_string());
        form_body.insert("OCREngine", self.options.engine.to_string());
        form_body.insert("isTable", "true".to_string());

        let client = Client::new();
        let res = client
            .post(url)
            .header("apikey", self.options.api_key.clone())
            .form(&form_body)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("OCR.space error ({}): {}", status, error_body);
                    return Err("OCR.space returned an error");
                }

                let result = response.json::<ParseImageResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse OCR.space response: {}", e);
                        Err("Error parsing OCR response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to OCR.space failed: {}", e);
                Err("Error calling OCR service")
            }
        }
    }
}
