// Printable HTML rendering of a submission (the exported "PDF").
//
// Self-contained document: inline print CSS, no scripts, no external
// assets, so it survives being downloaded and printed offline.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::common::FormType;
use crate::domains::submissions::FormSubmission;

use super::categorize::group_fields;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// "dateOfBirth" -> "Date Of Birth", "panNumber" -> "Pan Number".
pub fn format_field_label(field_name: &str) -> String {
    let mut label = String::with_capacity(field_name.len() + 4);
    for (index, c) in field_name.chars().enumerate() {
        if index == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label.trim().to_string()
}

/// Suggested download file name for the export.
pub fn export_file_name(submission: &FormSubmission) -> String {
    let id = submission.id.simple().to_string();
    format!("form-{}-{}.html", submission.form_type, &id[..8])
}

/// Which field map to print: user-edited data when present, otherwise the
/// raw extraction.
fn printable_fields(submission: &FormSubmission) -> Map<String, Value> {
    let form_data = submission.form_data.as_object();
    match form_data {
        Some(map) if !map.is_empty() => map.clone(),
        _ => submission
            .extracted_data
            .as_object()
            .cloned()
            .unwrap_or_default(),
    }
}

fn display_reference(submission: &FormSubmission) -> String {
    submission
        .submission_reference
        .clone()
        .unwrap_or_else(|| submission.id.simple().to_string()[..8].to_uppercase())
}

pub fn render_submission(submission: &FormSubmission) -> String {
    let title = FormType::parse(&submission.form_type)
        .map(|t| t.title())
        .unwrap_or("GOVERNMENT FORM");

    let fields = printable_fields(submission);
    let grouped = group_fields(&fields);

    let sections_html: String = grouped
        .iter()
        .map(|(category, entries)| {
            let fields_html: String = entries
                .iter()
                .map(|(key, value)| {
                    format!(
                        r#"
            <div class="field">
              <div class="label">{}</div>
              <div class="value">{}</div>
            </div>"#,
                        escape_html(&format_field_label(key)),
                        escape_html(value)
                    )
                })
                .collect();

            format!(
                r#"
        <div class="section">
          <div class="section-title">{}</div>
          {}
        </div>"#,
                category, fields_html
            )
        })
        .collect();

    let reference = escape_html(&display_reference(submission));
    let status = escape_html(&submission.status);
    let submission_date = submission
        .submitted_at
        .unwrap_or(submission.created_at)
        .format("%d %b %Y")
        .to_string();
    let form_type_display = escape_html(&submission.form_type.replace('_', " ").to_uppercase());
    let generated_at = Utc::now().format("%d %b %Y, %H:%M").to_string();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    @media print {{
      * {{ margin: 0; padding: 0; }}
      body {{ margin: 0; padding: 20px; }}
      .no-print {{ display: none !important; }}
    }}
    * {{ box-sizing: border-box; }}
    body {{
      font-family: Arial, sans-serif;
      background: white;
      color: #000;
      line-height: 1.6;
    }}
    .container {{
      width: 8.5in;
      margin: 0 auto;
      padding: 20px;
      background: white;
    }}
    .header {{
      text-align: center;
      border-bottom: 3px solid #1e40af;
      padding-bottom: 15px;
      margin-bottom: 20px;
    }}
    .title {{
      font-size: 20px;
      font-weight: bold;
      color: #1e40af;
      margin-bottom: 5px;
    }}
    .subtitle {{
      color: #666;
      font-size: 12px;
    }}
    .submission-info {{
      background: #f0f4ff;
      padding: 12px;
      border-left: 4px solid #3b82f6;
      margin-bottom: 20px;
    }}
    .info-row {{
      width: 100%;
      margin: 6px 0;
      overflow: auto;
      clear: both;
    }}
    .info-cell {{
      width: 48%;
      float: left;
      margin-right: 2%;
      box-sizing: border-box;
    }}
    .info-label {{
      font-weight: bold;
      color: #333;
      font-size: 10px;
      text-transform: uppercase;
      margin-bottom: 2px;
    }}
    .info-value {{
      color: #000;
      font-size: 12px;
      margin-top: 2px;
      word-break: break-word;
    }}
    .status {{
      background: #d1fae5;
      color: #065f46;
      padding: 3px 8px;
      border-radius: 3px;
      font-size: 10px;
      font-weight: bold;
      text-transform: uppercase;
      display: inline-block;
    }}
    .section {{
      margin: 18px 0;
      clear: both;
      page-break-inside: avoid;
    }}
    .section-title {{
      font-size: 13px;
      font-weight: bold;
      color: #1e293b;
      border-bottom: 2px solid #e0e0e0;
      padding-bottom: 6px;
      margin-bottom: 10px;
      text-transform: uppercase;
    }}
    .field {{
      margin: 8px 0;
      padding: 8px 10px;
      background: #fafafa;
      border-left: 3px solid #3b82f6;
      page-break-inside: avoid;
      clear: both;
    }}
    .label {{
      font-weight: bold;
      color: #555;
      font-size: 10px;
      text-transform: uppercase;
      margin-bottom: 3px;
    }}
    .value {{
      color: #000;
      font-size: 13px;
      word-wrap: break-word;
      white-space: normal;
      word-break: break-word;
    }}
    .footer {{
      margin-top: 30px;
      padding-top: 15px;
      border-top: 2px solid #e0e0e0;
      text-align: center;
      color: #666;
      font-size: 10px;
      clear: both;
    }}
    .footer p {{ margin: 4px 0; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <div class="title">{title}</div>
      <div class="subtitle">Government of India | Official Form Submission</div>
    </div>

    <div class="submission-info">
      <div class="info-row">
        <div class="info-cell">
          <div class="info-label">Submission ID</div>
          <div class="info-value">{reference}</div>
        </div>
        <div class="info-cell">
          <div class="info-label">Status</div>
          <div><span class="status">{status}</span></div>
        </div>
      </div>
      <div class="info-row">
        <div class="info-cell">
          <div class="info-label">Submission Date</div>
          <div class="info-value">{submission_date}</div>
        </div>
        <div class="info-cell">
          <div class="info-label">Form Type</div>
          <div class="info-value">{form_type_display}</div>
        </div>
      </div>
    </div>

    {sections_html}

    <div class="footer">
      <p><strong>This is a computer-generated document.</strong></p>
      <p>Generated on {generated_at}</p>
      <p style="margin-top: 8px;">Submission ID: <strong>{reference}</strong></p>
    </div>
  </div>
</body>
</html>
"#
    )
}
