//! Console output formatter for pipeline results

use concierge_application::{Classified, GeneratedAnswer, IngestedInquiry};
use concierge_domain::InquiryRecord;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_ingested(result: &IngestedInquiry) -> String {
        format!("Inquiry saved successfully!\nid: {}", result.id)
    }

    pub fn format_ingested_json(result: &IngestedInquiry) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    pub fn format_answer(result: &GeneratedAnswer) -> String {
        format!(
            "Answer generated and saved successfully\nid: {}\n\n{}",
            result.id, result.answer
        )
    }

    pub fn format_answer_json(result: &GeneratedAnswer) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    pub fn format_classified(result: &Classified) -> String {
        format!(
            "Inquiry classified and saved successfully\nid: {}\ncategory: {}",
            result.id, result.category
        )
    }

    pub fn format_classified_json(result: &Classified) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    pub fn format_record(record: &InquiryRecord) -> String {
        let mut output = String::new();
        output.push_str(&format!("id:          {}\n", record.id));
        output.push_str(&format!("userName:    {}\n", record.user_name));
        output.push_str(&format!("mailAddress: {}\n", record.mail_address));
        output.push_str(&format!("createdAt:   {}\n", record.created_at));
        output.push_str(&format!("updatedAt:   {}\n", record.updated_at));
        output.push_str(&format!("reviewText:  {}\n", record.review_text));
        output.push_str(&format!(
            "category:    {}\n",
            record
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "(not classified)".to_string())
        ));
        match record.answer {
            Some(ref answer) => output.push_str(&format!("answer:\n{}\n", answer)),
            None => output.push_str("answer:      (not generated)\n"),
        }
        output
    }

    pub fn format_record_json(record: &InquiryRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
