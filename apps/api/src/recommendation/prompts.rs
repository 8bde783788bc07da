// Prompt constants for skill/duration extraction.
// The reply format here is the contract `response_parser` reads.

/// Extraction prompt template. Replace `{query}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Given this job description: "{query}",
extract:
1. Required Skills (comma-separated)
2. Preferred Duration in minutes (integer)
Respond as:
Skills: skill1, skill2, skill3
Duration: XX"#;

pub fn render_extraction_prompt(query: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{query}", query)
}
