// Assessment recommendation pipeline:
// query → extractor → response_parser → matcher.
// All LLM calls go through llm_client via the extractor.

pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod response_parser;
