//! Prompt construction for book Q&A
//!
//! Context stuffing: the whole extracted text goes into the prompt, cut at a
//! fixed character bound. The cut is deterministic and lands on a char
//! boundary, so multi-byte text never splits a code point; it can still land
//! mid-word or mid-sentence.

/// Upper bound on how many characters of book content go into one prompt.
pub const MAX_CONTEXT_CHARS: usize = 100_000;

/// Standing instruction sent with every chat request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful study assistant. \
    Answer the user's question based ONLY on the following book content. \
    If the answer is not in the text, say you don't know.";

/// First `max_chars` characters of `content` (not bytes).
pub fn truncate_content(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &content[..byte_idx],
        None => content,
    }
}

/// Build the user-facing part of the prompt: bounded book content followed
/// by the question.
pub fn build_prompt(content: &str, question: &str) -> String {
    format!(
        "Book Content:\n{}\n\nUser Question: {}",
        truncate_content(content, MAX_CONTEXT_CHARS),
        question
    )
}
