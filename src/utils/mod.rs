use crate::models::Message;

fn is_cjk(c: char) -> bool {
    // CJK Unified Ideographs block
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Crude token estimate: one token per whitespace-separated word plus
/// one per CJK ideograph, regardless of word boundaries. Not a real
/// tokenizer.
pub fn count_text_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    let cjk_chars = text.chars().filter(|c| is_cjk(*c)).count();
    words + cjk_chars
}

/// Estimate tokens for a prompt history. Message contents are
/// concatenated with no separator before counting, so adjacent contents
/// can merge into a single word.
pub fn count_prompt_tokens(messages: &[Message]) -> usize {
    let mut total_text = String::new();
    for message in messages {
        total_text.push_str(&message.content);
    }
    count_text_tokens(&total_text)
}
