/// Encoder positions of the summarization model. Text past this many
/// tokens is dropped before generation.
pub const INPUT_TOKEN_WINDOW: usize = 1024;

/// Rough BPE token count for English prose: about four tokens per three
/// words. Only used to warn that input will be truncated.
pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    (words * 4).div_ceil(3)
}
