//! Label and query normalization.
//!
//! Every label and every query passes through [`sanitize`] before scoring, so
//! the string metrics in [`crate::score`] never see raw casing or punctuation
//! differences. Sanitization has no cross-string dependency: each input is
//! normalized identically and independently.

/// Case-fold `input` and strip every character that is not a letter, digit,
/// or space.
///
/// Pure and deterministic: the same input always yields the same output, and
/// sanitizing already-sanitized text is a no-op. The empty string normalizes
/// to the empty string; so does a string made entirely of punctuation. Both
/// are valid scoring inputs downstream, not errors.
pub fn sanitize(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        // Lowercasing can expand a single character into multiple (e.g.
        // German ß -> ss), so filter after the expansion.
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() || lower == ' ' {
                output.push(lower);
            }
        }
    }
    output
}
