//! Balanced-brace extraction of a JSON object embedded in free text.
//!
//! Completion services wrap their payloads in prose, code fences, or
//! apologies. A greedy `{.*}` match breaks on nested objects, so this scanner
//! tracks brace depth and string/escape state to find the first balanced
//! top-level object.

/// Returns the first balanced `{...}` span in `text`, or `None` when no
/// complete top-level object is present.
#[must_use]
pub fn first_json_object(text: &str) -> Option<&str> {
    let mut start = None;
    let mut depth: u32 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (index, character) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else {
                match character {
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
            }
            continue;
        }

        match character {
            // Quotes are tracked even before the first brace so that braces
            // inside quoted prose cannot start the span.
            '"' => in_string = true,
            '{' => {
                if start.is_none() {
                    start = Some(index);
                }
                depth += 1;
            }
            '}' if start.is_some() => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let end = index + character.len_utf8();
                    return start.and_then(|begin| text.get(begin..end));
                }
            }
            _ => {}
        }
    }
    None
}
