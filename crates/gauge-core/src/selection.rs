/// Returned in place of a message when no usable one was generated.
pub const INVALID_MESSAGE: &str = "Could not generate a valid message";

/// Generated messages must be shorter than this (in characters) to be usable.
pub const MAX_MESSAGE_CHARS: usize = 200;

/// Conventional commit subject line limit.
pub const SUBJECT_LIMIT: usize = 72;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A response is usable if generation succeeded and it is short enough.
pub fn is_usable(response: Option<&str>) -> bool {
    response.is_some_and(|r| char_len(r) < MAX_MESSAGE_CHARS)
}

/// Pass a usable response through, or substitute [`INVALID_MESSAGE`].
///
/// `None` means generation failed.
pub fn validate(response: Option<&str>) -> &str {
    match response {
        Some(r) if is_usable(response) => r,
        _ => INVALID_MESSAGE,
    }
}

/// Pick between a first-pass message and its refinement.
///
/// An unusable side loses. When both are usable, a message over the subject
/// limit loses to one within it; otherwise the longer one wins, with ties
/// going to `first`.
pub fn choose_response<'a>(first: Option<&'a str>, second: Option<&'a str>) -> &'a str {
    match (first, second) {
        (Some(a), Some(b)) if is_usable(first) && is_usable(second) => {
            let (la, lb) = (char_len(a), char_len(b));
            if la > SUBJECT_LIMIT || lb > SUBJECT_LIMIT {
                if la > SUBJECT_LIMIT { b } else { a }
            } else if la >= lb {
                a
            } else {
                b
            }
        }
        (Some(a), _) if is_usable(first) => a,
        (_, Some(b)) if is_usable(second) => b,
        _ => INVALID_MESSAGE,
    }
}
