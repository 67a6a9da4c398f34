//! Keystroke filters for the form fields.
//!
//! Disallowed characters are dropped silently; none of these functions fail.

/// Maximum length of a currency code field.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Returns `proposed` if it is a valid partial amount, otherwise `current`.
///
/// A valid partial amount is digits with at most one decimal point,
/// which includes the empty string and a lone ".".
pub fn accept_amount_edit(current: &str, proposed: &str) -> String {
    if is_partial_amount(proposed) {
        proposed.to_string()
    } else {
        current.to_string()
    }
}

/// Replays `raw` one character at a time through [`accept_amount_edit`].
pub fn filter_amount_input(raw: &str) -> String {
    raw.chars().fold(String::new(), |current, ch| {
        let mut proposed = current.clone();
        proposed.push(ch);
        accept_amount_edit(&current, &proposed)
    })
}

/// Keeps ASCII letters only, upper-cased, capped at three characters.
pub fn filter_currency_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(CURRENCY_CODE_LEN)
        .collect()
}

fn is_partial_amount(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}
