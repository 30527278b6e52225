//! North American phone mask used by the phone number input.
//!
//! Only ten-digit numbers are supported; extra digits are dropped and
//! international prefixes are not recognised.

/// `9` marks a digit slot, everything else is a literal.
pub const PHONE_MASK: &str = "(999) 999-9999";

pub const PHONE_DIGITS: usize = 10;

/// Renders the digits found in `input` into [`PHONE_MASK`].
///
/// Literals are emitted only up to the last digit typed so far, so partial
/// input reads naturally while typing (`"555"` becomes `"(555"`).
pub fn apply_phone_mask(input: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS);
    let mut out = String::with_capacity(PHONE_MASK.len());
    let mut pending = String::new();
    for slot in PHONE_MASK.chars() {
        if slot == '9' {
            match digits.next() {
                Some(digit) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(digit);
                }
                None => break,
            }
        } else {
            pending.push(slot);
        }
    }
    out
}

pub fn phone_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// True when `input` carries exactly ten digits.
pub fn is_complete_phone_number(input: &str) -> bool {
    phone_digits(input).len() == PHONE_DIGITS
}
