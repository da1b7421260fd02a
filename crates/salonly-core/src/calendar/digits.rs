// ── Numeral transforms ──
//
// Pure string transforms between ASCII and Persian (Extended Arabic-
// Indic, U+06F0..U+06F9) digits. Display-only; slot logic never touches
// localized digits.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian digits, leaving everything else as is.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Replace Persian digits with ASCII digits, leaving everything else as is.
pub fn to_ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .position(|&p| p == c)
                .and_then(|i| char::from_digit(i as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}
