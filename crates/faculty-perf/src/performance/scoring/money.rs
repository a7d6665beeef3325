/// Reads a funding amount typed by hand (`"₹ 12,50,000"`, `"$1.5M"`, `"250000.00"`).
///
/// Everything except digits, `.` and `-` is discarded and the longest leading decimal
/// number of what remains is taken, so `"10-20 lakh"` reads as `10`. Text with no usable
/// number reads as zero; a number too large for `f64` reads as infinity and is left to the
/// project cap.
pub fn parse_amount(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    leading_number(&kept)
        .and_then(|number| number.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > fraction_start || digits > 0 {
            digits += cursor - fraction_start;
            end = cursor;
        }
    }

    if digits == 0 {
        return None;
    }

    Some(text[..end].trim_end_matches('.'))
}
