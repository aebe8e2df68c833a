//! Field-level helpers shared by the format readers.
//!
//! Numeric parsing here is deliberately lenient and never fails: a value
//! that cannot be read becomes NaN, and each reader decides what to do with
//! it (GPX/KML keep it, CSV drops the row).

/// Separator between the parts of a point description.
pub const DESC_SEPARATOR: &str = "\n";

/// Parses the longest numeric prefix of `raw`, after leading whitespace.
///
/// `"12.5 km"` reads as `12.5`, `"1e3x"` as `1000.0`, `"-Infinity m"` as
/// negative infinity, `"abc"` and `""` as NaN.
/// Used for GPX attributes and CSV cells, where trailing junk is common.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with(INFINITY_WORD) {
        return signed_infinity(bytes.first() == Some(&b'-'));
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = skip_digits(bytes, frac_start);
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            end = exp_digits_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses a whole (trimmed) token as a number, NaN if it is not one.
///
/// Used for KML coordinate tuples, where each field must be a number on its
/// own. A blank token is `0.0`. Besides decimal notation the token may be
/// a signed `Infinity` or an unsigned `0x`/`0o`/`0b` integer literal; words
/// such as `inf` or `nan` are not numbers.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned == INFINITY_WORD {
        return signed_infinity(negative);
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    let decimal_only = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_only {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

const INFINITY_WORD: &str = "Infinity";

fn signed_infinity(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// `0x1F`, `0o17`, `0b101`. `None` when `s` has no radix prefix.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(f64::NAN);
    }
    Some(u128::from_str_radix(digits, radix).map_or(f64::NAN, |v| v as f64))
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Joins the present, non-empty parts with newlines.
///
/// Absent and empty parts are dropped before joining, so the result never
/// consists of separators alone.
pub fn join_desc<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(DESC_SEPARATOR)
}

/// Removes every `<...>` run that does not cross a line break.
///
/// Best effort only: the shortest `<` to `>` span on the same line is
/// dropped, entities are left alone and a `<` with no closing `>` on its
/// line is kept as text.
pub fn strip_markup_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let line_end = after_open
            .find(is_line_terminator)
            .unwrap_or(after_open.len());
        match after_open[..line_end].find('>') {
            Some(close) => rest = &after_open[close + 1..],
            None => {
                out.push('<');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5"), 12.5);
        assert_eq!(parse_float_prefix("  -3.25 "), -3.25);
        assert_eq!(parse_float_prefix("12.5 km"), 12.5);
        assert_eq!(parse_float_prefix("1e3x"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("7."), 7.0);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix(".").is_nan());
    }

    #[test]
    fn test_parse_float_prefix_reads_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix(" -Infinity m"), f64::NEG_INFINITY);
        assert_eq!(parse_float_prefix("+Infinityx"), f64::INFINITY);
        assert!(parse_float_prefix("infinity").is_nan());
        assert!(parse_float_prefix("inf").is_nan());
        assert!(parse_float_prefix("NaN").is_nan());
    }

    #[test]
    fn test_parse_number_requires_whole_token() {
        assert_eq!(parse_number(" 30.1 "), 30.1);
        assert_eq!(parse_number("-0.5"), -0.5);
        assert!(parse_number("30.1a").is_nan());
        assert!(parse_number("1 2").is_nan());
    }

    #[test]
    fn test_parse_number_blank_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_parse_number_special_tokens() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("-inf").is_nan());
        assert!(parse_number("infinity").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("NaN").is_nan());
    }

    #[test]
    fn test_parse_number_radix_literals() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert!(parse_number("-0x10").is_nan());
        assert!(parse_number("0x+1").is_nan());
        assert!(parse_number("0x").is_nan());
    }

    #[test]
    fn test_join_desc_drops_empty_parts() {
        assert_eq!(join_desc([Some("a"), None, Some(""), Some("b")]), "a\nb");
        assert_eq!(join_desc([None, Some("")]), "");
        assert_eq!(join_desc([Some("only")]), "only");
    }

    #[test]
    fn test_strip_markup_tags() {
        assert_eq!(strip_markup_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_markup_tags("a <br/> b"), "a  b");
        assert_eq!(strip_markup_tags("no tags"), "no tags");
    }

    #[test]
    fn test_strip_markup_tags_does_not_cross_lines() {
        assert_eq!(strip_markup_tags("1 < 2\nand 3 > 2"), "1 < 2\nand 3 > 2");
        assert_eq!(strip_markup_tags("<a\nhref=x>link</a>"), "<a\nhref=x>link");
    }
}
