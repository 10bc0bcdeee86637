//! Year coercion for loosely-typed cells.

/// Latest year a resident interval may carry.
pub const MAX_YEAR: i32 = 9999;

/// Parses the leading integer of a cell.
///
/// Surrounding whitespace and one leading sign are accepted, then digits are
/// read up to the first non-digit (`"1920s"` is 1920, `"1920.5"` is 1920).
/// Returns `None` when no digit follows or the value does not fit in `i32`.
pub fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

/// Whether `year` can bound a resident interval.
pub fn is_valid_year(year: i32) -> bool {
    (1..=MAX_YEAR).contains(&year)
}

/// Like [`parse_year`], with `0` standing in for anything unparsable.
pub fn coerce_year(value: &str) -> i32 {
    parse_year(value).unwrap_or(0)
}
