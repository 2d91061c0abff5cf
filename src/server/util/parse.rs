/// Parses the leading integer of `arg`, ignoring anything after the digits.
///
/// An optional `+`/`-` sign is accepted. `"10m"` gives `Some(10)`, `"abc"` and `""`
/// give `None`. Values beyond `i64` saturate.
pub fn leading_int(arg: &str) -> Option<i64> {
    let trimmed = arg.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
