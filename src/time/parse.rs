use crate::errors::TimeParseError;
use crate::time::millis_from_components;

const COMPONENT_NAMES: [&str; 3] = ["hours", "minutes", "seconds"];

/// Strict `H[:MM[:SS]]` parser. Components are read in hours, minutes,
/// seconds order, so `"5"` is five hours and `"1:30"` is ninety minutes.
pub fn parse_millis_strict(text: &str) -> Result<i64, TimeParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > COMPONENT_NAMES.len() {
        return Err(TimeParseError::TooManyComponents(trimmed.to_string()));
    }

    let mut values = [0i64; 3];
    for (idx, part) in parts.iter().enumerate() {
        values[idx] = part.trim().parse::<i64>().map_err(|_| TimeParseError::InvalidComponent {
            component: COMPONENT_NAMES[idx],
            value: part.to_string(),
            input: trimmed.to_string(),
        })?;
    }

    Ok(millis_from_components(values[0], values[1], values[2]))
}

/// Permissive parser kept for presets written by older tools: every
/// component takes its leading integer, anything unreadable counts as zero,
/// and components past the third are ignored. Never fails.
pub fn parse_millis_lenient(text: &str) -> i64 {
    let mut values = [0i64; 3];
    for (idx, part) in text.split(':').take(COMPONENT_NAMES.len()).enumerate() {
        values[idx] = leading_integer(part).unwrap_or(0);
    }
    millis_from_components(values[0], values[1], values[2])
}

// Leading optional sign plus digits, after skipping whitespace.
fn leading_integer(part: &str) -> Option<i64> {
    let s = part.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

    #[test]
    fn test_strict_full_clock() {
        assert_eq!(
            parse_millis_strict("01:02:03").unwrap(),
            MILLIS_PER_HOUR + 2 * MILLIS_PER_MINUTE + 3 * MILLIS_PER_SECOND
        );
    }

    #[test]
    fn test_strict_hours_first() {
        assert_eq!(parse_millis_strict("5").unwrap(), 5 * MILLIS_PER_HOUR);
        assert_eq!(parse_millis_strict(" 1:30 ").unwrap(), 90 * MILLIS_PER_MINUTE);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert_eq!(parse_millis_strict("   "), Err(TimeParseError::Empty));
        assert!(matches!(
            parse_millis_strict("1:2:3:4"),
            Err(TimeParseError::TooManyComponents(_))
        ));
        match parse_millis_strict("07:xx") {
            Err(TimeParseError::InvalidComponent { component, value, .. }) => {
                assert_eq!(component, "minutes");
                assert_eq!(value, "xx");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_millis_strict("07::00").is_err());
    }

    #[test]
    fn test_lenient_defaults_to_zero() {
        assert_eq!(parse_millis_lenient("abc"), 0);
        assert_eq!(parse_millis_lenient(""), 0);
        assert_eq!(parse_millis_lenient("2:xx:10"), 2 * MILLIS_PER_HOUR + 10 * MILLIS_PER_SECOND);
    }

    #[test]
    fn test_lenient_takes_leading_digits() {
        assert_eq!(parse_millis_lenient("12abc:05"), 12 * MILLIS_PER_HOUR + 5 * MILLIS_PER_MINUTE);
        assert_eq!(parse_millis_lenient("0:0:-5"), -5 * MILLIS_PER_SECOND);
        assert_eq!(parse_millis_lenient("1:2:3:4"), parse_millis_strict("1:2:3").unwrap());
    }
}
