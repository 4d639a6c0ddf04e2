//! Textual formats shared by the required and fallback accessors.
//!
//! Every parser returns `None` on failure; the caller decides which error
//! (if any) that becomes.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this are ignored; they are below nanosecond
/// resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

pub(crate) const DEFAULT_SEPARATOR: &str = ",";

/// `1 t true 0 f false`, ASCII case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Finite values only, unless the literal itself spells infinity. An
/// out-of-range literal such as `1e400` is rejected rather than rounded to
/// infinity.
pub(crate) fn parse_f64(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parses literals such as `300ms`, `1.5h` or `2h45m`.
///
/// Grammar: an optional sign followed by one or more `<decimal><unit>`
/// terms, where the decimal may carry a fraction and the unit is one of
/// `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`. A bare `0` needs no unit.
/// Negative non-zero values and totals above `i64::MAX` nanoseconds are
/// rejected.
pub(crate) fn parse_duration(raw: &str) -> Option<Duration> {
    let (negative, mut rest) = if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        (false, rest)
    } else {
        (false, raw)
    };

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        let unit = unit_nanos(unit)?;

        let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut term = whole.checked_mul(unit)?;
        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let scale = 10u128.pow(u32::try_from(digits.len()).ok()?);
            let fraction: u128 = digits.parse().ok()?;
            term = term.checked_add(fraction * unit / scale)?;
        }

        total = total.checked_add(term)?;
        if total > i64::MAX as u128 {
            return None;
        }
        rest = after;
    }

    if negative && total != 0 {
        return None;
    }
    u64::try_from(total).ok().map(Duration::from_nanos)
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(60 * 60 * NANOS_PER_SEC),
        _ => None,
    }
}

/// An empty separator splits into single characters.
pub(crate) fn split_list(raw: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        raw.chars().map(String::from).collect()
    } else {
        raw.split(sep).map(str::to_string).collect()
    }
}
