//! Loose numeric coercion of the raw duration strings.

/// Largest magnitude a single duration can reach once coerced (one leap year).
pub const MAX_DURATION_MINUTES: i64 = 24 * 60 * 366;

/// Convert a raw duration to whole minutes.
///
/// Blank, non-numeric and non-finite input counts as 0. Fractional values
/// round to the nearest minute; the result is clamped to
/// `±MAX_DURATION_MINUTES`. Never fails.
pub fn coerce_minutes(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            let limit = MAX_DURATION_MINUTES as f64;
            v.round().clamp(-limit, limit) as i64
        }
        _ => 0,
    }
}

/// True when the raw value is blank or a finite number.
pub fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn total_minutes<'a, I>(raws: I) -> i64
where
    I: IntoIterator<Item = &'a str>,
{
    raws.into_iter()
        .map(coerce_minutes)
        .fold(0, i64::saturating_add)
}
