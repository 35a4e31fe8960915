use chrono::Month;

/// Extracts the month from a `month/day/year` date string.
///
/// Only the leading component is inspected, so `"1/5/2023"` and `"01/05/23"`
/// both yield January. Returns `None` when the component is missing, not a
/// number, or outside 1..=12.
pub fn parse_month(date: &str) -> Option<u32> {
    let (head, _) = date.trim().split_once('/')?;
    let month: u32 = head.trim().parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Three-letter English abbreviation used on chart axes ("Jan".."Dec").
pub fn month_label(month: u32) -> String {
    month_of(month)
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_else(|| format!("M{}", month))
}

fn month_of(month: u32) -> Option<Month> {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok())
}
