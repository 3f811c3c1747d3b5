use anyhow::{Context, Result};
use time::Date;
use time::format_description;

const DAY_FORMAT: &str = "[year]-[month]-[day]";

/// Parses the `YYYY-MM-DD` day string the aggregation query groups on.
pub fn parse_report_day(raw: &str) -> Result<Date> {
    let format = format_description::parse(DAY_FORMAT)
        .context("failed to build report day format description")?;
    Date::parse(raw.trim(), &format)
        .with_context(|| format!("unsupported report day format: {raw}"))
}

/// Renders a day as `<FullMonthName> <DD>,<YYYY>`, e.g. `July 29,2016`.
/// Display-only; ordering always uses the underlying `Date`.
#[must_use]
pub fn format_report_day(day: Date) -> String {
    format!("{} {:02},{}", day.month(), day.day(), day.year())
}
