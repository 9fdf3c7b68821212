//! Date/time resolution over free text.
//!
//! Interprets relative expressions ("tomorrow", "next friday", "in 2 days",
//! "tonight") anchored to a caller-supplied reference instant, along with
//! absolute dates and explicit times. The resolver scans left to right and
//! returns the first expression it recognises; unparseable text yields `None`
//! rather than an error. Pure and deterministic given the same reference.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

/// Hour attached to day-granular expressions with no explicit time.
const DEFAULT_HOUR: u32 = 12;
/// Hour attached to "tonight".
const EVENING_HOUR: u32 = 20;

/// Resolves the first date/time expression in `text` against `reference`.
///
/// Returns `None` when no recognisable expression is present.
#[must_use]
pub fn resolve(text: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let words = tokenize(text);
    (0..words.len()).find_map(|index| match_at(&words, index, reference))
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| {
                matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '"' | '\'')
            })
            .to_ascii_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn match_at(words: &[String], index: usize, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let word = words.get(index)?;
    match word.as_str() {
        "today" => day_with_time(reference.date_naive(), words, index + 1, DEFAULT_HOUR),
        "tonight" => day_with_time(reference.date_naive(), words, index + 1, EVENING_HOUR),
        "tomorrow" => day_with_time(
            reference.date_naive() + Duration::days(1),
            words,
            index + 1,
            DEFAULT_HOUR,
        ),
        "next" => resolve_next(words, index, reference),
        "in" => resolve_offset(words, index, reference),
        _ => resolve_bare_token(words, index, reference),
    }
}

fn resolve_bare_token(
    words: &[String],
    index: usize,
    reference: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let word = words.get(index)?;
    if let Some(weekday) = parse_weekday(word) {
        let date = upcoming_weekday(reference, weekday, 0);
        return day_with_time(date, words, index + 1, DEFAULT_HOUR);
    }
    if let Ok(date) = NaiveDate::parse_from_str(word, "%Y-%m-%d") {
        return day_with_time(date, words, index + 1, DEFAULT_HOUR);
    }
    if let Some(date) = parse_month_day(words, index, reference) {
        return day_with_time(date, words, index + 2, DEFAULT_HOUR);
    }
    parse_time(word).map(|time| reference.date_naive().and_time(time).and_utc())
}

/// Resolves `next <weekday>` (the plain upcoming occurrence pushed one week
/// further out) along with `next week` and `next month`.
fn resolve_next(
    words: &[String],
    index: usize,
    reference: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let unit = words.get(index + 1)?;
    if let Some(weekday) = parse_weekday(unit) {
        let date = upcoming_weekday(reference, weekday, 7);
        return day_with_time(date, words, index + 2, DEFAULT_HOUR);
    }
    let days = match unit.as_str() {
        "week" => 7,
        "month" => 30,
        _ => return None,
    };
    day_with_time(
        reference.date_naive() + Duration::days(days),
        words,
        index + 2,
        DEFAULT_HOUR,
    )
}

/// Resolves `in <amount> <unit>` as an exact offset from the reference.
fn resolve_offset(
    words: &[String],
    index: usize,
    reference: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let amount: i64 = words.get(index + 1)?.parse().ok()?;
    if amount < 0 {
        return None;
    }
    let duration = match words.get(index + 2)?.as_str() {
        "minute" | "minutes" | "min" | "mins" => Duration::try_minutes(amount),
        "hour" | "hours" | "hr" | "hrs" => Duration::try_hours(amount),
        "day" | "days" => Duration::try_days(amount),
        "week" | "weeks" => Duration::try_weeks(amount),
        // Month-granular offsets are approximated at thirty days.
        "month" | "months" => Duration::try_days(amount.checked_mul(30)?),
        _ => return None,
    }?;
    reference.checked_add_signed(duration)
}

/// Parses `<month-name> <day> [year]`, e.g. "january 5" or "mar 3rd 2026".
///
/// Without an explicit year the reference year is assumed, rolling into the
/// next year when the date has already passed.
fn parse_month_day(words: &[String], index: usize, reference: DateTime<Utc>) -> Option<NaiveDate> {
    let month = parse_month(words.get(index)?)?;
    let day_token = words.get(index + 1)?;
    let day: u32 = strip_ordinal(day_token).parse().ok()?;

    let explicit_year: Option<i32> = words
        .get(index + 2)
        .and_then(|token| token.parse().ok())
        .filter(|year| (1970..=9999).contains(year));

    let year = explicit_year.unwrap_or_else(|| reference.year());
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if explicit_year.is_none() && date < reference.date_naive() {
        return NaiveDate::from_ymd_opt(year + 1, month, day);
    }
    Some(date)
}

fn strip_ordinal(token: &str) -> &str {
    ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| {
            token
                .strip_suffix(suffix)
                .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        })
        .unwrap_or(token)
}

/// Combines a resolved date with an explicit time found just after the date
/// expression, falling back to `default_hour`.
fn day_with_time(
    date: NaiveDate,
    words: &[String],
    next_index: usize,
    default_hour: u32,
) -> Option<DateTime<Utc>> {
    let time = time_near(words, next_index)
        .or_else(|| NaiveTime::from_hms_opt(default_hour, 0, 0))?;
    Some(date.and_time(time).and_utc())
}

/// Looks for a time token at `index`, skipping over a leading "at".
fn time_near(words: &[String], index: usize) -> Option<NaiveTime> {
    let word = words.get(index)?;
    if word == "at" {
        return words.get(index + 1).and_then(|next| parse_time(next));
    }
    parse_time(word)
}

/// Parses "5pm", "5:30pm", "8am", and 24-hour "17:30" forms.
fn parse_time(word: &str) -> Option<NaiveTime> {
    if let Some(rest) = word.strip_suffix("am") {
        return parse_twelve_hour(rest, false);
    }
    if let Some(rest) = word.strip_suffix("pm") {
        return parse_twelve_hour(rest, true);
    }
    let (hour_text, minute_text) = word.split_once(':')?;
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = minute_text.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn parse_twelve_hour(text: &str, is_pm: bool) -> Option<NaiveTime> {
    let (hour, minute) = text.split_once(':').map_or_else(
        || text.parse::<u32>().ok().map(|h| (h, 0)),
        |(hour_text, minute_text)| {
            let h: u32 = hour_text.parse().ok()?;
            let m: u32 = minute_text.parse().ok()?;
            Some((h, m))
        },
    )?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    let hour_24 = match (hour, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour_24, minute, 0)
}

fn parse_weekday(word: &str) -> Option<Weekday> {
    let weekdays = [
        ("monday", "mon", Weekday::Mon),
        ("tuesday", "tue", Weekday::Tue),
        ("wednesday", "wed", Weekday::Wed),
        ("thursday", "thu", Weekday::Thu),
        ("friday", "fri", Weekday::Fri),
        ("saturday", "sat", Weekday::Sat),
        ("sunday", "sun", Weekday::Sun),
    ];
    weekdays
        .iter()
        .find(|(full, short, _)| word == *full || word == *short)
        .map(|(_, _, weekday)| *weekday)
}

fn parse_month(word: &str) -> Option<u32> {
    let months = [
        ("january", "jan", 1),
        ("february", "feb", 2),
        ("march", "mar", 3),
        ("april", "apr", 4),
        ("may", "may", 5),
        ("june", "jun", 6),
        ("july", "jul", 7),
        ("august", "aug", 8),
        ("september", "sep", 9),
        ("october", "oct", 10),
        ("november", "nov", 11),
        ("december", "dec", 12),
    ];
    months
        .iter()
        .find(|(full, short, _)| word == *full || word == *short)
        .map(|(_, _, number)| *number)
}

/// Returns the next occurrence of `weekday` strictly after the reference
/// date, plus `extra_days`.
fn upcoming_weekday(reference: DateTime<Utc>, weekday: Weekday, extra_days: u32) -> NaiveDate {
    let target = weekday.num_days_from_monday();
    let current = reference.weekday().num_days_from_monday();
    let ahead = if target > current {
        target - current
    } else {
        target + 7 - current
    };
    reference.date_naive() + Duration::days(i64::from(ahead + extra_days))
}
