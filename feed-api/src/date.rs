use chrono::{Datelike, Locale, SecondsFormat, TimeZone, Timelike, Utc};
use std::fmt;

use crate::Time;

/// The only locale the feed is displayed in
pub const LOCALE: Locale = Locale::pt_BR;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Absolute publication date, eg. `17 de mai as 14:30h`
pub fn format_published<Tz: TimeZone>(at: &Time, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    at.with_timezone(tz)
        .format_localized("%-d de %b as %H:%Mh", LOCALE)
        .to_string()
}

/// Machine-readable form, eg. `2022-05-03T20:00:00.000Z`
pub fn iso_timestamp(at: &Time) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Distance between `at` and `now` as a sentence, eg. `há 2 dias` or `em cerca de 1 hora`
pub fn format_relative(at: &Time, now: &Time) -> String {
    match at > now {
        true => format!("em {}", Distance::between(now, at)),
        false => format!("há {}", Distance::between(at, now)),
    }
}

/// Not cached: every call reads the clock again
pub fn format_relative_to_now(at: &Time) -> String {
    format_relative(at, &Utc::now())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    fn between(earlier: &Time, later: &Time) -> Distance {
        let seconds = (*later - *earlier).num_seconds();
        let minutes = round_div(seconds, 60);

        if minutes == 0 {
            return Distance::LessThanAMinute;
        } else if minutes < 45 {
            return Distance::Minutes(minutes);
        } else if minutes < 90 {
            return Distance::AboutHours(1);
        } else if minutes < MINUTES_IN_DAY {
            return Distance::AboutHours(round_div(minutes, 60));
        } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Distance::Days(1);
        } else if minutes < MINUTES_IN_MONTH {
            return Distance::Days(round_div(minutes, MINUTES_IN_DAY));
        } else if minutes < MINUTES_IN_TWO_MONTHS {
            return Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH));
        }

        let months = months_between(earlier, later);
        if months < 12 {
            return Distance::Months(round_div(minutes, MINUTES_IN_MONTH));
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => Distance::AboutYears(years),
            3..=8 => Distance::OverYears(years),
            _ => Distance::AlmostYears(years + 1),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Distance::*;
        match *self {
            LessThanAMinute => write!(f, "menos de um minuto"),
            Minutes(1) => write!(f, "1 minuto"),
            Minutes(n) => write!(f, "{n} minutos"),
            AboutHours(1) => write!(f, "cerca de 1 hora"),
            AboutHours(n) => write!(f, "cerca de {n} horas"),
            Days(1) => write!(f, "1 dia"),
            Days(n) => write!(f, "{n} dias"),
            AboutMonths(1) => write!(f, "cerca de 1 mês"),
            AboutMonths(n) => write!(f, "cerca de {n} meses"),
            Months(1) => write!(f, "1 mês"),
            Months(n) => write!(f, "{n} meses"),
            AboutYears(1) => write!(f, "cerca de 1 ano"),
            AboutYears(n) => write!(f, "cerca de {n} anos"),
            OverYears(1) => write!(f, "mais de 1 ano"),
            OverYears(n) => write!(f, "mais de {n} anos"),
            AlmostYears(1) => write!(f, "quase 1 ano"),
            AlmostYears(n) => write!(f, "quase {n} anos"),
        }
    }
}

// n must be non-negative, halves round up
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Full calendar months elapsed from `earlier` to `later`
fn months_between(earlier: &Time, later: &Time) -> i64 {
    let calendar = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;
    let position_in_month =
        |t: &Time| (t.day(), t.num_seconds_from_midnight(), t.nanosecond());
    match position_in_month(later) < position_in_month(earlier) {
        true => calendar - 1,
        false => calendar,
    }
}
