use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::common::{Error, ErrorKind, Result, Time};

/// Regular price with a time-bounded discount.
///
/// `discount` is the discounted price itself, not a delta. No ordering between
/// `discount` and `price` is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceWindow {
    pub price: Decimal,
    pub discount: Decimal,
    pub start_date: Option<Time>,
    pub end_date: Option<Time>,
}

impl PriceWindow {
    pub fn new(price: Decimal, discount: Decimal) -> Self {
        Self {
            price,
            discount,
            start_date: None,
            end_date: None,
        }
    }

    pub fn between(mut self, start_date: Time, end_date: Time) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    /// Whether the discount applies at `now`. Both boundaries are inclusive and
    /// a window ending before it starts is never active.
    pub fn is_active(&self, now: Time) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= now && end >= start && end >= now,
            _ => false,
        }
    }

    pub fn effective_price(&self, now: Time) -> Decimal {
        if self.is_active(now) {
            self.discount
        } else {
            self.price
        }
    }
}

/// Price that applies at `now`. Missing or malformed windows fall back to `price`.
pub fn effective_price(
    price: Decimal,
    discount: Decimal,
    start_date: Option<Time>,
    end_date: Option<Time>,
    now: Time,
) -> Decimal {
    PriceWindow {
        price,
        discount,
        start_date,
        end_date,
    }
    .effective_price(now)
}

// Accepts RFC 3339 instants and bare `YYYY-MM-DD` dates (midnight UTC).
pub(crate) fn parse_time(input: &str) -> Result<Time> {
    let input = input.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Ok(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            Error::from(ErrorKind::InvalidTime {
                input: input.to_owned(),
            })
        })
}

fn parse_decimal(input: &str) -> Result<Decimal> {
    input.trim().parse::<Decimal>().map_err(|_| {
        Error::from(ErrorKind::InvalidDecimal {
            input: input.to_owned(),
        })
    })
}

// Amounts are never negative.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal> {
    let amount = parse_decimal(input)?;
    if amount < Decimal::ZERO {
        return Err(Error::from(ErrorKind::InvalidDecimal {
            input: input.to_owned(),
        }));
    }
    Ok(amount)
}

// Any date that is not a parsable string (null, numbers, objects, garbage)
// reads as absent.
pub(crate) fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<Time>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| parse_time(s).ok()))
}

pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
    if amount < Decimal::ZERO {
        return Err(de::Error::custom(format!("negative amount {}", amount)));
    }
    Ok(amount)
}

pub(crate) fn deserialize_optional_amount<'de, D>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Amount(#[serde(deserialize_with = "deserialize_amount")] Decimal);

    Ok(Option::<Amount>::deserialize(deserializer)?.map(|Amount(amount)| amount))
}
