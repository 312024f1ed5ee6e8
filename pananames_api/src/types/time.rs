//! Timestamp wrappers tolerant of the API's empty-string dates, and the
//! visitor that turns zero timestamps into absent values after decoding.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, SecondsFormat, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The zero calendar date, 0001-01-01.
fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default()
}

/// A date-time field. Decodes RFC 3339 strings; an empty string decodes to
/// the zero value (0001-01-01T00:00:00Z) instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The zero timestamp, 0001-01-01T00:00:00Z.
    pub fn zero() -> Self {
        Timestamp(zero_date().and_time(NaiveTime::MIN).and_utc())
    }

    pub fn is_zero(&self) -> bool {
        let t = &self.0;
        t.year() == 1
            && t.ordinal() == 1
            && t.num_seconds_from_midnight() == 0
            && t.nanosecond() == 0
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(t: DateTime<Utc>) -> Self {
        Timestamp(t)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Timestamp::zero());
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| Timestamp(t.with_timezone(&Utc)))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

/// A date-only field. Decodes `YYYY-MM-DD`; an empty string decodes to the
/// zero value (0001-01-01).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

impl Date {
    /// The zero date, 0001-01-01.
    pub fn zero() -> Self {
        Date(zero_date())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == zero_date()
    }

    /// The date at 00:00:00 UTC.
    pub fn and_midnight_utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Date::zero());
        }
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Date)
            .map_err(|e| de::Error::custom(format!("invalid date {:?}: {}", raw, e)))
    }
}

/// Walks a decoded value and resets every zero [`Timestamp`] or [`Date`]
/// held in an `Option` slot to `None`.
///
/// Leaf types use the default no-op methods. Model structs implement it by
/// listing the fields that can reach a timestamp.
pub trait ZeroTimestamps {
    /// Clears zero timestamps reachable from this value.
    fn clear_zero_timestamps(&mut self) {}

    /// True if this value is itself a timestamp holding its zero value.
    fn is_zero_timestamp(&self) -> bool {
        false
    }
}

impl ZeroTimestamps for Timestamp {
    fn is_zero_timestamp(&self) -> bool {
        self.is_zero()
    }
}

impl ZeroTimestamps for Date {
    fn is_zero_timestamp(&self) -> bool {
        self.is_zero()
    }
}

impl<T: ZeroTimestamps> ZeroTimestamps for Option<T> {
    fn clear_zero_timestamps(&mut self) {
        match self {
            Some(v) if v.is_zero_timestamp() => *self = None,
            Some(v) => v.clear_zero_timestamps(),
            None => {}
        }
    }
}

impl<T: ZeroTimestamps + ?Sized> ZeroTimestamps for Box<T> {
    fn clear_zero_timestamps(&mut self) {
        (**self).clear_zero_timestamps()
    }

    fn is_zero_timestamp(&self) -> bool {
        (**self).is_zero_timestamp()
    }
}

impl<T: ZeroTimestamps> ZeroTimestamps for Vec<T> {
    fn clear_zero_timestamps(&mut self) {
        for item in self.iter_mut() {
            item.clear_zero_timestamps();
        }
    }
}

impl<K, V: ZeroTimestamps, S: BuildHasher> ZeroTimestamps for HashMap<K, V, S> {
    fn clear_zero_timestamps(&mut self) {
        for value in self.values_mut() {
            value.clear_zero_timestamps();
        }
    }
}

impl<K, V: ZeroTimestamps> ZeroTimestamps for BTreeMap<K, V> {
    fn clear_zero_timestamps(&mut self) {
        for value in self.values_mut() {
            value.clear_zero_timestamps();
        }
    }
}

macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $( impl ZeroTimestamps for $ty {} )*
    };
}

leaf!(
    (),
    String,
    bool,
    i32,
    i64,
    u32,
    u64,
    f64,
    serde_json::Value
);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[derive(Deserialize)]
    struct Row {
        at: Option<Timestamp>,
        on: Option<Date>,
    }
    zero_timestamps!(Row { at, on });

    #[test]
    fn empty_string_decodes_to_zero() {
        let t: Timestamp = serde_json::from_str(r#""""#).unwrap();
        assert!(t.is_zero());
        let d: Date = serde_json::from_str(r#""""#).unwrap();
        assert!(d.is_zero());
    }

    #[test]
    fn date_decodes_to_midnight_utc() {
        let d: Date = serde_json::from_str(r#""2020-01-02""#).unwrap();
        assert_eq!(
            d.and_midnight_utc(),
            Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap()
        );
        assert_eq!(d.to_string(), "2020-01-02");
    }

    #[test]
    fn timestamp_round_trips_rfc3339() {
        let t: Timestamp = serde_json::from_str(r#""2020-01-02T03:04:05Z""#).unwrap();
        assert_eq!(t.0, Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), r#""2020-01-02T03:04:05Z""#);
    }

    #[test]
    fn garbage_is_still_an_error() {
        assert!(serde_json::from_str::<Timestamp>(r#""yesterday""#).is_err());
        assert!(serde_json::from_str::<Date>(r#""2020/01/02""#).is_err());
    }

    #[test]
    fn unix_epoch_is_not_zero() {
        let t: Timestamp = serde_json::from_str(r#""1970-01-01T00:00:00Z""#).unwrap();
        assert!(!t.is_zero());
    }

    #[test]
    fn clears_zero_values_through_composites() {
        let mut rows: Vec<Row> = serde_json::from_str(
            r#"[
                {"at": "", "on": ""},
                {"at": "0001-01-01T00:00:00Z", "on": "2020-01-02"},
                {"at": "2020-01-02T03:04:05Z", "on": null}
            ]"#,
        )
        .unwrap();
        rows.clear_zero_timestamps();

        assert!(rows[0].at.is_none());
        assert!(rows[0].on.is_none());
        assert!(rows[1].at.is_none());
        assert_eq!(rows[1].on.unwrap().to_string(), "2020-01-02");
        assert_eq!(rows[2].at.unwrap().to_string(), "2020-01-02T03:04:05Z");
        assert!(rows[2].on.is_none());
    }

    #[test]
    fn clears_map_values_and_boxed_slots() {
        let mut map: HashMap<String, Option<Timestamp>> = HashMap::new();
        map.insert("zero".to_string(), Some(Timestamp::zero()));
        map.insert(
            "set".to_string(),
            Some(Timestamp(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())),
        );
        map.clear_zero_timestamps();
        assert!(map["zero"].is_none());
        assert!(map["set"].is_some());

        let mut boxed: Option<Box<Date>> = Some(Box::new(Date::zero()));
        boxed.clear_zero_timestamps();
        assert!(boxed.is_none());
    }
}
