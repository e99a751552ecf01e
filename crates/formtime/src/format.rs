//! Formatting specifications resolved from converter configuration.
//!
//! A [`FormatSpec`] is the immutable rule set a converter actually formats
//! and parses with: a [`FormatRule`] plus an optional time-zone override,
//! bound to one temporal family. Converters never mutate a spec; they build
//! a fresh one whenever any configuration input changes.

use std::borrow::Cow;
use std::fmt;

use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::{rfc2822, strtime};
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};

use crate::error::{ConvertError, Result};
use crate::value::{TemporalFamily, TemporalValue};

/// A formatting rule: how text and temporal values map onto each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatRule {
    /// Canonical ISO form of whichever family is being converted
    Iso,
    /// RFC 3339 instant, UTC offset rendered as `Z` (zoned family only)
    Instant,
    /// RFC 9557 form with the bracketed zone annotation (zoned family only)
    ZonedIso,
    /// RFC 2822 date-time (zoned family only)
    Rfc2822,
    /// strftime-style pattern, as understood by `jiff::fmt::strtime`
    Pattern(Cow<'static, str>),
}

impl FormatRule {
    /// Whether the rule can convert values of the given family.
    ///
    /// Patterns are accepted for every family up front; a pattern naming
    /// fields the family does not have fails at conversion time instead.
    pub fn applies_to(&self, family: TemporalFamily) -> bool {
        match self {
            FormatRule::Iso | FormatRule::Pattern(_) => true,
            FormatRule::Instant | FormatRule::ZonedIso | FormatRule::Rfc2822 => {
                family == TemporalFamily::Zoned
            }
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRule::Iso => f.write_str("iso"),
            FormatRule::Instant => f.write_str("iso-instant"),
            FormatRule::ZonedIso => f.write_str("iso-zoned-date-time"),
            FormatRule::Rfc2822 => f.write_str("rfc-2822"),
            FormatRule::Pattern(pattern) => write!(f, "pattern '{pattern}'"),
        }
    }
}

/// The resolved formatting specification of one converter.
#[derive(Debug, Clone)]
pub struct FormatSpec {
    family: TemporalFamily,
    rule: FormatRule,
    zone: Option<TimeZone>,
}

impl FormatSpec {
    /// Builds a specification, rejecting rules the family cannot use.
    pub fn new(family: TemporalFamily, rule: FormatRule, zone: Option<TimeZone>) -> Result<Self> {
        if !rule.applies_to(family) {
            return Err(ConvertError::InvalidFormatter {
                name: rule.to_string(),
                reason: format!(
                    "only applicable to {} conversions",
                    TemporalFamily::Zoned
                ),
            });
        }
        Ok(FormatSpec { family, rule, zone })
    }

    /// The default ISO specification for a family.
    pub fn iso(family: TemporalFamily) -> Self {
        FormatSpec {
            family,
            rule: FormatRule::Iso,
            zone: None,
        }
    }

    /// The temporal family this specification converts.
    pub fn family(&self) -> TemporalFamily {
        self.family
    }

    /// The active formatting rule.
    pub fn rule(&self) -> &FormatRule {
        &self.rule
    }

    /// The time-zone override, if one is configured.
    pub fn zone(&self) -> Option<&TimeZone> {
        self.zone.as_ref()
    }

    /// Validates a pattern string eagerly, before it is stored anywhere.
    ///
    /// The pattern is probed against a fully populated reference value, so
    /// only malformed directives fail here; a well-formed pattern naming
    /// fields the converted family lacks fails at conversion time.
    pub fn validate_pattern(pattern: &str) -> Result<()> {
        let probe = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
        strtime::format(pattern, &probe)
            .map(|_| ())
            .map_err(|e| ConvertError::invalid_pattern(pattern, e))
    }

    /// Renders a value of this specification's family as text.
    ///
    /// Values of any other family are refused with `UnsupportedValue`.
    pub fn format(&self, value: &TemporalValue) -> Result<String> {
        if value.family() != self.family {
            return Err(ConvertError::UnsupportedValue {
                expected: self.family,
                actual: value.family(),
            });
        }
        match value {
            TemporalValue::Date(date) => self.format_date(*date),
            TemporalValue::Time(time) => self.format_time(*time),
            TemporalValue::Zoned(zoned) => self.format_zoned(zoned),
        }
    }

    /// Parses text into a value of this specification's family.
    pub fn parse(&self, text: &str) -> Result<TemporalValue> {
        match self.family {
            TemporalFamily::Date => self.parse_date(text).map(TemporalValue::Date),
            TemporalFamily::Time => self.parse_time(text).map(TemporalValue::Time),
            TemporalFamily::Zoned => self.parse_zoned(text).map(TemporalValue::Zoned),
        }
    }

    fn format_date(&self, date: Date) -> Result<String> {
        match &self.rule {
            FormatRule::Pattern(pattern) => strtime::format(pattern.as_ref(), date)
                .map_err(|e| ConvertError::format(TemporalFamily::Date, e)),
            // Zoned-only rules are rejected at construction, so the only
            // other rule a date spec can hold is Iso.
            _ => Ok(date.to_string()),
        }
    }

    fn parse_date(&self, text: &str) -> Result<Date> {
        match &self.rule {
            FormatRule::Pattern(pattern) => strtime::parse(pattern.as_ref(), text)
                .and_then(|tm| tm.to_date())
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Date, e)),
            _ => text
                .parse()
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Date, e)),
        }
    }

    fn format_time(&self, time: Time) -> Result<String> {
        match &self.rule {
            FormatRule::Pattern(pattern) => strtime::format(pattern.as_ref(), time)
                .map_err(|e| ConvertError::format(TemporalFamily::Time, e)),
            _ => Ok(time.to_string()),
        }
    }

    fn parse_time(&self, text: &str) -> Result<Time> {
        match &self.rule {
            FormatRule::Pattern(pattern) => strtime::parse(pattern.as_ref(), text)
                .and_then(|tm| tm.to_time())
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Time, e)),
            _ => text
                .parse()
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Time, e)),
        }
    }

    fn format_zoned(&self, zoned: &Zoned) -> Result<String> {
        // The override zone decides which wall-clock rendering the reader
        // sees; the instant itself is unchanged.
        let zoned = match &self.zone {
            Some(zone) => zoned.timestamp().to_zoned(zone.clone()),
            None => zoned.clone(),
        };
        match &self.rule {
            FormatRule::Iso => {
                let layout = if zoned.offset() == Offset::UTC {
                    "%Y-%m-%dT%H:%M:%S%.fZ"
                } else {
                    "%Y-%m-%dT%H:%M:%S%.f%:z"
                };
                strtime::format(layout, &zoned)
                    .map_err(|e| ConvertError::format(TemporalFamily::Zoned, e))
            }
            FormatRule::Instant => Ok(zoned.timestamp().to_string()),
            FormatRule::ZonedIso => Ok(zoned.to_string()),
            FormatRule::Rfc2822 => rfc2822::to_string(&zoned)
                .map_err(|e| ConvertError::format(TemporalFamily::Zoned, e)),
            FormatRule::Pattern(pattern) => strtime::format(pattern.as_ref(), &zoned)
                .map_err(|e| ConvertError::format(TemporalFamily::Zoned, e)),
        }
    }

    fn parse_zoned(&self, text: &str) -> Result<Zoned> {
        match &self.rule {
            FormatRule::Iso => self.parse_zoned_iso(text),
            FormatRule::Instant => text
                .parse::<Timestamp>()
                .map(|ts| ts.to_zoned(self.override_or_utc()))
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e)),
            FormatRule::ZonedIso => text
                .parse()
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e)),
            FormatRule::Rfc2822 => rfc2822::parse(text)
                .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e)),
            FormatRule::Pattern(pattern) => self.parse_zoned_pattern(pattern.as_ref(), text),
        }
    }

    /// ISO zoned parsing accepts, in order: an annotated RFC 9557 string, an
    /// RFC 3339 instant, and a bare civil date-time resolved in the override
    /// zone (UTC when none is configured).
    fn parse_zoned_iso(&self, text: &str) -> Result<Zoned> {
        if let Ok(zoned) = text.parse::<Zoned>() {
            return Ok(zoned);
        }
        if let Ok(ts) = text.parse::<Timestamp>() {
            return Ok(ts.to_zoned(self.override_or_utc()));
        }
        text.parse::<DateTime>()
            .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e))
            .and_then(|dt| {
                dt.to_zoned(self.override_or_utc())
                    .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e))
            })
    }

    /// Pattern-parsed text keeps its own zone or offset when it carries one;
    /// otherwise the civil fields are resolved in the override zone.
    fn parse_zoned_pattern(&self, pattern: &str, text: &str) -> Result<Zoned> {
        let tm = strtime::parse(pattern, text)
            .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e))?;
        if let Ok(zoned) = tm.to_zoned() {
            return Ok(zoned);
        }
        tm.to_datetime()
            .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e))
            .and_then(|dt| {
                dt.to_zoned(self.override_or_utc())
                    .map_err(|e| ConvertError::parse(text, TemporalFamily::Zoned, e))
            })
    }

    fn override_or_utc(&self) -> TimeZone {
        self.zone.clone().unwrap_or(TimeZone::UTC)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn utc(year: i16, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Zoned {
        date(year, month, day)
            .at(hour, minute, second, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid civil datetime in UTC")
    }

    #[test]
    fn iso_date_round_trip() {
        let spec = FormatSpec::iso(TemporalFamily::Date);
        let parsed = spec.parse("2020-01-31").expect("valid ISO date");
        assert_eq!(parsed, TemporalValue::Date(date(2020, 1, 31)));
        assert_eq!(spec.format(&parsed).unwrap(), "2020-01-31");
    }

    #[test]
    fn iso_time_accepts_minute_precision() {
        let spec = FormatSpec::iso(TemporalFamily::Time);
        let parsed = spec.parse("13:45").expect("valid ISO time");
        assert_eq!(parsed, TemporalValue::Time(time(13, 45, 0, 0)));
    }

    #[test]
    fn date_pattern_round_trip() {
        let spec = FormatSpec::new(
            TemporalFamily::Date,
            FormatRule::Pattern("%d-%m-%Y".into()),
            None,
        )
        .unwrap();
        let parsed = spec.parse("31-01-2020").expect("pattern should match");
        assert_eq!(parsed.as_date(), Some(date(2020, 1, 31)));
        assert_eq!(spec.format(&parsed).unwrap(), "31-01-2020");
    }

    #[test]
    fn zoned_iso_renders_utc_with_z_suffix() {
        let spec = FormatSpec::iso(TemporalFamily::Zoned);
        let value = TemporalValue::Zoned(utc(2020, 1, 1, 0, 0, 0));
        assert_eq!(spec.format(&value).unwrap(), "2020-01-01T00:00:00Z");
    }

    #[test]
    fn zoned_iso_parses_instant_text() {
        let spec = FormatSpec::iso(TemporalFamily::Zoned);
        let parsed = spec.parse("2020-01-01T00:00:00Z").expect("valid instant");
        assert_eq!(parsed.as_zoned(), Some(&utc(2020, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn zoned_iso_parses_bare_civil_text_in_override_zone() {
        let zone = TimeZone::get("America/New_York").expect("tz database entry");
        let spec =
            FormatSpec::new(TemporalFamily::Zoned, FormatRule::Iso, Some(zone.clone())).unwrap();
        let parsed = spec.parse("2020-06-01T12:00:00").expect("bare civil text");
        let zoned = parsed.as_zoned().expect("zoned value");
        assert_eq!(zoned.time_zone(), &zone);
        // Noon eastern daylight time is 16:00 UTC.
        assert_eq!(zoned.timestamp(), utc(2020, 6, 1, 16, 0, 0).timestamp());
    }

    #[test]
    fn zoned_annotated_text_keeps_its_own_zone() {
        let zone = TimeZone::get("Asia/Tokyo").expect("tz database entry");
        let spec = FormatSpec::new(TemporalFamily::Zoned, FormatRule::Iso, Some(zone)).unwrap();
        let parsed = spec
            .parse("2020-01-01T09:00:00+00:00[UTC]")
            .expect("annotated text");
        assert_eq!(parsed.as_zoned().map(Zoned::offset), Some(Offset::UTC));
    }

    #[test]
    fn instant_rule_formats_in_utc() {
        let zone = TimeZone::get("Asia/Tokyo").expect("tz database entry");
        let spec = FormatSpec::new(TemporalFamily::Zoned, FormatRule::Instant, Some(zone)).unwrap();
        let value = TemporalValue::Zoned(utc(2020, 1, 1, 0, 0, 0));
        assert_eq!(spec.format(&value).unwrap(), "2020-01-01T00:00:00Z");
    }

    #[test]
    fn zoned_iso_rule_round_trips_annotation() {
        let spec = FormatSpec::new(TemporalFamily::Zoned, FormatRule::ZonedIso, None).unwrap();
        let value = TemporalValue::Zoned(utc(2020, 1, 1, 0, 0, 0));
        let text = spec.format(&value).unwrap();
        assert!(text.ends_with("[UTC]"), "got {text}");
        assert_eq!(spec.parse(&text).unwrap(), value);
    }

    #[test]
    fn rfc_2822_round_trips_the_instant() {
        let spec = FormatSpec::new(TemporalFamily::Zoned, FormatRule::Rfc2822, None).unwrap();
        let value = TemporalValue::Zoned(utc(2020, 1, 1, 0, 0, 0));
        let text = spec.format(&value).unwrap();
        let parsed = spec.parse(&text).unwrap();
        assert_eq!(
            parsed.as_zoned().map(Zoned::timestamp),
            value.as_zoned().map(Zoned::timestamp)
        );
    }

    #[test]
    fn zoned_pattern_without_zone_resolves_in_override() {
        let zone = TimeZone::get("America/New_York").expect("tz database entry");
        let spec = FormatSpec::new(
            TemporalFamily::Zoned,
            FormatRule::Pattern("%Y-%m-%d %H:%M".into()),
            Some(zone),
        )
        .unwrap();
        let parsed = spec.parse("2020-06-01 12:00").expect("pattern should match");
        let zoned = parsed.as_zoned().expect("zoned value");
        assert_eq!(zoned.timestamp(), utc(2020, 6, 1, 16, 0, 0).timestamp());
    }

    #[test]
    fn wrong_family_is_refused_with_unsupported_value() {
        let spec = FormatSpec::iso(TemporalFamily::Date);
        let err = spec
            .format(&TemporalValue::Time(time(13, 45, 0, 0)))
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedValue {
                expected: TemporalFamily::Date,
                actual: TemporalFamily::Time,
            }
        ));
    }

    #[test]
    fn zoned_only_rule_is_rejected_for_civil_families() {
        let err = FormatSpec::new(TemporalFamily::Date, FormatRule::Instant, None).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidFormatter { .. }));
    }

    #[test]
    fn malformed_pattern_fails_validation() {
        let err = FormatSpec::validate_pattern("%Y-%m-%&").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPattern { .. }));
    }

    #[test]
    fn mismatched_text_is_a_parse_error() {
        let spec = FormatSpec::iso(TemporalFamily::Date);
        let err = spec.parse("not-a-date").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn field_mismatch_surfaces_at_format_time() {
        // The pattern is well formed, but a calendar date has no hour field.
        let spec = FormatSpec::new(
            TemporalFamily::Date,
            FormatRule::Pattern("%H:%M".into()),
            None,
        )
        .unwrap();
        let err = spec
            .format(&TemporalValue::Date(date(2020, 1, 31)))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
    }
}
