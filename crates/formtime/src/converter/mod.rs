//! Converter configuration and the framework-facing conversion seam.
//!
//! One concrete type, [`DateTimeConverter`], covers all three temporal
//! families; the family tag selects the conversion strategy. Configuration
//! mutates through setters, but the formatting specification itself is
//! immutable: every successful setter rebuilds it from the full
//! configuration, so the outcome never depends on call order. A setter that
//! fails leaves the previous specification untouched.

use std::borrow::Cow;

use jiff::tz::TimeZone;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::component::HasPattern;
use crate::error::{ConvertError, Result};
use crate::format::{FormatRule, FormatSpec};
use crate::value::{TemporalFamily, TemporalValue};


/// Conversion seam invoked by the hosting framework.
///
/// `parse` runs during form submission (text to value) and `format` during
/// rendering (value to text). The component argument carries the per-use
/// pattern override capability; call sites without a component pass `&()`.
pub trait Converter {
    /// Parses submitted text into a temporal value.
    fn parse(&self, component: &dyn HasPattern, text: &str) -> Result<TemporalValue>;

    /// Renders a temporal value for display.
    fn format(&self, component: &dyn HasPattern, value: &TemporalValue) -> Result<String>;
}

/// Which configuration input currently drives the formatting specification.
///
/// `set_pattern` and `set_formatter` each replace the source (last setter
/// wins); the zone override is tracked independently and composes with
/// whichever source is active.
#[derive(Debug, Clone)]
enum FormatSource {
    /// Family default, reported as the `iso` preset
    Default,
    /// Custom pattern set by the host
    Pattern(String),
    /// Named preset resolved from the catalog
    Preset { name: String, rule: FormatRule },
}

/// A date/time converter for one temporal family.
///
/// Construct with [`local_date`](Self::local_date),
/// [`local_time`](Self::local_time) or [`zoned`](Self::zoned), configure via
/// the setters, then convert through the [`Converter`] trait.
#[derive(Debug, Clone)]
pub struct DateTimeConverter {
    family: TemporalFamily,
    source: FormatSource,
    zone_id: Option<String>,
    zone: Option<TimeZone>,
    spec: FormatSpec,
}

impl DateTimeConverter {
    /// Creates a converter for the given family with its ISO default.
    pub fn new(family: TemporalFamily) -> Self {
        DateTimeConverter {
            family,
            source: FormatSource::Default,
            zone_id: None,
            zone: None,
            spec: FormatSpec::iso(family),
        }
    }

    /// Converter for calendar dates, defaulting to the ISO date format.
    pub fn local_date() -> Self {
        Self::new(TemporalFamily::Date)
    }

    /// Converter for times of day, defaulting to the ISO time format.
    pub fn local_time() -> Self {
        Self::new(TemporalFamily::Time)
    }

    /// Converter for zoned date-times, defaulting to the ISO form that
    /// renders midnight UTC as `2020-01-01T00:00:00Z`.
    pub fn zoned() -> Self {
        Self::new(TemporalFamily::Zoned)
    }

    /// Builds a converter from a declarative configuration in one step.
    ///
    /// `pattern` takes precedence over `formatter` when both are present;
    /// their simultaneous use is discouraged.
    pub fn from_config(family: TemporalFamily, config: &ConverterConfig) -> Result<Self> {
        let mut converter = Self::new(family);
        if let Some(name) = &config.formatter {
            converter.set_formatter(name)?;
        }
        if let Some(pattern) = &config.pattern {
            converter.set_pattern(pattern)?;
        }
        if let Some(zone_id) = &config.zone_id {
            converter.set_zone_id(zone_id)?;
        }
        Ok(converter)
    }

    /// Stores a custom pattern and makes it the active format source.
    ///
    /// The pattern is validated eagerly; on failure the previously active
    /// specification stays in effect.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        FormatSpec::validate_pattern(pattern)?;
        debug!("{} converter: pattern set to '{pattern}'", self.family);
        self.rebuild(
            FormatSource::Pattern(pattern.to_string()),
            self.zone_id.clone(),
            self.zone.clone(),
        )
    }

    /// Selects a named preset from the catalog as the active format source.
    ///
    /// Fails with `InvalidFormatter` for unknown names and for presets the
    /// converter's family cannot use; the previously active specification
    /// stays in effect in both cases.
    pub fn set_formatter(&mut self, name: &str) -> Result<()> {
        let rule = catalog::lookup(name).ok_or_else(|| ConvertError::InvalidFormatter {
            name: name.to_string(),
            reason: "no such preset in the catalog".to_string(),
        })?;
        debug!("{} converter: formatter set to '{name}'", self.family);
        self.rebuild(
            FormatSource::Preset {
                name: name.to_string(),
                rule,
            },
            self.zone_id.clone(),
            self.zone.clone(),
        )
    }

    /// Attaches a time-zone override to the active specification.
    ///
    /// The override composes with whichever format source is active, pattern
    /// or preset. Unknown identifiers fail with `InvalidZone` and leave the
    /// previously active specification in effect.
    pub fn set_zone_id(&mut self, zone_id: &str) -> Result<()> {
        let zone = TimeZone::get(zone_id).map_err(|e| ConvertError::InvalidZone {
            zone_id: zone_id.to_string(),
            source: e,
        })?;
        debug!("{} converter: zone override set to '{zone_id}'", self.family);
        self.rebuild(self.source.clone(), Some(zone_id.to_string()), Some(zone))
    }

    /// The temporal family this converter handles.
    pub fn family(&self) -> TemporalFamily {
        self.family
    }

    /// The configured custom pattern, if a pattern is the active source.
    pub fn pattern(&self) -> Option<&str> {
        match &self.source {
            FormatSource::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// The currently selected preset name.
    ///
    /// Reports `iso` for the family default and `None` while a custom
    /// pattern is the active source.
    pub fn formatter(&self) -> Option<&str> {
        match &self.source {
            FormatSource::Default => Some(catalog::DEFAULT_PRESET),
            FormatSource::Preset { name, .. } => Some(name),
            FormatSource::Pattern(_) => None,
        }
    }

    /// The configured zone override identifier, if any.
    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    /// The active formatting specification.
    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    /// Rebuilds the specification from the full configuration, committing
    /// the new inputs only once the rebuild has succeeded.
    fn rebuild(
        &mut self,
        source: FormatSource,
        zone_id: Option<String>,
        zone: Option<TimeZone>,
    ) -> Result<()> {
        let rule = match &source {
            FormatSource::Default => FormatRule::Iso,
            FormatSource::Pattern(pattern) => FormatRule::Pattern(Cow::Owned(pattern.clone())),
            FormatSource::Preset { rule, .. } => rule.clone(),
        };
        let spec = FormatSpec::new(self.family, rule, zone.clone())?;
        self.source = source;
        self.zone_id = zone_id;
        self.zone = zone;
        self.spec = spec;
        Ok(())
    }

    /// Resolves the specification for one conversion call, honoring a
    /// component-exposed pattern without mutating converter state.
    fn effective_spec(&self, component: &dyn HasPattern) -> Result<Cow<'_, FormatSpec>> {
        let Some(pattern) = component.pattern() else {
            return Ok(Cow::Borrowed(&self.spec));
        };
        FormatSpec::validate_pattern(pattern)?;
        trace!(
            "{} converter: component pattern '{pattern}' overrides the configured format",
            self.family
        );
        let spec = FormatSpec::new(
            self.family,
            FormatRule::Pattern(Cow::Owned(pattern.to_string())),
            self.zone.clone(),
        )?;
        Ok(Cow::Owned(spec))
    }
}

impl Converter for DateTimeConverter {
    fn parse(&self, component: &dyn HasPattern, text: &str) -> Result<TemporalValue> {
        self.effective_spec(component)?.parse(text)
    }

    fn format(&self, component: &dyn HasPattern, value: &TemporalValue) -> Result<String> {
        self.effective_spec(component)?.format(value)
    }
}

/// Declarative converter configuration, as bound from host tag attributes.
///
/// Field names are kebab-case on the wire (`pattern`, `formatter`,
/// `zone-id`). `pattern` and `formatter` should not be used together; when
/// both are present, `pattern` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConverterConfig {
    /// Custom strftime-style pattern
    pub pattern: Option<String>,

    /// Named preset key from the catalog
    pub formatter: Option<String>,

    /// IANA time-zone identifier override
    pub zone_id: Option<String>,
}
