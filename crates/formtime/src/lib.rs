//! Date/time form-field converters for server-side UI frameworks.
//!
//! This crate is the glue between a hosting UI framework's text-to-value
//! conversion seam and the [`jiff`] datetime library. A converter resolves
//! its formatting specification from one of three configuration inputs (a
//! custom pattern, a named preset from the [`catalog`], or a pattern the UI
//! component itself exposes), optionally attaches a time-zone override, and
//! then formats and parses calendar dates, times of day, and zoned
//! date-times for round-tripping through form fields.
//!
//! # Architecture
//!
//! - **Values** ([`value`]): [`TemporalValue`] carries one of the three
//!   temporal families across the conversion seam.
//! - **Specifications** ([`format`]): an immutable [`FormatSpec`] is rebuilt
//!   from the full configuration whenever any input changes, so conversion
//!   behavior never depends on setter call order.
//! - **Converters** ([`converter`]): one family-tagged [`DateTimeConverter`]
//!   implements the [`Converter`] seam for all three families.
//! - **Components** ([`component`]): hosts opt into per-component pattern
//!   overrides by implementing [`HasPattern`].
//!
//! # Quick Start
//!
//! ```rust
//! use formtime::{Converter, DateTimeConverter};
//!
//! # fn example() -> formtime::Result<()> {
//! // A calendar-date converter with a custom display pattern.
//! let mut converter = DateTimeConverter::local_date();
//! converter.set_pattern("%d-%m-%Y")?;
//!
//! // Form submission: text in, value out.
//! let value = converter.parse(&(), "31-01-2020")?;
//!
//! // Rendering: value in, text out.
//! assert_eq!(converter.format(&(), &value)?, "31-01-2020");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod component;
pub mod converter;
pub mod error;
pub mod format;
pub mod value;

// Re-export commonly used types
pub use component::HasPattern;
pub use converter::{Converter, ConverterConfig, DateTimeConverter};
pub use error::{ConvertError, Result};
pub use format::{FormatRule, FormatSpec};
pub use value::{TemporalFamily, TemporalValue};
