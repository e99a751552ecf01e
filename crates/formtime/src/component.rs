//! Capability trait linking converters to hosting framework components.

/// Opt-in capability for UI components that expose a display pattern.
///
/// The converter consults the component on every conversion call; a
/// component that exposes a pattern overrides the configured format for
/// that call only. The default implementation exposes nothing, which
/// resolves to "no override" rather than an error.
pub trait HasPattern {
    /// The strftime-style pattern this component wants, if any.
    fn pattern(&self) -> Option<&str> {
        None
    }
}

/// Pattern-less stand-in for call sites that have no component.
impl HasPattern for () {}
