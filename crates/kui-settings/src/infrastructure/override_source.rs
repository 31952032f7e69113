//! Command-line overrides (`--set key=value`).

use kui_core::PropertySource;

use super::error::SourceError;

/// Name given to the override source in error messages.
pub const OVERRIDE_SOURCE_NAME: &str = "command line";

/// Parses `key=value` arguments, splitting on the first `=`.  The key is
/// trimmed; the value is taken verbatim so it may contain `=` or leading
/// spaces.
///
/// # Errors
///
/// Returns [`SourceError::MalformedOverride`] for an argument without `=` or
/// with an empty key.
pub fn override_source<S: AsRef<str>>(args: &[S]) -> Result<PropertySource, SourceError> {
    let mut source = PropertySource::new(OVERRIDE_SOURCE_NAME);
    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| SourceError::MalformedOverride(arg.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(SourceError::MalformedOverride(arg.to_string()));
        }
        source.insert(key, value);
    }
    Ok(source)
}
