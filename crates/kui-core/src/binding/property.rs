//! Property names, values and sources.
//!
//! Configuration reaches the binder as a flat list of `key = value` pairs,
//! whatever file format or environment it originally came from:
//!
//! ```text
//! ui.title                      = "Acme Kafka"
//! ui.user-menu.enabled          = true
//! ui.custom-menu-items[0].label = "Grafana"
//! ```
//!
//! # Relaxed names
//!
//! Each dotted element of a key is compared in its *canonical* form: ASCII
//! letters and digits only, lower-cased.  `user-menu`, `userMenu`, `user_menu`
//! and `USERMENU` therefore all address the same property.  List indices are
//! written in square brackets and are kept as numbers.
//!
//! # Precedence
//!
//! [`PropertySources`] holds several [`PropertySource`]s ordered highest
//! precedence first, so a command-line override can shadow an environment
//! variable, which in turn shadows the config file.

use std::fmt;

use thiserror::Error;

/// Reasons a property key cannot be parsed into a [`PropertyName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyNameError {
    /// The key is empty or only whitespace.
    #[error("property name is empty")]
    Empty,

    /// A dotted element has no letters or digits (`ui..title`, `ui.-.x`).
    #[error("property name contains an empty element")]
    EmptyElement,

    /// A `[` was never closed.
    #[error("unterminated list index")]
    UnterminatedIndex,

    /// The text between `[` and `]` is not a non-negative integer.
    #[error("list index '{0}' is not a non-negative integer")]
    InvalidIndex(String),

    /// Something other than `.` or `[` directly follows a `]`.
    #[error("expected '.' or '[' after list index")]
    MissingSeparator,
}

/// One element of a parsed property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameElement {
    /// A dotted element in canonical form.
    Name(String),
    /// A `[n]` list index.
    Index(usize),
}

/// A parsed, canonicalised property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName {
    original: String,
    elements: Vec<NameElement>,
}

impl PropertyName {
    /// Parses a dotted key such as `ui.custom-menu-items[2].icon`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyNameError`] describing the first syntax problem.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kui_core::PropertyName;
    ///
    /// let a = PropertyName::parse("ui.user-menu.enabled").unwrap();
    /// let b = PropertyName::parse("UI.userMenu.Enabled").unwrap();
    /// assert_eq!(a.canonical(), b.canonical());
    /// ```
    pub fn parse(key: &str) -> Result<Self, PropertyNameError> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(PropertyNameError::Empty);
        }

        let mut elements = Vec::new();
        let mut current = String::new();
        // Set right after a `]`, until the next `.` or `[`.
        let mut after_index = false;
        let mut chars = trimmed.chars();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if after_index {
                        after_index = false;
                    } else {
                        elements.push(name_element(&current)?);
                        current.clear();
                    }
                }
                '[' => {
                    if !after_index {
                        elements.push(name_element(&current)?);
                        current.clear();
                    }
                    let mut digits = String::new();
                    let mut closed = false;
                    for d in chars.by_ref() {
                        if d == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(d);
                    }
                    if !closed {
                        return Err(PropertyNameError::UnterminatedIndex);
                    }
                    let index = digits
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| PropertyNameError::InvalidIndex(digits.clone()))?;
                    elements.push(NameElement::Index(index));
                    after_index = true;
                }
                _ if after_index => return Err(PropertyNameError::MissingSeparator),
                _ => current.push(c),
            }
        }
        if !after_index {
            elements.push(name_element(&current)?);
        }

        Ok(Self {
            original: trimmed.to_string(),
            elements,
        })
    }

    /// Returns the canonical form of the first dotted element of `key`
    /// without parsing the rest.
    ///
    /// Used to decide whether a key that fails to parse belongs to a namespace
    /// the caller cares about.
    pub fn leading_element(key: &str) -> String {
        let head = key
            .trim()
            .split(|c: char| c == '.' || c == '[')
            .next()
            .unwrap_or_default();
        canonicalize(head)
    }

    /// The key exactly as it was supplied (trimmed).
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn elements(&self) -> &[NameElement] {
        &self.elements
    }

    /// Returns `true` when the first element equals `prefix` in canonical form.
    pub fn is_under(&self, prefix: &str) -> bool {
        matches!(self.elements.first(), Some(NameElement::Name(n)) if *n == canonicalize(prefix))
    }

    /// Canonical rendering: `ui.usermenu.enabled`, `ui.custommenuitems[0].label`.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                NameElement::Name(n) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(n);
                }
                NameElement::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn name_element(raw: &str) -> Result<NameElement, PropertyNameError> {
    let canonical = canonicalize(raw);
    if canonical.is_empty() {
        return Err(PropertyNameError::EmptyElement);
    }
    Ok(NameElement::Name(canonical))
}

// ── Values ────────────────────────────────────────────────────────────────────

/// A raw configuration value before it is coerced to a field's type.
///
/// Text-only sources (environment variables, `.properties` files, command-line
/// overrides) always produce [`PropertyValue::Text`]; typed sources such as
/// TOML keep the type they were written with.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl PropertyValue {
    /// Short type description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "string",
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Text is accepted case-insensitively after trimming: `true`, `on`,
    /// `yes`, `1` and `false`, `off`, `no`, `0`.  Numbers are never booleans.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(true),
                "false" | "off" | "no" | "0" => Some(false),
                _ => None,
            },
            PropertyValue::Integer(_) | PropertyValue::Float(_) => None,
        }
    }

    /// Renders any scalar as text.  Always succeeds.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        PropertyValue::Float(x)
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

/// A named, ordered list of `key = value` entries.
///
/// Entries keep the order they were inserted in.  When the same key (in
/// canonical form) appears twice, the later entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySource {
    name: String,
    entries: Vec<(String, PropertyValue)>,
}

impl PropertySource {
    /// Creates an empty source.  `name` shows up in error messages, so make it
    /// say where the values came from (`"environment"`, `"file ui.toml"`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builds a source from `(key, value)` pairs.
    pub fn from_pairs<K, V, I>(name: impl Into<String>, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut source = Self::new(name);
        for (key, value) in pairs {
            source.insert(key, value);
        }
        source
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Property sources ordered highest precedence first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySources {
    sources: Vec<PropertySource>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `source` with higher precedence than every source already present.
    pub fn add_first(&mut self, source: PropertySource) {
        self.sources.insert(0, source);
    }

    /// Adds `source` with lower precedence than every source already present.
    pub fn add_last(&mut self, source: PropertySource) {
        self.sources.push(source);
    }

    /// Builder-style [`add_last`](Self::add_last).
    pub fn with_last(mut self, source: PropertySource) -> Self {
        self.add_last(source);
        self
    }

    /// Iterates sources highest precedence first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PropertySource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl From<PropertySource> for PropertySources {
    fn from(source: PropertySource) -> Self {
        Self {
            sources: vec![source],
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
