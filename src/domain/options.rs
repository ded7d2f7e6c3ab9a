use crate::error::{PaymentError, Result};

/// Untyped value supplied for an option, coerced by the receiving setter.
pub type OptionValue = serde_json::Value;

/// Writes one option value into an entity field.
pub type Setter<T> = fn(&mut T, OptionValue);

/// An entity that can be populated from a mapping of named options.
///
/// Implementors provide a static name → setter table. Construction walks the
/// supplied options and dispatches each pair through that table, so adding a
/// writable attribute only means adding a row to `SETTERS`.
pub trait Configurable: Default + 'static {
    /// Writable attributes, one row per option name.
    const SETTERS: &'static [(&'static str, Setter<Self>)];

    fn setter(name: &str) -> Option<Setter<Self>> {
        Self::SETTERS
            .iter()
            .find(|(attribute, _)| *attribute == name)
            .map(|(_, setter)| *setter)
    }

    /// Names of the writable attributes, in table order.
    fn attributes() -> impl Iterator<Item = &'static str> {
        Self::SETTERS.iter().map(|(attribute, _)| *attribute)
    }

    /// Applies a single option, failing with `UnknownAttribute` when no setter matches.
    fn set_option(&mut self, name: &str, value: OptionValue) -> Result<()> {
        let Some(setter) = Self::setter(name) else {
            tracing::debug!(option = name, "no writable attribute for option");
            return Err(PaymentError::UnknownAttribute(name.to_string()));
        };
        tracing::debug!(option = name, "applying option");
        setter(self, value);
        Ok(())
    }

    /// Builds an entity from default state, applying options in iteration order.
    ///
    /// Fails fast: the first unmatched key aborts construction and no entity is returned.
    fn from_options<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut entity = Self::default();
        for (name, value) in options {
            entity.set_option(name.as_ref(), value.into())?;
        }
        Ok(entity)
    }
}

/// Coerces an option value to text. `null` means unset.
pub fn coerce_text(value: OptionValue) -> Option<String> {
    match value {
        OptionValue::Null => None,
        OptionValue::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
