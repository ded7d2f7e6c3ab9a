use super::options::{Configurable, OptionValue, Setter, coerce_text};
use crate::error::Result;
use std::fmt;

/// Identifier of the paying account. Opaque, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

/// Originating network address of the request that initiated the send.
///
/// Expected to hold an IP address representation, but the text is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(String);

macro_rules! text_value {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value!(AccountId);
text_value!(ClientIp);

/// The originator of a payment.
///
/// Populated from a mapping of named options rather than a positional constructor.
/// Setters take `&mut self`; a `Sender` shared between threads must be wrapped in
/// a lock before it is written to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
    account: Option<AccountId>,
    client_ip: Option<ClientIp>,
}

impl Sender {
    /// Builds a sender from `options`, e.g. `[("account", "acct-123")]`.
    ///
    /// Returns `PaymentError::UnknownAttribute` for the first key that names no
    /// writable attribute.
    pub fn new<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        Self::from_options(options)
    }

    pub fn account(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: impl Into<AccountId>) {
        self.account = Some(account.into());
    }

    pub fn client_ip(&self) -> Option<&ClientIp> {
        self.client_ip.as_ref()
    }

    pub fn set_client_ip(&mut self, client_ip: impl Into<ClientIp>) {
        self.client_ip = Some(client_ip.into());
    }
}

fn apply_account(sender: &mut Sender, value: OptionValue) {
    sender.account = coerce_text(value).map(AccountId);
}

fn apply_client_ip(sender: &mut Sender, value: OptionValue) {
    sender.client_ip = coerce_text(value).map(ClientIp);
}

impl Configurable for Sender {
    const SETTERS: &'static [(&'static str, Setter<Self>)] = &[
        ("account", apply_account),
        ("client_ip", apply_client_ip),
    ];
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.account.as_ref().map_or("-", AccountId::as_str);
        let client_ip = self.client_ip.as_ref().map_or("-", ClientIp::as_str);
        write!(f, "account={account} client_ip={client_ip}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_new_sets_both_attributes() {
        let sender = Sender::new([("account", "acct-123"), ("client_ip", "10.0.0.5")]).unwrap();
        assert_eq!(sender.account(), Some(&AccountId::from("acct-123")));
        assert_eq!(sender.client_ip(), Some(&ClientIp::from("10.0.0.5")));
    }

    #[test]
    fn test_new_with_empty_options() {
        let sender = Sender::new(HashMap::<String, OptionValue>::new()).unwrap();
        assert_eq!(sender.account(), None);
        assert_eq!(sender.client_ip(), None);
        assert_eq!(sender, Sender::default());
    }

    #[test]
    fn test_unsupplied_attribute_stays_unset() {
        let sender = Sender::new([("client_ip", "192.168.1.1")]).unwrap();
        assert_eq!(sender.account(), None);
        assert_eq!(sender.client_ip().map(ClientIp::as_str), Some("192.168.1.1"));
    }

    #[test]
    fn test_unknown_attribute_names_the_key() {
        let result = Sender::new([("account", "acct-9"), ("region", "eu")]);
        match result {
            Err(PaymentError::UnknownAttribute(key)) => assert_eq!(key, "region"),
            other => panic!("expected UnknownAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_attribute_names_are_case_sensitive() {
        let result = Sender::new([("Account", "acct-1")]);
        assert!(matches!(result, Err(PaymentError::UnknownAttribute(_))));
    }

    #[test]
    fn test_values_are_not_validated() {
        let sender = Sender::new([("client_ip", "not an address")]).unwrap();
        assert_eq!(sender.client_ip().unwrap().as_str(), "not an address");
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let sender = Sender::new([("account", json!(1001)), ("client_ip", json!(null))]).unwrap();
        assert_eq!(sender.account().unwrap().as_str(), "1001");
        assert_eq!(sender.client_ip(), None);
    }

    #[test]
    fn test_setters_on_constructed_sender() {
        let mut sender = Sender::new([("account", "acct-1")]).unwrap();
        sender.set_account("acct-2");
        sender.set_client_ip(String::from("::1"));
        assert_eq!(sender.account().unwrap().as_str(), "acct-2");
        assert_eq!(sender.client_ip().unwrap().to_string(), "::1");
    }

    #[test]
    fn test_clones_are_independent() {
        let options = [("account", "acct-123"), ("client_ip", "10.0.0.5")];
        let first = Sender::new(options).unwrap();
        let mut second = Sender::new(options).unwrap();
        assert_eq!(first, second);

        second.set_account("acct-999");
        assert_eq!(first.account().unwrap().as_str(), "acct-123");
        assert_ne!(first, second);
    }

    #[test]
    fn test_display() {
        let sender = Sender::new([("account", "acct-123")]).unwrap();
        assert_eq!(sender.to_string(), "account=acct-123 client_ip=-");
    }

    #[test]
    fn test_attributes() {
        let names: Vec<_> = Sender::attributes().collect();
        assert_eq!(names, ["account", "client_ip"]);
    }
}
