use serde::{Deserialize, Serialize};

/// Display role, fixed for the lifetime of the process.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewRole {
    /// Queue management: counters, pending + completed lists, process action
    Admin,
    /// Booking and route forms, confirmed tickets only
    #[default]
    Passenger,
}

impl ViewRole {
    pub fn is_admin(self) -> bool {
        self == ViewRole::Admin
    }

    pub fn shows_counters(self) -> bool {
        self.is_admin()
    }

    pub fn shows_request_forms(self) -> bool {
        !self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(ViewRole::from_str("admin"), Ok(ViewRole::Admin));
        assert_eq!(ViewRole::from_str("passenger"), Ok(ViewRole::Passenger));
        assert!(ViewRole::from_str("guest").is_err());
        assert_eq!(ViewRole::Admin.to_string(), "admin");
    }

    #[test]
    fn capabilities_are_mutually_exclusive() {
        for role in ViewRole::iter() {
            assert_ne!(role.shows_counters(), role.shows_request_forms());
        }
    }
}
