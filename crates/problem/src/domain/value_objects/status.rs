// crates/problem/src/domain/value_objects/status.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Enumérations de statut : valeurs texte du backend, aucune règle de transition.
macro_rules! status_enum {
    ($name:ident, $field:literal, default = $default:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(DomainError::Validation {
                        field: $field,
                        reason: format!("Unknown {} '{}'", $field, other),
                    }),
                }
            }
        }
    };
}

status_enum!(ProblemStatus, "status", default = Open, {
    Open => "open",
    InProgress => "in_progress",
    Solved => "solved",
    Closed => "closed",
});

status_enum!(SuggestionStatus, "status", default = Pending, {
    Pending => "pending",
    Accepted => "accepted",
    Rejected => "rejected",
});

status_enum!(ReportStatus, "status", default = Pending, {
    Pending => "pending",
    Resolved => "resolved",
    Dismissed => "dismissed",
});
