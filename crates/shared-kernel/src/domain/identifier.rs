// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Trait pour uniformiser les IDs à travers le système.
/// Toutes les clés primaires du backend sont des UUID sérialisés en texte.
pub trait Identifier:
    serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq
{
    fn as_uuid(&self) -> Uuid;
    fn as_string(&self) -> String;
    fn from_uuid(uuid: Uuid) -> Self;
}

/// Déclare un identifiant typé adossé à un UUID.
///
/// `uuid_identifier!(ProblemId, "problem_id", "Problem");` génère le newtype,
/// `Identifier`, `FromStr`, `Display`, `From<Uuid>` et `EntityMetadata`.
#[macro_export]
macro_rules! uuid_identifier {
    ($name:ident, $field:literal, $entity:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Génère un nouvel identifiant (UUID v4, comme `gen_random_uuid()` côté backend)
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            pub fn try_new(id: impl Into<String>) -> $crate::errors::Result<Self> {
                <Self as ::std::str::FromStr>::from_str(&id.into())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::domain::Identifier for $name {
            fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }

            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::DomainError;
            fn from_str(s: &str) -> $crate::errors::Result<Self> {
                ::uuid::Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| $crate::errors::DomainError::Validation {
                        field: $field,
                        reason: format!("'{}' is not a valid UUID", s),
                    })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::entities::EntityMetadata for $name {
            fn entity_name() -> &'static str {
                $entity
            }
        }
    };
}
