// crates/problem/src/domain/value_objects/bounded_text.rs

/// Texte libre borné : normalisé via `normalize_text`, jamais vide.
macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LENGTH: usize = $max;

            pub fn try_new(value: impl Into<String>) -> ::shared_kernel::errors::Result<Self> {
                ::shared_kernel::domain::value_objects::normalize_text(
                    $field,
                    &value.into(),
                    Self::MAX_LENGTH,
                )
                .map(Self)
            }

            /// Reconstruction depuis le backend, sans validation
            pub fn from_raw(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

bounded_text!(
    /// Titre d'un problème
    Title, "title", 200
);
bounded_text!(Description, "description", 5000);
bounded_text!(CommentContent, "content", 2000);
bounded_text!(SuggestionContent, "content", 2000);
bounded_text!(
    /// Motif d'un signalement
    ReportReason, "reason", 1000
);
