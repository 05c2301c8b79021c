// crates/shared-kernel/src/domain/value_objects/text.rs

use crate::errors::{DomainError, Result};

/// Nettoie un texte libre saisi par l'utilisateur et vérifie ses bornes.
///
/// Trim, sauts de ligne normalisés en `\n` (2 consécutifs max),
/// longueur comptée en caractères Unicode, pas en octets.
pub fn normalize_text(field: &'static str, raw: &str, max_len: usize) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::Validation {
            field,
            reason: format!("{field} cannot be empty"),
        });
    }

    let mut result = String::with_capacity(trimmed.len());
    let mut newline_count = 0;
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        if c == '\n' || c == '\r' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    if result.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
        return Err(DomainError::Validation {
            field,
            reason: format!("{field} contains invalid control characters"),
        });
    }

    let count = result.chars().count();
    if count > max_len {
        return Err(DomainError::Validation {
            field,
            reason: format!("{field} is too long (max {max_len} chars, got {count})"),
        });
    }

    Ok(result)
}
