// backend/tellme-cli/src/commands/mod.rs

pub mod bookmark;
pub mod comment;
pub mod notification;
pub mod problem;
pub mod profile;
pub mod report;
pub mod suggestion;
pub mod taxonomy;

use serde::Serialize;

/// Sortie JSON sur stdout, les logs restent sur stderr
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Une chaîne vide efface le champ, sinon on valide la nouvelle valeur
pub(crate) fn clearable<T, F>(raw: Option<String>, parse: F) -> anyhow::Result<Option<Option<T>>>
where
    F: FnOnce(String) -> shared_kernel::errors::Result<T>,
{
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(Some(None)),
        Some(value) => Ok(Some(Some(parse(value)?))),
    }
}
