// crates/shared-kernel/src/application/scatter_gather.rs

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::hash::Hash;

use crate::errors::Result;

/// Jointure "scatter-gather" : une requête pour les lignes principales (déjà faite
/// par l'appelant), une seule requête groupée pour les entités liées, puis une
/// jointure gauche en mémoire.
///
/// - `fetch` reçoit les clés distinctes dans l'ordre de première apparition et
///   n'est jamais appelé si `items` est vide.
/// - Une clé absente du résultat donne `None` (pas d'erreur).
/// - L'ordre de `items` est conservé.
pub async fn scatter_gather<T, K, R, F, Fut>(
    items: Vec<T>,
    key_of: impl Fn(&T) -> K,
    fetch: F,
    related_key: impl Fn(&R) -> K,
) -> Result<Vec<(T, Option<R>)>>
where
    K: Eq + Hash + Clone,
    R: Clone,
    F: FnOnce(Vec<K>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let keys: Vec<K> = items
        .iter()
        .map(&key_of)
        .filter(|k| seen.insert(k.clone()))
        .collect();

    let related: HashMap<K, R> = fetch(keys)
        .await?
        .into_iter()
        .map(|r| (related_key(&r), r))
        .collect();

    Ok(items
        .into_iter()
        .map(|item| {
            let found = related.get(&key_of(&item)).cloned();
            (item, found)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Author {
        id: u32,
        name: &'static str,
    }

    #[tokio::test]
    async fn test_fetches_distinct_keys_once_and_left_joins() {
        let calls = AtomicUsize::new(0);
        let posts = vec![("a", 1u32), ("b", 2), ("c", 1), ("d", 3)];

        let joined = scatter_gather(
            posts,
            |p| p.1,
            |keys| {
                calls.fetch_add(1, Ordering::SeqCst);
                assert_eq!(keys, vec![1, 2, 3]);
                async {
                    Ok(vec![
                        Author { id: 1, name: "alice" },
                        Author { id: 3, name: "carol" },
                    ])
                }
            },
            |a| a.id,
        )
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(joined.len(), 4);
        assert_eq!(joined[0].1.as_ref().unwrap().name, "alice");
        assert!(joined[1].1.is_none(), "missing author must become None");
        assert_eq!(joined[2].1.as_ref().unwrap().name, "alice");
        assert_eq!(joined[3].0, ("d", 3));
    }

    #[tokio::test]
    async fn test_skips_fetch_for_empty_input() {
        let calls = AtomicUsize::new(0);

        let joined = scatter_gather(
            Vec::<(u32, u32)>::new(),
            |p| p.1,
            |_keys| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(Vec::<Author>::new()) }
            },
            |a: &Author| a.id,
        )
        .await
        .unwrap();

        assert!(joined.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_propagates_fetch_errors() {
        let result = scatter_gather(
            vec![1u32],
            |p| *p,
            |_keys| async { Err::<Vec<Author>, _>(DomainError::Infrastructure("timeout".into())) },
            |a: &Author| a.id,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
