//! Breadcrumb resolution.
//!
//! Walks parent links from a folder up to the top level, one lookup per
//! level, and returns the chain root first. Lookups are strictly sequential
//! since each one needs the parent id from the previous answer.
//!
//! A chain that cannot be completed is never shown partially: any failure
//! collapses the result to an empty trail.

use std::collections::HashSet;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::models::Folder;
use crate::traits::{FolderLookup, FolderLookupError};

/// Why a breadcrumb chain could not be produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BreadcrumbError {
    #[error("lookup failed for folder {folder_id}: {source}")]
    Lookup {
        folder_id: String,
        #[source]
        source: FolderLookupError,
    },

    #[error("breadcrumb resolution cancelled")]
    Cancelled,

    #[error("folder {0} is its own ancestor")]
    Cycle(String),

    #[error("ancestor chain exceeds {0} levels")]
    TooDeep(usize),
}

/// Resolves breadcrumb chains against a [`FolderLookup`].
///
/// # Example
///
/// ```ignore
/// use mediahub::breadcrumbs::BreadcrumbResolver;
/// use tokio_util::sync::CancellationToken;
///
/// let resolver = BreadcrumbResolver::new(&client);
/// let token = CancellationToken::new();
/// let trail = resolver.resolve(Some("folder-id"), &token).await?;
/// ```
pub struct BreadcrumbResolver<'a, L: FolderLookup + ?Sized> {
    lookup: &'a L,
    max_depth: Option<usize>,
}

impl<'a, L: FolderLookup + ?Sized> BreadcrumbResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            max_depth: None,
        }
    }

    /// Limit how many folders a chain may contain. Unlimited by default;
    /// cycles are caught by the visited set either way.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }

    /// Resolve the chain for `target`, root first and `target` last.
    ///
    /// `None` (or an empty id) is the top level, which has no breadcrumbs.
    /// The token is checked before every lookup and raced against each one,
    /// so a superseded navigation stops without issuing further requests.
    pub async fn resolve(
        &self,
        target: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Folder>, BreadcrumbError> {
        let Some(target) = target.filter(|t| !t.is_empty()) else {
            return Ok(Vec::new());
        };

        let mut chain: Vec<Folder> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut next = Some(target.to_string());

        while let Some(folder_id) = next.take() {
            if !seen.insert(folder_id.clone()) {
                return Err(BreadcrumbError::Cycle(folder_id));
            }
            if let Some(limit) = self.max_depth {
                if chain.len() >= limit {
                    return Err(BreadcrumbError::TooDeep(limit));
                }
            }
            if cancel.is_cancelled() {
                return Err(BreadcrumbError::Cancelled);
            }

            let folder = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(BreadcrumbError::Cancelled),
                result = self.lookup.get_folder_by_id(&folder_id) => {
                    result.map_err(|source| BreadcrumbError::Lookup {
                        folder_id: folder_id.clone(),
                        source,
                    })?
                }
            };

            tracing::debug!(folder_id = %folder.id, parent_id = ?folder.parent_ref(), "resolved breadcrumb level");
            next = folder.parent_ref().map(str::to_string);
            chain.push(folder);
        }

        chain.reverse();
        Ok(chain)
    }

    /// Like [`resolve`](Self::resolve), but degrades every failure to an
    /// empty trail.
    pub async fn resolve_or_empty(
        &self,
        target: Option<&str>,
        cancel: &CancellationToken,
    ) -> Vec<Folder> {
        match self.resolve(target, cancel).await {
            Ok(chain) => chain,
            Err(BreadcrumbError::Cancelled) => {
                tracing::debug!(?target, "breadcrumb chain cancelled");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(?target, error = %err, "breadcrumb resolution failed, showing no trail");
                Vec::new()
            }
        }
    }
}

/// Resolve breadcrumbs for `target` with default settings and no
/// cancellation. Returns an empty chain on any failure.
pub async fn resolve_breadcrumbs<L: FolderLookup + ?Sized>(
    lookup: &L,
    target: Option<&str>,
) -> Vec<Folder> {
    BreadcrumbResolver::new(lookup)
        .resolve_or_empty(target, &CancellationToken::new())
        .await
}

/// Render a chain as `A / B / C`.
pub fn format_trail(chain: &[Folder]) -> String {
    chain
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryFolders;

    fn chain_fixture() -> InMemoryFolders {
        InMemoryFolders::from_folders(vec![
            Folder::new("a", "A", None),
            Folder::new("b", "B", Some("a")),
            Folder::new("c", "C", Some("b")),
        ])
    }

    fn ids(chain: &[Folder]) -> Vec<&str> {
        chain.iter().map(|f| f.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_none_target_is_empty() {
        let lookup = chain_fixture();
        assert!(resolve_breadcrumbs(&lookup, None).await.is_empty());
        assert!(resolve_breadcrumbs(&lookup, Some("")).await.is_empty());
        assert!(lookup.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_root_target_is_single_element() {
        let lookup = chain_fixture();
        let chain = resolve_breadcrumbs(&lookup, Some("a")).await;
        assert_eq!(ids(&chain), vec!["a"]);
    }

    #[tokio::test]
    async fn test_chain_is_root_first() {
        let lookup = chain_fixture();
        let chain = resolve_breadcrumbs(&lookup, Some("c")).await;
        assert_eq!(ids(&chain), vec!["a", "b", "c"]);
        assert_eq!(lookup.lookups(), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_missing_ancestor_yields_empty() {
        let lookup = InMemoryFolders::from_folders(vec![
            Folder::new("b", "B", Some("gone")),
            Folder::new("c", "C", Some("b")),
        ]);
        assert!(resolve_breadcrumbs(&lookup, Some("c")).await.is_empty());

        let err = BreadcrumbResolver::new(&lookup)
            .resolve(Some("c"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BreadcrumbError::Lookup { ref folder_id, source: FolderLookupError::NotFound(_) }
                if folder_id == "gone"
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_yields_empty() {
        let lookup = chain_fixture();
        lookup.fail_on("b", FolderLookupError::Transport("connection reset".to_string()));
        assert!(resolve_breadcrumbs(&lookup, Some("c")).await.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let lookup = chain_fixture();
        let token = CancellationToken::new();
        token.cancel();

        let result = BreadcrumbResolver::new(&lookup).resolve(Some("c"), &token).await;
        assert_eq!(result, Err(BreadcrumbError::Cancelled));
        assert!(lookup.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_cycle_is_reported() {
        let lookup = InMemoryFolders::from_folders(vec![
            Folder::new("x", "X", Some("y")),
            Folder::new("y", "Y", Some("x")),
        ]);
        let result = BreadcrumbResolver::new(&lookup)
            .resolve(Some("x"), &CancellationToken::new())
            .await;
        assert_eq!(result, Err(BreadcrumbError::Cycle("x".to_string())));
    }

    #[tokio::test]
    async fn test_max_depth() {
        let lookup = chain_fixture();
        let result = BreadcrumbResolver::new(&lookup)
            .with_max_depth(2)
            .resolve(Some("c"), &CancellationToken::new())
            .await;
        assert_eq!(result, Err(BreadcrumbError::TooDeep(2)));
    }

    #[tokio::test]
    async fn test_deep_chain_resolves_without_limit() {
        let folders: Vec<Folder> = (0..300)
            .map(|i| {
                let parent = (i > 0).then(|| format!("f{}", i - 1));
                Folder::new(format!("f{}", i), format!("F{}", i), parent.as_deref())
            })
            .collect();
        let lookup = InMemoryFolders::from_folders(folders);

        let chain = resolve_breadcrumbs(&lookup, Some("f299")).await;
        assert_eq!(chain.len(), 300);
        assert_eq!(chain[0].id, "f0");
        assert_eq!(chain[299].id, "f299");
    }

    #[test]
    fn test_format_trail() {
        let chain = vec![Folder::new("a", "Home", None), Folder::new("b", "Books", Some("a"))];
        assert_eq!(format_trail(&chain), "Home / Books");
        assert_eq!(format_trail(&[]), "");
    }
}
