//! Explorer navigation state.
//!
//! Each navigation starts a new breadcrumb resolution. Resolutions can finish
//! out of order, so every one is stamped with a generation number and only
//! the result for the latest navigation is applied. Starting a navigation
//! also cancels the token of the one before it, which stops its lookups.

use tokio_util::sync::CancellationToken;

use crate::breadcrumbs::BreadcrumbResolver;
use crate::models::Folder;
use crate::traits::FolderLookup;

/// Handle for one in-flight breadcrumb resolution.
#[derive(Debug, Clone)]
pub struct NavigationTicket {
    pub generation: u64,
    /// `None` for the top level
    pub folder_id: Option<String>,
    pub token: CancellationToken,
}

impl NavigationTicket {
    /// Resolve the breadcrumb trail for this ticket's folder.
    ///
    /// Failures and cancellation both come back as an empty trail.
    pub async fn resolve<L: FolderLookup + ?Sized>(
        &self,
        lookup: &L,
        max_depth: Option<usize>,
    ) -> Vec<Folder> {
        let mut resolver = BreadcrumbResolver::new(lookup);
        if let Some(limit) = max_depth {
            resolver = resolver.with_max_depth(limit);
        }
        resolver
            .resolve_or_empty(self.folder_id.as_deref(), &self.token)
            .await
    }
}

/// Where the explorer currently is and the trail leading there.
#[derive(Debug, Default)]
pub struct ExplorerState {
    current_folder_id: Option<String>,
    breadcrumbs: Vec<Folder>,
    generation: u64,
    active: Option<CancellationToken>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_folder_id(&self) -> Option<&str> {
        self.current_folder_id.as_deref()
    }

    pub fn breadcrumbs(&self) -> &[Folder] {
        &self.breadcrumbs
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move to `folder_id` (`None` for the top level).
    ///
    /// Cancels the previous resolution and returns a ticket for the new one.
    /// Navigating to the top level clears the trail immediately since there
    /// is nothing to resolve.
    pub fn navigate(&mut self, folder_id: Option<&str>) -> NavigationTicket {
        if let Some(previous) = self.active.take() {
            previous.cancel();
        }

        self.generation += 1;
        let folder_id = folder_id.filter(|id| !id.is_empty()).map(str::to_string);
        self.current_folder_id = folder_id.clone();
        if folder_id.is_none() {
            self.breadcrumbs.clear();
        }

        let token = CancellationToken::new();
        self.active = Some(token.clone());
        tracing::debug!(generation = self.generation, folder_id = ?folder_id, "navigate");

        NavigationTicket {
            generation: self.generation,
            folder_id,
            token,
        }
    }

    /// Shortcut for `navigate(None)`.
    pub fn navigate_to_root(&mut self) -> NavigationTicket {
        self.navigate(None)
    }

    /// Apply a resolved trail if it belongs to the latest navigation.
    ///
    /// Returns false, leaving the state untouched, for stale results.
    pub fn apply_breadcrumbs(&mut self, generation: u64, crumbs: Vec<Folder>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale breadcrumbs"
            );
            return false;
        }
        self.breadcrumbs = crumbs;
        self.active = None;
        true
    }
}
