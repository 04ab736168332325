//! Command implementations.
//!
//! Each command reads through a [`FolderLookup`] and renders to a string, so
//! the output can be checked without a backend or a terminal.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tokio_util::sync::CancellationToken;

use crate::breadcrumbs::{format_trail, BreadcrumbResolver};
use crate::hierarchy::{build_hierarchy, flatten_hierarchy, MoveSubject};
use crate::models::FolderNode;
use crate::state::MovePickerState;
use crate::traits::FolderLookup;

const INDENT: &str = "  ";

/// Label printed for the top level in move target listings.
pub const ROOT_LABEL: &str = "(root)";

/// Render a forest, one folder per line, indented by depth.
pub fn render_tree(roots: &[FolderNode]) -> String {
    flatten_hierarchy(roots)
        .into_iter()
        .map(|(depth, folder)| format!("{}{}  [{}]", INDENT.repeat(depth), folder.name, folder.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `tree`: the full hierarchy.
pub async fn tree<L: FolderLookup + ?Sized>(lookup: &L) -> Result<String> {
    let folders = lookup
        .list_all_folders()
        .await
        .map_err(|e| eyre!("failed to list folders: {}", e))?;
    let roots = build_hierarchy(&folders);
    let shown: usize = roots.iter().map(|r| r.descendant_count() + 1).sum();
    tracing::info!(total = folders.len(), shown, roots = roots.len(), "built folder tree");
    Ok(render_tree(&roots))
}

/// `breadcrumbs <id>`: the trail as `A / B / C`. Lookup failures print an
/// empty line, like the explorer's empty trail.
pub async fn breadcrumbs<L: FolderLookup + ?Sized>(
    lookup: &L,
    folder_id: &str,
    max_depth: Option<usize>,
) -> String {
    let mut resolver = BreadcrumbResolver::new(lookup);
    if let Some(limit) = max_depth {
        resolver = resolver.with_max_depth(limit);
    }
    let trail = resolver
        .resolve_or_empty(Some(folder_id), &CancellationToken::new())
        .await;
    tracing::info!(folder_id, levels = trail.len(), "resolved breadcrumbs");
    format_trail(&trail)
}

/// `move-targets <id>`: destinations for moving a folder or an asset.
pub async fn move_targets<L: FolderLookup + ?Sized>(
    lookup: &L,
    subject: MoveSubject,
    current_folder_id: Option<&str>,
) -> Result<String> {
    let folders = lookup
        .list_all_folders()
        .await
        .map_err(|e| eyre!("failed to list folders: {}", e))?;
    let picker = MovePickerState::new(&folders, subject, current_folder_id);

    let mut lines = vec![ROOT_LABEL.to_string()];
    let tree = render_tree(&picker.hierarchy);
    if !tree.is_empty() {
        lines.extend(tree.lines().map(|line| format!("{}{}", INDENT, line)));
    }
    Ok(lines.join("\n"))
}
