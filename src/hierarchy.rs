//! Folder hierarchy construction.
//!
//! Turns the flat folder list returned by the API into a forest of
//! [`FolderNode`]s, and filters candidate lists for the move dialog.
//!
//! Folders whose parent is not part of the input are dropped from the tree.
//! This happens legitimately when an ancestor was filtered out of the working
//! set (for instance by [`prune_descendants`]), so it is reported as a
//! diagnostic rather than an error.

use std::collections::{HashMap, HashSet};

use crate::models::{Folder, FolderNode};

/// What is being moved in the move dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSubject {
    Folder(String),
    Asset(String),
}

impl MoveSubject {
    pub fn id(&self) -> &str {
        match self {
            MoveSubject::Folder(id) | MoveSubject::Asset(id) => id,
        }
    }
}

/// Build the folder forest from a flat list.
///
/// Roots are folders without a parent, in input order. Children keep input
/// order among their siblings. Linking does not depend on input order since
/// every id is indexed before any node is attached.
pub fn build_hierarchy(folders: &[Folder]) -> Vec<FolderNode> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(folders.len());
    for (i, folder) in folders.iter().enumerate() {
        if index.insert(folder.id.as_str(), i).is_some() {
            tracing::debug!(folder_id = %folder.id, "duplicate folder id, keeping the last entry");
        }
    }

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    let mut dangling = 0usize;

    for (i, folder) in folders.iter().enumerate() {
        // Shadowed duplicates never make it into the tree.
        if index.get(folder.id.as_str()) != Some(&i) {
            continue;
        }
        match folder.parent_ref() {
            None => roots.push(i),
            Some(parent_id) => match index.get(parent_id) {
                Some(&parent) => children[parent].push(i),
                None => {
                    dangling += 1;
                    tracing::debug!(
                        folder_id = %folder.id,
                        parent_id,
                        "parent not in working set, omitting folder from hierarchy"
                    );
                }
            },
        }
    }

    if dangling > 0 {
        tracing::warn!(count = dangling, "omitted folders with unresolved parents");
    }

    roots
        .into_iter()
        .filter_map(|root| materialize(folders, &children, root))
        .collect()
}

/// Build the node for `root` and its whole subtree.
///
/// Works from an explicit stack so deep trees cannot overflow the call stack.
/// Only nodes reachable from a root are visited, so cycles in the parent
/// graph are simply never entered.
fn materialize(folders: &[Folder], children: &[Vec<usize>], root: usize) -> Option<FolderNode> {
    // (input index, depth, number of children already built)
    let mut stack: Vec<(usize, usize, usize)> = vec![(root, 0, 0)];
    // One list of finished children per stack entry, plus one that collects the root.
    let mut built: Vec<Vec<FolderNode>> = vec![Vec::new(), Vec::new()];

    while let Some(top) = stack.last_mut() {
        let (idx, depth) = (top.0, top.1);

        if let Some(&child) = children[idx].get(top.2) {
            top.2 += 1;
            stack.push((child, depth + 1, 0));
            built.push(Vec::new());
            continue;
        }

        stack.pop();
        let node = FolderNode {
            folder: folders[idx].clone(),
            children: built.pop().unwrap_or_default(),
            depth,
        };
        if let Some(siblings) = built.last_mut() {
            siblings.push(node);
        }
    }

    built.pop().and_then(|mut roots| roots.pop())
}

/// Remove every transitive descendant of `exclude_id` from `folders`.
///
/// The folder `exclude_id` itself is kept; callers that want it gone filter
/// it separately (see [`move_targets`]). Returns a new list in input order.
pub fn prune_descendants(folders: &[Folder], exclude_id: &str) -> Vec<Folder> {
    let excluded = descendant_ids(folders, exclude_id);
    folders
        .iter()
        .filter(|folder| !excluded.contains(folder.id.as_str()))
        .cloned()
        .collect()
}

/// Ids of all folders below `root_id`, found breadth-first over a
/// parent → children adjacency map.
pub fn descendant_ids<'a>(folders: &'a [Folder], root_id: &str) -> HashSet<&'a str> {
    let mut adjacency: HashMap<&str, Vec<&'a str>> = HashMap::new();
    for folder in folders {
        if let Some(parent_id) = folder.parent_ref() {
            adjacency
                .entry(parent_id)
                .or_default()
                .push(folder.id.as_str());
        }
    }

    let mut found: HashSet<&'a str> = HashSet::new();
    let mut queue: Vec<&str> = vec![root_id];
    while let Some(current) = queue.pop() {
        let Some(kids) = adjacency.get(current) else {
            continue;
        };
        for &kid in kids {
            // The visited check also stops on cyclic input.
            if kid != root_id && found.insert(kid) {
                queue.push(kid);
            }
        }
    }
    found
}

/// Folders that are valid destinations for `subject`.
///
/// A folder can't move into itself or its own subtree, and nothing is moved
/// into the folder it already lives in.
pub fn move_targets(
    folders: &[Folder],
    subject: &MoveSubject,
    current_folder_id: Option<&str>,
) -> Vec<Folder> {
    let mut candidates = match subject {
        MoveSubject::Folder(id) => {
            let mut pruned = prune_descendants(folders, id);
            pruned.retain(|f| f.id != *id);
            pruned
        }
        MoveSubject::Asset(_) => folders.to_vec(),
    };

    if let Some(current) = current_folder_id.filter(|c| !c.is_empty()) {
        candidates.retain(|f| f.id != current);
    }
    candidates
}

/// Flatten a forest into `(depth, folder)` pairs in display order.
pub fn flatten_hierarchy(roots: &[FolderNode]) -> Vec<(usize, &Folder)> {
    roots
        .iter()
        .flat_map(|root| root.iter())
        .map(|node| (node.depth, &node.folder))
        .collect()
}
