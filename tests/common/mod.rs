//! Common test utilities for integration tests.
//!
//! Folder fixtures and a seeded generator for folder sets used by the
//! property-style tests.

#![allow(dead_code)]

use std::collections::HashMap;

use mediahub::models::Folder;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shorthand for a folder whose name is its id in upper case.
pub fn folder(id: &str, parent: Option<&str>) -> Folder {
    Folder::new(id, id.to_uppercase(), parent)
}

/// Two small trees:
///
/// ```text
/// photos
///   2023
///     summer
///   2024
/// docs
///   taxes
/// ```
pub fn sample_folders() -> Vec<Folder> {
    vec![
        folder("photos", None),
        folder("2023", Some("photos")),
        folder("summer", Some("2023")),
        folder("2024", Some("photos")),
        folder("docs", None),
        folder("taxes", Some("docs")),
    ]
}

pub fn ids(folders: &[Folder]) -> Vec<&str> {
    folders.iter().map(|f| f.id.as_str()).collect()
}

/// An acyclic folder set of `n` folders in shuffled order, reproducible
/// from `seed`.
///
/// Folder `f{i}` either is a root or points at some `f{j}` with `j < i`, so
/// no cycles are possible. With `dangling`, some folders point at ids that
/// are not in the set.
pub fn generated_folders(seed: u64, n: usize, dangling: bool) -> Vec<Folder> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut folders: Vec<Folder> = (0..n)
        .map(|i| {
            let id = format!("f{}", i);
            let parent = match rng.gen_range(0..5) {
                0 => None,
                1 if dangling => Some(format!("ghost{}", i)),
                _ if i == 0 => None,
                _ => Some(format!("f{}", rng.gen_range(0..i))),
            };
            folder(&id, parent.as_deref())
        })
        .collect();

    folders.shuffle(&mut rng);
    folders
}

/// Parent chain of `id` (nearest ancestor first), or `None` if the chain
/// leaves the set.
pub fn ancestor_chain(folders: &[Folder], id: &str) -> Option<Vec<String>> {
    let by_id: HashMap<&str, &Folder> = folders.iter().map(|f| (f.id.as_str(), f)).collect();
    let mut chain = Vec::new();
    let mut current = by_id.get(id)?;
    while let Some(parent) = current.parent_ref() {
        chain.push(parent.to_string());
        current = by_id.get(parent)?;
    }
    Some(chain)
}
