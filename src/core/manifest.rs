//! The fixed list of files the optimizer touches.

use std::path::{Path, PathBuf};
use crate::core::Batch;

/// One file to optimize, relative to the public directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub relative_path: &'static str,
    pub batch: Batch,
}

impl ManifestEntry {
    pub fn resolve(&self, public_dir: &Path) -> PathBuf {
        public_dir.join(self.relative_path)
    }
}

/// Entries of one batch, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestGroup {
    pub batch: Batch,
    pub paths: Vec<&'static str>,
}

impl ManifestGroup {
    pub fn new(batch: Batch, paths: &[&'static str]) -> Self {
        Self { batch, paths: paths.to_vec() }
    }

    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry> + '_ {
        self.paths.iter().map(|&p| ManifestEntry { relative_path: p, batch: self.batch })
    }
}

/// Ordered groups of manifest entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    groups: Vec<ManifestGroup>,
}

const HERO: &[&str] = &[
    "background-index/1.jpg",
    "background-index/2.jpg",
    "background-index/3.jpg",
    "background-index/4.jpg",
    "background-index/5.jpg",
    "background-index/6.jpg",
];

const PAGE_HERO: &[&str] = &["about-hero.jpg", "services-hero.jpg", "contact-hero.jpg"];

const CARDS: &[&str] = &["card-web.jpg", "card-mobile.jpg", "card-design.jpg"];

const PNG: &[&str] = &["logo.png", "og-image.png", "favicon.png"];

impl Manifest {
    pub fn new(groups: Vec<ManifestGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ManifestGroup] {
        &self.groups
    }

    /// Every entry, group by group, in declared order.
    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry> + '_ {
        self.groups.iter().flat_map(ManifestGroup::entries)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.paths.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(
            Batch::ORDER
                .into_iter()
                .map(|batch| {
                    let paths = match batch {
                        Batch::Hero => HERO,
                        Batch::PageHero => PAGE_HERO,
                        Batch::Cards => CARDS,
                        Batch::Png => PNG,
                    };
                    ManifestGroup::new(batch, paths)
                })
                .collect(),
        )
    }
}
