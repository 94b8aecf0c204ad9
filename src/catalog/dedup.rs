use std::collections::HashMap;
use std::path::PathBuf;

use crate::format::{FormatPreference, ImageFormat};

use super::matcher::FilenameMatch;

/// The file picked for one base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected {
    pub base_name: String,
    pub format: ImageFormat,
    pub path: PathBuf,
}

#[derive(Debug)]
struct Candidate {
    rank: usize,
    format: ImageFormat,
    file_name: String,
    path: PathBuf,
}

impl Candidate {
    /// Lower rank wins; equal ranks fall back to the smaller file name so listing order never matters.
    fn beats(&self, other: &Candidate) -> bool {
        (self.rank, &self.file_name) < (other.rank, &other.file_name)
    }
}

/// Keeps one file per base name, the one whose format ranks best.
#[derive(Debug)]
pub struct Deduplicator<'a> {
    preference: &'a FormatPreference,
    groups: HashMap<String, Candidate>,
}

impl<'a> Deduplicator<'a> {
    pub fn new(preference: &'a FormatPreference) -> Self {
        Self {
            preference,
            groups: HashMap::new(),
        }
    }

    /// Record a matched file. Returns whether it is now the pick for its base name.
    pub fn offer(&mut self, matched: FilenameMatch, path: PathBuf) -> bool {
        let Some(rank) = self.preference.rank(matched.format) else {
            return false;
        };
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let candidate = Candidate {
            rank,
            format: matched.format,
            file_name,
            path,
        };

        match self.groups.get_mut(&matched.base_name) {
            Some(current) if !candidate.beats(current) => false,
            Some(current) => {
                tracing::debug!(
                    "Preferring {} over {} for '{}'",
                    candidate.file_name,
                    current.file_name,
                    matched.base_name
                );
                *current = candidate;
                true
            }
            None => {
                self.groups.insert(matched.base_name, candidate);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Picks ordered by lowercased file name, exact file name breaking ties.
    pub fn into_sorted(self) -> Vec<Selected> {
        let mut picks: Vec<(String, Candidate)> = self.groups.into_iter().collect();
        picks.sort_by(|(_, a), (_, b)| {
            a.file_name
                .to_lowercase()
                .cmp(&b.file_name.to_lowercase())
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        picks
            .into_iter()
            .map(|(base_name, c)| Selected {
                base_name,
                format: c.format,
                path: c.path,
            })
            .collect()
    }
}
