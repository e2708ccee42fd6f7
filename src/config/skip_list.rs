//! Skip-list of entity ids exempt from critical findings
//!
//! Every entry has the form `<entity id> [<version>]`. An id listed without a
//! version is skipped whatever its version; an id listed with versions is only
//! skipped for exactly those versions. Mixing both forms for one id is a
//! configuration error.

use std::collections::HashMap;

use crate::domain::Version;
use crate::error::{Result, contradictory_entry};

/// Which versions of an entity id are exempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipRule {
    AnyVersion,
    /// Exempt versions, in the order they were listed
    Versions(Vec<Version>),
}

impl SkipRule {
    pub fn matches(&self, version: Option<&Version>) -> bool {
        match self {
            SkipRule::AnyVersion => true,
            SkipRule::Versions(versions) => {
                version.is_some_and(|v| versions.iter().any(|skipped| skipped == v))
            }
        }
    }
}

/// Parsed skip-list, keyed by entity id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    entries: HashMap<String, SkipRule>,
}

impl SkipList {
    /// Parse raw skip-list entries.
    ///
    /// Entries are trimmed before splitting, so `"idA "` lists `idA` for any
    /// version rather than for version `0.0.0`. Blank entries are ignored.
    /// Fails when an entity id is listed both with and without a version, or
    /// when a version does not parse.
    pub fn parse<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: HashMap<String, SkipRule> = HashMap::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            let (entity_id, version) = match entry.split_once(' ') {
                Some((id, version)) => (id, Some(Version::parse(version)?)),
                None => (entry, None),
            };

            match parsed.get_mut(entity_id) {
                None => {
                    let rule = match version {
                        Some(version) => SkipRule::Versions(vec![version]),
                        None => SkipRule::AnyVersion,
                    };
                    parsed.insert(entity_id.to_string(), rule);
                }
                Some(SkipRule::Versions(versions)) => match version {
                    Some(version) => versions.push(version),
                    None => return Err(contradictory_entry(entity_id)),
                },
                Some(SkipRule::AnyVersion) => return Err(contradictory_entry(entity_id)),
            }
        }

        Ok(Self { entries: parsed })
    }

    pub fn get(&self, entity_id: &str) -> Option<&SkipRule> {
        self.entries.get(entity_id)
    }

    /// Whether a resource with this id and version is exempt from reporting
    pub fn skips(&self, entity_id: &str, version: Option<&Version>) -> bool {
        self.get(entity_id)
            .is_some_and(|rule| rule.matches(version))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by entity id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkipRule)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(id, rule)| (id.as_str(), rule))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }
}
