//! Member → consumers reference data.
//!
//! The backend answers `GET /members` with a JSON object. The member dropdown
//! lists keys the way a browser enumerates object properties: integer-like
//! keys first in ascending numeric order, then every other key in document
//! order. The map keeps that order instead of hashing.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping from member id to that member's consumer ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberMap {
    entries: Vec<(String, Vec<String>)>,
}

impl MemberMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(member, consumers)` pairs.
    ///
    /// A repeated member keeps its first position and takes the later list.
    pub fn from_pairs<I, M, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (M, Vec<C>)>,
        M: Into<String>,
        C: Into<String>,
    {
        let mut map = Self::new();
        for (member, consumers) in pairs {
            map.insert(member.into(), consumers.into_iter().map(Into::into).collect());
        }
        map
    }

    fn insert(&mut self, member: String, consumers: Vec<String>) {
        if let Some(slot) = self.entries.iter_mut().find(|(id, _)| *id == member) {
            slot.1 = consumers;
        } else {
            self.entries.push((member, consumers));
        }
    }

    /// Member ids in backend order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Consumers owned by `member`; empty when the member is unknown.
    #[must_use]
    pub fn consumers_of(&self, member: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(id, _)| id == member)
            .map_or(&[], |(_, consumers)| consumers.as_slice())
    }

    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.entries.iter().any(|(id, _)| id == member)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MemberMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (member, consumers) in &self.entries {
            map.serialize_entry(member, consumers)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MemberMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MemberMapVisitor)
    }
}

struct MemberMapVisitor;

impl<'de> Visitor<'de> for MemberMapVisitor {
    type Value = MemberMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping member ids to arrays of consumer ids")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = MemberMap::new();
        while let Some((member, consumers)) = access.next_entry::<String, Vec<String>>()? {
            map.insert(member, consumers);
        }
        map.entries.sort_by_key(|(member, _)| array_index(member).map_or((1, 0), |index| (0, index)));
        Ok(map)
    }
}

/// Canonical array-index key (`"0"`, `"7"`, `"42"`; not `"07"` or `"-1"`).
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}
