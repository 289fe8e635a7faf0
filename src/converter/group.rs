//! Ordered grouping of records by region

use serde::Serialize;
use std::collections::HashMap;

use super::record::Record;

/// A township within a region, in both scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TownshipPair {
    pub township: String,
    pub township_local: String,
}

/// All townships seen for one region name.
///
/// The local name and code come from the first record of the region; later
/// records only add townships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionGroup {
    pub region: String,
    pub region_local: String,
    pub code: String,
    pub townships: Vec<TownshipPair>,
}

impl RegionGroup {
    fn from_record(record: Record) -> Self {
        Self {
            region: record.region,
            region_local: record.region_local,
            code: record.code,
            townships: vec![TownshipPair {
                township: record.township,
                township_local: record.township_local,
            }],
        }
    }
}

/// Region groups in order of first appearance
#[derive(Debug, Default)]
pub struct RegionGroups {
    groups: Vec<RegionGroup>,
    index: HashMap<String, usize>,
}

impl RegionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to its region, creating the group on first sight.
    /// Keys are compared exactly, without case folding.
    pub fn push(&mut self, record: Record) {
        match self.index.get(&record.region) {
            Some(&slot) => self.groups[slot].townships.push(TownshipPair {
                township: record.township,
                township_local: record.township_local,
            }),
            None => {
                self.index.insert(record.region.clone(), self.groups.len());
                self.groups.push(RegionGroup::from_record(record));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionGroup> {
        self.groups.iter()
    }

    pub fn into_vec(self) -> Vec<RegionGroup> {
        self.groups
    }
}
