//! Regions: unions of zones.
//!
//! A [`Region`] is an immutable set of [`Zone`]s ordered by the zone total
//! order. Two regions are equal when they contain the same zones, regardless
//! of the order or multiplicity of the collection they were built from.
//!
//! An empty region contains no zones. Call sites that give the empty region
//! a different reading (for example "the whole plane") say so explicitly.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zone::{ContourName, Zone};

/// An immutable set of zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region {
    zones: BTreeSet<Zone>,
}

impl Region {
    /// Builds a region from a zone collection. Duplicates are ignored.
    pub fn new<I: IntoIterator<Item = Zone>>(zones: I) -> Self {
        Region {
            zones: zones.into_iter().collect(),
        }
    }

    /// The region with no zones.
    pub fn empty() -> Self {
        Region::default()
    }

    pub fn zones(&self) -> &BTreeSet<Zone> {
        &self.zones
    }

    pub fn zones_count(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, zone: &Zone) -> bool {
        self.zones.contains(zone)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Whether every zone of `self` is also a zone of `other`.
    pub fn is_subregion_of(&self, other: &Region) -> bool {
        self.zones.is_subset(&other.zones)
    }

    pub fn union(&self, other: &Region) -> Region {
        Region {
            zones: self.zones.union(&other.zones).cloned().collect(),
        }
    }

    pub fn intersection(&self, other: &Region) -> Region {
        Region {
            zones: self.zones.intersection(&other.zones).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &Region) -> Region {
        Region {
            zones: self.zones.difference(&other.zones).cloned().collect(),
        }
    }

    /// Every contour mentioned by any zone of the region.
    pub fn all_contours(&self) -> BTreeSet<ContourName> {
        self.zones.iter().flat_map(Zone::all_contours).collect()
    }
}

impl FromIterator<Zone> for Region {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Region::new(iter)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Zone;
    type IntoIter = std::collections::btree_set::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, zone) in self.zones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", zone)?;
        }
        f.write_str("]")
    }
}
