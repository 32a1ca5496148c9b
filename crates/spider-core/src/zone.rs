//! Zones: the planar fragments induced by a set of contours.
//!
//! A [`Zone`] is identified by two disjoint sets of contour names: the
//! contours that contain it and the contours it lies outside of. Zones are
//! immutable values; equality, hashing and ordering are fully determined by
//! the two name sets.
//!
//! # Ordering
//!
//! Zones order lexicographically on their in-contours first and their
//! out-contours second. Each name set compares by its sorted elements
//! pairwise, and a set that is a prefix of another precedes it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Name of a contour. Contours have no separate entity; they exist only as
/// members of zone name sets.
pub type ContourName = String;

/// An immutable zone: `in_contours ∩ out_contours = ∅`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ZoneRepr")]
pub struct Zone {
    in_contours: BTreeSet<ContourName>,
    out_contours: BTreeSet<ContourName>,
}

#[derive(Deserialize)]
struct ZoneRepr {
    #[serde(default)]
    in_contours: BTreeSet<ContourName>,
    #[serde(default)]
    out_contours: BTreeSet<ContourName>,
}

impl TryFrom<ZoneRepr> for Zone {
    type Error = CoreError;

    fn try_from(repr: ZoneRepr) -> Result<Self, Self::Error> {
        Zone::new(repr.in_contours, repr.out_contours)
    }
}

impl Zone {
    /// Creates a zone from its in- and out-contour names.
    ///
    /// Duplicate names are ignored. Returns
    /// [`CoreError::OverlappingContours`] if a name appears in both sets.
    pub fn new<I, O, S, T>(in_contours: I, out_contours: O) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<ContourName>,
        T: Into<ContourName>,
    {
        let in_contours: BTreeSet<ContourName> = in_contours.into_iter().map(Into::into).collect();
        let out_contours: BTreeSet<ContourName> =
            out_contours.into_iter().map(Into::into).collect();

        if let Some(contour) = in_contours.intersection(&out_contours).next() {
            return Err(CoreError::OverlappingContours {
                contour: contour.clone(),
            });
        }

        Ok(Zone {
            in_contours,
            out_contours,
        })
    }

    /// A zone lying inside all the given contours and outside none.
    pub fn from_in_contours<I, S>(in_contours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ContourName>,
    {
        Zone {
            in_contours: in_contours.into_iter().map(Into::into).collect(),
            out_contours: BTreeSet::new(),
        }
    }

    /// A zone lying outside all the given contours and inside none.
    pub fn from_out_contours<I, S>(out_contours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ContourName>,
    {
        Zone {
            in_contours: BTreeSet::new(),
            out_contours: out_contours.into_iter().map(Into::into).collect(),
        }
    }

    /// Contours that contain this zone.
    pub fn in_contours(&self) -> &BTreeSet<ContourName> {
        &self.in_contours
    }

    /// Contours this zone lies entirely outside of.
    pub fn out_contours(&self) -> &BTreeSet<ContourName> {
        &self.out_contours
    }

    pub fn in_contours_count(&self) -> usize {
        self.in_contours.len()
    }

    pub fn out_contours_count(&self) -> usize {
        self.out_contours.len()
    }

    /// Every contour this zone mentions, in or out.
    pub fn all_contours(&self) -> BTreeSet<ContourName> {
        self.in_contours.union(&self.out_contours).cloned().collect()
    }

    pub fn is_inside(&self, contour: &str) -> bool {
        self.in_contours.contains(contour)
    }

    pub fn is_outside(&self, contour: &str) -> bool {
        self.out_contours.contains(contour)
    }

    /// Whether the zone is expressed with respect to `contour` at all.
    pub fn mentions(&self, contour: &str) -> bool {
        self.is_inside(contour) || self.is_outside(contour)
    }

    /// A copy of this zone that additionally lies inside `contour`.
    ///
    /// A zone that already mentions `contour` is returned unchanged.
    pub fn with_in_contour(&self, contour: &str) -> Zone {
        let mut zone = self.clone();
        if !zone.mentions(contour) {
            zone.in_contours.insert(contour.to_string());
        }
        zone
    }

    /// A copy of this zone that additionally lies outside `contour`.
    ///
    /// A zone that already mentions `contour` is returned unchanged.
    pub fn with_out_contour(&self, contour: &str) -> Zone {
        let mut zone = self.clone();
        if !zone.mentions(contour) {
            zone.out_contours.insert(contour.to_string());
        }
        zone
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &BTreeSet<ContourName>) -> fmt::Result {
    f.write_str("[")?;
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(name)?;
    }
    f.write_str("]")
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_names(f, &self.in_contours)?;
        f.write_str(", ")?;
        write_names(f, &self.out_contours)?;
        f.write_str(")")
    }
}
