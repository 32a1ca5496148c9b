//! Contour algebra: computing and re-expressing zones over contour sets.
//!
//! These are pure functions over [`Zone`] and [`Region`] values. The central
//! operation is the *split*: re-expressing a zone over one more contour by
//! replacing it with two zones, one inside and one outside the new contour.
//! Splitting `n` fresh contours into a zone set multiplies its size by `2ⁿ`,
//! which is fine for the human-drawable contour counts of real diagrams.
//!
//! A zone that already mentions a contour is left as is when split by that
//! contour, so repeated or overlapping contour names never duplicate work.

use crate::region::Region;
use crate::zone::Zone;

/// Computes every zone induced by the given contours.
///
/// For `n` distinct names this yields exactly `2ⁿ` zones, one per in/out
/// assignment, each mentioning every name. Repeated names count once. With no
/// contours the result is the single zone `([], [])`, i.e. the whole plane.
pub fn all_zones_for_contours<I, S>(contours: I) -> Region
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut zones = vec![Zone::from_in_contours(Vec::<String>::new())];
    for contour in contours {
        zones = split_zones(&zones, contour.as_ref());
    }
    Region::new(zones)
}

/// Zones of `region` lying inside at least one of `contours`.
///
/// A zone with no in-contours is never inside any contour.
pub fn get_zones_inside_contours<I, S>(region: &Region, contours: I) -> Region
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let contours: Vec<S> = contours.into_iter().collect();
    region
        .iter()
        .filter(|zone| is_inside_any(zone, &contours))
        .cloned()
        .collect()
}

/// Zones of `region` lying inside none of `contours`.
///
/// Together with [`get_zones_inside_contours`] this partitions the region.
pub fn get_zones_outside_contours<I, S>(region: &Region, contours: I) -> Region
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let contours: Vec<S> = contours.into_iter().collect();
    region
        .iter()
        .filter(|zone| !is_inside_any(zone, &contours))
        .cloned()
        .collect()
}

/// Extends `region` so that it also covers the interior of a new contour.
///
/// Here the empty region stands for the whole plane before any contour is
/// drawn, so extending it yields the two zones `([new], [])` and `([], [new])`.
///
/// A non-empty region is first re-expressed over `new_contour` (every zone
/// split into its inside and outside halves), then every zone lying inside
/// `new_contour` over the region's existing contours is added.
pub fn extend_region_with_new_contour(region: &Region, new_contour: &str) -> Region {
    if region.is_empty() {
        return Region::new([
            Zone::from_in_contours([new_contour]),
            Zone::from_out_contours([new_contour]),
        ]);
    }

    let mut vocabulary = region.all_contours();
    vocabulary.remove(new_contour);

    let split = same_region_with_new_contours(region, [new_contour]);
    let interior = same_region_with_new_contours(
        &Region::new([Zone::from_in_contours([new_contour])]),
        &vocabulary,
    );
    split.union(&interior)
}

/// Re-expresses `region` over a larger contour vocabulary.
///
/// Each contour in turn splits every zone in two, so the described part of
/// the plane stays the same while the zone count doubles per fresh contour.
/// The result does not depend on the order of `contours`. The empty region
/// stays empty.
pub fn same_region_with_new_contours<I, S>(region: &Region, contours: I) -> Region
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut zones: Vec<Zone> = region.iter().cloned().collect();
    for contour in contours {
        zones = split_zones(&zones, contour.as_ref());
    }
    Region::new(zones)
}

fn split_zones(zones: &[Zone], contour: &str) -> Vec<Zone> {
    let mut split = Vec::with_capacity(zones.len() * 2);
    for zone in zones {
        if zone.mentions(contour) {
            split.push(zone.clone());
        } else {
            split.push(zone.with_in_contour(contour));
            split.push(zone.with_out_contour(contour));
        }
    }
    split
}

fn is_inside_any<S: AsRef<str>>(zone: &Zone, contours: &[S]) -> bool {
    zone.in_contours_count() > 0 && contours.iter().any(|c| zone.is_inside(c.as_ref()))
}
