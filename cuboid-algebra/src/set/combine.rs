//! Canonicalization of [`Cuboids`] by merging cuboids which share a complete face.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::math::{Cuboid, Face6, Point};
use crate::set::Cuboids;

impl Cuboids {
    /// Returns a collection covering the same region with fewer members, if possible.
    ///
    /// Exact duplicates and members enclosed by other members are dropped. Then, as long as
    /// some member has a face which exactly coincides with the opposite face of another
    /// member, one unit away, the two are replaced by the single cuboid that is their union.
    /// Members enclosed by such a union are dropped too, and merging continues until
    /// neither step changes anything, so combining the result again returns it unchanged.
    ///
    /// The search is greedy: members are visited in order, and each member's faces in
    /// [`Face6::ALL`] order, and the first match found is merged before searching again.
    /// The result therefore depends on the order of the input and is not necessarily the
    /// smallest possible set of cuboids. Given a disjoint collection, the result is disjoint.
    ///
    /// ```
    /// use cuboid_algebra::math::Cuboid;
    /// use cuboid_algebra::set::Cuboids;
    ///
    /// let halves = Cuboids::from(vec![
    ///     Cuboid::new([0, 0, 0], [9, 9, 4]),
    ///     Cuboid::new([0, 0, 5], [9, 9, 9]),
    /// ]);
    /// assert_eq!(halves.combine().as_slice(), [Cuboid::new([0, 0, 0], [9, 9, 9])]);
    /// ```
    #[must_use]
    pub fn combine(&self) -> Self {
        let unique = self.dedup();
        let mut arena: Vec<Option<Cuboid>> = unique.iter().map(|&c| Some(c)).collect();

        let mut merges = 0usize;
        let mut dropped = 0usize;
        loop {
            // A merged cuboid may enclose members which did not take part in the merge.
            dropped += drop_enclosed(&mut arena);

            let merges_before = merges;
            while let Some((keep, absorb, face)) = find_face_match(&arena) {
                // Both slots are live, as reported by find_face_match().
                let (Some(kept), Some(absorbed)) = (arena[keep], arena[absorb]) else {
                    break;
                };
                let merged = kept.union_box(absorbed);
                log::trace!("combine: {kept:?} + {absorbed:?} across {face:?} = {merged:?}");
                arena[keep] = Some(merged);
                arena[absorb] = None;
                merges += 1;
            }
            if merges == merges_before {
                break;
            }
        }

        let result: Cuboids = arena.into_iter().flatten().collect();
        log::debug!(
            "combine: {input} cuboids in, {duplicates} duplicates, {dropped} enclosed, \
                {merges} merges, {output} out",
            input = self.len(),
            duplicates = self.len() - unique.len(),
            output = result.len(),
        );
        result
    }
}

/// Retires every live cuboid in `arena` which is enclosed by another live cuboid, and
/// returns how many were retired.
///
/// Of two equal cuboids, the later one is retired.
fn drop_enclosed(arena: &mut [Option<Cuboid>]) -> usize {
    let mut dropped = 0;
    for index in 0..arena.len() {
        let Some(cuboid) = arena[index] else { continue };
        let enclosed = arena.iter().enumerate().any(|(other_index, other)| {
            other.is_some_and(|other| {
                other_index != index
                    && other.encloses(cuboid)
                    && (other != cuboid || other_index < index)
            })
        });
        if enclosed {
            arena[index] = None;
            dropped += 1;
        }
    }
    dropped
}

/// Maps every corner of every live cuboid in `arena` to the index of that cuboid.
///
/// If cuboids share a corner, which does not happen in a disjoint collection, the last
/// one wins.
fn corner_map(arena: &[Option<Cuboid>]) -> HashMap<Point, usize> {
    let mut map = HashMap::with_capacity(arena.len() * 8);
    for (index, slot) in arena.iter().enumerate() {
        if let Some(cuboid) = slot {
            for corner in cuboid.corners() {
                map.insert(corner, index);
            }
        }
    }
    map
}

/// Finds the first live cuboid in `arena`, and the first of its faces, for which another
/// live cuboid has exactly the matching opposite face.
///
/// Returns the indices of the cuboid and its neighbor, and the face of the first that
/// touches the second.
fn find_face_match(arena: &[Option<Cuboid>]) -> Option<(usize, usize, Face6)> {
    let corners = corner_map(arena);
    for (index, slot) in arena.iter().enumerate() {
        let Some(cuboid) = slot else { continue };
        for face in Face6::ALL {
            let Some(neighbor) = face_neighbor(&corners, arena, index, *cuboid, face) else {
                continue;
            };
            return Some((index, neighbor, face));
        }
    }
    None
}

fn face_neighbor(
    corners: &HashMap<Point, usize>,
    arena: &[Option<Cuboid>],
    index: usize,
    cuboid: Cuboid,
    face: Face6,
) -> Option<usize> {
    let normal = face.normal_vector();
    let mut touching = [Point::ORIGIN; 4];
    for (slot, corner) in touching.iter_mut().zip(cuboid.face_corners(face)) {
        *slot = corner.checked_add(normal)?;
    }

    let neighbor = *corners.get(&touching[0])?;
    if neighbor == index
        || !touching[1..]
            .iter()
            .all(|point| corners.get(point) == Some(&neighbor))
    {
        return None;
    }
    let neighbor_cuboid = arena[neighbor]?;
    (neighbor_cuboid.face_corners(face.opposite()) == touching).then_some(neighbor)
}
