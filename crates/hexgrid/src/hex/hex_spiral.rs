use crate::hex::{HexCoord, HexDirection};
use std::iter::FusedIterator;

/// The largest ring radius whose cells fit into `i32` coordinates.
pub const MAX_RING_RADIUS: u32 = (i32::MAX / 2) as u32;

/// Number of cells on the rings `0..=radius`, rings beyond [`MAX_RING_RADIUS`] are not counted.
pub(crate) fn spiral_len(radius: u32) -> u64 {
    let radius = radius.min(MAX_RING_RADIUS) as u64;
    1 + 3 * radius * (radius + 1)
}

fn to_size_hint(len: u64) -> (usize, Option<usize>) {
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    (len, Some(len))
}

/// Iterator that yields the cells of a single ring around the origin.
///
/// The walk starts at the left-most cell, `(-2r, 0)`, and follows [`HexDirection::CLOCKWISE`],
/// taking `r` steps in each direction. Ring 0 is the origin alone.
/// Rings beyond [`MAX_RING_RADIUS`] cannot be represented and are empty.
#[derive(Debug, Clone)]
pub struct RingIterator {
    radius: u32,
    current: HexCoord,
    direction_idx: usize,
    steps_taken: u32,
    remaining: u64,
}

impl RingIterator {
    pub fn new(radius: u32) -> Self {
        if radius > MAX_RING_RADIUS {
            return Self {
                radius,
                current: HexCoord::origin(),
                direction_idx: 0,
                steps_taken: 0,
                remaining: 0,
            };
        }

        let current = HexCoord::new(-2 * radius as i32, 0);
        let remaining = (radius as u64 * 6).max(1);

        Self {
            radius,
            current,
            direction_idx: 0,
            steps_taken: 0,
            remaining,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl Iterator for RingIterator {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.current;
        if self.radius > 0 {
            if self.steps_taken >= self.radius {
                self.direction_idx += 1;
                self.steps_taken = 0;
            }
            self.current = self.current + HexDirection::CLOCKWISE[self.direction_idx];
            self.steps_taken += 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        to_size_hint(self.remaining)
    }
}

impl ExactSizeIterator for RingIterator {}
impl FusedIterator for RingIterator {}

/// Iterator that yields every cell up to the given radius, ring by ring from the origin outwards.
/// The radius is clamped to [`MAX_RING_RADIUS`].
#[derive(Debug, Clone)]
pub struct SpiralIterator {
    radius: u32,
    current_radius: u32,
    ring: RingIterator,
}

impl SpiralIterator {
    pub fn new(radius: u32) -> Self {
        Self {
            radius: radius.min(MAX_RING_RADIUS),
            current_radius: 0,
            ring: RingIterator::new(0),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl Iterator for SpiralIterator {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(coord) = self.ring.next() {
            Some(coord)
        } else if self.current_radius < self.radius {
            self.current_radius += 1;
            self.ring = RingIterator::new(self.current_radius);
            self.ring.next()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let outer = spiral_len(self.radius) - spiral_len(self.current_radius);
        to_size_hint(self.ring.remaining + outer)
    }
}

impl ExactSizeIterator for SpiralIterator {}
impl FusedIterator for SpiralIterator {}
