use crate::hex::{spiral_len, HexCoord, HexGridConfig, HexGridError, RingIterator, SpiralIterator};
use std::{
    collections::HashMap,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

/// A hexagonal grid of values with a fixed radius around the origin.
///
/// Only the written cells are stored, every other in-bounds cell reads as the default value.
/// A coordinate is in bounds if it has even parity and `(|x| + |y|) / 2` does not exceed the radius.
#[derive(Debug, Clone)]
pub struct HexGrid<T> {
    radius: u32,
    default: T,
    cells: HashMap<HexCoord, T>,
}

impl<T> HexGrid<T>
where
    T: Default,
{
    pub fn new(radius: i32) -> Result<Self, HexGridError> {
        let radius = u32::try_from(radius).map_err(|_| {
            log::warn!("Rejecting hex grid with negative radius: {radius}");
            HexGridError::InvalidArgument { radius }
        })?;

        log::debug!("Creating hex grid, radius: {radius}");
        Ok(Self {
            radius,
            default: T::default(),
            cells: HashMap::new(),
        })
    }

    pub fn from_config(config: &HexGridConfig) -> Result<Self, HexGridError> {
        Self::new(config.radius)
    }

    /// Get a mutable reference to the value of a cell.
    /// If the cell was not written yet, it is initialized with the default value.
    pub fn get_mut<C>(&mut self, coord: C) -> Result<&mut T, HexGridError>
    where
        C: Into<HexCoord>,
    {
        let coord = self.check_bounds(coord.into())?;
        Ok(self.cells.entry(coord).or_default())
    }
}

impl<T> HexGrid<T> {
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The value of the cells that were never written.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of cells visited by the enumeration, `1 + 3R(R+1)`.
    pub fn cell_count(&self) -> u64 {
        spiral_len(self.radius)
    }

    /// Number of the cells that were written.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds<C>(&self, coord: C) -> bool
    where
        C: Into<HexCoord>,
    {
        let coord = coord.into();
        coord.is_valid() && coord.min_radius() <= self.radius as u64
    }

    fn check_bounds(&self, coord: HexCoord) -> Result<HexCoord, HexGridError> {
        if self.is_in_bounds(coord) {
            Ok(coord)
        } else {
            Err(HexGridError::OutOfBounds { coord, radius: self.radius })
        }
    }

    /// Try to get a reference to the value of a cell.
    /// Returns the default value if the cell is not written yet and None if it is out of bounds.
    pub fn try_get<C>(&self, coord: C) -> Option<&T>
    where
        C: Into<HexCoord>,
    {
        self.get(coord).ok()
    }

    /// Get a reference to the value of a cell.
    /// Returns the default value if the cell is not written yet.
    pub fn get<C>(&self, coord: C) -> Result<&T, HexGridError>
    where
        C: Into<HexCoord>,
    {
        let coord = self.check_bounds(coord.into())?;
        Ok(self.cells.get(&coord).unwrap_or(&self.default))
    }

    /// Set the value of a cell, overwriting the previous value.
    pub fn put<C>(&mut self, coord: C, value: T) -> Result<(), HexGridError>
    where
        C: Into<HexCoord>,
    {
        let coord = self.check_bounds(coord.into())?;
        self.cells.insert(coord, value);
        Ok(())
    }

    /// Iterate over the cells in spiral order: the origin first, then each ring walked clockwise
    /// starting at its left-most cell. Cells that were not written yield the default value.
    ///
    /// The walk covers the cells within `radius` steps of the origin. The bounds check admits a few
    /// more cells along the vertical axis, (0, ±2R) for example, those can be written and read but
    /// are not part of the enumeration.
    pub fn iter(&self) -> HexGridIter<'_, T> {
        HexGridIter {
            grid: self,
            coords: self.coords(),
        }
    }

    /// Iterate over the coordinates in the order of [`HexGrid::iter`].
    pub fn coords(&self) -> SpiralIterator {
        SpiralIterator::new(self.radius)
    }

    /// Iterate over the coordinates of a single ring.
    /// Rings beyond the radius of the grid or beyond [`MAX_RING_RADIUS`](crate::hex::MAX_RING_RADIUS) are empty.
    pub fn ring(&self, radius: u32) -> impl Iterator<Item = HexCoord> {
        let ring = (radius <= self.radius).then(|| RingIterator::new(radius));
        ring.into_iter().flatten()
    }

    /// Iterator over the written cells in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (HexCoord, &T)> {
        self.cells.iter().map(|(coord, value)| (*coord, value))
    }
}

impl<T, C> Index<C> for HexGrid<T>
where
    C: Into<HexCoord>,
{
    type Output = T;

    /// # Panics
    /// Panics if the coordinate is out of bounds.
    fn index(&self, coord: C) -> &Self::Output {
        match self.get(coord) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, C> IndexMut<C> for HexGrid<T>
where
    T: Default,
    C: Into<HexCoord>,
{
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    fn index_mut(&mut self, coord: C) -> &mut Self::Output {
        match self.get_mut(coord) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> TryFrom<HexGridConfig> for HexGrid<T>
where
    T: Default,
{
    type Error = HexGridError;

    fn try_from(config: HexGridConfig) -> Result<Self, Self::Error> {
        Self::from_config(&config)
    }
}

impl<'a, T> IntoIterator for &'a HexGrid<T> {
    type Item = (HexCoord, &'a T);
    type IntoIter = HexGridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`HexGrid`] in spiral order.
#[derive(Debug, Clone)]
pub struct HexGridIter<'a, T> {
    grid: &'a HexGrid<T>,
    coords: SpiralIterator,
}

impl<'a, T> Iterator for HexGridIter<'a, T> {
    type Item = (HexCoord, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        self.coords
            .next()
            .map(|coord| (coord, grid.cells.get(&coord).unwrap_or(&grid.default)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coords.size_hint()
    }
}

impl<T> ExactSizeIterator for HexGridIter<'_, T> {}
impl<T> FusedIterator for HexGridIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::MAX_RING_RADIUS;
    use hexgrid_test::test;

    #[test]
    fn test_new() {
        let grid = HexGrid::<u8>::new(2).unwrap();
        assert_eq!(grid.radius(), 2);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.default_value(), &0);

        assert_eq!(
            HexGrid::<u8>::new(-1).unwrap_err(),
            HexGridError::InvalidArgument { radius: -1 }
        );
        assert!(HexGrid::<u8>::new(i32::MIN).is_err());
        assert!(HexGrid::<u8>::new(i32::MAX).is_ok());
    }

    #[test]
    fn test_from_config() {
        let grid = HexGrid::<String>::try_from(HexGridConfig::new(4)).unwrap();
        assert_eq!(grid.radius(), 4);

        let err = HexGrid::<String>::from_config(&HexGridConfig::new(-3)).unwrap_err();
        assert_eq!(err, HexGridError::InvalidArgument { radius: -3 });
    }

    #[test]
    fn test_cell_count() {
        let counts: Vec<_> = (0..4)
            .map(|r| HexGrid::<u8>::new(r).unwrap().cell_count())
            .collect();
        assert_eq!(counts, [1, 7, 19, 37]);
    }

    #[test]
    fn test_bounds_on_axis() {
        let grid = HexGrid::<u8>::new(1).unwrap();
        assert!(grid.is_in_bounds((0, 2)));
        assert!(grid.is_in_bounds((0, -2)));
        assert!(!grid.is_in_bounds((0, 4)));
        assert!(!grid.is_in_bounds((3, 1)));
        assert!(grid.coords().all(|c| c != HexCoord::new(0, 2)));
    }

    #[test]
    fn test_get_mut() {
        let mut grid = HexGrid::<u32>::new(1).unwrap();
        *grid.get_mut((1, 1)).unwrap() += 3;
        *grid.get_mut((1, 1)).unwrap() += 4;
        assert_eq!(grid.get((1, 1)), Ok(&7));
        assert_eq!(grid.occupied_count(), 1);

        assert_eq!(
            grid.get_mut((1, 0)).unwrap_err(),
            HexGridError::OutOfBounds {
                coord: HexCoord::new(1, 0),
                radius: 1
            }
        );
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_ring() {
        let grid = HexGrid::<u8>::new(2).unwrap();
        assert_eq!(grid.ring(0).count(), 1);
        assert_eq!(grid.ring(2).count(), 12);
        assert_eq!(grid.ring(3).count(), 0);
    }

    #[test]
    fn test_ring_of_huge_grid() {
        let grid = HexGrid::<u8>::new(i32::MAX).unwrap();
        assert_eq!(grid.ring((1 << 30) + 1).count(), 0);
        assert_eq!(grid.ring(i32::MAX as u32).count(), 0);
        assert_eq!(grid.ring(u32::MAX).count(), 0);

        let max = MAX_RING_RADIUS as i32;
        let first: Vec<_> = grid.ring(MAX_RING_RADIUS).take(2).collect();
        assert_eq!(first, [HexCoord::new(-2 * max, 0), HexCoord::new(-2 * max + 1, 1)]);

        assert_eq!(grid.cell_count(), spiral_len(MAX_RING_RADIUS));
        assert_eq!(grid.coords().radius(), MAX_RING_RADIUS);
    }

    #[test]
    fn test_error_message() {
        let grid = HexGrid::<u8>::new(2).unwrap();
        let err = grid.get((5, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The referenced cell (5, 0) is out of bounds for a grid with radius: 2"
        );
    }
}
