use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major rectangular storage. Indexing with a position outside the bounds panics,
/// use `get` when the position is not known to be inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid { bounds, cells }
    }

    /// Builds a grid from rows that are already known to be rectangular.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let bounds = BoundsOriginRoot::new(
            rows.len() as i32,
            rows.first().map_or(0, |row| row.len()) as i32,
        );
        let cells = rows.into_iter().flatten().collect::<Vec<_>>();
        debug_assert_eq!(cells.len(), bounds.area() as usize, "rows must be rectangular");
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &Vec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let cols = self.bounds.cols.max(1);
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let index = index as i32;
            (Vec2 { i: index / cols, j: index % cols }, cell)
        })
    }

    fn index_of(&self, pos: &Vec2) -> usize {
        (pos.i * self.bounds.cols + pos.j) as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_outside_bounds_is_none() {
        let grid = BoundedGrid::new(BoundsOriginRoot::new(2, 3), 0u8);

        assert_eq!(grid.get(&Vec2::new(1, 2)), Some(&0));
        assert_eq!(grid.get(&Vec2::new(2, 0)), None);
        assert_eq!(grid.get(&Vec2::new(0, 3)), None);
        assert_eq!(grid.get(&Vec2::new(-1, 0)), None);
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid = BoundedGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        let rows = grid.rows().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
        assert_eq!(grid[&Vec2::new(1, 0)], 4);
        assert_eq!(
            grid.iter_positions().find(|(_, v)| **v == 6).map(|(pos, _)| pos),
            Some(Vec2::new(1, 2))
        );
    }
}
