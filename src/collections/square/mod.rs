mod coord;
mod vector;

pub use self::coord::Coord;
pub use self::vector::Dimension;
pub use self::vector::VectorId;

use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

/// A container of elements represented in a square grid, stored row by row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Create a new `Square` of a specified width and fill with a specified value
    pub fn with_width_and_value(width: usize, val: T) -> Square<T>
    where
        T: Clone,
    {
        Square {
            width,
            elements: vec![val; width.pow(2)],
        }
    }

    /// Creates a square from a list of rows, each as long as the list itself
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Square<T>, NonSquareLength> {
        let width = rows.len();
        let total = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|row| row.len() != width) {
            return Err(NonSquareLength(total));
        }
        let elements = rows.into_iter().flatten().collect();
        Ok(Self { width, elements })
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the element at `coord`, or `None` if it lies outside of the square
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.index_of(coord).map(|i| &self.elements[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        match self.index_of(coord) {
            Some(i) => Some(&mut self.elements[i]),
            None => None,
        }
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on a zero chunk size
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over the elements of a row or column, in order of position
    pub fn vector(&self, vector_id: VectorId) -> impl Iterator<Item = &T> + '_ {
        assert!(vector_id.index() < self.width);
        (0..self.width).map(move |i| &self[vector_id.coord_at(i)])
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i % width, i / width), e))
    }

    /// Returns every coordinate in the square, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..width.pow(2)).map(move |i| Coord::new(i % width, i / width))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.col() < self.width && coord.row() < self.width {
            Some(coord.row() * self.width + coord.col())
        } else {
            None
        }
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        match self.get(coord) {
            Some(e) => e,
            None => panic!("{:?} is outside of a square of width {}", coord, self.width),
        }
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let width = self.width;
        match self.get_mut(coord) {
            Some(e) => e,
            None => panic!("{:?} is outside of a square of width {}", coord, width),
        }
    }
}

impl<T> Display for Square<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self
            .elements
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.rows() {
            for element in row {
                write!(f, "{:>1$} ", element, len)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(PartialEq)]
pub struct NonSquareLength(usize);

impl Debug for NonSquareLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The length of elements ({}) is not square", self.0)
    }
}

impl<T> TryFrom<Vec<T>> for Square<T> {
    type Error = NonSquareLength;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        let width = (elements.len() as f64).sqrt() as usize;
        if elements.len() != width.pow(2) {
            return Err(NonSquareLength(elements.len()));
        }
        Ok(Self { width, elements })
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::square::{Coord, NonSquareLength, VectorId};
    use crate::collections::Square;
    use std::convert::TryFrom;

    #[test]
    fn try_from_vec() {
        assert!(Square::try_from(vec![1; 9]).is_ok())
    }

    #[test]
    fn try_from_non_square_vec() {
        assert_eq!(Err(NonSquareLength(8)), Square::try_from(vec![1; 8]))
    }

    #[test]
    fn from_ragged_rows() {
        assert_eq!(
            Err(NonSquareLength(3)),
            Square::from_rows(vec![vec![1, 2], vec![3]])
        )
    }

    #[test]
    fn index_by_coord() {
        let square = Square::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(2, square[Coord::new(1, 0)]);
        assert_eq!(3, square[Coord::new(0, 1)]);
        assert_eq!(None, square.get(Coord::new(2, 0)));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let square = Square::with_width_and_value(2, 0);
        let _value: i32 = square[Coord::new(0, 2)];
    }

    #[test]
    fn vector() {
        let square = Square::try_from((1..=9).collect::<Vec<_>>()).unwrap();
        assert_eq!(
            vec![2, 5, 8],
            square.vector(VectorId::col(1)).copied().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![7, 8, 9],
            square.vector(VectorId::row(2)).copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn display() {
        let square = Square::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!("1 2 \n2 1 \n", square.to_string());
    }
}
