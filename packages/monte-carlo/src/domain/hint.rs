//! Hint search: adjacent same-rank pairs on the tableau.
//!
//! The scan walks ordered index pairs `(i, j)` with `i` outer and `j` inner,
//! both over the full tableau. The first hit therefore always has `i < j`,
//! and a pair is reported as `(coord(j), coord(i))`: later slot first.

use super::coordinate::Coordinate;
use super::tableau::Tableau;

fn scan(tableau: &Tableau) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = tableau.len();
    (0..n)
        .flat_map(move |i| (0..n).map(move |j| (i, j)))
        .filter(move |&(i, j)| tableau.is_matching_pair(i, j))
}

fn to_coordinates(tableau: &Tableau, (i, j): (usize, usize)) -> (Coordinate, Coordinate) {
    (tableau.coordinate_of(j), tableau.coordinate_of(i))
}

/// The first matching pair in scan order, or `None` if no pair exists.
pub fn first_matching_pair(tableau: &Tableau) -> Option<(Coordinate, Coordinate)> {
    scan(tableau)
        .next()
        .map(|pair| to_coordinates(tableau, pair))
}

/// Every matching pair, each listed once in scan order.
pub fn matching_pairs(tableau: &Tableau) -> Vec<(Coordinate, Coordinate)> {
    scan(tableau)
        .filter(|&(i, j)| i < j)
        .map(|pair| to_coordinates(tableau, pair))
        .collect()
}
