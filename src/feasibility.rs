use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

use crate::common::PersonId;
use crate::households::Households;

/// Whether some assignment lets every person give once and receive once.
///
/// Scores each allowed (giver, receiver) cell 1 and every other cell 0; a
/// complete assignment exists iff the best total reaches the number of people.
pub fn has_complete_assignment<T: PersonId>(households: &Households<T>) -> bool {
    let n = households.len();
    let mut weights = Matrix::new(n, n, 0i64);
    for (g, r) in households.edge_indices() {
        weights[(g, r)] = 1;
    }
    let (total, _) = kuhn_munkres(&weights);
    total == n as i64
}
