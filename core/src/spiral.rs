//! Centre-out spiral traversal of a square grid
//!
//! The spiral starts at `(n / 2, n / 2)` and walks right, down, left, up,
//! taking `step` moves per leg and growing `step` after every down and up
//! leg. For even `n` the start is the lower-right of the four central
//! cells, so the animation is slightly off-centre. That is the intended
//! order and is kept as is.
//!
//! The raw walk stops once `step >= n` and can leave cells unvisited near
//! the border, so [`spiral_order`] appends a row-major sweep of whatever
//! the walk missed.

/// `(row, col)` moves for right, down, left, up
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The raw spiral walk over an `n`×`n` grid, in-bounds cells only.
///
/// Never yields a cell twice but may miss some; use [`spiral_order`]
/// for a complete traversal.
pub fn spiral_path(n: usize) -> Vec<(usize, usize)> {
    if n == 0 {
        return Vec::new();
    }

    let size = n as isize;
    let in_bounds = |r: isize, c: isize| (0..size).contains(&r) && (0..size).contains(&c);

    let (mut row, mut col) = ((n / 2) as isize, (n / 2) as isize);
    let mut path = vec![(row as usize, col as usize)];
    let mut step = 1;

    while step < n {
        for (leg, (dr, dc)) in DIRECTIONS.iter().enumerate() {
            for _ in 0..step {
                row += dr;
                col += dc;
                if in_bounds(row, col) {
                    path.push((row as usize, col as usize));
                }
            }
            // down and up legs
            if leg % 2 == 1 {
                step += 1;
            }
        }
    }

    path
}

/// Every cell of an `n`×`n` grid exactly once, in spiral order.
///
/// This is [`spiral_path`] followed by a row-major sweep over the cells
/// the walk did not reach.
pub fn spiral_order(n: usize) -> Vec<(usize, usize)> {
    let mut order = spiral_path(n);
    let mut visited = vec![false; n * n];
    for &(row, col) in &order {
        visited[row * n + col] = true;
    }

    let walked = order.len();
    for row in 0..n {
        for col in 0..n {
            if !visited[row * n + col] {
                order.push((row, col));
            }
        }
    }

    if order.len() > walked {
        tracing::debug!(n, missed = order.len() - walked, "spiral sweep filled gaps");
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_grid() {
        assert!(spiral_path(0).is_empty());
        assert!(spiral_order(0).is_empty());
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(spiral_order(1), vec![(0, 0)]);
    }

    #[test]
    fn test_three_by_three_order() {
        let expected = vec![
            (1, 1),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
        ];
        // the walk stops after the first full turn; the sweep adds the top row
        assert_eq!(spiral_path(3), &expected[..7]);
        assert_eq!(spiral_order(3), expected);
    }

    #[test]
    fn test_even_grid_starts_off_centre() {
        assert_eq!(spiral_path(4)[0], (2, 2));
        assert_eq!(spiral_path(2)[0], (1, 1));
    }

    #[test]
    fn test_order_covers_every_cell_once() {
        for n in 1..=45 {
            let order = spiral_order(n);
            assert_eq!(order.len(), n * n, "n = {n}");

            let unique: HashSet<_> = order.iter().copied().collect();
            assert_eq!(unique.len(), n * n, "duplicate cell for n = {n}");
            assert!(order.iter().all(|&(r, c)| r < n && c < n));
        }
    }

    #[test]
    fn test_raw_path_misses_one_border_line() {
        for n in 1..=12 {
            assert_eq!(n * n - spiral_path(n).len(), n - 1, "n = {n}");
        }
    }

    #[test]
    fn test_raw_path_has_no_duplicates() {
        for n in 1..=45 {
            let path = spiral_path(n);
            let unique: HashSet<_> = path.iter().copied().collect();
            assert_eq!(unique.len(), path.len(), "n = {n}");
        }
    }

    #[test]
    fn test_order_starts_with_raw_path() {
        for n in [2, 5, 8, 21, 25] {
            let path = spiral_path(n);
            let order = spiral_order(n);
            assert_eq!(&order[..path.len()], &path[..]);
        }
    }
}
