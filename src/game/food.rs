//! Food placement

use super::grid::{Grid, Position};
use rand::Rng;

/// Pick a uniformly random cell that no segment of `body` occupies.
///
/// Samples the whole grid until a free cell comes up. Returns `None` only
/// when `body` already covers every cell, since no sample could ever succeed.
pub fn place_food<R: Rng + ?Sized>(body: &[Position], grid: Grid, rng: &mut R) -> Option<Position> {
    if body.len() >= grid.area() {
        return None;
    }

    loop {
        let candidate = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if !body.contains(&candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RNG_SEED: u64 = 0x5EED_CAFE;

    /// Row-major walk over the grid, used to build snakes of any length
    fn cells(grid: Grid) -> Vec<Position> {
        (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_food_inside_grid() {
        let grid = Grid::new(8, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let food = place_food(&[Position::ORIGIN], grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert_ne!(food, Position::ORIGIN);
        }
    }

    #[test]
    fn test_food_never_on_snake_for_any_length() {
        let grid = Grid::new(5, 4).unwrap();
        let all = cells(grid);
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        for len in 1..grid.area() {
            let body = &all[..len];
            let food = place_food(body, grid, &mut rng).unwrap();
            assert!(!body.contains(&food), "food {} placed on snake of length {}", food, len);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(3, 3).unwrap();
        let mut body = cells(grid);
        let free = body.remove(4);
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(&body, grid, &mut rng), Some(free));
    }

    #[test]
    fn test_full_grid_has_no_food() {
        let grid = Grid::new(3, 2).unwrap();
        let body = cells(grid);
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(&body, grid, &mut rng), None);
    }
}
