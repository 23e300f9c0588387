use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Unit;

/// Deals `num_colors * vial_size` units (one full vial's worth of each color)
/// into `num_colors` vials of `vial_size` units each, uniformly shuffled.
///
/// Stateless: the caller supplies the RNG, appends whatever empty vials it
/// wants, and decides how to persist the result.
pub fn generate_vials<R: Rng>(num_colors: usize, vial_size: usize, rng: &mut R) -> Vec<Vec<Unit>> {
    if num_colors == 0 || vial_size == 0 {
        return Vec::new();
    }

    let mut pool: Vec<Unit> = Vec::with_capacity(num_colors * vial_size);
    for color in 0..num_colors {
        pool.extend(std::iter::repeat(color as Unit).take(vial_size));
    }

    pool.shuffle(rng);

    pool.chunks(vial_size).map(|chunk| chunk.to_vec()).collect()
}
