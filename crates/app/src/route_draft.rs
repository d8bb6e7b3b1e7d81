use rand::seq::SliceRandom;
use rand::Rng;
use shared_types::{AppError, Junction, RouteJunction};

pub const MIN_ROUTE_JUNCTIONS: usize = 2;
pub const MAX_ROUTE_JUNCTIONS: usize = 4;

pub const NOT_ENOUGH_JUNCTIONS: &str = "Not enough junctions available";

/// Pick a random route of 2 to 4 distinct junctions, each with a random lane
/// to clear. Junctions without lanes are never picked.
pub fn random_route(junctions: &[Junction], rng: &mut impl Rng) -> Result<Vec<RouteJunction>, AppError> {
    let mut pool: Vec<&Junction> = junctions.iter().filter(|j| j.lanes > 0).collect();
    if pool.len() < MIN_ROUTE_JUNCTIONS {
        return Err(AppError::bad_request(NOT_ENOUGH_JUNCTIONS));
    }

    let count = rng
        .gen_range(MIN_ROUTE_JUNCTIONS..=MAX_ROUTE_JUNCTIONS)
        .min(pool.len());
    pool.shuffle(rng);

    Ok(pool
        .into_iter()
        .take(count)
        .zip(1..)
        .map(|(junction, order)| RouteJunction {
            junction_id: junction.id,
            junction_name: junction.name.clone(),
            lane_to_clear: rng.gen_range(1..=junction.lanes),
            order,
        })
        .collect())
}
