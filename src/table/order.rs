use super::position::Position;

/// Acting order for one street: every seat exactly once, starting from the
/// seat first to act and continuing clockwise in physical seat order.
///
/// Heads-up the small blind doubles as the button and opens preflop while
/// the big blind opens postflop; at 3+ seats preflop opens one past the big
/// blind and postflop opens at the small blind. Recompute per street, never
/// persist: the order depends only on table geometry.
pub fn acting(seats: &[String], ring: &[Position], preflop: bool) -> Vec<String> {
    let count = seats.len();
    let paired = seats
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat < ring.len())
        .map(|(seat, _)| (seat, ring[seat]))
        .collect::<Vec<(usize, Position)>>();
    let start = if count == 2 {
        match preflop {
            true => paired.iter().find(|(_, p)| p.is_small()),
            false => paired.iter().find(|(_, p)| p.is_big()),
        }
    } else if preflop {
        let big = paired
            .iter()
            .find(|(_, p)| p.is_big())
            .map(|(seat, _)| *seat)
            .unwrap_or(0);
        paired
            .iter()
            .filter(|(_, p)| !p.is_blind())
            .min_by_key(|(seat, _)| (seat + count - big) % count)
    } else {
        paired.iter().find(|(_, p)| p.is_small())
    };
    match start {
        None => seats.to_vec(),
        Some((first, _)) => (0..count)
            .map(|offset| seats[(first + offset) % count].clone())
            .collect(),
    }
}
