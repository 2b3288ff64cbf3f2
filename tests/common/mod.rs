use rand::Rng;
use rand_pcg::Pcg64;
use unitflow::Network;

/// Arc description `(from, to, capacity, cost)`.
pub type Arc = (usize, usize, i64, i64);

/// Random network on `vertices` vertices. With `acyclic` all arcs point from lower to higher ids
/// and costs may be negative; otherwise costs are non-negative.
pub fn random_arcs(
    rand: &mut Pcg64,
    vertices: usize,
    arcs: usize,
    max_capacity: i64,
    acyclic: bool,
) -> Vec<Arc> {
    (0..arcs)
        .map(|_| loop {
            let from = rand.gen_range(0..vertices);
            let to = rand.gen_range(0..vertices);
            if from == to || (acyclic && from > to) {
                continue;
            }
            let capacity = rand.gen_range(0..=max_capacity);
            let cost = if acyclic {
                rand.gen_range(-5..=9)
            } else {
                rand.gen_range(0..=9)
            };
            break (from, to, capacity, cost);
        })
        .collect()
}

pub fn build(vertices: usize, arcs: &[Arc]) -> Network<i64> {
    let mut network = Network::new(vertices);
    for (number, &(from, to, capacity, cost)) in arcs.iter().enumerate() {
        network.add_edge(from, to, capacity, cost, number);
    }
    network
}

/// Enumerates every integral flow assignment and returns, per flow value, the cheapest cost.
///
/// Index `v` of the result holds the minimum cost of sending exactly `v` units, or `None` if no
/// assignment carries `v` units.
pub fn brute_force(vertices: usize, arcs: &[Arc], source: usize, sink: usize) -> Vec<Option<i64>> {
    let mut best: Vec<Option<i64>> = Vec::new();
    let mut flow = vec![0i64; arcs.len()];

    loop {
        let mut excess = vec![0i64; vertices];
        for (&(from, to, _, _), &f) in arcs.iter().zip(&flow) {
            excess[from] -= f;
            excess[to] += f;
        }
        let conserved = (0..vertices)
            .filter(|&v| v != source && v != sink)
            .all(|v| excess[v] == 0);
        if conserved && excess[sink] >= 0 {
            let value = excess[sink] as usize;
            let cost: i64 = arcs.iter().zip(&flow).map(|(arc, &f)| arc.3 * f).sum();
            if best.len() <= value {
                best.resize(value + 1, None);
            }
            best[value] = Some(best[value].map_or(cost, |c| c.min(cost)));
        }

        // next assignment, odometer style
        let mut idx = 0;
        loop {
            if idx == arcs.len() {
                return best;
            }
            if flow[idx] < arcs[idx].2 {
                flow[idx] += 1;
                break;
            }
            flow[idx] = 0;
            idx += 1;
        }
    }
}

/// Largest flow value for which a cheapest cost is known.
pub fn max_flow(best: &[Option<i64>]) -> usize {
    best.iter().rposition(Option::is_some).unwrap_or(0)
}
