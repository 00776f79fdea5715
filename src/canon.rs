use crate::state::{CheckSet, State};
use crate::topology::Topology;

////////////////////////////////////////////////////////////////////////////////

/// Occupancy fingerprint. One bit per node, so a validated topology always
/// fits.
pub type HashValue = u128;

////////////////////////////////////////////////////////////////////////////////

/// Computes symmetry-invariant fingerprints of occupancy vectors: the
/// minimum, over every symmetry ordering of the board, of the bit-weighted
/// sum of the reordered vector. Two states related by a board symmetry hash
/// the same, which is what makes deduplication by hash sound.
///
/// The terminal (all-false) state always hashes to zero.
pub struct Canonicalizer {
    symmetries: Vec<Vec<usize>>,
    powers: Vec<HashValue>,
}

impl Canonicalizer {
    /// Expects a validated topology. A board without symmetries is hashed
    /// under the identity ordering alone.
    pub fn new(topology: &Topology) -> Self {
        let nodes = topology.nodes();
        let mut symmetries = topology.symmetries.clone();
        if symmetries.is_empty() {
            symmetries.push((0..nodes).collect());
        }
        let powers = (0..nodes).map(|power| (1 as HashValue) << power).collect();
        Self { symmetries, powers }
    }

    pub fn hash(&self, state: &State) -> HashValue {
        let occupancy = state.occupancy();
        self.symmetries
            .iter()
            .map(|ordering| {
                ordering
                    .iter()
                    .enumerate()
                    .filter(|&(_, &node)| occupancy[node])
                    .map(|(power, _)| self.powers[power])
                    .sum()
            })
            .min()
            .expect("at least the identity ordering is present")
    }

    /// Order-independent fingerprint of a check-set, used by the neighbor
    /// generator to avoid rebuilding the same subset along two insertion
    /// orders.
    pub fn subset_hash(&self, checks: &CheckSet) -> HashValue {
        checks.iter().map(|&node| self.powers[node]).sum()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::{Canonicalizer, HashValue};
    use crate::state::{CheckSet, State};
    use crate::topology::Topology;

    fn occupied(nodes: usize, at: &[usize]) -> State {
        State::from_occupancy((0..nodes).map(|node| at.contains(&node)).collect())
    }

    /// Ring of `n` nodes: every rotation is an automorphism.
    fn ring(n: usize) -> Topology {
        let connections = (0..n).map(|i| vec![(i + n - 1) % n, (i + 1) % n]).collect();
        let symmetries = (0..n)
            .map(|shift| (0..n).map(|i| (i + shift) % n).collect())
            .collect();
        Topology::new(connections, symmetries).unwrap()
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn terminal_hashes_to_zero() {
        let topology = Topology::line(4);
        let canon = Canonicalizer::new(&topology);
        assert_eq!(canon.hash(&occupied(4, &[])), 0);
        assert!(canon.hash(&State::full(4)) != 0);
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn mirrored_states_collide() {
        let topology = Topology::line(5);
        let canon = Canonicalizer::new(&topology);
        // #.... and ....# are the same state up to the reverse symmetry
        let left = occupied(5, &[0]);
        let right = occupied(5, &[4]);
        assert_eq!(canon.hash(&left), canon.hash(&right));
        assert!(canon.hash(&left) != canon.hash(&occupied(5, &[1])));
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[rstest]
    #[case(4)]
    #[case(7)]
    fn rotation_invariance(#[case] n: usize) {
        let topology = ring(n);
        let canon = Canonicalizer::new(&topology);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let at: Vec<usize> = (0..n).filter(|_| rng.random_bool(0.5)).collect();
            let hash = canon.hash(&occupied(n, &at));
            for shift in 0..n {
                let rotated: Vec<usize> = at.iter().map(|&node| (node + shift) % n).collect();
                assert_eq!(hash, canon.hash(&occupied(n, &rotated)));
            }
        }
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn minimality_by_brute_force() {
        let topology = Topology::line(5);
        let canon = Canonicalizer::new(&topology);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let at: Vec<usize> = (0..5).filter(|_| rng.random_bool(0.5)).collect();
            let s = occupied(5, &at);
            let brute: HashValue = topology
                .symmetries
                .iter()
                .map(|ordering| {
                    ordering
                        .iter()
                        .enumerate()
                        .filter(|&(_, node)| s.occupancy()[*node])
                        .map(|(power, _)| (1 as HashValue) << power)
                        .sum()
                })
                .min()
                .unwrap();
            assert_eq!(canon.hash(&s), brute);
        }
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn no_symmetries_falls_back_to_identity() {
        let topology = Topology::new(vec![vec![1], vec![0]], vec![]).unwrap();
        let canon = Canonicalizer::new(&topology);
        assert_eq!(canon.hash(&occupied(2, &[0])), 1);
        assert_eq!(canon.hash(&occupied(2, &[1])), 2);
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn subset_hash_is_order_free() {
        let topology = Topology::line(5);
        let canon = Canonicalizer::new(&topology);
        assert_eq!(
            canon.subset_hash(&CheckSet::from([1, 3])),
            canon.subset_hash(&CheckSet::from([3, 1]))
        );
        assert_eq!(canon.subset_hash(&CheckSet::from([0, 2])), 0b101);
    }
}
