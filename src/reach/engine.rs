//! Memoized subset-partition search
//!
//! Every value reachable from a set of positions is found by splitting the set
//! into two halves in every allowed way, solving each half, and combining each
//! pair of half results with the four operators. Results from all splits
//! accumulate into one map per set.

use super::error::SolveError;
use super::subset::Subset;
use crate::core::{Op, Witness};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::{debug, trace};

/// Reachable value → the witnesses kept for it
pub type ResultMap = FxHashMap<i64, BTreeSet<Witness>>;

/// Inputs longer than this are always rejected
pub const HARD_MAX_NUMBERS: usize = 10;

/// Ceiling applied when every witness pair is forwarded
pub const EXHAUSTIVE_MAX_NUMBERS: usize = 5;

/// Which witnesses each value keeps, and so which feed combinations one
/// level up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Forwarding {
    /// Keep only the cheapest witness of each value
    #[default]
    Cheapest,
    /// Keep every witness, combining each with every witness of the other half
    Exhaustive,
}

/// Search limits and mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_numbers: usize,
    pub forwarding: Forwarding,
    /// Most candidate expressions one search may build
    pub budget: usize,
}

impl EngineConfig {
    pub const DEFAULT_MAX_NUMBERS: usize = 7;
    pub const DEFAULT_BUDGET: usize = 10_000_000;

    #[must_use]
    pub const fn new(max_numbers: usize, forwarding: Forwarding) -> Self {
        Self {
            max_numbers,
            forwarding,
            budget: Self::DEFAULT_BUDGET,
        }
    }

    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Effective input size ceiling after the hard and mode-specific caps
    #[must_use]
    pub fn limit(&self) -> usize {
        let cap = match self.forwarding {
            Forwarding::Cheapest => HARD_MAX_NUMBERS,
            Forwarding::Exhaustive => EXHAUSTIVE_MAX_NUMBERS,
        };
        self.max_numbers.min(cap)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_NUMBERS, Forwarding::default())
    }
}

/// Request-scoped search over one input
///
/// The cache lives exactly as long as the engine, so memory from one search
/// is released before the next begins.
pub struct Engine<'a> {
    numbers: &'a [i64],
    forwarding: Forwarding,
    cache: FxHashMap<Subset, Rc<ResultMap>>,
    budget: usize,
    built: usize,
}

impl<'a> Engine<'a> {
    /// Create an engine for `numbers`
    ///
    /// # Errors
    /// Returns `SolveError::EmptyInput` for an empty slice and
    /// `SolveError::SearchSpaceTooLarge` if the input exceeds the configured
    /// limit.
    pub fn new(numbers: &'a [i64], config: &EngineConfig) -> Result<Self, SolveError> {
        if numbers.is_empty() {
            return Err(SolveError::EmptyInput);
        }
        let limit = config.limit();
        if numbers.len() > limit {
            return Err(SolveError::SearchSpaceTooLarge {
                len: numbers.len(),
                limit,
            });
        }

        Ok(Self {
            numbers,
            forwarding: config.forwarding,
            cache: FxHashMap::default(),
            budget: config.budget,
            built: 0,
        })
    }

    /// Solve the whole input, consuming the engine
    ///
    /// # Errors
    /// Returns `SolveError::BudgetExceeded` if the search needs more candidate
    /// expressions than the configured budget allows.
    pub fn run(mut self) -> Result<ResultMap, SolveError> {
        let full = Subset::full(self.numbers.len());
        let map = self.reachable(full)?;
        debug!(
            numbers = ?self.numbers,
            subsets = self.cache.len(),
            built = self.built,
            values = map.len(),
            "search complete"
        );
        drop(self.cache);
        Ok(Rc::try_unwrap(map).unwrap_or_else(|shared| (*shared).clone()))
    }

    /// Reachable values for the numbers at `subset`'s positions
    fn reachable(&mut self, subset: Subset) -> Result<Rc<ResultMap>, SolveError> {
        debug_assert!(
            subset.without(Subset::full(self.numbers.len())).is_empty(),
            "subset outside the input"
        );
        if let Some(hit) = self.cache.get(&subset) {
            return Ok(Rc::clone(hit));
        }

        let map = match subset.single() {
            Some(position) => {
                let value = self.numbers[position];
                let mut map = ResultMap::default();
                map.insert(value, BTreeSet::from([Witness::leaf(value)]));
                map
            }
            None => self.combine_splits(subset)?,
        };

        trace!(
            values = ?subset.values(self.numbers),
            reachable = map.len(),
            "subset solved"
        );

        let map = Rc::new(map);
        self.cache.insert(subset, Rc::clone(&map));
        Ok(map)
    }

    fn combine_splits(&mut self, subset: Subset) -> Result<ResultMap, SolveError> {
        let mut out = ResultMap::default();

        for left in subset.splits() {
            let right = subset.without(left);
            let lhs = self.reachable(left)?;
            let rhs = self.reachable(right)?;

            // In cheapest mode every set holds one witness, so this pairs
            // only the cheapest of each side
            for (&a, a_set) in lhs.iter() {
                for (&b, b_set) in rhs.iter() {
                    for wa in a_set {
                        for wb in b_set {
                            self.combine_pair(&mut out, (a, wa), (b, wb))?;
                        }
                    }
                }
            }
            self.propagate(&mut out, &lhs);
            self.propagate(&mut out, &rhs);
        }

        Ok(out)
    }

    /// Carry half results up so values found within one half stay visible
    fn propagate(&self, out: &mut ResultMap, half: &ResultMap) {
        for (&value, set) in half {
            let slot = out.entry(value).or_default();
            for witness in set {
                if !slot.contains(witness) {
                    self.keep(slot, witness.clone());
                }
            }
        }
    }

    /// Record every result of combining one left value with one right value
    fn combine_pair(
        &mut self,
        out: &mut ResultMap,
        left: (i64, &Witness),
        right: (i64, &Witness),
    ) -> Result<(), SolveError> {
        let (a, _) = left;
        let (b, _) = right;

        self.emit(out, Op::Add, left, right)?;
        self.emit(out, Op::Mul, left, right)?;

        match a.cmp(&b) {
            Ordering::Greater => self.emit(out, Op::Sub, left, right)?,
            Ordering::Less => self.emit(out, Op::Sub, right, left)?,
            Ordering::Equal => {}
        }

        if b != 0 && a.checked_rem(b) == Some(0) {
            self.emit(out, Op::Div, left, right)?;
        }
        if a != 0 && b.checked_rem(a) == Some(0) {
            self.emit(out, Op::Div, right, left)?;
        }
        Ok(())
    }

    fn emit(
        &mut self,
        out: &mut ResultMap,
        op: Op,
        (x, xw): (i64, &Witness),
        (y, yw): (i64, &Witness),
    ) -> Result<(), SolveError> {
        let Some(value) = op.apply(x, y) else {
            trace!(lhs = x, rhs = y, op = %op, "result overflows, skipped");
            return Ok(());
        };

        self.built += 1;
        if self.built > self.budget {
            return Err(SolveError::BudgetExceeded {
                budget: self.budget,
            });
        }

        let slot = out.entry(value).or_default();
        let ops = xw.ops() + yw.ops() + 1;
        if self.forwarding == Forwarding::Cheapest
            && slot.first().is_some_and(|best| best.ops() < ops)
        {
            return Ok(());
        }
        self.keep(slot, Witness::combine(xw, yw, op));
        Ok(())
    }

    fn keep(&self, slot: &mut BTreeSet<Witness>, witness: Witness) {
        slot.insert(witness);
        if self.forwarding == Forwarding::Cheapest && slot.len() > 1 {
            slot.pop_last();
        }
    }

    #[cfg(test)]
    fn cached_subsets(&self) -> usize {
        self.cache.len()
    }
}

/// Every value reachable from `numbers`, with witnesses
///
/// # Errors
/// Returns `SolveError::EmptyInput` or `SolveError::SearchSpaceTooLarge`
/// when the input is rejected before searching, and
/// `SolveError::BudgetExceeded` when the search outgrows its budget.
///
/// # Examples
/// ```
/// use puzzle_helpers::reach::{EngineConfig, solve};
///
/// let map = solve(&[3, 4], &EngineConfig::default()).unwrap();
/// assert!(map.contains_key(&7));
/// assert!(map.contains_key(&12));
/// assert!(map.contains_key(&1));
/// ```
pub fn solve(numbers: &[i64], config: &EngineConfig) -> Result<ResultMap, SolveError> {
    Engine::new(numbers, config)?.run()
}

/// Pick the answer for `target`: fewest operations, then smallest text
///
/// # Errors
/// Returns `SolveError::NoSolution` if `target` is not reachable.
pub fn best_witness(map: &ResultMap, target: i64) -> Result<&Witness, SolveError> {
    map.get(&target)
        .and_then(BTreeSet::first)
        .ok_or(SolveError::NoSolution { target })
}

/// Solve `numbers` and return the best witness for `target`
///
/// # Errors
/// Any error from [`solve`] or [`best_witness`].
///
/// # Examples
/// ```
/// use puzzle_helpers::reach::{EngineConfig, find};
///
/// let answer = find(15, &[5, 5, 5], &EngineConfig::default()).unwrap();
/// assert_eq!(answer.expr(), "5 5 + 5 +");
/// assert_eq!(answer.ops(), 2);
/// ```
pub fn find(target: i64, numbers: &[i64], config: &EngineConfig) -> Result<Witness, SolveError> {
    let map = solve(numbers, config)?;
    best_witness(&map, target).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_postfix;
    use rand::Rng;

    fn solve_default(numbers: &[i64]) -> ResultMap {
        solve(numbers, &EngineConfig::default()).unwrap()
    }

    fn keys(map: &ResultMap) -> BTreeSet<i64> {
        map.keys().copied().collect()
    }

    fn exprs(map: &ResultMap, value: i64) -> Vec<&str> {
        map[&value].iter().map(Witness::expr).collect()
    }

    #[test]
    fn singleton_maps_to_itself() {
        for n in [0, 7, -3, 1000] {
            let map = solve_default(&[n]);
            assert_eq!(map.len(), 1);
            assert_eq!(map[&n], BTreeSet::from([Witness::new(0, n.to_string())]));
        }
    }

    #[test]
    fn empty_input_fails_fast() {
        assert_eq!(
            solve(&[], &EngineConfig::default()),
            Err(SolveError::EmptyInput)
        );
    }

    #[test]
    fn oversized_input_is_rejected() {
        let numbers = vec![1; 8];
        assert_eq!(
            solve(&numbers, &EngineConfig::default()),
            Err(SolveError::SearchSpaceTooLarge { len: 8, limit: 7 })
        );

        let config = EngineConfig::new(100, Forwarding::Cheapest);
        let numbers = vec![1; HARD_MAX_NUMBERS + 1];
        assert!(matches!(
            solve(&numbers, &config),
            Err(SolveError::SearchSpaceTooLarge { limit: HARD_MAX_NUMBERS, .. })
        ));
    }

    #[test]
    fn input_at_default_limit_completes() {
        let numbers = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(numbers.len(), EngineConfig::DEFAULT_MAX_NUMBERS);

        let map = solve_default(&numbers);
        assert_eq!(best_witness(&map, 28).unwrap().expr(), "4 7 *");
        let product = best_witness(&map, 5040).unwrap();
        assert_eq!(evaluate_postfix(product.expr()), Ok(5040));
        assert!(map.values().all(|set| set.len() == 1));
    }

    #[test]
    fn search_stops_at_work_budget() {
        let config = EngineConfig::default().with_budget(1_000);
        assert_eq!(
            solve(&[25, 50, 75, 100, 3, 6], &config),
            Err(SolveError::BudgetExceeded { budget: 1_000 })
        );

        // Same input fits comfortably in the default budget
        let config = EngineConfig::default().with_budget(EngineConfig::DEFAULT_BUDGET);
        assert!(solve(&[25, 50, 75, 100, 3, 6], &config).is_ok());
    }

    #[test]
    fn exhaustive_mode_has_lower_ceiling() {
        let config = EngineConfig::new(8, Forwarding::Exhaustive);
        assert_eq!(config.limit(), EXHAUSTIVE_MAX_NUMBERS);
        assert!(matches!(
            solve(&[1, 2, 3, 4, 5, 6], &config),
            Err(SolveError::SearchSpaceTooLarge { len: 6, limit: 5 })
        ));
    }

    #[test]
    fn pair_reaches_sum_product_and_difference() {
        let map = solve_default(&[3, 4]);

        assert_eq!(keys(&map), BTreeSet::from([1, 3, 4, 7, 12]));
        assert!(exprs(&map, 7).contains(&"3 4 +"));
        assert!(exprs(&map, 12).contains(&"3 4 *"));
        assert_eq!(exprs(&map, 1), ["4 3 -"]);
        assert_eq!(best_witness(&map, 7).unwrap().expr(), "3 4 +");

        // Neither 4/3 nor 3/4 is exact
        assert!(
            map.values()
                .flatten()
                .all(|w| !w.expr().ends_with('/'))
        );
    }

    #[test]
    fn equal_pair_has_no_zero_difference() {
        let map = solve_default(&[3, 3]);
        assert_eq!(keys(&map), BTreeSet::from([1, 3, 6, 9]));
        assert_eq!(exprs(&map, 1), ["3 3 /"]);
    }

    #[test]
    fn division_in_both_directions() {
        let map = solve_default(&[12, 4]);
        assert_eq!(exprs(&map, 3), ["12 4 /"]);

        let map = solve_default(&[4, 12]);
        assert_eq!(exprs(&map, 3), ["12 4 /"]);
    }

    #[test]
    fn zero_is_never_a_divisor() {
        let exhaustive = EngineConfig::new(5, Forwarding::Exhaustive);
        let map = solve(&[0, 5], &exhaustive).unwrap();
        assert_eq!(exprs(&map, 0), ["0", "0 5 *", "0 5 /", "5 0 *"]);
        assert_eq!(exprs(&map, 5), ["5", "0 5 +", "5 0 +", "5 0 -"]);
        assert!(map.values().flatten().all(|w| !w.expr().ends_with("0 /")));
    }

    #[test]
    fn three_numbers_target_ten_uses_two_operations() {
        let map = solve_default(&[2, 3, 4]);
        let best = best_witness(&map, 10).unwrap();

        let fewest = map[&10].iter().map(Witness::ops).min().unwrap();
        assert_eq!(best.ops(), fewest);
        assert_eq!(best.ops(), 2);
        assert_eq!(evaluate_postfix(best.expr()), Ok(10));
        assert_eq!(best.expr(), "2 3 * 4 +");
    }

    #[test]
    fn three_fives_make_fifteen() {
        let answer = find(15, &[5, 5, 5], &EngineConfig::default()).unwrap();
        assert_eq!(answer.ops(), 2);
        assert_eq!(answer.expr(), "5 5 + 5 +");
        assert_eq!(evaluate_postfix(answer.expr()), Ok(15));
    }

    #[test]
    fn unreachable_target_reports_no_solution() {
        assert_eq!(
            find(100, &[2, 2], &EngineConfig::default()),
            Err(SolveError::NoSolution { target: 100 })
        );
    }

    #[test]
    fn every_witness_evaluates_to_its_value() {
        for numbers in [&[2, 3, 4][..], &[25, 50, 75, 100, 3], &[-3, 2, 7], &[1, 1, 1, 1]] {
            let map = solve_default(numbers);
            for (&value, set) in &map {
                assert!(!set.is_empty());
                for witness in set {
                    assert_eq!(
                        evaluate_postfix(witness.expr()),
                        Ok(value),
                        "{numbers:?}: {witness}"
                    );
                }
            }
        }
    }

    #[test]
    fn witnesses_use_each_number_at_most_once() {
        let numbers = [2, 3, 7, 11];
        let map = solve_default(&numbers);
        for witness in map.values().flatten() {
            let mut used: Vec<i64> = witness
                .expr()
                .split_whitespace()
                .filter_map(|t| t.parse().ok())
                .collect();
            used.sort_unstable();
            let mut pool = numbers.to_vec();
            for n in used {
                let at = pool.iter().position(|&p| p == n).unwrap();
                pool.remove(at);
            }
        }
    }

    #[test]
    fn op_count_matches_operator_tokens() {
        let map = solve_default(&[1, 2, 3, 4]);
        for witness in map.values().flatten() {
            let operators = witness
                .expr()
                .split_whitespace()
                .filter(|t| Op::from_token(t).is_some())
                .count();
            assert_eq!(witness.ops() as usize, operators, "{witness}");
        }
    }

    #[test]
    fn repeated_solves_agree() {
        let numbers = [6, 1, 9, 4, 7];
        let first = solve_default(&numbers);
        let second = solve_default(&numbers);
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn forwarding_mode_does_not_change_reachable_values() {
        let exhaustive = EngineConfig::new(5, Forwarding::Exhaustive);
        for numbers in [&[2, 3, 4][..], &[5, 5, 5], &[1, 6, 8, 9]] {
            let cheap = solve_default(numbers);
            let full = solve(numbers, &exhaustive).unwrap();
            assert_eq!(keys(&cheap), keys(&full), "{numbers:?}");

            for (&value, set) in &cheap {
                assert!(set.is_subset(&full[&value]), "{numbers:?} value {value}");
                let best_full = full[&value].first().unwrap();
                assert!(best_full.ops() <= set.first().unwrap().ops());
            }
        }
    }

    #[test]
    fn cheapest_mode_keeps_one_witness_per_value() {
        let map = solve_default(&[0, 5]);
        assert_eq!(exprs(&map, 0), ["0"]);
        assert_eq!(exprs(&map, 5), ["5"]);
        assert!(map.values().all(|set| set.len() == 1));
    }

    #[test]
    fn overflowing_results_are_skipped() {
        let map = solve_default(&[i64::MAX, 2]);
        assert_eq!(keys(&map), BTreeSet::from([2, i64::MAX - 2, i64::MAX]));
        for witness in map.values().flatten() {
            assert!(evaluate_postfix(witness.expr()).is_ok());
        }
    }

    #[test]
    fn cache_holds_one_entry_per_subset() {
        let numbers = [1, 2, 3, 4];
        let mut engine = Engine::new(&numbers, &EngineConfig::default()).unwrap();
        engine.reachable(Subset::full(4)).unwrap();
        // Every nonempty subset of four positions
        assert_eq!(engine.cached_subsets(), 15);
    }

    #[test]
    fn run_solves_exactly_the_input_positions() {
        let numbers = [2, 3];
        let engine = Engine::new(&numbers, &EngineConfig::default()).unwrap();
        let map = engine.run().unwrap();
        assert_eq!(keys(&map), BTreeSet::from([1, 2, 3, 5, 6]));
    }

    #[test]
    fn random_inputs_produce_valid_witnesses() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let len = rng.random_range(1..=5);
            let numbers: Vec<i64> = (0..len).map(|_| rng.random_range(1..=25)).collect();
            let map = solve_default(&numbers);

            for &n in &numbers {
                assert!(map.contains_key(&n));
            }
            for (&value, set) in &map {
                let best = set.first().unwrap();
                assert_eq!(evaluate_postfix(best.expr()), Ok(value), "{numbers:?}");
            }
        }
    }
}
