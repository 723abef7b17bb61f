//! Property-based tests for the text front end.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use jordan_rings::{Value, Q};

    use crate::{solve, solve_batch, SolverConfig};

    /// Upper triangular integer system with a unit diagonal, its solution and
    /// its text rows. Nonsingular by construction.
    fn triangular_system() -> impl Strategy<Value = (Vec<Vec<String>>, Vec<Q>)> {
        (2usize..=5)
            .prop_flat_map(|n| {
                (
                    prop::collection::vec(-5i64..=5, n * n),
                    prop::collection::vec((-9i64..=9, 1i64..=6), n),
                )
            })
            .prop_map(|(upper, x)| {
                let n = x.len();
                let x: Vec<Q> = x.into_iter().map(|(num, den)| Q::new(num, den)).collect();
                let rows = (0..n)
                    .map(|i| {
                        let a: Vec<Q> = (0..n)
                            .map(|j| match j.cmp(&i) {
                                std::cmp::Ordering::Less => Q::from_integer(0),
                                std::cmp::Ordering::Equal => Q::from_integer(1),
                                std::cmp::Ordering::Greater => Q::from_integer(upper[i * n + j]),
                            })
                            .collect();
                        let b = a
                            .iter()
                            .zip(&x)
                            .fold(Q::from_integer(0), |acc, (a, x)| acc + a.clone() * x.clone());
                        a.iter().chain(std::iter::once(&b)).map(ToString::to_string).collect()
                    })
                    .collect();
                (rows, x)
            })
    }

    proptest! {
        #[test]
        fn text_systems_are_solved_exactly((rows, x) in triangular_system()) {
            let report = solve(&rows, &SolverConfig::default()).unwrap();
            let expected: Vec<Value> = x.into_iter().map(Value::Rational).collect();
            prop_assert_eq!(report.outcome.solution(), Some(expected.as_slice()));
        }

        #[test]
        fn batch_matches_one_by_one(systems in prop::collection::vec(triangular_system(), 1..6)) {
            let config = SolverConfig::default();
            let texts: Vec<Vec<Vec<String>>> = systems.into_iter().map(|(rows, _)| rows).collect();
            let batched = solve_batch(&texts, &config);
            for (rows, result) in texts.iter().zip(batched) {
                prop_assert_eq!(result, solve(rows, &config));
            }
        }
    }
}
