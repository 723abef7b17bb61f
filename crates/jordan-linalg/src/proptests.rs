//! Property-based tests for the elimination engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use jordan_rings::traits::Ring;
    use jordan_rings::Q;

    use crate::{
        eliminate, eliminate_with, AugmentedMatrix, ClassificationPolicy, DenseMatrix,
        EliminationOptions, NoSolutionReason, Outcome, StepKind,
    };

    type Rows = Vec<Vec<Q>>;

    fn to_q(rows: &[Vec<i64>]) -> Rows {
        rows.iter()
            .map(|r| r.iter().copied().map(Q::from_integer).collect())
            .collect()
    }

    fn is_nonsingular(coefficients: &[Vec<i64>]) -> bool {
        DenseMatrix::try_from_rows(to_q(coefficients))
            .map(|m| m.rank() == coefficients.len())
            .unwrap_or(false)
    }

    /// A nonsingular integer system `[A|A·x]` together with its solution `x`.
    fn unique_system() -> impl Strategy<Value = (Rows, Vec<Q>)> {
        (2usize..=4)
            .prop_flat_map(|n| {
                (
                    prop::collection::vec(prop::collection::vec(-6i64..=6, n), n),
                    prop::collection::vec((-9i64..=9, 1i64..=4), n),
                )
            })
            .prop_filter("coefficient matrix must be nonsingular", |(a, _)| {
                is_nonsingular(a)
            })
            .prop_map(|(a, x)| {
                let x: Vec<Q> = x.into_iter().map(|(num, den)| Q::new(num, den)).collect();
                let rows = to_q(&a)
                    .into_iter()
                    .map(|mut row| {
                        let b = row
                            .iter()
                            .zip(&x)
                            .fold(Q::zero(), |acc, (a, x)| acc + a.clone() * x.clone());
                        row.push(b);
                        row
                    })
                    .collect();
                (rows, x)
            })
    }

    fn augmented(rows: Rows) -> AugmentedMatrix<Q> {
        AugmentedMatrix::try_from_rows(rows).unwrap()
    }

    proptest! {
        #[test]
        fn unique_systems_are_solved_exactly((rows, x) in unique_system()) {
            let original = augmented(rows);
            let mut m = original.clone();
            let result = eliminate(&mut m);

            prop_assert_eq!(result.outcome.solution(), Some(x.as_slice()));
            prop_assert!(original.residual(&x).unwrap().iter().all(Ring::is_zero));
        }

        #[test]
        fn row_permutations_do_not_change_the_solution(
            (rows, x) in unique_system(),
            shift in 0usize..4,
            reverse in any::<bool>(),
        ) {
            let mut permuted = rows.clone();
            let n = permuted.len();
            permuted.rotate_left(shift % n);
            if reverse {
                permuted.reverse();
            }

            let result = eliminate(&mut augmented(permuted));
            prop_assert_eq!(result.outcome, Outcome::Unique(x));
        }

        #[test]
        fn pivots_are_exactly_one_after_normalization((rows, _) in unique_system()) {
            let result = eliminate(&mut augmented(rows));
            for step in &result.steps {
                if let StepKind::Normalize { row, .. } = step.kind() {
                    prop_assert!(step.snapshot().coefficient(*row, *row).is_one());
                }
            }
        }

        #[test]
        fn recorded_snapshots_are_never_rewritten((rows, _) in unique_system()) {
            let input = augmented(rows);
            let mut m = input.clone();
            let result = eliminate(&mut m);

            prop_assert_eq!(result.steps[0].snapshot(), &input);
            prop_assert_eq!(result.steps.last().unwrap().snapshot(), &m);
        }

        #[test]
        fn contradictions_end_the_log((rows, _) in unique_system(), bump in 1i64..5) {
            // Duplicate the first equation with a shifted constant.
            let mut rows = rows;
            let mut clash = rows[0].clone();
            let last = clash.len() - 1;
            clash[last] = clash[last].clone() + Q::from_integer(bump);
            let n = rows.len();
            rows[n - 1] = clash;

            let options = EliminationOptions {
                policy: ClassificationPolicy::RankAware,
                ..EliminationOptions::default()
            };
            let result = eliminate_with(&mut augmented(rows), &options);

            match result.outcome {
                Outcome::NoSolution(NoSolutionReason::ContradictoryEquation { row }) => {
                    let last = result.steps.last().unwrap().snapshot();
                    prop_assert!(last.is_contradiction(row));
                }
                Outcome::NoSolution(NoSolutionReason::Inconsistent) => {}
                other => prop_assert!(false, "expected no solution, got {:?}", other),
            }
        }
    }
}
