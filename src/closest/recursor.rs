use thiserror::Error;
use tracing::trace;

use crate::closest::InternalInvariantError;
use crate::closest::order::DualOrder;
use crate::closest::pair::CandidatePair;
use crate::closest::stripe::{collect_stripe, nearest_in_stripe};
use crate::geom::point::Point;
use crate::limits::{LimitExceeded, LimitKind, Limits};
use crate::trace::{Trace, TraceStep};

/// 不超过该点数的区间直接暴力求解。
pub const BASE_CASE_MAX_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ClosestPairError {
    #[error(transparent)]
    Internal(#[from] InternalInvariantError),
    #[error(transparent)]
    Limits(#[from] LimitExceeded),
}

/// 分治求欧氏距离（向下取整）最近的点对。
///
/// 说明：
/// - 要求点两两不同且至少 2 个点（由输入校验保证）；
/// - 每层递归只对父区间的 y 序列表做保序过滤，不重新排序。
pub fn find_closest_pair(order: &DualOrder) -> Result<CandidatePair, ClosestPairError> {
    find_closest_pair_with_limits(order, Limits::default())
}

pub fn find_closest_pair_with_trace(
    order: &DualOrder,
) -> Result<(CandidatePair, Trace), ClosestPairError> {
    find_closest_pair_with_trace_and_limits(order, Limits::default())
}

pub fn find_closest_pair_with_limits(
    order: &DualOrder,
    limits: Limits,
) -> Result<CandidatePair, ClosestPairError> {
    run_divide_and_conquer(order, None, limits)
}

pub fn find_closest_pair_with_trace_and_limits(
    order: &DualOrder,
    limits: Limits,
) -> Result<(CandidatePair, Trace), ClosestPairError> {
    let mut trace = Trace::default();
    let pair = run_divide_and_conquer(order, Some(&mut trace), limits)?;
    Ok((pair, trace))
}

fn run_divide_and_conquer(
    order: &DualOrder,
    trace: Option<&mut Trace>,
    limits: Limits,
) -> Result<CandidatePair, ClosestPairError> {
    if order.len() < 2 {
        return Err(InternalInvariantError::BaseCaseTooSmall { len: order.len() }.into());
    }

    let mut recursor = Recursor {
        x_order: order.x_order(),
        limits,
        trace,
    };
    recursor.solve(order.y_order(), 0, order.len() - 1, 0)
}

struct Recursor<'a> {
    x_order: &'a [Point],
    limits: Limits,
    trace: Option<&'a mut Trace>,
}

impl Recursor<'_> {
    /// 求 x 序闭区间 `[left, right]` 内的最近点对；`y_points` 是同一批点的 y 序列表。
    fn solve(
        &mut self,
        y_points: &[Point],
        left: usize,
        right: usize,
        depth: usize,
    ) -> Result<CandidatePair, ClosestPairError> {
        LimitExceeded::check(
            LimitKind::RecursionDepth,
            self.limits.max_recursion_depth,
            depth,
        )?;

        let expected = (right + 1).saturating_sub(left);
        if y_points.len() != expected {
            return Err(InternalInvariantError::PartitionMismatch {
                left,
                right,
                expected,
                actual: y_points.len(),
            }
            .into());
        }

        if expected <= BASE_CASE_MAX_POINTS {
            let pair = closest_by_brute_force(&self.x_order[left..=right])?;
            self.record(TraceStep::base_case(depth, left, right, pair))?;
            return Ok(pair);
        }

        let mid = left + (right - left) / 2;
        let split = self.x_order[mid];

        // x 与分割点相同的点按 y 与分割点比较分边，保证每个点恰好落在一侧。
        let (left_y, right_y): (Vec<Point>, Vec<Point>) =
            y_points.iter().partition(|&&p| p <= split);

        let left_pair = self.solve(&left_y, left, mid, depth + 1)?;
        let right_pair = self.solve(&right_y, mid + 1, right, depth + 1)?;

        let mut best = CandidatePair::closer_of(left_pair, right_pair);
        let delta = best.distance;
        let stripe = collect_stripe(y_points, split.x, delta);

        let mut improved = false;
        if let Some(candidate) = nearest_in_stripe(&stripe) {
            if candidate.distance < best.distance {
                best = candidate;
                improved = true;
            }
        }

        trace!(
            depth,
            left,
            right,
            split_x = split.x,
            delta,
            stripe = stripe.len(),
            improved,
            "combine"
        );

        let mut step = TraceStep::combine(depth, left, right, split, delta, best);
        step.stripe_len = Some(stripe.len());
        step.stripe_improved = improved;
        self.record(step)?;

        Ok(best)
    }

    fn record(&mut self, step: TraceStep) -> Result<(), LimitExceeded> {
        let Some(trace) = self.trace.as_deref_mut() else {
            return Ok(());
        };
        LimitExceeded::check(
            LimitKind::TraceSteps,
            self.limits.max_trace_steps,
            trace.steps.len() + 1,
        )?;
        trace.steps.push(step);
        Ok(())
    }
}

/// 枚举区间内所有 `i < j`，平局时保留最先找到的一对。
fn closest_by_brute_force(points: &[Point]) -> Result<CandidatePair, InternalInvariantError> {
    if points.len() < 2 {
        return Err(InternalInvariantError::BaseCaseTooSmall { len: points.len() });
    }

    let mut best = CandidatePair::new(points[0], points[1]);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let candidate = CandidatePair::new(points[i], points[j]);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{brute_force_closest_pair, tied_square_sides};
    use crate::geom::metric::chebyshev;
    use crate::trace::TraceStepKind;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn closest(points: &[Point]) -> CandidatePair {
        find_closest_pair(&DualOrder::new(points)).unwrap()
    }

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_agrees_with_oracle(points: &[Point]) {
        let pair = closest(points);
        let expected = brute_force_closest_pair(points).unwrap();
        assert_eq!(pair.distance, expected.distance, "points: {points:?}");
        let sides = tied_square_sides(points);
        assert!(
            sides.contains(&chebyshev(pair.a, pair.b)),
            "side {} not in {sides:?}",
            chebyshev(pair.a, pair.b)
        );
    }

    #[test]
    fn two_points() {
        let pair = closest(&pts(&[(0, 0), (3, 4)]));
        assert_eq!(pair.distance, 5);
        assert_eq!(chebyshev(pair.a, pair.b), 4);
    }

    #[test]
    fn three_collinear_points() {
        let pair = closest(&pts(&[(0, 0), (1, 0), (5, 0)]));
        assert_eq!((pair.a, pair.b), (Point::new(0, 0), Point::new(1, 0)));
    }

    #[test]
    fn four_points_scenario() {
        let pair = closest(&pts(&[(0, 0), (10, 10), (1, 1), (20, 0)]));
        assert_eq!((pair.a, pair.b, pair.distance), (Point::new(0, 0), Point::new(1, 1), 1));
    }

    #[test]
    fn finds_pair_straddling_split_line() {
        let points = pts(&[(-10, 0), (-9, 50), (0, 0), (1, 0), (10, 50), (11, 0)]);
        let (pair, trace) = find_closest_pair_with_trace(&DualOrder::new(&points)).unwrap();
        assert_eq!((pair.a, pair.b, pair.distance), (Point::new(0, 0), Point::new(1, 0), 1));

        let top = trace.steps.last().unwrap();
        assert_eq!(top.kind, TraceStepKind::Combine);
        assert_eq!(top.split, Some(Point::new(0, 0)));
        assert_eq!(top.delta, Some(10));
        assert_eq!(top.stripe_len, Some(5));
        assert!(top.stripe_improved);
    }

    #[test]
    fn all_points_share_one_x_coordinate() {
        let points = pts(&[(5, 0), (5, 30), (5, 3), (5, 17), (5, 19), (5, -8), (5, 12), (5, 40)]);
        let pair = closest(&points);
        assert_eq!((pair.a, pair.b, pair.distance), (Point::new(5, 17), Point::new(5, 19), 2));
        assert_agrees_with_oracle(&points);
    }

    #[test]
    fn dense_grid_with_many_ties() {
        let mut points = Vec::new();
        for x in 0..12 {
            for y in 0..12 {
                points.push(Point::new(x, y));
            }
        }
        assert_agrees_with_oracle(&points);
        assert_eq!(closest(&points).distance, 1);
    }

    #[test]
    fn records_one_step_per_call() {
        let points = pts(&[(0, 0), (10, 10), (1, 1), (20, 0)]);
        let (_pair, trace) = find_closest_pair_with_trace(&DualOrder::new(&points)).unwrap();
        assert_eq!(trace.count(TraceStepKind::BaseCase), 2);
        assert_eq!(trace.count(TraceStepKind::Combine), 1);

        let kinds: Vec<_> = trace.steps.iter().map(|s| (s.kind, s.depth, s.left, s.right)).collect();
        assert_eq!(
            kinds,
            vec![
                (TraceStepKind::BaseCase, 1, 0, 1),
                (TraceStepKind::BaseCase, 1, 2, 3),
                (TraceStepKind::Combine, 0, 0, 3),
            ]
        );
    }

    #[test]
    fn trace_json_is_byte_identical_across_runs() {
        let points = pts(&[(3, 1), (-4, 2), (8, 8), (0, 0), (1, 7), (2, 2), (6, -3)]);
        let order = DualOrder::new(&points);
        let (_a, t1) = find_closest_pair_with_trace(&order).unwrap();
        let (_b, t2) = find_closest_pair_with_trace(&order).unwrap();
        assert_eq!(t1.to_json_string().unwrap(), t2.to_json_string().unwrap());
    }

    #[test]
    fn fails_fast_when_recursion_depth_exceeds_limit() {
        let points = pts(&[(0, 0), (1, 5), (2, 9), (3, 1)]);
        let limits = Limits {
            max_recursion_depth: 0,
            ..Limits::default()
        };
        let err = find_closest_pair_with_limits(&DualOrder::new(&points), limits).unwrap_err();
        assert_eq!(
            err,
            ClosestPairError::Limits(LimitExceeded {
                kind: LimitKind::RecursionDepth,
                limit: 0,
                actual: 1,
            })
        );
    }

    #[test]
    fn fails_fast_when_trace_steps_exceed_limit() {
        let points = pts(&[(0, 0), (1, 5), (2, 9), (3, 1)]);
        let limits = Limits {
            max_trace_steps: 1,
            ..Limits::default()
        };
        let err =
            find_closest_pair_with_trace_and_limits(&DualOrder::new(&points), limits).unwrap_err();
        assert_eq!(
            err,
            ClosestPairError::Limits(LimitExceeded {
                kind: LimitKind::TraceSteps,
                limit: 1,
                actual: 2,
            })
        );

        // 不记录 trace 时不受该上限约束
        assert!(find_closest_pair_with_limits(&DualOrder::new(&points), limits).is_ok());
    }

    #[test]
    fn rejects_fewer_than_two_points_as_internal_error() {
        let order = DualOrder::new(&pts(&[(1, 1)]));
        assert_eq!(
            find_closest_pair(&order).unwrap_err(),
            ClosestPairError::Internal(InternalInvariantError::BaseCaseTooSmall { len: 1 })
        );
    }

    #[test]
    fn detects_partition_mismatch() {
        let points = pts(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let order = DualOrder::new(&points);
        let mut recursor = Recursor {
            x_order: order.x_order(),
            limits: Limits::default(),
            trace: None,
        };
        let err = recursor.solve(&order.y_order()[..3], 0, 3, 0).unwrap_err();
        assert_eq!(
            err,
            ClosestPairError::Internal(InternalInvariantError::PartitionMismatch {
                left: 0,
                right: 3,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn seeded_random_sets_match_oracle() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..8 {
            let n = rng.gen_range(2..1500);
            let mut seen = BTreeSet::new();
            while seen.len() < n {
                seen.insert(Point::new(
                    rng.gen_range(-10_000_000..10_000_000),
                    rng.gen_range(-10_000_000..10_000_000),
                ));
            }
            let points: Vec<Point> = seen.into_iter().collect();
            assert_agrees_with_oracle(&points);
        }
    }

    fn point_set(range: i64, max_len: usize) -> impl Strategy<Value = Vec<Point>> {
        prop::collection::btree_set((-range..=range, -range..=range), 2..=max_len)
            .prop_map(|set| set.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn matches_brute_force_oracle(points in point_set(25, 80)) {
            let pair = closest(&points);
            let expected = brute_force_closest_pair(&points).unwrap();
            prop_assert_eq!(pair.distance, expected.distance);

            let sides = tied_square_sides(&points);
            let side = chebyshev(pair.a, pair.b);
            prop_assert!(sides.contains(&side));
            if sides.len() == 1 {
                prop_assert_eq!(Some(side), crate::oracle::brute_force_square_side(&points));
            }
        }

        #[test]
        fn matches_oracle_on_sparse_sets(points in point_set(1_000_000, 120)) {
            let expected = brute_force_closest_pair(&points).unwrap();
            prop_assert_eq!(closest(&points).distance, expected.distance);
        }

        #[test]
        fn result_is_independent_of_input_order(points in point_set(30, 60).prop_shuffle()) {
            let mut sorted = points.clone();
            sorted.sort();
            prop_assert_eq!(closest(&points), closest(&sorted));
        }

        #[test]
        fn result_is_invariant_under_translation(
            points in point_set(30, 60),
            dx in -1_000_000i64..1_000_000,
            dy in -1_000_000i64..1_000_000,
        ) {
            let base = closest(&points);
            let moved: Vec<Point> = points.iter().map(|p| p.translate(dx, dy)).collect();
            let shifted = closest(&moved);
            prop_assert_eq!(shifted.a, base.a.translate(dx, dy));
            prop_assert_eq!(shifted.b, base.b.translate(dx, dy));
            prop_assert_eq!(shifted.distance, base.distance);
        }

        #[test]
        fn shared_x_coordinate_partitions_correctly(
            x in -5i64..5,
            ys in prop::collection::btree_set(-60i64..60, 2..50),
            extra in prop::collection::btree_set((-3i64..3, -60i64..60), 0..10),
        ) {
            let mut points: BTreeSet<Point> = ys.into_iter().map(|y| Point::new(x, y)).collect();
            points.extend(extra.into_iter().map(|(ex, y)| Point::new(ex, y)));
            let points: Vec<Point> = points.into_iter().collect();

            let pair = closest(&points);
            let expected = brute_force_closest_pair(&points).unwrap();
            prop_assert_eq!(pair.distance, expected.distance);
            prop_assert!(tied_square_sides(&points).contains(&chebyshev(pair.a, pair.b)));
        }
    }
}
