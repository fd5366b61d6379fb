//! 由最近点对推出正方形最大边长。

use crate::closest::pair::CandidatePair;
use crate::error::SolveError;
use crate::geom::metric::chebyshev;
use crate::geom::point::Point;
use crate::limits::Limits;
use crate::preprocess::{InputError, PointList};
use crate::run::{SolveOptions, solve};

/// 以点对两端为中心、互不重叠的轴对齐正方形的最大边长：`max(|dx|, |dy|)`。
pub fn square_side(pair: &CandidatePair) -> u64 {
    chebyshev(pair.a, pair.b)
}

/// 对一组两两不同的点求正方形最大边长。
///
/// 说明：
/// - 不检查唯一性（由输入校验负责，见 [`crate::preprocess::validate_points`]）；
/// - 少于 2 个点时返回 `InputError::TooFewPoints`，除此之外不会失败（不受点数上限约束）。
pub fn max_square_side(points: &[Point]) -> Result<u64, SolveError> {
    max_square_side_with_limits(points, unbounded_point_limits())
}

/// 与 [`max_square_side`] 等价，但使用调用方给定的上限（超限则报错）。
pub fn max_square_side_with_limits(points: &[Point], limits: Limits) -> Result<u64, SolveError> {
    if points.len() < 2 {
        return Err(InputError::TooFewPoints {
            actual: points.len(),
        }
        .into());
    }

    let list = PointList::from_unique_unchecked(points.to_vec());
    let options = SolveOptions {
        trace_enabled: false,
        limits,
    };
    let solution = solve(&list, &options)?;
    Ok(solution.side)
}

fn unbounded_point_limits() -> Limits {
    Limits {
        max_points: usize::MAX,
        ..Limits::default()
    }
}
