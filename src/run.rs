use std::path::Path;

use tracing::debug;

use crate::answer::square_side;
use crate::closest::order::DualOrder;
use crate::closest::pair::CandidatePair;
use crate::closest::recursor::{
    find_closest_pair_with_limits, find_closest_pair_with_trace_and_limits,
};
use crate::error::SolveError;
use crate::limits::{LimitExceeded, LimitKind, Limits};
use crate::preprocess::{PointList, load_points, load_points_from_path};
use crate::trace::Trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// 记录每次递归调用（`closest-trace.v1`）。
    pub trace_enabled: bool,
    pub limits: Limits,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub pair: CandidatePair,
    pub side: u64,
    pub trace: Option<Trace>,
}

/// 对校验后的点集求解：双序索引 + 分治最近点对 + 边长推导。
pub fn solve(points: &PointList, options: &SolveOptions) -> Result<Solution, SolveError> {
    LimitExceeded::check(LimitKind::Points, options.limits.max_points, points.len())?;

    let order = DualOrder::new(points.as_slice());
    let (pair, trace) = if options.trace_enabled {
        let (pair, trace) = find_closest_pair_with_trace_and_limits(&order, options.limits)?;
        (pair, Some(trace))
    } else {
        (find_closest_pair_with_limits(&order, options.limits)?, None)
    };

    let side = square_side(&pair);
    debug!(
        points = points.len(),
        a = %pair.a,
        b = %pair.b,
        distance = pair.distance,
        side,
        "solved"
    );

    Ok(Solution { pair, side, trace })
}

/// 一站式入口：解析文本输入并求解。
pub fn run_source(source: &str, options: &SolveOptions) -> Result<Solution, SolveError> {
    let points = load_points(source)?;
    solve(&points, options)
}

pub fn run_file(path: impl AsRef<Path>, options: &SolveOptions) -> Result<Solution, SolveError> {
    let points = load_points_from_path(path)?;
    solve(&points, options)
}
