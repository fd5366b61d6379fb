use serde::Serialize;

use crate::geom::metric::euclidean_floor;
use crate::geom::point::Point;

/// 候选点对及其欧氏距离（向下取整）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CandidatePair {
    pub a: Point,
    pub b: Point,
    pub distance: u64,
}

impl CandidatePair {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            distance: euclidean_floor(a, b),
        }
    }

    /// 取距离较小的一对；相等时保留左侧。
    pub fn closer_of(left: Self, right: Self) -> Self {
        if left.distance <= right.distance {
            left
        } else {
            right
        }
    }
}
