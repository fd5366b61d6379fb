//! 条带合并：在分割线两侧 `delta` 范围内寻找跨越分割线的更近点对。

use crate::closest::pair::CandidatePair;
use crate::geom::fixed::Coord;
use crate::geom::point::Point;

/// 条带内每个点只与其后（y 序）最多这么多个点比较。
///
/// 两侧各自内部点距不小于 `delta`，因此与某点距离小于 `delta` 的点必在其后常数个位置之内。
pub const STRIPE_LOOKAHEAD: usize = 6;

/// 从 y 序列表中保序筛出满足 `|x - split_x| <= delta` 的点。
pub fn collect_stripe(y_points: &[Point], split_x: Coord, delta: u64) -> Vec<Point> {
    y_points
        .iter()
        .copied()
        .filter(|p| (p.x as i128 - split_x as i128).unsigned_abs() <= delta as u128)
        .collect()
}

/// 条带内的最近点对；少于 2 个点时返回 `None`。
///
/// 平局时保留最先扫描到的 `(i, j)`。
pub fn nearest_in_stripe(stripe: &[Point]) -> Option<CandidatePair> {
    if stripe.len() < 2 {
        return None;
    }

    let mut best: Option<CandidatePair> = None;
    for i in 0..stripe.len() {
        let end = stripe.len().min(i + 1 + STRIPE_LOOKAHEAD);
        for j in (i + 1)..end {
            let candidate = CandidatePair::new(stripe[i], stripe[j]);
            match best {
                Some(current) if current.distance <= candidate.distance => {}
                _ => best = Some(candidate),
            }
        }
    }
    best
}
