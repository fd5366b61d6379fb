//! O(n²) 暴力最近点对，作为分治结果的对照基准。

use std::collections::BTreeSet;

use crate::closest::pair::CandidatePair;
use crate::geom::metric::chebyshev;
use crate::geom::point::Point;

/// 按输入顺序枚举所有 `i < j`，平局时保留最先找到的一对。
pub fn brute_force_closest_pair(points: &[Point]) -> Option<CandidatePair> {
    let mut best: Option<CandidatePair> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let candidate = CandidatePair::new(points[i], points[j]);
            match best {
                Some(current) if current.distance <= candidate.distance => {}
                _ => best = Some(candidate),
            }
        }
    }
    best
}

pub fn brute_force_square_side(points: &[Point]) -> Option<u64> {
    brute_force_closest_pair(points).map(|pair| chebyshev(pair.a, pair.b))
}

/// 所有达到最小（取整）欧氏距离的点对所对应的切比雪夫边长。
///
/// 取整后的距离经常出现平局；不同的最近点对可能给出不同的边长，
/// 此集合列出了任一正确实现可能返回的全部答案。
pub fn tied_square_sides(points: &[Point]) -> BTreeSet<u64> {
    let mut out = BTreeSet::new();
    let Some(best) = brute_force_closest_pair(points) else {
        return out;
    };
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let pair = CandidatePair::new(points[i], points[j]);
            if pair.distance == best.distance {
                out.insert(chebyshev(pair.a, pair.b));
            }
        }
    }
    out
}
