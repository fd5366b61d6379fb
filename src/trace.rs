use serde::Serialize;

use crate::closest::pair::CandidatePair;
use crate::geom::point::Point;

pub const TRACE_SCHEMA: &str = "closest-trace.v1";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TraceStepKind {
    /// 不超过 3 个点的区间，暴力枚举。
    BaseCase,
    /// 合并左右两半的结果并扫描条带。
    Combine,
}

/// 一次递归调用的记录（在调用返回时按后序追加）。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub kind: TraceStepKind,
    pub depth: usize,
    /// x 序区间 `[left, right]`（闭区间）。
    pub left: usize,
    pub right: usize,
    pub split: Option<Point>,
    pub delta: Option<u64>,
    pub stripe_len: Option<usize>,
    /// 条带中找到了比 `delta` 更近的点对。
    pub stripe_improved: bool,
    pub pair: CandidatePair,
}

impl TraceStep {
    pub fn base_case(depth: usize, left: usize, right: usize, pair: CandidatePair) -> Self {
        Self {
            kind: TraceStepKind::BaseCase,
            depth,
            left,
            right,
            split: None,
            delta: None,
            stripe_len: None,
            stripe_improved: false,
            pair,
        }
    }

    pub fn combine(
        depth: usize,
        left: usize,
        right: usize,
        split: Point,
        delta: u64,
        pair: CandidatePair,
    ) -> Self {
        Self {
            kind: TraceStepKind::Combine,
            depth,
            left,
            right,
            split: Some(split),
            delta: Some(delta),
            stripe_len: Some(0),
            stripe_improved: false,
            pair,
        }
    }
}

#[derive(Serialize)]
struct TraceDocument<'a> {
    schema: &'static str,
    steps: &'a [TraceStep],
}

impl Trace {
    /// 字段顺序固定，便于回归比对。
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&TraceDocument {
            schema: TRACE_SCHEMA,
            steps: &self.steps,
        })
    }

    pub fn count(&self, kind: TraceStepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}
