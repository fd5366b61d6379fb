use core::fmt;

use thiserror::Error;

/// 求解过程的输入规模/递归深度/trace 条目上限。
///
/// 约定：
/// - 任一上限触发即 fail-fast 报错退出；
/// - 不做截断/降采样，避免“看似成功但数据不完整”。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// 输入点数上限。
    pub max_points: usize,
    /// 分治递归的最大深度（正常输入为 ⌈log2 n⌉ 量级）。
    pub max_recursion_depth: usize,
    /// `closest-trace.v1` 中 `steps` 的最大条目数。
    pub max_trace_steps: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_points: 2_000_000,
            max_recursion_depth: 64,
            max_trace_steps: 200_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    Points,
    RecursionDepth,
    TraceSteps,
}

impl LimitKind {
    fn label_cn(&self) -> &'static str {
        match self {
            LimitKind::Points => "输入点数（points）",
            LimitKind::RecursionDepth => "递归深度（depth）",
            LimitKind::TraceSteps => "trace 步数（steps）",
        }
    }

    fn suggestion_cn(&self) -> &'static str {
        match self {
            LimitKind::Points => "缩小输入规模，或提高 max_points。",
            LimitKind::RecursionDepth => {
                "正常输入不会触发该上限；请检查划分是否失衡，或提高 max_recursion_depth。"
            }
            LimitKind::TraceSteps => {
                "缩小输入规模，或关闭 trace（SolveOptions.trace_enabled=false），或提高 max_trace_steps。"
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_cn())
    }
}

/// 触发 fail-fast 上限的错误（包含实际值/上限/建议）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{} 超限：实际={}，上限={}；建议：{}", .kind, .actual, .limit, .kind.suggestion_cn())]
pub struct LimitExceeded {
    pub kind: LimitKind,
    pub limit: usize,
    pub actual: usize,
}

impl LimitExceeded {
    pub fn suggestion_cn(&self) -> &'static str {
        self.kind.suggestion_cn()
    }

    /// `actual > limit` 时返回对应错误。
    pub fn check(kind: LimitKind, limit: usize, actual: usize) -> Result<(), LimitExceeded> {
        if actual > limit {
            return Err(LimitExceeded {
                kind,
                limit,
                actual,
            });
        }
        Ok(())
    }
}
