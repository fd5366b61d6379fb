//! 分治最近点对：双序索引、递归划分与条带合并。

pub mod order;
pub mod pair;
pub mod recursor;
pub mod stripe;

use thiserror::Error;

pub use order::DualOrder;
pub use pair::CandidatePair;
pub use recursor::{ClosestPairError, find_closest_pair, find_closest_pair_with_trace};
pub use stripe::{STRIPE_LOOKAHEAD, nearest_in_stripe};

/// 递归记账出错（而非输入有误）时的内部错误；调用方应视为致命错误，不做重试。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InternalInvariantError {
    #[error("内部错误：基础情形至少需要 2 个点，实际 {len} 个")]
    BaseCaseTooSmall { len: usize },
    #[error("内部错误：y 序子集有 {actual} 个点，但 x 序区间 [{left}, {right}] 有 {expected} 个点")]
    PartitionMismatch {
        left: usize,
        right: usize,
        expected: usize,
        actual: usize,
    },
}
