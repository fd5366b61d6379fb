use thiserror::Error;

use crate::closest::InternalInvariantError;
use crate::closest::recursor::ClosestPairError;
use crate::limits::LimitExceeded;
use crate::preprocess::InputError;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Internal(#[from] InternalInvariantError),
    #[error(transparent)]
    Limits(#[from] LimitExceeded),
}

impl From<ClosestPairError> for SolveError {
    fn from(value: ClosestPairError) -> Self {
        match value {
            ClosestPairError::Internal(e) => SolveError::Internal(e),
            ClosestPairError::Limits(e) => SolveError::Limits(e),
        }
    }
}

impl SolveError {
    /// 输入或配置导致的失败（可由调用方修正）；其余为内部缺陷。
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SolveError::Internal(_))
    }
}
