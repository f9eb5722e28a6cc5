use std::future::Future;

use tracing::{error, info};

use crate::errors::{Result, TrackademyError};

/// 操作结果
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<TrackademyError>,
}

impl<T> OperationResult<T> {
    pub fn into_result(self) -> Result<Option<T>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.data),
        }
    }
}

/// 执行操作并记录成功或失败
pub async fn run_with_feedback<T, Fut>(label: &str, operation: Fut) -> OperationResult<T>
where
    Fut: Future<Output = Result<T>>,
{
    match operation.await {
        Ok(data) => {
            info!("{}: success", label);
            OperationResult {
                success: true,
                data: Some(data),
                error: None,
            }
        }
        Err(e) => {
            error!("{}: {}", label, e);
            OperationResult {
                success: false,
                data: None,
                error: Some(e),
            }
        }
    }
}
