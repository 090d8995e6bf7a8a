mod query;
mod transaction;

pub use self::query::{OpFuture, QueryExecutor};
pub use self::transaction::{Backoff, StepFuture, TransactionManager, TransientError};
