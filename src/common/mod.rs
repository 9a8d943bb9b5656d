pub mod error;
pub mod types;

pub use error::{SwapStage, ZapError, ZapResult};
pub use types::{AnyResult, ZapConfig};

pub(crate) use error::contract_call_error;
