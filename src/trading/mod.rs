pub mod dispatcher;
pub mod lifecycle;

pub use dispatcher::{
    BondZapInput, DispatchOptions, DispatchReceipt, SwapInput, TxStatus, ZapInput,
    native_call_value,
};
pub use lifecycle::{CallbackContext, CallbackRef, DispatchCallback, DispatchKind, NoopCallback};

pub(crate) use dispatcher::Dispatcher;
