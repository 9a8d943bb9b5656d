pub mod addresses;
pub mod platforms;
pub mod tokens;

pub use addresses::*;
pub use platforms::*;
pub use tokens::*;

/// Basis-point denominator. All percentages are converted to this scale
/// before they touch a contract: `bps = pct * DENOMINATOR / 100`.
pub const DENOMINATOR: u64 = 10_000;

/// Default slippage tolerance between quote read and execution, in percent.
pub const DEFAULT_SLIPPAGE_PCT: f64 = 0.5;

/// Default deadline offset forwarded to the lens, in seconds.
pub const DEFAULT_DEADLINE_OFFSET_SECS: u64 = 5 * 60;
