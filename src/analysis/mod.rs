pub mod accumulator;
pub mod diversity;
pub mod metrics;
pub mod recap;
pub mod timeline;

pub use recap::{build_recap, PlayerRecap};
