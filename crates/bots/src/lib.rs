//! Computer players for Jest and a headless simulator built on them.

mod cheater;
mod config;
mod error;
mod factory;
mod random;
mod simulator;
mod trace;

pub use cheater::*;
pub use config::*;
pub use error::*;
pub use factory::*;
pub use random::*;
pub use simulator::*;
pub use trace::*;
