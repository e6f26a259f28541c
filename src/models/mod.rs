pub mod config;
pub mod events;
pub mod kind;
pub mod report;

pub use config::*;
pub use events::*;
pub use kind::*;
pub use report::*;
