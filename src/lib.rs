pub mod adapters;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;
