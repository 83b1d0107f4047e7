mod config;
mod entities;
mod error;
mod response;
mod state;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use response::*;
pub use state::*;
