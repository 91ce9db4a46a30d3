pub mod errors;
pub mod models;
pub mod repo;
pub mod session;

pub use errors::*;
pub use models::*;
pub use repo::*;
pub use session::*;
