pub mod error;
pub mod genres;
pub mod movies;
pub mod pagination;
pub mod ratings;
pub mod types;

pub use error::*;
pub use genres::*;
pub use movies::*;
pub use pagination::*;
pub use ratings::*;
pub use types::*;
