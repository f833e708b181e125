pub mod entities;
pub mod projection;
pub mod query;
pub mod stats;
pub mod traits;

pub use entities::*;
pub use projection::*;
pub use query::*;
pub use stats::*;
pub use traits::*;
