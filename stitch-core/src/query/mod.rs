mod assembly;
mod builder;
mod query_kind;
mod statement;

pub use assembly::*;
pub use builder::*;
pub use query_kind::*;
pub use statement::*;
