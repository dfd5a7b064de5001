pub mod meeting;
pub mod report;
pub mod room;
pub mod user;
pub mod visit;

pub use meeting::*;
pub use report::*;
pub use room::*;
pub use user::*;
pub use visit::*;
