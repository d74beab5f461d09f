pub mod navigate;
pub mod session;
pub mod show;

pub use navigate::*;
pub use session::*;
pub use show::*;
