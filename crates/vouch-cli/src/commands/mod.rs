//! Command implementations.

pub mod agent;
pub mod badge;
pub mod check;
pub mod list;
pub mod profile;
pub mod register;
pub mod review;
pub mod score;

pub use self::agent::execute_agent;
pub use self::badge::execute_badge;
pub use self::check::execute_check;
pub use self::list::execute_list;
pub use self::profile::execute_profile;
pub use self::register::execute_register;
pub use self::review::execute_review;
pub use self::score::execute_score;
