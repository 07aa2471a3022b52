//! Domain-level frontend features (users, greeting) and their shared logic.
//! Routes import these modules to keep view code focused on markup.

pub mod greeting;
pub mod users;
