pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use auth::{AuthService, LocalAuthService};
pub use error::{Result, SeminarError};
pub use filter::FilterCriteria;
pub use session::{Role, Session, SessionId, SessionStatus, SessionType, UserAccount};
pub use store::{InMemorySessionStore, SeminarData, SessionStore};
