//! Session handling for the staff tools: who is logged in, how the session
//! survives between runs and which views a role may open.

pub mod gate;
pub mod manager;
pub mod navigation;
pub mod store;
pub mod tokens;

pub use gate::{GateDecision, RoleGate};
pub use manager::AuthManager;
pub use navigation::{History, Navigator, Notifier, LOGIN_PATH};
pub use store::{SessionState, SessionStore};
pub use tokens::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
