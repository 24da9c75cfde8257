//! Core domain of SkillBridge: the session store, the skill selection store,
//! the subscriber list they share, and the static catalogs the dashboard
//! renders.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod observer;
pub mod session;
pub mod skill;

// Re-export common error type
pub use error::{Result, SkillBridgeError};
pub use observer::SubscriptionId;
pub use session::SessionStore;
pub use skill::SkillSelectionStore;
