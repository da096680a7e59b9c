//! Application layer of the SkillSwap session layer.
//!
//! [`SessionContext`] owns the session state; the other modules are the
//! queries and form handling the consumer views build on.

pub mod browse;
pub mod profile_edit;
pub mod session_context;
pub mod swap_inbox;
pub mod swap_request;

pub use session_context::SessionContext;
pub use swap_inbox::{SwapEntry, SwapInbox};
pub use swap_request::SwapRequestDraft;
