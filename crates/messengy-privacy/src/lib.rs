//! Messengy Permission Policy
//!
//! | Capability       | Decision |
//! | ---------------- | -------- |
//! | password-manager | Allow    |
//! | webauthn         | Allow    |
//! | notifications    | Allow    |
//! | everything else  | Deny     |
//!
//! Decisions are synchronous and total: every request gets exactly one
//! answer, unknown capability names included.

mod guard;
mod permissions;

pub use permissions::{Capability, PermissionDecision, PermissionPolicy};
