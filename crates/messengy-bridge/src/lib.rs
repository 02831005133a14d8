//! Messengy Native Bridge
//!
//! Web content never reaches native APIs directly. Each surface gets a
//! frozen namespace object holding a fixed list of operations, and the
//! native side re-checks every call against the same list.
//!
//! | Surface | Operations                        |
//! | ------- | --------------------------------- |
//! | content | notify                            |
//! | chrome  | minimize, toggleMaximize, close   |

mod error;
mod manifest;
mod notification;
mod scripts;

pub use error::BridgeError;
pub use manifest::{BridgeManifest, BridgeOperation};
pub use notification::{NotificationRelay, NotificationRequest, NotificationSink};
pub use scripts::notification_relay_script;

pub type Result<T> = std::result::Result<T, BridgeError>;
