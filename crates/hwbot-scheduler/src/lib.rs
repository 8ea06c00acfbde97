//! # hwbot Scheduler
//!
//! The polling loop that watches homework review statuses and reports
//! changes to a chat.
//!
//! ## Architecture
//! ```text
//! PollingLoop (fixed sleep between iterations)
//!   ├── ApiPoller::fetch(cursor)      GET homework_statuses?from_date=cursor
//!   ├── check_response(&response)     shape checks, returns homeworks
//!   ├── parse_status(&homeworks[0])   status → verdict text
//!   └── Notifier::notify(message)     only when message != last sent
//! ```

pub mod api;
pub mod engine;
pub mod notify;
pub mod validate;
pub mod verdict;

pub use api::ApiPoller;
pub use engine::{Iteration, PollingLoop};
pub use notify::Notifier;
pub use validate::check_response;
pub use verdict::parse_status;
