//! # Summit Platform
//!
//! Managed platform services for the Summit conference service.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of Summit.**
//!
//! Users should depend on the main [`summit`](https://crates.io/crates/summit)
//! crate instead, which provides the stable public API. This crate's API may
//! change without notice between minor versions.
//!
//! ---
//!
//! Each module here models one capability the service consumes as a black
//! box: a shared string cache, a deferred-work task queue, outbound mail,
//! verified caller identity, and a time-of-day source.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod clock;
pub mod identity;
pub mod mail;
pub mod tasks;

pub use cache::Cache;
pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::{user_id_for_email, AuthUser};
pub use mail::{LogMailer, Mailer, MemoryMailer, SentMail};
pub use tasks::{Task, TaskQueue};
