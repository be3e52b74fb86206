//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state. Page data is fetched per route
//! and never cached here.

pub mod session;
