//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (route guard, navigation, badges, record
//! tables) while reading the session from Leptos context.

pub mod auth_guard;
pub mod nav_bar;
pub mod record_list;
pub mod status_badge;
