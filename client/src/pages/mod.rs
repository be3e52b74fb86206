//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates rendering details to
//! `components`. Authenticated pages are mounted behind `AuthGuard`, so by the
//! time a page runs the session is hydrated and a user is present.

pub mod actions;
pub mod batch_detail;
pub mod batches;
pub mod dashboard;
pub mod feedback;
pub mod forgot_password;
pub mod inventory;
pub mod legal;
pub mod login;
pub mod logistics;
pub mod profile;
pub mod quality;
pub mod sensors;
pub mod settings;
pub mod signup;

use crate::net::gateway::{ApiRequest, Gateway, Navigator, or_default};
use crate::net::types::{Page, Record};
use crate::util::storage::DurableStore;

/// Fetch a list route, degrading to an empty list on any failure.
pub(crate) async fn fetch_records<S, N>(gateway: &Gateway<S, N>, label: &str, request: ApiRequest) -> Vec<Record>
where
    S: DurableStore,
    N: Navigator,
{
    or_default(label, gateway.send::<Page<Record>>(request).await).data
}
