//! Dashboard page that touches the protected API on mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Each mount issues exactly one GET
//! for `/protected-view/` through the injected client and reports the outcome
//! to the observation sink. Failures never escape the page; the label renders
//! the same either way.
//!
//! LIFECYCLE
//! =========
//! `mount_fetch` opens a `MountSession` when the component body runs and
//! cancels it in `on_cleanup`. A response that lands after cleanup is dropped
//! before it can reach the sink or the (already disposed) state signal.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::client::{AuthenticatedClient, SharedClient};
use crate::state::mount::MountSession;
use crate::state::protected::{ProtectedResourceResult, ProtectedViewState};
use crate::util::observe::ObservationSink;

pub const PROTECTED_VIEW_PATH: &str = "/protected-view/";
pub const DASHBOARD_LABEL: &str = "DashBoard";

/// Issue the single protected-resource GET and fold the response into a result.
pub async fn fetch_protected_resource<C>(client: &C) -> ProtectedResourceResult
where
    C: AuthenticatedClient + ?Sized,
{
    client.get(PROTECTED_VIEW_PATH).await.map(|resp| resp.data).into()
}

/// Mount-time fetch: one call, then one sink entry if the view is still mounted.
///
/// Returns `None` when the session was cancelled before the call settled.
pub async fn run_mount_fetch<S>(client: SharedClient, session: MountSession, sink: &S) -> Option<ProtectedResourceResult>
where
    S: ObservationSink + ?Sized,
{
    let result = fetch_protected_resource(client.as_ref()).await;
    if !session.is_active() {
        log::debug!(
            "mount session {} ended before {PROTECTED_VIEW_PATH} settled; dropping result",
            session.id()
        );
        return None;
    }
    sink.observe(&result);
    Some(result)
}

/// Open a mount session for the current owner and build its fetch task.
///
/// The session is cancelled from the owner's cleanup. The returned task moves
/// the state slot to `Pending`, runs the fetch, and settles the slot only if
/// the session is still open.
pub fn mount_fetch<S>(client: SharedClient, state: RwSignal<ProtectedViewState>, sink: S) -> impl Future<Output = ()> + 'static
where
    S: ObservationSink + 'static,
{
    let session = MountSession::new();
    let cleanup_session = session.clone();
    on_cleanup(move || cleanup_session.cancel());

    async move {
        state.update(|s| {
            s.begin();
        });
        if let Some(result) = run_mount_fetch(client, session, &sink).await {
            state.update(|s| {
                s.settle(result);
            });
        }
    }
}

/// Dashboard page. Fetches the protected resource once per mount.
#[component]
pub fn DashboardPage(client: SharedClient) -> impl IntoView {
    let fetch_state = RwSignal::new(ProtectedViewState::default());
    provide_context(fetch_state);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(mount_fetch(client, fetch_state, crate::util::observe::LogSink));
    #[cfg(not(feature = "hydrate"))]
    let _ = client;

    view! {
        <div class="text-light container">
            {DASHBOARD_LABEL}
        </div>
    }
}
