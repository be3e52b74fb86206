//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::nav_bar::NavBar;
use crate::net::gateway::BrowserGateway;
use crate::pages::{
    actions::ActionsPage,
    batch_detail::BatchDetailPage,
    batches::BatchesPage,
    dashboard::DashboardPage,
    feedback::FeedbackPage,
    forgot_password::ForgotPasswordPage,
    inventory::InventoryPage,
    legal::{PrivacyPage, TermsPage},
    login::LoginPage,
    logistics::LogisticsPage,
    profile::ProfilePage,
    quality::QualityPage,
    sensors::SensorsPage,
    settings::SettingsPage,
    signup::SignupPage,
};
use crate::state::session::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and the request gateway, and bootstraps the
/// session from durable storage on the first client-side effect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    provide_context(session);
    provide_context(BrowserGateway::browser());

    // Effects never run during SSR, so this reads localStorage only in the browser.
    Effect::new(move || session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/freshtrack.css"/>
        <Title text="FreshTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
                <Route path=StaticSegment("") view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }/>
                <Route path=StaticSegment("batches") view=|| view! { <AuthGuard><BatchesPage/></AuthGuard> }/>
                <Route
                    path=(StaticSegment("batches"), ParamSegment("id"))
                    view=|| view! { <AuthGuard><BatchDetailPage/></AuthGuard> }
                />
                <Route
                    path=(StaticSegment("quality"), ParamSegment("batchId"))
                    view=|| view! { <AuthGuard><QualityPage/></AuthGuard> }
                />
                <Route path=StaticSegment("inventory") view=|| view! { <AuthGuard><InventoryPage/></AuthGuard> }/>
                <Route path=StaticSegment("sensors") view=|| view! { <AuthGuard><SensorsPage/></AuthGuard> }/>
                <Route path=StaticSegment("logistics") view=|| view! { <AuthGuard><LogisticsPage/></AuthGuard> }/>
                <Route path=StaticSegment("actions") view=|| view! { <AuthGuard><ActionsPage/></AuthGuard> }/>
                <Route path=StaticSegment("feedback") view=|| view! { <AuthGuard><FeedbackPage/></AuthGuard> }/>
                <Route path=StaticSegment("profile") view=|| view! { <AuthGuard><ProfilePage/></AuthGuard> }/>
                <Route path=StaticSegment("settings") view=|| view! { <AuthGuard><SettingsPage/></AuthGuard> }/>
            </Routes>
            <NavBar/>
        </Router>
    }
}
