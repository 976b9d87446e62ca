//! Root application component with routing and the layout providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, report::ReportPage,
    subcategories::SubcategoriesPage,
};
use crate::util::guard::LANDING_PATH;

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
/// Every route renders inside `AppLayout`, which provides the session and
/// notification contexts the pages and the route guard read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/interviewer.css"/>
        <Title text="AI Interviewer"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("subcategories") view=SubcategoriesPage/>
                    <Route path=(StaticSegment("reports"), ParamSegment("session_token")) view=ReportPage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
