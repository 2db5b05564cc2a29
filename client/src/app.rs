//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    about::AboutPage, blog::BlogPage, blog_post::BlogPostPage, coming_soon::ComingSoonPage, contact::ContactPage,
    custom_solutions::CustomSolutionsPage, dashboard::DashboardPage, faq::FaqPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, pricing::PricingPage, privacy::PrivacyPage,
    schedule_demo::ScheduleDemoPage, security::SecurityPage, terms::TermsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="FillFlow fills web forms from your own documents with a Chrome extension."
                />
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
/// Provides the auth context, starts the session restore in the browser, and
/// sets up client-side routing inside the shared layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::bootstrapping());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        let session = crate::state::session::provide_browser_session(auth);
        leptos::task::spawn_local(async move {
            session.restore_session().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/fillflow.css"/>
        <Title text="FillFlow - Automate Your Forms"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("coming-soon") view=ComingSoonPage/>
                    <Route path=StaticSegment("security") view=SecurityPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("schedule-demo") view=ScheduleDemoPage/>
                    <Route path=StaticSegment("custom-solutions") view=CustomSolutionsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
