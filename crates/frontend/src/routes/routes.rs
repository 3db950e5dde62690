use crate::dashboards::d400_allocation_results::ui::dashboard::AllocationResultsDashboard;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::signup::SignUpPage;
use crate::usecases::u501_run_prototype::view::RunPrototypeView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Logs every client-side navigation
#[component]
fn NavigationLogger() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move |_| {
        log::info!("navigate: {}", pathname.get());
    });
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavigationLogger />
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/upload") view=RunPrototypeView />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/results") view=AllocationResultsDashboard />
                    <Route path=path!("/signup") view=SignUpPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </Shell>
        </Router>
    }
}
