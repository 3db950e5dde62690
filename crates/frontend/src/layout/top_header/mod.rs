//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Brand link back to the landing page
//! - Primary navigation (desktop row, mobile drawer)
//! - Login / Sign Up actions

use crate::layout::global_context::use_global_context;
use crate::shared::icons::{icon, icon_sized};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (path, label, icon)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/", "Home", "brain"),
    ("/upload", "Upload Prototype", "upload"),
    ("/employees", "Employees", "users"),
    ("/results", "Results", "bar-chart"),
];

#[component]
fn NavLinks(#[prop(into)] item_class: String) -> impl IntoView {
    let ctx = use_global_context();
    let pathname = use_location().pathname;

    NAV_ITEMS
        .iter()
        .map(|&(path, label, icon_name)| {
            let base = item_class.clone();
            let class = move || {
                if pathname.get() == path {
                    format!("{base} {base}--active")
                } else {
                    base.clone()
                }
            };
            view! {
                <A href=path attr:class=class on:click=move |_| ctx.close_menu()>
                    {icon_sized(icon_name, 16)}
                    <span>{label}</span>
                </A>
            }
        })
        .collect_view()
}

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_menu_open = move || ctx.menu_open.get();

    view! {
        <header class="top-header">
            <A href="/" attr:class="top-header__brand">
                <span class="top-header__logo">{icon("brain")}</span>
                <span class="top-header__title">"TalentSync"</span>
            </A>

            <nav class="top-header__nav">
                <NavLinks item_class="top-header__link" />
            </nav>

            <div class="top-header__actions">
                <A href="/login" attr:class="button button--ghost">"Login"</A>
                <A href="/signup" attr:class="button button--primary">"Sign Up"</A>
            </div>

            <button
                class="top-header__icon-btn top-header__menu-toggle"
                on:click=move |_| ctx.toggle_menu()
                title=move || if is_menu_open() { "Close menu" } else { "Open menu" }
            >
                {move || if is_menu_open() { icon("x") } else { icon("menu") }}
            </button>

            <Show when=is_menu_open>
                <nav class="top-header__drawer">
                    <NavLinks item_class="top-header__drawer-link" />
                    <A href="/login" attr:class="top-header__drawer-link" on:click=move |_| ctx.close_menu()>
                        "Login"
                    </A>
                    <A href="/signup" attr:class="top-header__drawer-link" on:click=move |_| ctx.close_menu()>
                        "Sign Up"
                    </A>
                </nav>
            </Show>
        </header>
    }
}
