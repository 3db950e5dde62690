use super::page_standard::*;
use leptos::prelude::*;

fn frame_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_LANDING => "page page--landing",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--centered",
        _ => "page",
    }
}

/// Root element of every routed page.
///
/// Sets `id="{entity}--{category}"` and `data-page-category`, so a page can
/// be located from the DOM inspector by its module name.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let class = match class {
        "" => frame_class(category).to_string(),
        extra => format!("{} {extra}", frame_class(category)),
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
