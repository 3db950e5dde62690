use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::delay::BrowserDelay;
use crate::shared::icons::icon_sized;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::usecases::u502_sign_up::{submit_sign_up, SignUpForm, SignUpReceipt};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let submit_ms = use_global_context().config().sign_up.submit_ms;
    let notifications = use_notifications();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignUpForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        };
        if let Err(e) = form.validate() {
            log::warn!("sign-up form invalid: {e}");
            notifications.error("Error", e.to_string());
            return;
        }

        is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match submit_sign_up(&BrowserDelay, submit_ms, &form).await {
                Ok(receipt) => {
                    log::info!("account created for {}", receipt.email);
                    notifications.success(SignUpReceipt::TITLE, SignUpReceipt::DESCRIPTION);
                    if is_loading.try_set(false).is_some() {
                        return;
                    }
                    navigate("/results", Default::default());
                }
                Err(e) => {
                    notifications.error("Error", e.to_string());
                    is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="u502_sign_up--system" category=PAGE_CAT_SYSTEM>
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo">{icon_sized("brain", 32)}</div>
                    <h1 class="auth-card__title">"Create Account"</h1>
                    <p class="auth-card__subtitle">
                        "Join TalentSync and transform your talent management"
                    </p>
                </div>

                <form class="auth-card__form" on:submit=on_submit>
                    <div class="form__row">
                        <Input
                            id="firstName"
                            label="First Name"
                            placeholder="John"
                            value=first_name
                            on_input=Callback::new(move |v| first_name.set(v))
                            disabled=is_loading
                            required=true
                        />
                        <Input
                            id="lastName"
                            label="Last Name"
                            placeholder="Doe"
                            value=last_name
                            on_input=Callback::new(move |v| last_name.set(v))
                            disabled=is_loading
                            required=true
                        />
                    </div>

                    <Input
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="john@company.com"
                        autocomplete="email"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        disabled=is_loading
                        required=true
                    />

                    <Input
                        id="company"
                        label="Company"
                        placeholder="Your Company"
                        autocomplete="organization"
                        value=company
                        on_input=Callback::new(move |v| company.set(v))
                        disabled=is_loading
                    />

                    <Input
                        id="password"
                        label="Password"
                        placeholder="Create a strong password"
                        autocomplete="new-password"
                        revealable=true
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        disabled=is_loading
                        required=true
                    />

                    <Input
                        id="confirmPassword"
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                        autocomplete="new-password"
                        value=confirm_password
                        on_input=Callback::new(move |v| confirm_password.set(v))
                        disabled=is_loading
                        required=true
                    />

                    <Checkbox
                        id="agreeTerms"
                        checked=agree_terms
                        on_change=Callback::new(move |v| agree_terms.set(v))
                    >
                        "I agree to the Terms of Service and Privacy Policy"
                    </Checkbox>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </PageFrame>
    }
}
