//! Chat widget - View Component

use super::view_model::ChatWidgetVm;
use crate::layout::global_context::use_global_context;
use crate::shared::delay::BrowserDelay;
use crate::shared::icons::{icon, icon_sized};
use contracts::domain::a002_chat::assistant_reply;
use contracts::shared::simulation::Delay;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let vm = ChatWidgetVm::new();
    let chat_config = use_global_context().config().chat;
    let reply_ms = chat_config.reply_ms;
    let voice_capture_ms = chat_config.voice_capture_ms;
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = Callback::new(move |_: ()| {
        let content = vm.draft.get_untracked();
        let Some(sent) = vm.session.try_update(|s| s.send(&content)).flatten() else {
            return;
        };
        vm.draft.set(String::new());
        scroll_to_bottom();

        spawn_local(async move {
            let reply = assistant_reply(&BrowserDelay, reply_ms, &sent.content).await;
            vm.session.try_update(|s| s.receive(reply));
            scroll_to_bottom();
        });
    });

    let toggle_voice = move |_| {
        let Some(ticket) = vm.voice.try_update(|v| v.toggle()).flatten() else {
            log::debug!("voice capture stopped");
            return;
        };
        log::debug!("voice capture #{ticket} started");
        spawn_local(async move {
            BrowserDelay.wait(voice_capture_ms).await;
            if let Some(transcript) = vm.voice.try_update(|v| v.finish(ticket)).flatten() {
                vm.draft.set(transcript.to_string());
            }
        });
    };

    view! {
        <Show
            when=move || vm.is_open()
            fallback=move || view! {
                <button
                    class="chat-launcher"
                    title="Open assistant"
                    on:click=move |_| {
                        vm.session.update(|s| s.open());
                        scroll_to_bottom();
                    }
                >
                    {icon_sized("message-square", 24)}
                </button>
            }
        >
            <div class="chat-panel">
                <div class="chat-panel__header">
                    <div class="chat-panel__title">
                        {icon("bot")}
                        <div>
                            <div class="chat-panel__name">"AI Assistant"</div>
                            <div class="chat-panel__status">
                                {move || if vm.is_typing() { "Typing..." } else { "Online" }}
                            </div>
                        </div>
                    </div>
                    <button
                        class="chat-panel__close"
                        title="Close"
                        on:click=move |_| vm.session.update(|s| s.close())
                    >
                        {icon("x")}
                    </button>
                </div>

                <div node_ref=messages_container_ref class="chat-panel__messages">
                    <For
                        each=move || vm.session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let row_class = if msg.is_user() {
                                "chat-message chat-message--user"
                            } else {
                                "chat-message chat-message--assistant"
                            };
                            view! {
                                <div class=row_class>
                                    <div class="chat-message__avatar">
                                        {if msg.is_user() { icon_sized("user", 16) } else { icon_sized("bot", 16) }}
                                    </div>
                                    <div class="chat-message__bubble">
                                        <div class="chat-message__text">{msg.content.clone()}</div>
                                        <div class="chat-message__time">{msg.time_label()}</div>
                                    </div>
                                </div>
                            }
                        }}
                    </For>

                    <Show when=move || vm.is_typing()>
                        <div class="chat-message chat-message--assistant">
                            <div class="chat-message__avatar">{icon_sized("bot", 16)}</div>
                            <div class="chat-message__bubble chat-typing">
                                <span class="chat-typing__dot"></span>
                                <span class="chat-typing__dot"></span>
                                <span class="chat-typing__dot"></span>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="chat-panel__input">
                    <Input
                        value=vm.draft
                        placeholder="Ask about allocations, availability..."
                        attr:style="flex: 1;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        attr:title=move || if vm.is_listening() { "Stop listening" } else { "Voice input" }
                        on_click=toggle_voice
                    >
                        {move || if vm.is_listening() { icon("mic-off") } else { icon("mic") }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.draft.with(|d| d.trim().is_empty()))
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                    </Button>
                </div>

                <Show when=move || vm.is_listening()>
                    <div class="chat-panel__listening">"Listening..."</div>
                </Show>
            </div>
        </Show>
    }
}
