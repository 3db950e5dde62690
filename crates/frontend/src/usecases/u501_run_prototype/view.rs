use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::delay::BrowserDelay;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a003_uploaded_file::{
    format_file_size, run_upload_ticker, upload_step, FileKind, FileMeta, TickOutcome, UploadId,
    UploadQueue, UploadStatus, UploadedFile, ACCEPTED_EXTENSIONS,
};
use contracts::domain::common::AggregateId;
use contracts::usecases::u501_run_prototype::{check_ready, run_prototype, ProcessingReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::Spinner;

/// Metadata of the selected files; contents are never read
fn file_metas(files: &web_sys::FileList) -> Vec<FileMeta> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|f| FileMeta::new(f.name(), f.size() as u64, f.type_()))
        .collect()
}

/// One file of the upload list. The row is created once per record;
/// progress and status follow the queue reactively.
#[component]
fn UploadRow(
    file: UploadedFile,
    queue: RwSignal<UploadQueue>,
    on_remove: Callback<UploadId>,
) -> impl IntoView {
    let id = file.id;
    let kind = FileKind::from_name(&file.name);
    let current = move || queue.with(|q| q.get(id).map(|f| (f.percent(), f.status)));
    let percent = move || current().map(|(p, _)| p).unwrap_or(0);
    let status = move || current().map(|(_, s)| s).unwrap_or(UploadStatus::Uploading);

    view! {
        <div class="upload-item">
            <div class="upload-item__icon">{icon(kind.icon_name())}</div>
            <div class="upload-item__body">
                <div class="upload-item__row">
                    <span class="upload-item__name">{file.name.clone()}</span>
                    <span class="upload-item__size">{format_file_size(file.size)}</span>
                </div>
                <Show when=move || status() == UploadStatus::Uploading>
                    <div class="progress">
                        <div
                            class="progress__bar"
                            style=move || format!("width: {}%;", percent())
                        ></div>
                    </div>
                </Show>
            </div>
            {move || match status() {
                UploadStatus::Uploading => view! {
                    <span class="upload-item__status">{format!("{}%", percent())}</span>
                }.into_any(),
                UploadStatus::Completed => view! {
                    <span class="upload-item__status upload-item__status--done">
                        {icon_sized("check-circle", 16)}
                    </span>
                }.into_any(),
                UploadStatus::Error => view! {
                    <span class="upload-item__status upload-item__status--error">
                        {icon_sized("alert-circle", 16)}
                    </span>
                }.into_any(),
            }}
            <button
                class="upload-item__remove"
                title="Remove"
                on:click=move |_| on_remove.run(id)
            >
                {icon_sized("x", 16)}
            </button>
        </div>
    }
}

#[component]
pub fn RunPrototypeView() -> impl IntoView {
    let config = use_global_context().config();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let queue = RwSignal::new(UploadQueue::new());
    let is_dragging = RwSignal::new(false);
    let is_processing = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let tick_ms = config.upload.tick_ms;
    let max_increment = config.upload.max_increment;
    let processing_ms = config.upload.processing_ms;

    // One ticker per record; a removed record or a disposed page ends it
    let start_uploads = move |metas: Vec<FileMeta>| {
        if metas.is_empty() {
            return;
        }
        log::info!("upload: {} file(s) selected", metas.len());
        let Some(ids) = queue.try_update(|q| q.enqueue(metas)) else {
            return;
        };
        for id in ids {
            spawn_local(async move {
                let outcome = run_upload_ticker(
                    &BrowserDelay,
                    tick_ms,
                    || upload_step(js_sys::Math::random(), max_increment),
                    |increment| {
                        queue
                            .try_update(|q| q.advance(id, increment))
                            .unwrap_or(TickOutcome::Stale)
                    },
                )
                .await;
                log::debug!("upload {}: {:?}", id.as_string(), outcome);
            });
        }
    };

    let remove_file = Callback::new(move |id: UploadId| {
        log::debug!("upload {} removed", id.as_string());
        queue.update(|q| {
            q.remove(id);
        });
    });

    let on_run = move |_| {
        let files = queue.with_untracked(|q| q.files().to_vec());
        if let Err(e) = check_ready(&files) {
            notifications.error(e.title(), e.to_string());
            return;
        }
        is_processing.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match run_prototype(&BrowserDelay, processing_ms, &files).await {
                Ok(report) => {
                    log::info!(
                        "processed {} file(s), {} bytes",
                        report.files_analyzed,
                        report.total_bytes
                    );
                    notifications.success(ProcessingReport::TITLE, ProcessingReport::DESCRIPTION);
                    // page already left: do not pull the user back
                    if is_processing.try_set(false).is_some() {
                        return;
                    }
                    navigate("/results", Default::default());
                }
                Err(e) => {
                    notifications.error(e.title(), e.to_string());
                    is_processing.try_set(false);
                }
            }
        });
    };

    let can_run =
        move || !is_processing.get() && queue.with(|q| check_ready(q.files()).is_ok());

    view! {
        <PageFrame page_id="u501_run_prototype--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                title="Upload Prototype"
                subtitle="Upload project plans and team rosters to let the AI propose allocations"
                icon_name="upload"
            />

            <div
                class="dropzone"
                class:dropzone--active=move || is_dragging.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(true);
                }
                on:dragleave=move |_| is_dragging.set(false)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(false);
                    if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                        start_uploads(file_metas(&files));
                    }
                }
            >
                <div class="dropzone__icon">{icon_sized("upload", 40)}</div>
                <h3 class="dropzone__title">"Drop your files here"</h3>
                <p class="dropzone__hint">"Supports PDF, Word, Excel and CSV files"</p>
                <input
                    node_ref=file_input_ref
                    type="file"
                    multiple=true
                    accept=ACCEPTED_EXTENSIONS
                    style="display: none;"
                    on:change=move |ev| {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        if let Some(files) = input.files() {
                            start_uploads(file_metas(&files));
                        }
                        // allow selecting the same file again
                        input.set_value("");
                    }
                />
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        if let Some(input) = file_input_ref.get() {
                            input.click();
                        }
                    }
                >
                    "Browse Files"
                </button>
            </div>

            <Show when=move || queue.with(|q| !q.is_empty())>
                <div class="upload-list">
                    <h3 class="upload-list__title">
                        {move || format!("Uploaded Files ({})", queue.with(UploadQueue::len))}
                    </h3>
                    <For
                        each=move || queue.with(|q| q.files().to_vec())
                        key=|f| f.id
                        let:file
                    >
                        <UploadRow file=file queue=queue on_remove=remove_file />
                    </For>
                </div>
            </Show>

            <div class="run-panel">
                <button
                    class="button button--primary button--large"
                    disabled=move || !can_run()
                    on:click=on_run
                >
                    {move || if is_processing.get() {
                        view! { <Spinner /> " Processing..." }.into_any()
                    } else {
                        view! { {icon("play")} " Run Prototype" }.into_any()
                    }}
                </button>
            </div>
        </PageFrame>
    }
}
