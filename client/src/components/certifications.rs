//! Certificate strip: an endlessly scrolling row of Drive previews with a
//! detail modal.
//!
//! DESIGN
//! ======
//! The listing comes from `folio-server`, which holds the Drive key. The
//! strip's per-frame loop runs only while [`MarqueeState::is_running`] holds:
//! opening the modal drops the [`FrameLoop`] (cancelling the pending frame)
//! and closing it starts a fresh one. Per-frame offsets are written straight
//! to the track's style with untracked state updates, so the view does not
//! re-render sixty times a second.

use leptos::html;
use leptos::prelude::*;

use crate::components::modal::{use_escape, use_scroll_lock};
use crate::net::api::fetch_certificates;
use crate::net::types::{CertificateFeed, CertificateFile};
use crate::state::marquee::{MarqueeState, duplicate};
use crate::util::drive::{self, FallbackImage};
use crate::util::schedule::FrameLoop;

/// Placeholder tiles shown while the listing loads.
const SKELETON_TILES: usize = 6;

#[component]
pub fn Certifications() -> impl IntoView {
    let listing = LocalResource::new(fetch_certificates);

    view! {
        <div class="certifications">
            <div class="section-title">"Certifications"</div>
            <Suspense fallback=|| view! { <CertificateSkeleton/> }>
                {move || listing.get().map(|result| render_listing(result))}
            </Suspense>
        </div>
    }
}

fn render_listing(result: Result<CertificateFeed, String>) -> AnyView {
    match result {
        Err(message) => view! { <ListingError message=message/> }.into_any(),
        Ok(CertificateFeed { notice: Some(message), .. }) => view! { <ListingError message=message/> }.into_any(),
        Ok(CertificateFeed { files, .. }) if files.is_empty() => {
            view! { <div class="certifications__empty">"No supported files found in the folder."</div> }.into_any()
        }
        Ok(CertificateFeed { files, .. }) => view! { <CertificateStrip files=files/> }.into_any(),
    }
}

#[component]
fn CertificateSkeleton() -> impl IntoView {
    view! {
        <div class="certifications__skeleton">
            {(0..SKELETON_TILES).map(|_| view! { <div class="certifications__skeleton-tile"></div> }).collect_view()}
        </div>
    }
}

#[component]
fn ListingError(message: String) -> impl IntoView {
    view! {
        <div class="certifications__error">{message}</div>
        <div class="certifications__hint">
            "Ensure GOOGLE_API_KEY and GOOGLE_DRIVE_FOLDER_ID are set, and the folder is shared publicly."
        </div>
    }
}

#[component]
fn CertificateStrip(files: Vec<CertificateFile>) -> impl IntoView {
    let item_count = files.len();
    let rendered = duplicate(&files);
    let files = StoredValue::new(files);

    let marquee = RwSignal::new(MarqueeState::new(item_count));
    let track_ref = NodeRef::<html::Div>::new();
    let frame = StoredValue::new_local(None::<FrameLoop>);

    let running = Memo::new(move |_| marquee.with(MarqueeState::is_running));
    Effect::new(move || {
        if !running.get() {
            frame.set_value(None);
            return;
        }
        let step = move || {
            #[cfg(feature = "hydrate")]
            {
                let Some(track) = track_ref.get_untracked() else {
                    return;
                };
                let set_width = crate::state::marquee::set_width(f64::from(track.scroll_width()), item_count);
                let Some(offset) = marquee.try_update_untracked(|m| m.advance(set_width)) else {
                    return;
                };
                let _ = track.style().set_property("transform", &format!("translateX(-{offset}px)"));
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (track_ref, item_count);
            }
        };
        frame.set_value(FrameLoop::start(step));
    });

    let on_open = Callback::new(move |rendered_index: usize| marquee.update(|m| m.open(rendered_index)));
    let on_close = Callback::new(move |()| marquee.update(MarqueeState::close));

    view! {
        <div
            class="certifications__viewport"
            on:mouseenter=move |_| marquee.update(|m| m.hovering = true)
            on:mouseleave=move |_| marquee.update(|m| m.hovering = false)
        >
            <div class="certifications__track" node_ref=track_ref>
                {rendered
                    .into_iter()
                    .enumerate()
                    .map(|(i, file)| view! { <CertificateTile file=file index=i on_open=on_open/> })
                    .collect_view()}
            </div>
        </div>

        <Show when=move || marquee.with(|m| m.selected.is_some())>
            {move || {
                let selected = marquee.with_untracked(|m| m.selected).unwrap_or_default();
                files
                    .with_value(|f| f.get(selected).cloned())
                    .map(|file| view! { <CertificateModal file=file on_close=on_close/> })
            }}
        </Show>
    }
}

#[component]
fn CertificateTile(file: CertificateFile, index: usize, on_open: Callback<usize>) -> impl IntoView {
    let sources = StoredValue::new(drive::tile_sources(&file));
    let image = RwSignal::new(FallbackImage::default());
    let is_pdf = file.is_pdf();
    let alt = file.display_name().to_owned();

    let current = move || sources.with_value(|s| image.get().current(s).map(str::to_owned));

    view! {
        <div
            class="certificate-tile"
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                on_open.run(index);
            }
        >
            <div class="certificate-tile__frame">
                {move || match current() {
                    Some(src) => {
                        view! {
                            <img
                                class="certificate-tile__image"
                                src=src
                                alt=alt.clone()
                                loading="lazy"
                                referrerpolicy="no-referrer"
                                on:error=move |_| image.update(FallbackImage::fail)
                            />
                        }
                            .into_any()
                    }
                    None => view! { <FileIcon pdf=is_pdf/> }.into_any(),
                }}
                <Show when=move || is_pdf>
                    <div class="certificate-tile__badge">"PDF"</div>
                </Show>
                <div class="certificate-tile__hover">
                    <span>"Click to view"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FileIcon(pdf: bool) -> impl IntoView {
    let (glyph, label, class) = if pdf {
        ("📄", "PDF Certificate", "file-icon file-icon--pdf")
    } else {
        ("🏆", "Certificate", "file-icon")
    };
    view! {
        <div class=class>
            <div class="file-icon__glyph">{glyph}</div>
            <div class="file-icon__label">{label}</div>
        </div>
    }
}

#[component]
fn CertificateModal(file: CertificateFile, on_close: Callback<()>) -> impl IntoView {
    use_escape(on_close);
    use_scroll_lock();

    let title = file.display_name().to_owned();
    let view_url = drive::file_view_url(&file.id);
    let download_url = drive::download_url(&file.id);

    let body = if file.is_pdf() {
        view! { <PdfPreview id=file.id.clone()/> }.into_any()
    } else {
        view! { <ImagePreview file=file.clone()/> }.into_any()
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal certificate-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3>{title}</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(()) aria-label="Close modal">
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{body}</div>
                <div class="modal__footer">
                    <a class="btn btn--primary" href=view_url target="_blank" rel="noopener noreferrer">
                        "View in Drive"
                    </a>
                    <a class="btn btn--ghost" href=download_url target="_blank" rel="noopener noreferrer">
                        "Download"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PdfPreview(id: String) -> impl IntoView {
    let failed = RwSignal::new(false);
    let preview = drive::pdf_preview_url(&id);
    let view_url = drive::file_view_url(&id);
    let download_url = drive::download_url(&id);

    view! {
        <div class="pdf-preview">
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! {
                        <div class="pdf-preview__fallback">
                            <div class="pdf-preview__glyph">"📄"</div>
                            <h3>"PDF Certificate"</h3>
                            <p>
                                "The PDF preview couldn't load directly. You can view or download the certificate using the buttons below."
                            </p>
                            <div class="pdf-preview__actions">
                                <a class="btn btn--primary" href=view_url.clone() target="_blank" rel="noopener noreferrer">
                                    "Open in Google Drive"
                                </a>
                                <a class="btn btn--ghost" href=download_url.clone() target="_blank" rel="noopener noreferrer">
                                    "Download PDF"
                                </a>
                            </div>
                        </div>
                    }
                }
            >
                <iframe
                    class="pdf-preview__frame"
                    src=preview.clone()
                    title="PDF Certificate"
                    allow="autoplay"
                    sandbox="allow-scripts allow-same-origin allow-popups allow-forms"
                    on:error=move |_| failed.set(true)
                ></iframe>
            </Show>
        </div>
    }
}

#[component]
fn ImagePreview(file: CertificateFile) -> impl IntoView {
    let sources = StoredValue::new(drive::modal_sources(&file));
    let image = RwSignal::new(FallbackImage::default());
    let alt = file.display_name().to_owned();

    view! {
        <div class="image-preview">
            {move || match sources.with_value(|s| image.get().current(s).map(str::to_owned)) {
                Some(src) => {
                    view! {
                        <img
                            class="image-preview__image"
                            src=src
                            alt=alt.clone()
                            referrerpolicy="no-referrer"
                            on:error=move |_| image.update(FallbackImage::fail)
                        />
                    }
                        .into_any()
                }
                None => view! { <FileIcon pdf=false/> }.into_any(),
            }}
        </div>
    }
}
