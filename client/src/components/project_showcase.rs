//! Autoplay project carousel with arrows, dots, swipe and a screenshot gallery.
//!
//! The autoplay interval is re-armed whenever `is_playing()` or the carousel's
//! `timer_epoch` changes, so a manual move always restarts the countdown.

use leptos::prelude::*;

use crate::components::modal::{use_escape, use_scroll_lock};
use crate::content::projects::{PROJECTS, Project};
use crate::state::carousel::{AUTOPLAY_INTERVAL_MS, CarouselState};
use crate::util::dom;
use crate::util::schedule::IntervalSlot;

#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(PROJECTS.len()));
    let autoplay = IntervalSlot::new();

    let timer_key = Memo::new(move |_| carousel.with(|c| (c.is_playing(), c.timer_epoch)));
    Effect::new(move || {
        let (playing, _epoch) = timer_key.get();
        if playing {
            autoplay.arm(AUTOPLAY_INTERVAL_MS, move || {
                carousel.update(|c| {
                    c.tick();
                });
            });
        } else {
            autoplay.clear();
        }
    });

    let end_drag = move |x: f64| {
        if carousel.with_untracked(CarouselState::is_dragging) {
            carousel.update(|c| {
                c.drag_end(x);
            });
            dom::set_grabbing_cursor(false);
        }
    };

    let track_style = move || format!("transform: translateX(-{}%);", carousel.with(|c| c.index) * 100);

    view! {
        <div class="showcase">
            <div class="showcase__viewport">
                <div
                    class="showcase__track"
                    style=track_style
                    on:mousedown=move |ev| {
                        carousel.update(|c| c.drag_start(dom::mouse_x(&ev)));
                        dom::set_grabbing_cursor(true);
                    }
                    on:mouseup=move |ev| end_drag(dom::mouse_x(&ev))
                    on:mouseleave=move |ev| end_drag(dom::mouse_x(&ev))
                    on:mousemove=move |ev| {
                        if carousel.with_untracked(CarouselState::is_dragging) {
                            ev.prevent_default();
                        }
                    }
                    on:touchstart=move |ev| {
                        if let Some(x) = dom::touch_start_x(&ev) {
                            carousel.update(|c| c.drag_start(x));
                        }
                    }
                    on:touchend=move |ev| {
                        if let Some(x) = dom::touch_end_x(&ev) {
                            end_drag(x);
                        }
                    }
                >
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <ProjectSlide
                                    project=*project
                                    on_gallery=Callback::new(move |()| carousel.update(CarouselState::open_gallery))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="showcase__arrow showcase__arrow--prev"
                    on:click=move |_| carousel.update(CarouselState::prev)
                    aria-label="Previous slide"
                >
                    "‹"
                </button>
                <button
                    class="showcase__arrow showcase__arrow--next"
                    on:click=move |_| carousel.update(CarouselState::next)
                    aria-label="Next slide"
                >
                    "›"
                </button>

                <div class="showcase__dots">
                    {(0..PROJECTS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="showcase__dot"
                                    class:showcase__dot--active=move || carousel.with(|c| c.index == i)
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                    aria-label=format!("Go to slide {}", i + 1)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="showcase__play"
                    on:click=move |_| carousel.update(CarouselState::toggle_play)
                    aria-label=move || if carousel.with(|c| c.paused) { "Play slideshow" } else { "Pause slideshow" }
                >
                    {move || if carousel.with(|c| c.paused) { "▶" } else { "❚❚" }}
                </button>
            </div>

            <Show when=move || carousel.with(|c| c.gallery_open)>
                <ScreenshotGallery
                    project=PROJECTS[carousel.with_untracked(|c| c.index)]
                    on_close=Callback::new(move |()| carousel.update(CarouselState::close_gallery))
                />
            </Show>
        </div>
    }
}

#[component]
fn ProjectSlide(project: Project, on_gallery: Callback<()>) -> impl IntoView {
    let background = project.cover().map(|src| format!("background-image: url('{src}');")).unwrap_or_default();

    view! {
        <div class="showcase__slide">
            <div class="showcase__backdrop" style=background></div>
            <div class="showcase__shade"></div>
            <div class="showcase__info">
                <h3 class="showcase__title">{project.title}</h3>
                <p class="showcase__description">{project.description}</p>
                <div class="showcase__tech">
                    {project.tech.iter().map(|t| view! { <span class="tech-tag">{*t}</span> }).collect_view()}
                </div>
                <div class="showcase__links">
                    {project
                        .repository
                        .map(|href| {
                            view! {
                                <a class="showcase__link" href=href target="_blank" rel="noopener noreferrer">
                                    "Repo"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a class="showcase__link showcase__link--demo" href=href target="_blank" rel="noopener noreferrer">
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="showcase__thumbs">
                <div class="showcase__thumb-row">
                    {project
                        .thumbnails()
                        .iter()
                        .map(|src| view! { <img class="showcase__thumb" src=*src alt="Project screenshot"/> })
                        .collect_view()}
                </div>
                <Show when=move || project.has_gallery()>
                    <button class="showcase__see-all" on:click=move |_| on_gallery.run(())>
                        {format!("See All ({})", project.screenshots.len())}
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Modal grid of every screenshot for one project. Autoplay is paused while open.
#[component]
fn ScreenshotGallery(project: Project, on_close: Callback<()>) -> impl IntoView {
    use_escape(on_close);
    use_scroll_lock();

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal gallery" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{format!("{} - Screenshots ({})", project.title, project.screenshots.len())}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(()) aria-label="Close gallery">
                        "✕"
                    </button>
                </div>
                <div class="gallery__grid">
                    {project
                        .screenshots
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <div class="gallery__cell">
                                    <img src=*src alt=format!("{} screenshot {}", project.title, i + 1)/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
