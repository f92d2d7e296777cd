//! Blog route: filterable post grid with an in-page detail view.
//!
//! DESIGN
//! ======
//! `folio-server` decides whether posts are live or generated and says so in
//! the feed notice. A notice renders as a banner with the debug block and a
//! retry button; any posts that came with it are still listed underneath.
//! The detail view replaces the grid without a route change, so "back"
//! returns to the same filter.

use leptos::html;
use leptos::prelude::*;

use crate::net::api::fetch_blog_feed;
use crate::net::types::{BlogFeed, BlogPost, CredentialStatus, FeedNotice, NoticeKind};
use crate::state::blog::{self, BlogFilter, BlogView};
use crate::util::schedule::now_utc;
use crate::util::text;

/// Labels shown on a card.
const CARD_LABELS: usize = 2;
/// Labels shown in the detail header.
const DETAIL_LABELS: usize = 5;

#[component]
pub fn BlogPage() -> impl IntoView {
    let feed = LocalResource::new(fetch_blog_feed);
    let state = RwSignal::new(BlogView::default());
    let on_retry = Callback::new(move |()| feed.refetch());

    view! {
        <div class="blog-page">
            <Suspense fallback=|| view! { <div class="blog-page__loading">"Loading blog posts..."</div> }>
                {move || {
                    feed.get()
                        .map(|result| {
                            let feed = result.unwrap_or_else(|e| {
                                log_fetch_failure(&e);
                                BlogFeed {
                                    notice: Some(FeedNotice {
                                        kind: NoticeKind::Error,
                                        message: format!("Failed to fetch blog posts: {e}"),
                                    }),
                                    ..BlogFeed::default()
                                }
                            });
                            view! { <BlogBody feed=feed state=state on_retry=on_retry/> }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn log_fetch_failure(error: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("blog feed request failed: {error}");
    #[cfg(not(feature = "hydrate"))]
    let _ = error;
}

#[component]
fn BlogBody(feed: BlogFeed, state: RwSignal<BlogView>, on_retry: Callback<()>) -> impl IntoView {
    let BlogFeed { posts, notice, credentials, .. } = feed;
    let posts = StoredValue::new(posts);

    let selected_id = Memo::new(move |_| state.with(|v| v.selected.clone()));
    let selected = move || {
        selected_id.track();
        state.with_untracked(|v| posts.with_value(|p| v.selected_post(p).cloned()))
    };

    view! {
        {move || match selected() {
            Some(post) => view! { <PostDetail post=post state=state/> }.into_any(),
            None => {
                view! { <PostList posts=posts notice=notice.clone() credentials=credentials state=state on_retry=on_retry/> }
                    .into_any()
            }
        }}
    }
}

#[component]
fn PostList(
    posts: StoredValue<Vec<BlogPost>>,
    notice: Option<FeedNotice>,
    credentials: CredentialStatus,
    state: RwSignal<BlogView>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let filter = Memo::new(move |_| state.with(|v| v.filter));
    let total = posts.with_value(Vec::len);
    let show_list = notice.is_none() || total > 0;

    let filtered = move || {
        let now = now_utc();
        posts.with_value(|p| blog::filter_posts(p, filter.get(), now).into_iter().cloned().collect::<Vec<_>>())
    };
    let filtered_count = move || posts.with_value(|p| blog::filter_posts(p, filter.get(), now_utc()).len());

    view! {
        <div class="blog-page__header">
            <h2>"Blog"</h2>
            <p>"Latest thoughts and insights"</p>
        </div>

        <div class="blog-page__filters" role="tablist">
            {BlogFilter::ALL
                .into_iter()
                .map(|f| {
                    view! {
                        <button
                            class="chip"
                            class:chip--active=move || filter.get() == f
                            role="tab"
                            aria-selected=move || (filter.get() == f).to_string()
                            aria-label=format!("Filter by {} posts", f.label())
                            on:click=move |_| state.update(|v| v.set_filter(f))
                        >
                            {f.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        {notice.map(|notice| {
            view! {
                <FeedNoticeBlock
                    notice=notice
                    credentials=credentials
                    total=total
                    filter=filter
                    filtered_count=Signal::derive(filtered_count)
                    on_retry=on_retry
                />
            }
        })}

        <Show when=move || show_list>
            {move || {
                let shown = filtered();
                if shown.is_empty() {
                    let f = filter.get();
                    view! {
                        <div class="blog-page__empty">
                            <h3>"No blog posts found"</h3>
                            <p>{blog::empty_hint(f)}</p>
                            <div class="blog-page__totals">{blog::empty_totals(total, 0, f)}</div>
                        </div>
                    }
                        .into_any()
                } else {
                    let f = filter.get();
                    view! {
                        <div class="blog-page__count">{blog::count_summary(shown.len(), f)}</div>
                        <div class="blog-page__grid">
                            {shown
                                .into_iter()
                                .enumerate()
                                .map(|(i, post)| {
                                    view! { <PostCard post=post featured=blog::is_featured(i, f) state=state/> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn FeedNoticeBlock(
    notice: FeedNotice,
    credentials: CredentialStatus,
    total: usize,
    filter: Memo<BlogFilter>,
    filtered_count: Signal<usize>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let heading = match notice.kind {
        NoticeKind::Demo => "Demo Mode Active",
        NoticeKind::Error => "Unable to load blog posts",
    };
    let set_or_not = |set: bool| if set { "Set" } else { "Not set" };

    view! {
        <div class="blog-notice">
            <h3>{heading}</h3>
            <p class="blog-notice__message">{notice.message}</p>
            <div class="blog-notice__debug">
                <p class="blog-notice__debug-title">"Debug Information:"</p>
                <p>"Environment Variables:"</p>
                <p>{format!("• BLOGGER_API_KEY: {}", set_or_not(credentials.api_key_set))}</p>
                <p>{format!("• BLOGGER_BLOG_ID: {}", set_or_not(credentials.blog_id_set))}</p>
                <p>{format!("Posts loaded: {total}")}</p>
                <p>{move || format!("Current filter: {}", filter.get().label())}</p>
                <p>{move || format!("Filtered posts: {}", filtered_count.get())}</p>
            </div>
            <button class="btn btn--ghost" on:click=move |_| on_retry.run(())>
                "Retry Loading"
            </button>
        </div>
    }
}

#[component]
fn PostCard(post: BlogPost, featured: bool, state: RwSignal<BlogView>) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let cover = post.cover_image().map(str::to_owned);
    let alt = if post.title.is_empty() { "Blog post".to_owned() } else { post.title.clone() };
    let title = if post.title.is_empty() { "Untitled Post".to_owned() } else { post.title.clone() };
    let excerpt = text::truncate_text(&text::strip_html_tags(&post.content), text::EXCERPT_CHARS);
    let id = post.id.clone();

    view! {
        <article class="post-card" on:click=move |_| state.update(|v| v.open(&id))>
            {cover.map(|src| {
                view! {
                    <Show when=move || !image_failed.get()>
                        <div class="post-card__image">
                            <img src=src.clone() alt=alt.clone() on:error=move |_| image_failed.set(true)/>
                        </div>
                    </Show>
                }
            })}
            <div class="post-card__body">
                <div class="post-card__meta">
                    <span>{text::format_long_date(&post.published)}</span>
                    <span>"•"</span>
                    <span>{text::estimate_read_time(&post.content)}</span>
                </div>
                <h3 class="post-card__title" title=title.clone()>{text::truncate_title(&title, text::TITLE_WORDS)}</h3>
                <p class="post-card__excerpt">{excerpt}</p>
                <div class="post-card__footer">
                    <div class="post-card__labels">
                        {post
                            .labels
                            .iter()
                            .take(CARD_LABELS)
                            .map(|label| view! { <span class="label">{label.clone()}</span> })
                            .collect_view()}
                    </div>
                    <Show when=move || featured>
                        <span class="label label--featured">"Featured"</span>
                    </Show>
                </div>
                <div class="post-card__more">"Read more →"</div>
            </div>
        </article>
    }
}

#[component]
fn PostDetail(post: BlogPost, state: RwSignal<BlogView>) -> impl IntoView {
    let title_ref = NodeRef::<html::Div>::new();
    let image_failed = RwSignal::new(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = title_ref.get_untracked() else {
                return;
            };
            let top = el.get_bounding_client_rect().top();
            state.maybe_update(|v| {
                let before = v.sticky_title;
                v.observe_title(top);
                before != v.sticky_title
            });
        }
    });
    on_cleanup(move || handle.remove());

    let back = move |_| state.update(BlogView::close);
    let cover = post.cover_image().map(str::to_owned);
    let author = post.author.as_ref().map(|a| {
        let name = a.display_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Anonymous");
        format!("By {name}")
    });
    let first_label = post.labels.first().cloned();
    let labels: Vec<String> = post.labels.iter().take(DETAIL_LABELS).cloned().collect();
    let sticky_title = post.title.clone();
    let alt = post.title.clone();

    view! {
        <div class="post-detail">
            <div class="post-detail__sticky" class:post-detail__sticky--visible=move || state.with(|v| v.sticky_title)>
                <button class="post-detail__back" on:click=back aria-label="Back to posts">"←"</button>
                <h2>{sticky_title}</h2>
            </div>

            <div class="post-detail__header" node_ref=title_ref>
                <button class="post-detail__back" on:click=back aria-label="Back to posts">"←"</button>
                <h1>{post.title.clone()}</h1>
            </div>

            {cover.map(|src| {
                view! {
                    <Show when=move || !image_failed.get()>
                        <img
                            class="post-detail__image"
                            src=src.clone()
                            alt=alt.clone()
                            on:error=move |_| image_failed.set(true)
                        />
                    </Show>
                }
            })}

            <div class="post-detail__meta">
                <span>{text::format_long_date(&post.published)}</span>
                <span>{text::estimate_read_time(&post.content)}</span>
                {first_label.map(|label| view! { <span>{label}</span> })}
            </div>
            {author.map(|by| view! { <div class="post-detail__author">{by}</div> })}
            <div class="post-detail__labels">
                {labels.into_iter().map(|label| view! { <span class="label">{label}</span> }).collect_view()}
            </div>

            <div class="post-detail__content" inner_html=post.content.clone()></div>
        </div>
    }
}
