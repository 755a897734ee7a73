//! View rendering for the blog list.
//!
//! Layout: a header, the post list (or an empty-state message), a floating
//! "+ Add Blog" button, and the create/edit modal. The modal is only in
//! the tree while `modal_open` is set; its title and submit label follow
//! create-vs-edit mode.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::post::BlogPost;

use super::messages::Msg;
use super::state::BlogListComponent;

pub fn view(component: &BlogListComponent, ctx: &Context<BlogListComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="blog-root">
            { build_header() }
            { build_post_section(component, link) }
            <button class="add-blog-btn" onclick={link.callback(|_| Msg::OpenCreateModal)}>
                { "+ Add Blog" }
            </button>
            {
                if component.modal_open {
                    build_modal(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <header class="blog-header">
            <h1>{ "Mini Blog Site" }</h1>
            <p>{ "Share your thoughts with the world!" }</p>
        </header>
    }
}

/// Post count badge plus either the empty-state message or one card per post.
fn build_post_section(component: &BlogListComponent, link: &Scope<BlogListComponent>) -> Html {
    html! {
        <section class="post-section">
            <h1 class="post-section-title">
                { "All Posts" }
                <span class="post-count">{ component.posts.len() }</span>
            </h1>
            {
                if component.posts.is_empty() {
                    html! {
                        <div class="empty-state">{ "No blogs yet. Add your first one!" }</div>
                    }
                } else {
                    component
                        .posts
                        .iter()
                        .enumerate()
                        .map(|(index, post)| build_post_card(component, link, index, post))
                        .collect::<Html>()
                }
            }
        </section>
    }
}

fn build_post_card(
    component: &BlogListComponent,
    link: &Scope<BlogListComponent>,
    index: usize,
    post: &BlogPost,
) -> Html {
    let title_class = if component.hovered == Some(index) {
        "post-title hovered"
    } else {
        "post-title"
    };
    let edit_post = post.clone();
    let post_id = post.id;

    html! {
        <div
            class="post-card"
            key={post.id}
            onmouseover={link.callback(move |_| Msg::Hover(Some(index)))}
            onmouseout={link.callback(|_| Msg::Hover(None))}
        >
            <div class="post-card-top">
                <h1 class={title_class}>{ &post.title }</h1>
                <div class="post-actions">
                    <button onclick={link.callback(move |_| Msg::StartEdit(edit_post.clone()))}>
                        { "Edit" }
                    </button>
                    <button onclick={link.callback(move |_| Msg::Delete(post_id))}>
                        { "Delete" }
                    </button>
                </div>
            </div>
            <div class="post-meta">
                <span class="post-author">{ &post.author }</span>
                <span class="post-date">{ post.date.format("%b %e, %Y").to_string() }</span>
            </div>
            <hr />
            <p class="post-content">{ &post.content }</p>
        </div>
    }
}

fn build_modal(component: &BlogListComponent, link: &Scope<BlogListComponent>) -> Html {
    let heading = if component.editing.is_some() {
        "Edit Blog Post"
    } else {
        "Create a new blog post!"
    };
    let submit_label = if component.editing.is_some() {
        "Update Blog"
    } else {
        "Post Blog"
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <button class="modal-close" onclick={link.callback(|_| Msg::CloseModal)}>
                        { "✕" }
                    </button>
                    <div>
                        <h1>{ heading }</h1>
                        <p>{ "Let your creativity shine through!" }</p>
                    </div>
                </div>
                <form
                    class="modal-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <label for="title">{ "Title:" }</label>
                    <input
                        type="text"
                        name="title"
                        placeholder="Title"
                        value={component.draft.title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label for="author">{ "Author:" }</label>
                    <input
                        type="text"
                        name="author"
                        placeholder="Your Name"
                        value={component.draft.author.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditAuthor(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label for="content">{ "Content:" }</label>
                    <textarea
                        name="content"
                        placeholder="Content"
                        value={component.draft.content.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditContent(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                    <button type="submit">{ submit_label }</button>
                </form>
            </div>
        </div>
    }
}
