//! Update function for the blog list view.
//!
//! Elm-style: receives the current `BlogListComponent` state, the
//! `Context`, and a `Msg`, mutates the state, and returns whether the view
//! should re-render. Pure transitions are delegated to the state methods;
//! this module adds the network side effects.
//!
//! Request discipline, such as it is: every mutation is fire-and-forget
//! followed by a full re-fetch. Overlapping mutations race and the
//! last-resolving fetch wins; there is no sequencing, no cancellation and
//! no retry.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::messages::Msg;
use super::state::BlogListComponent;

pub fn update(
    component: &mut BlogListComponent,
    ctx: &Context<BlogListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            let base = ctx.props().api_base.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_posts(&base).await {
                    Ok(posts) => link.send_message(Msg::PostsLoaded(posts)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
            false
        }
        Msg::PostsLoaded(posts) => {
            component.apply_posts(posts);
            true
        }
        Msg::LoadFailed(err) => {
            // List stays as it was; no retry, no user-visible error.
            error!("Failed to fetch blogs:", err.to_string());
            false
        }
        Msg::EditTitle(value) => {
            component.draft.title = value;
            true
        }
        Msg::EditAuthor(value) => {
            component.draft.author = value;
            true
        }
        Msg::EditContent(value) => {
            component.draft.content = value;
            true
        }
        Msg::Submit => {
            if !component.draft.is_complete() {
                component.dialogs.alert("All fields are required!");
                return false;
            }

            let base = ctx.props().api_base.to_string();
            let draft = component.draft.to_wire();
            let editing_id = component.editing.as_ref().map(|post| post.id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api::update_post(&base, id, &draft).await,
                    None => api::create_post(&base, &draft).await,
                };
                if let Err(err) = result {
                    error!("Failed to save blog:", err.to_string());
                }
                // Resynchronize either way; the list reflects whatever the
                // backend actually holds.
                link.send_message(Msg::MutationDone);
            });
            false
        }
        Msg::MutationDone => {
            component.close_modal();
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::StartEdit(post) => {
            component.start_edit(post);
            true
        }
        Msg::Delete(id) => {
            if !component
                .dialogs
                .confirm("Are you sure you want to delete this blog?")
            {
                return false;
            }

            let base = ctx.props().api_base.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Err(err) = api::delete_post(&base, id).await {
                    error!("Failed to delete blog:", err.to_string());
                }
                link.send_message(Msg::Load);
            });
            false
        }
        Msg::OpenCreateModal => {
            component.open_create();
            true
        }
        Msg::CloseModal => {
            component.close_modal();
            true
        }
        Msg::Hover(index) => {
            component.hovered = index;
            true
        }
    }
}
