//! Component state for the blog list view.
//!
//! The struct holds the post collection plus the UI flags the view needs
//! (hover index, modal visibility, draft fields, edit target). The pure
//! state transitions live here as methods so `update.rs` only adds the
//! network side effects on top of them.

use std::rc::Rc;

use common::model::post::{BlogPost, DraftWire};

use crate::dialogs::{browser_dialogs, DialogService};

/// The in-progress, unsaved values of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl Draft {
    /// Presence check on the raw strings; no trimming, matching the
    /// submission contract.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty() && !self.content.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    pub fn to_wire(&self) -> DraftWire {
        DraftWire {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.content.clone(),
        }
    }
}

/// Main state container for the `BlogListComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct BlogListComponent {
    /// Direct projection of the last successful fetch. Never edited in
    /// place; every mutation is followed by a full re-fetch.
    pub posts: Vec<BlogPost>,

    /// Index of the card currently under the pointer, for title styling.
    pub hovered: Option<usize>,

    /// Whether the create/edit modal is shown.
    pub modal_open: bool,

    /// Current form values.
    pub draft: Draft,

    /// Post being edited, or `None` for create mode.
    pub editing: Option<BlogPost>,

    /// Guard so the initial load fires only on the first render.
    pub loaded: bool,

    /// Blocking alert/confirm capability.
    pub dialogs: Rc<dyn DialogService>,
}

impl BlogListComponent {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            hovered: None,
            modal_open: false,
            draft: Draft::default(),
            editing: None,
            loaded: false,
            dialogs: browser_dialogs(),
        }
    }

    /// Replaces the whole list with the latest fetch result.
    pub fn apply_posts(&mut self, posts: Vec<BlogPost>) {
        self.posts = posts;
    }

    /// Opens the modal in create mode with an empty draft.
    pub fn open_create(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.modal_open = true;
    }

    /// Copies an existing post into the draft and opens the modal in edit
    /// mode. No network call.
    pub fn start_edit(&mut self, post: BlogPost) {
        self.draft.title = post.title.clone();
        self.draft.author = post.author.clone();
        self.draft.content = post.content.clone();
        self.editing = Some(post);
        self.modal_open = true;
    }

    /// Closes the modal. Draft and edit target are cleared together with
    /// the flag so stale values cannot leak into a later create.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.draft.clear();
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::post::parse_timestamp;

    fn post(id: i64) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            content: "Body".to_string(),
            author: "Ann".to_string(),
            date: parse_timestamp("2024-01-01T00:00:00Z"),
        }
    }

    #[test]
    fn draft_completeness_checks_raw_strings() {
        let mut draft = Draft::default();
        assert!(!draft.is_complete());

        draft.title = "T".to_string();
        draft.author = "A".to_string();
        assert!(!draft.is_complete());

        // Whitespace-only counts as present; no trimming happens.
        draft.content = " ".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn start_edit_copies_exact_fields_and_opens_modal() {
        let mut state = BlogListComponent::new();
        state.start_edit(post(3));

        assert!(state.modal_open);
        assert_eq!(state.editing.as_ref().map(|p| p.id), Some(3));
        assert_eq!(state.draft.title, "Post 3");
        assert_eq!(state.draft.author, "Ann");
        assert_eq!(state.draft.content, "Body");
    }

    #[test]
    fn close_modal_clears_draft_and_edit_target_together() {
        let mut state = BlogListComponent::new();
        state.start_edit(post(1));

        state.close_modal();
        assert!(!state.modal_open);
        assert_eq!(state.draft, Draft::default());
        assert!(state.editing.is_none());
    }

    #[test]
    fn open_create_resets_any_previous_edit() {
        let mut state = BlogListComponent::new();
        state.start_edit(post(1));
        state.open_create();

        assert!(state.modal_open);
        assert!(state.editing.is_none());
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn apply_posts_replaces_the_list_wholesale() {
        let mut state = BlogListComponent::new();
        state.apply_posts(vec![post(1), post(2)]);
        state.apply_posts(vec![post(9)]);

        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, 9);
    }

    #[test]
    fn draft_maps_content_to_wire_description() {
        let draft = Draft {
            title: "T".to_string(),
            author: "A".to_string(),
            content: "C".to_string(),
        };
        let wire = draft.to_wire();
        assert_eq!(wire.title, "T");
        assert_eq!(wire.author, "A");
        assert_eq!(wire.description, "C");
    }
}
