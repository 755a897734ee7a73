//! Blog list view: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and the API
//! client.
//!
//! The list is fetched once on first render and re-fetched after every
//! mutation; the component never edits its copy of the list in place.

use yew::prelude::*;

mod api;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BlogListProps;
pub use state::BlogListComponent;

impl Component for BlogListComponent {
    type Message = Msg;
    type Properties = BlogListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BlogListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
