use crate::app::App;

mod app;
mod components;
mod dialogs;

fn main() {
    yew::Renderer::<App>::new().render();
}
