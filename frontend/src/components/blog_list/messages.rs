use common::model::post::BlogPost;

pub enum Msg {
    Load,
    PostsLoaded(Vec<BlogPost>),
    LoadFailed(gloo_net::Error),
    EditTitle(String),
    EditAuthor(String),
    EditContent(String),
    Submit,
    MutationDone,
    StartEdit(BlogPost),
    Delete(i64),
    OpenCreateModal,
    CloseModal,
    Hover(Option<usize>),
}
