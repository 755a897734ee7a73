//! Properties for the `BlogListComponent`.

use yew::prelude::*;

/// Lets a host page point the view at a different backend; everything else
/// is owned by the component itself.
#[derive(Properties, PartialEq, Clone)]
pub struct BlogListProps {
    /// Base URL of the blog API, without a trailing slash.
    #[prop_or(AttrValue::Static("http://localhost:8000"))]
    pub api_base: AttrValue,
}
