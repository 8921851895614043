use yew::prelude::*;

use super::resource::Resource;

#[derive(Properties, PartialEq)]
pub struct ResourceProps<R: Resource> {
    #[prop_or_default]
    pub filter: R::Filter,
    /// Called after a row action navigated away, so a hosting modal can close.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}
