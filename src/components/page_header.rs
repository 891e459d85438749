use yew::prelude::*;
use crate::hooks::use_navigator;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
}

/// Title bar with the "Back to Dashboard" link shared by the inner pages
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let navigator = use_navigator();

    html! {
        <div class="page-header">
            <button type="button" class="btn-back" onclick={navigator.to::<MouseEvent>(Route::Dashboard)}>
                {"← Back to Dashboard"}
            </button>
            <h1>{props.title.clone()}</h1>
        </div>
    }
}
