use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner with an optional caption
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="screen screen-loading">
            <span class="spinner" role="progressbar"></span>
            {if let Some(text) = &props.text {
                html! { <p>{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
