use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub status_line: AttrValue,
    /// Names what a press will do, not the current state
    pub action_label: AttrValue,
    pub on_toggle: Callback<()>,
}

#[function_component(DeviceControl)]
pub fn device_control(props: &Props) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| {
            log::debug!("User pressed device toggle");
            on_toggle.emit(());
        })
    };

    html! {
        <>
            <p class="device-status">{props.status_line.clone()}</p>
            <button class="toggle" {onclick}>{props.action_label.clone()}</button>
        </>
    }
}
