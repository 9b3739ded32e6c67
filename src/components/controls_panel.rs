use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub playing: bool,
    pub start_label: &'static str,
    pub stop_label: &'static str,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    /// Shown only when set.
    #[prop_or_default]
    pub on_clear: Option<Callback<()>>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (label, class) = if props.playing {
        (props.stop_label, "btn btn-alert")
    } else {
        (props.start_label, "btn btn-primary")
    };
    html! {<div class="controls-panel" style="display:flex; gap:8px; flex-wrap:wrap;">
        <button class={class} onclick={toggle_cb}>{ label }</button>
        <button class="btn" onclick={reset_cb}>{"RESET"}</button>
        { if let Some(cb) = &props.on_clear {
            let cb = cb.clone();
            html!{ <button class="btn" onclick={Callback::from(move |_| cb.emit(()))}>{"CLEAR"}</button> }
        } else { html!{} } }
    </div>}
}
