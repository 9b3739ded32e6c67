use crate::model::BlockKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BlockSelectorProps {
    pub selected: BlockKind,
    /// Swatch colour per kind, in catalog order.
    pub colors: Vec<AttrValue>,
    pub on_select: Callback<BlockKind>,
}

#[function_component]
pub fn BlockSelector(props: &BlockSelectorProps) -> Html {
    html! {<div class="block-selector" style="display:flex; gap:6px; align-items:center;">
        <span style="font-size:12px; opacity:0.7;">{"Build:"}</span>
        { for BlockKind::ALL.iter().map(|&kind| {
            let cb = props.on_select.clone();
            let onclick = Callback::from(move |_| cb.emit(kind));
            let color = props.colors.get(kind.index()).cloned().unwrap_or_default();
            let border = if kind == props.selected { "#f0f6fc" } else { "#30363d" };
            html!{
                <button
                    class={classes!("block-option", (kind == props.selected).then_some("active"))}
                    title={kind.label()}
                    {onclick}
                    style={format!("width:28px; height:28px; background:{}; border:2px solid {}; border-radius:4px;", color, border)}
                />
            }
        }) }
    </div>}
}
