use crate::util::format_clock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub blocks: u32,
    #[prop_or_default]
    pub elapsed_ms: Option<u64>,
    #[prop_or_default]
    pub high_score: Option<u64>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:60px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div class="stats-panel" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"Score"}</span>
                <span id="score" style={value_style}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Blocks"}</span>
                <span id="blocks" style={value_style}>{ props.blocks }</span>
            </div>
            { if let Some(ms) = props.elapsed_ms { html!{
                <div style={row_style}>
                    <span style={label_style}>{"Time"}</span>
                    <span id="timer" style={value_style}>{ format_clock(ms) }</span>
                </div>
            } } else { html!{} } }
            { if let Some(best) = props.high_score { html!{
                <div style={row_style}>
                    <span style={format!("{} color:#d4af37;", label_style)}>{"High Score"}</span>
                    <span id="highScore" style={format!("{} color:#d4af37;", value_style)}>{ best }</span>
                </div>
            } } else { html!{} } }
        </div>
    }
}
