use crate::model::BlockKind;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub kind: Option<BlockKind>,
    pub damage: f64,
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub width: u32,
    pub cells: Vec<CellView>,
    /// Block colour per kind, in catalog order.
    pub colors: Vec<AttrValue>,
    /// Opacity lost at full damage.
    pub fade: f64,
    pub cell_px: u32,
    pub on_cell: Callback<usize>,
}

pub fn cell_opacity(damage: f64, fade: f64) -> f64 {
    (1.0 - damage * fade).clamp(0.0, 1.0)
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({}, {}px); gap:2px; background:#0d1117; padding:4px; border:1px solid #30363d; border-radius:6px; width:max-content;",
        props.width, props.cell_px
    );
    html! {<div class="game-grid" style={grid_style}>
        { for props.cells.iter().enumerate().map(|(idx, cell)| {
            let cb = props.on_cell.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(idx));
            let base = format!("width:{0}px; height:{0}px; border-radius:3px; cursor:pointer;", props.cell_px);
            let style = match cell.kind {
                Some(kind) => {
                    let color = props.colors.get(kind.index()).cloned().unwrap_or_default();
                    format!("{} background:{}; opacity:{:.3};", base, color, cell_opacity(cell.damage, props.fade))
                }
                None => format!("{} background:#161b22;", base),
            };
            let class = classes!(
                "game-cell",
                cell.kind.map(|_| "has-block"),
                cell.kind.map(|k| format!("block-{}", k.label().to_lowercase())),
            );
            html!{ <div {class} {style} {onclick} data-index={idx.to_string()}></div> }
        }) }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_fades_with_damage() {
        assert_eq!(cell_opacity(0.0, 0.5), 1.0);
        assert!((cell_opacity(2.0 / 3.0, 0.5) - 2.0 / 3.0).abs() < 1e-9);
        assert!((cell_opacity(0.5, 0.4) - 0.8).abs() < 1e-9);
        assert_eq!(cell_opacity(5.0, 0.5), 0.0);
    }
}
