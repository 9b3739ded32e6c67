use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    block_selector::BlockSelector,
    board::{Board, CellView},
    controls_panel::ControlsPanel,
    stats_panel::StatsPanel,
};
use crate::config::GameConfig;
use crate::engine::{MineAction, MiningEngine};
use crate::storage::{load_config_override, load_high_score, save_high_score, should_persist};

/// Engine time step driven by the page interval.
const TICK_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Game page: 10x10, build mode, timer, persisted high score.
    Full,
    /// Home page: 6x6 with respawning cells.
    Mini,
}

impl Variant {
    pub fn config(self) -> GameConfig {
        match self {
            Variant::Full => GameConfig::full(),
            Variant::Mini => GameConfig::mini(),
        }
    }

    /// localStorage key holding an optional JSON config override.
    pub fn config_key(self) -> &'static str {
        match self {
            Variant::Full => "blockMineConfig.full",
            Variant::Mini => "blockMineConfig.mini",
        }
    }

    fn fade(self) -> f64 {
        match self {
            Variant::Full => 0.5,
            Variant::Mini => 0.4,
        }
    }

    fn cell_px(self) -> u32 {
        match self {
            Variant::Full => 40,
            Variant::Mini => 48,
        }
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Variant::Full => ("START GAME", "STOP GAME"),
            Variant::Mini => ("START MINING", "STOP MINING"),
        }
    }
}

fn seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (r << 32) ^ js_sys::Date::now() as u64
}

#[derive(Properties, PartialEq, Clone)]
pub struct MiningGameProps {
    pub variant: Variant,
}

#[function_component(MiningGame)]
pub fn mining_game(props: &MiningGameProps) -> Html {
    let variant = props.variant;
    let engine = use_reducer(move || {
        let cfg = load_config_override(variant.config_key()).unwrap_or_else(|| variant.config());
        let high = cfg.storage_key.as_deref().map(load_high_score).unwrap_or(0);
        MiningEngine::new(cfg, seed(), high)
    });
    let saved_high = use_mut_ref(|| engine.high_score());

    // Engine clock
    {
        let engine = engine.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let tick = Closure::wrap(Box::new(move || {
                engine.dispatch(MineAction::Advance { dt_ms: TICK_MS });
            }) as Box<dyn FnMut()>);
            let id = window.as_ref().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_MS as i32,
                )
                .ok()
            });
            move || {
                if let (Some(w), Some(id)) = (window, id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }
    // Persist high score; only a strictly higher value is written.
    {
        let key = engine.config().storage_key.clone();
        let saved_high = saved_high.clone();
        use_effect_with(engine.high_score(), move |high| {
            let mut last = saved_high.borrow_mut();
            if should_persist(*last, *high) {
                if let Some(key) = key {
                    save_high_score(&key, *high);
                }
                *last = *high;
            }
            || ()
        });
    }

    let on_toggle = {
        let engine = engine.clone();
        Callback::from(move |_| engine.dispatch(MineAction::Toggle))
    };
    let on_reset = {
        let engine = engine.clone();
        Callback::from(move |_| engine.dispatch(MineAction::Reset))
    };
    let on_cell = {
        let engine = engine.clone();
        Callback::from(move |idx: usize| {
            if engine.is_playing() {
                engine.dispatch(MineAction::Hit { idx });
            } else {
                engine.dispatch(MineAction::Place { idx });
            }
        })
    };
    let build_mode = engine.config().build_mode;
    let on_clear = build_mode.then(|| {
        let engine = engine.clone();
        Callback::from(move |_| engine.dispatch(MineAction::Clear))
    });
    let on_select = {
        let engine = engine.clone();
        Callback::from(move |kind| engine.dispatch(MineAction::Select(kind)))
    };

    let cfg = engine.config();
    let colors: Vec<AttrValue> = cfg
        .catalog
        .iter()
        .map(|s| AttrValue::from(s.color.clone()))
        .collect();
    let cells: Vec<CellView> = (0..engine.grid().len())
        .map(|idx| CellView {
            kind: engine.kind_at(idx),
            damage: engine.damage_at(idx),
        })
        .collect();
    let (start_label, stop_label) = variant.labels();
    let elapsed = (variant == Variant::Full).then(|| engine.elapsed_ms());
    let high = cfg.storage_key.is_some().then(|| engine.high_score());

    html! {
        <div class="mining-game" style="display:flex; flex-direction:column; gap:12px; align-items:flex-start;">
            <StatsPanel score={engine.score()} blocks={engine.blocks_destroyed()} elapsed_ms={elapsed} high_score={high} />
            <ControlsPanel
                playing={engine.is_playing()}
                {start_label}
                {stop_label}
                {on_toggle}
                {on_reset}
                {on_clear}
            />
            { if build_mode { html!{
                <BlockSelector selected={engine.selected()} colors={colors.clone()} {on_select} />
            } } else { html!{} } }
            <Board
                width={cfg.grid.width}
                {cells}
                {colors}
                fade={variant.fade()}
                cell_px={variant.cell_px()}
                {on_cell}
            />
        </div>
    }
}
