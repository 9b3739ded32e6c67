use super::mining_game::{MiningGame, Variant};
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Home,
    Game,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);

    let to_home = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Home))
    };
    let to_game = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Game))
    };

    let content = match *view {
        View::Home => html! {
            <section id="home" style="display:flex; flex-direction:column; gap:12px;">
                <h2 style="margin:0;">{"Mini Mine"}</h2>
                <p style="margin:0; opacity:0.8;">{"Click blocks to mine them. Mined cells grow back."}</p>
                <MiningGame variant={Variant::Mini} />
            </section>
        },
        View::Game => html! {
            <section id="game" style="display:flex; flex-direction:column; gap:12px;">
                <h2 style="margin:0;">{"Block Mine"}</h2>
                <p style="margin:0; opacity:0.8;">{"Stopped: click empty cells to build. Playing: click blocks to mine them."}</p>
                <MiningGame variant={Variant::Full} />
            </section>
        },
    };

    html! {
        <div id="root" style="padding:16px; color:#c9d1d9; background:#0d1117; min-height:100vh; font-family:sans-serif;">
            <nav style="display:flex; gap:8px; margin-bottom:16px;">
                <button onclick={to_home} disabled={*view == View::Home}>{"Home"}</button>
                <button onclick={to_game} disabled={*view == View::Game}>{"Game"}</button>
            </nav>
            { content }
        </div>
    }
}
