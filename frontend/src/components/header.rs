use super::super::{Model, Msg, Screen};
use crate::content::ui;
use yew::prelude::*;

/// Renders the application header with the screen switcher.
pub fn render_header(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i>{ format!(" {}", strings.app_title) }</h1>
            <p class="subtitle">{ strings.subtitle }</p>
            <nav class="screen-nav">
                { render_nav_button(model, ctx, Screen::Diagnose, strings.diagnose_tab) }
                { render_nav_button(model, ctx, Screen::Explore, strings.explore_tab) }
            </nav>
        </header>
    }
}

fn render_nav_button(
    model: &Model,
    ctx: &Context<Model>,
    screen: Screen,
    label: &'static str,
) -> Html {
    let active = model.screen == screen;
    html! {
        <button
            class={classes!("nav-button", active.then_some("active"))}
            onclick={ctx.link().callback(move |_| Msg::SetScreen(screen))}
        >
            { label }
        </button>
    }
}
