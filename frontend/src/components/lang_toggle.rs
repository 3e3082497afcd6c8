use super::super::{Model, Msg};
use crate::content::ui;
use shared::Language;
use yew::prelude::*;

pub fn render_lang_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <div class="lang-section">
            <div class="lang-header">
                <i class="fa-solid fa-language"></i>
                <span class="lang-hint">{ strings.language_hint }</span>
            </div>
            <div class="lang-container">
                { for [Language::En, Language::Si, Language::Ta].into_iter().map(|language| {
                    let active = model.language == language;
                    html! {
                        <button
                            class={classes!("lang-btn", active.then_some("active"))}
                            onclick={ctx.link().callback(move |_| Msg::SetLanguage(language))}
                        >
                            { native_name(language) }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// Each language is labelled in its own script, whichever one is active.
fn native_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Si => "සිංහල",
        Language::Ta => "தமிழ்",
    }
}
