use super::super::{Model, Msg};
use crate::content::ui;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    match &model.image {
        Some(selected) => html! {
            <div class="image-card">
                <img
                    id="leaf-preview"
                    src={selected.preview_url.to_string()}
                    alt={selected.file.name()}
                />
                <button
                    class="remove-btn"
                    title="Remove this image"
                    onclick={ctx.link().callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::ClearImage
                    })}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        },
        None => html! {
            <div class="image-card placeholder">
                <i class="fa-regular fa-image"></i>
                <p>{ strings.select_leaf_hint }</p>
            </div>
        },
    }
}
