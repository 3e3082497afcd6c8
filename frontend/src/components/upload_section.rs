use super::super::{Model, Msg};
use super::utils::{debounce, first_image_file};
use crate::content::ui;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);
    let link = ctx.link();

    // A cancelled picker or a non-image selection sends nothing; the current
    // image and result stay untouched.
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        picked.map(Msg::ImagePicked)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change.clone()}
            />
            <input
                type="file"
                id="camera-input"
                accept="image/*"
                capture="environment"
                style="display: none;"
                onchange={handle_change}
            />

            <div class="button-row">
                <button
                    class="picker-btn"
                    onclick={debounce(300, {
                        let trigger = trigger_input("file-input");
                        move || trigger.emit(())
                    })}
                >
                    <i class="fa-solid fa-images"></i>{ format!(" {}", strings.gallery) }
                </button>
                <button
                    class="picker-btn"
                    onclick={debounce(300, {
                        let trigger = trigger_input("camera-input");
                        move || trigger.emit(())
                    })}
                >
                    <i class="fa-solid fa-camera"></i>{ format!(" {}", strings.camera) }
                </button>
            </div>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{ strings.drop_hint }</p>
                </div>
            </div>

            { render_analyze_button(model, ctx) }
        </>
    }
}

fn trigger_input(id: &'static str) -> Callback<()> {
    Callback::from(move |_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(id)
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    })
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);
    let link = ctx.link().clone();

    html! {
        <button
            class="analyze-btn"
            onclick={debounce(300, {
                let link = link.clone();
                move || link.send_message(Msg::Analyze)
            })}
            disabled={model.loading}
        >
            { if model.loading {
                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{ format!(" {}", strings.analyzing) }</> }
            } else {
                html! { <>{ strings.analyze }</> }
            }}
        </button>
    }
}
