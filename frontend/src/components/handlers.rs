use super::super::{ExploreTab, Model, Msg, Screen, SelectedImage};
use super::utils::first_image_file;
use crate::content::ui;
use crate::{api, storage};
use gloo_console::error;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClassificationResult, Language};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_image_picked(model: &mut Model, file: GlooFile) -> bool {
    let preview_url = ObjectUrl::from(file.clone());
    model.image = Some(SelectedImage { file, preview_url });
    model.result = None;
    model.error = None;
    // Invalidate any in-flight request; its result belongs to the old image.
    model.request_seq += 1;
    model.loading = false;
    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    model.image = None;
    model.result = None;
    model.error = None;
    model.request_seq += 1;
    model.loading = false;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(file) = model.image.as_ref().map(|selected| selected.file.clone()) else {
        model.error = Some(ui::strings(model.language).select_photo_alert.to_string());
        return true;
    };
    if model.loading {
        return false;
    }

    model.loading = true;
    model.error = None;
    model.request_seq += 1;
    send_analysis_request(ctx, model.request_seq, file);
    true
}

pub fn send_analysis_request(ctx: &Context<Model>, seq: u64, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            match api::classify(&file).await {
                Ok(result) => link.send_message(Msg::ClassificationDone(seq, result)),
                Err(e) => {
                    error!(format!("classification request failed: {e}"));
                    link.send_message(Msg::ClassificationFailed(seq));
                }
            }
        }
    });
}

pub fn handle_classification_done(
    model: &mut Model,
    seq: u64,
    result: ClassificationResult,
) -> bool {
    if seq != model.request_seq {
        log::info!("dropping stale classification response (seq {seq})");
        return false;
    }

    model.loading = false;
    storage::record_scan(&mut model.history, result.label, result.confidence);
    model.result = Some(result);
    true
}

pub fn handle_classification_failed(model: &mut Model, seq: u64) -> bool {
    if seq != model.request_seq {
        return false;
    }

    model.loading = false;
    model.error = Some(ui::strings(model.language).analysis_failed.to_string());
    true
}

pub fn handle_set_language(model: &mut Model, language: Language) -> bool {
    if model.language == language {
        return false;
    }
    model.language = language;
    storage::save_language(language);
    true
}

pub fn handle_set_screen(model: &mut Model, screen: Screen) -> bool {
    if model.screen == screen {
        return false;
    }
    model.screen = screen;
    model.expanded_card = None;
    true
}

pub fn handle_set_explore_tab(model: &mut Model, tab: ExploreTab) -> bool {
    if model.explore_tab == tab {
        return false;
    }
    model.explore_tab = tab;
    model.expanded_card = None;
    true
}

pub fn handle_toggle_guide_card(model: &mut Model, id: &'static str) -> bool {
    model.expanded_card = if model.expanded_card == Some(id) {
        None
    } else {
        Some(id)
    };
    true
}

/// Deletion asks for confirmation first; declining leaves everything as is.
pub fn handle_delete_scan(model: &mut Model, id: &str) -> bool {
    let strings = ui::strings(model.language);
    let confirmed = web_sys::window()
        .and_then(|window| window.confirm_with_message(strings.delete_prompt).ok())
        .unwrap_or(false);
    if !confirmed {
        return false;
    }

    storage::delete_scan(&mut model.history, id);
    true
}

pub fn handle_open_external(model: &mut Model, url: &str) -> bool {
    let opened = web_sys::window()
        .and_then(|window| window.open_with_url_and_target(url, "_blank").ok())
        .flatten();
    if opened.is_none() {
        model.error = Some(ui::strings(model.language).open_link_failed.to_string());
        return true;
    }
    false
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            event.prevent_default();
            process_file_list(ctx, file_list);
            return true;
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    match first_image_file(&file_list) {
        Some(file) => ctx.link().send_message(Msg::ImagePicked(file)),
        None => log::warn!("ignored drop/paste without an image file"),
    }
}
