use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClassificationResult, Language, ScanRecord};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod api;
mod components;
mod content;
mod storage;

use components::{explore, handlers, header, lang_toggle, preview_area, results, upload_section, utils};

/// Top-level screens.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Diagnose,
    Explore,
}

/// Tabs within the explore screen.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ExploreTab {
    Guide,
    Tips,
    History,
}

/// The picked image plus its object URL for preview rendering.
struct SelectedImage {
    file: GlooFile,
    preview_url: ObjectUrl,
}

enum Msg {
    // Image acquisition
    ImagePicked(GlooFile),
    ClearImage,

    // Analysis
    Analyze,
    ClassificationDone(u64, ClassificationResult),
    ClassificationFailed(u64),

    // Preferences and history
    SetLanguage(Language),
    DeleteScan(String),

    // UI state
    SetDragging(bool),
    SetScreen(Screen),
    SetExploreTab(ExploreTab),
    ToggleGuideCard(&'static str),
    OpenExternal(String),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

/// All cross-screen state lives here. Language and history are read and
/// written only through `storage`; the classifier only through `api`.
struct Model {
    image: Option<SelectedImage>,
    result: Option<ClassificationResult>,
    loading: bool,
    error: Option<String>,
    language: Language,
    screen: Screen,
    explore_tab: ExploreTab,
    history: Vec<ScanRecord>,
    expanded_card: Option<&'static str>,
    is_dragging: bool,
    // Monotonic request stamp; a response carrying a stale stamp must not
    // touch state (the image it belongs to is gone).
    request_seq: u64,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            image: None,
            result: None,
            loading: false,
            error: None,
            language: storage::load_language(),
            screen: Screen::Diagnose,
            explore_tab: ExploreTab::Guide,
            history: storage::load_history(),
            expanded_card: None,
            is_dragging: false,
            request_seq: 0,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image acquisition
            Msg::ImagePicked(file) => handlers::handle_image_picked(self, file),
            Msg::ClearImage => handlers::handle_clear_image(self),

            // Analysis
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::ClassificationDone(seq, result) => {
                handlers::handle_classification_done(self, seq, result)
            }
            Msg::ClassificationFailed(seq) => handlers::handle_classification_failed(self, seq),

            // Preferences and history
            Msg::SetLanguage(language) => handlers::handle_set_language(self, language),
            Msg::DeleteScan(id) => handlers::handle_delete_scan(self, &id),

            // UI state
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::SetScreen(screen) => handlers::handle_set_screen(self, screen),
            Msg::SetExploreTab(tab) => handlers::handle_set_explore_tab(self, tab),
            Msg::ToggleGuideCard(id) => handlers::handle_toggle_guide_card(self, id),
            Msg::OpenExternal(url) => handlers::handle_open_external(self, &url),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header(self, ctx) }
                { lang_toggle::render_lang_toggle(self, ctx) }

                <main class="main-content">
                { utils::render_error_message(self) }
                { match self.screen {
                    Screen::Diagnose => html! {
                        <>
                            { upload_section::render_upload_section(self, ctx) }
                            { preview_area::render_preview_area(self, ctx) }
                            { results::render_results(self, ctx) }
                        </>
                    },
                    Screen::Explore => explore::render_explore(self, ctx),
                }}
                </main>

                <footer class="app-footer">
                    <p>{"AI CornCare | Corn Leaf Disease Diagnosis"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
