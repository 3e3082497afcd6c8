use super::super::{Model, Msg};
use crate::content::{self, ui};
use shared::{ConfidenceBand, DiseaseLabel, format_accuracy};
use yew::prelude::*;

const SERVICE_CENTER_QUERY: &str = "Agriculture Service Center Sri Lanka";

pub fn service_center_url() -> String {
    format!(
        "https://www.google.com/maps/search/{}",
        urlencoding::encode(SERVICE_CENTER_QUERY)
    )
}

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };
    let strings = ui::strings(model.language);

    let percent = format_accuracy(result.confidence);
    let (band_label, band_class) = match result.band() {
        ConfidenceBand::High => (strings.high_confidence, "band-high"),
        ConfidenceBand::Reliable => (strings.reliable, "band-reliable"),
        ConfidenceBand::Low => (strings.low_confidence, "band-low"),
    };

    let healthy = result.label == DiseaseLabel::Healthy;
    let info = content::disease_info(model.language, result.label);

    html! {
        <div class={classes!("result-card", healthy.then_some("healthy"))}>
            <h2 class="result-title">{ result.label.to_string() }</h2>
            <p class={classes!("confidence-banner", band_class)}>
                { format!("{band_label} ({percent})") }
            </p>
            <div class="confidence-meter">
                <div class="meter">
                    <div class="meter-fill" style={format!("width: {percent}")}></div>
                </div>
                <div class="meter-value">{ percent.clone() }</div>
            </div>
            { match info {
                Some(info) => html! {
                    <>
                        <p class="result-desc">{ info.description }</p>
                        <h3 class="result-section">{ strings.symptoms }</h3>
                        <p class="result-text">{ info.symptoms }</p>
                        <h3 class="result-section">{ strings.conditions }</h3>
                        <p class="result-text">{ info.conditions }</p>
                        <h3 class="result-section">{ strings.pathogen }</h3>
                        <p class="result-text">{ info.pathogen }</p>
                        <h3 class="result-section">{ strings.management }</h3>
                        <p class="result-text">{ info.management }</p>
                    </>
                },
                None => html! { <p class="result-missing">{ strings.details_not_found }</p> },
            }}
            <button
                class="map-btn"
                onclick={ctx.link().callback(|_| Msg::OpenExternal(service_center_url()))}
            >
                <i class="fa-solid fa-location-dot"></i>{ format!(" {}", strings.find_service_center) }
            </button>
        </div>
    }
}
