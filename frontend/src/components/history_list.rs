use super::super::{Model, Msg};
use crate::content::ui;
use shared::ScanRecord;
use yew::prelude::*;

pub fn render_history(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <div class="history">
            <h3 class="tab-title">{ strings.history_title }</h3>
            { if model.history.is_empty() {
                html! { <p class="empty-history">{ strings.no_history }</p> }
            } else {
                html! {
                    <div class="history-list">
                        { for model.history.iter().map(|record| render_history_card(ctx, record)) }
                    </div>
                }
            }}
        </div>
    }
}

fn render_history_card(ctx: &Context<Model>, record: &ScanRecord) -> Html {
    let healthy = record.disease == "Healthy";
    let tone = if healthy { "healthy" } else { "diseased" };
    let id = record.id.clone();

    html! {
        <div class="history-card" key={record.id.clone()}>
            <div>
                <p class={classes!("history-disease", tone)}>{ record.disease.clone() }</p>
                <p class="history-date">{ record.date.clone() }</p>
            </div>
            <div class="history-right">
                <span class={classes!("accuracy-badge", tone)}>{ record.accuracy.clone() }</span>
                <button
                    class="delete-btn"
                    title="Delete this record"
                    onclick={ctx.link().callback(move |_| Msg::DeleteScan(id.clone()))}
                >
                    <i class="fa-solid fa-trash-can"></i>
                </button>
            </div>
        </div>
    }
}
