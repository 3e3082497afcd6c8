use super::super::{ExploreTab, Model, Msg};
use super::history_list;
use crate::content::{guide, ui};
use yew::prelude::*;

pub fn render_explore(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <div class="explore">
            <h2 class="explore-title">{ strings.explore_title }</h2>
            { render_tab_row(model, ctx) }
            { match model.explore_tab {
                ExploreTab::Guide => render_guide(model, ctx),
                ExploreTab::Tips => render_tips(model, ctx),
                ExploreTab::History => history_list::render_history(model, ctx),
            }}
        </div>
    }
}

fn render_tab_row(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);
    let tabs = [
        (ExploreTab::Guide, strings.tab_guide),
        (ExploreTab::Tips, strings.tab_tips),
        (ExploreTab::History, strings.tab_history),
    ];

    html! {
        <div class="tab-row">
            { for tabs.into_iter().map(|(tab, label)| {
                let active = model.explore_tab == tab;
                html! {
                    <button
                        class={classes!("tab-button", active.then_some("active"))}
                        onclick={ctx.link().callback(move |_| Msg::SetExploreTab(tab))}
                    >
                        { label }
                    </button>
                }
            })}
        </div>
    }
}

fn render_guide(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <div class="guide">
            <h3 class="tab-title">{ strings.guide_title }</h3>

            <div class="section-header">
                <i class="fa-solid fa-leaf"></i>
                <span>{ format!(" {}", strings.diseases_section) }</span>
            </div>
            { for guide::disease_guide(model.language).iter().map(|entry| render_guide_card(model, ctx, entry)) }

            <div class="section-header pests">
                <i class="fa-solid fa-bug"></i>
                <span>{ format!(" {}", strings.pests_section) }</span>
            </div>
            { for guide::pest_guide(model.language).iter().map(|entry| render_guide_card(model, ctx, entry)) }
        </div>
    }
}

fn render_guide_card(model: &Model, ctx: &Context<Model>, entry: &'static guide::GuideEntry) -> Html {
    let expanded = model.expanded_card == Some(entry.id);
    let id = entry.id;

    html! {
        <div
            class={classes!("guide-card", expanded.then_some("expanded"))}
            key={id}
            onclick={ctx.link().callback(move |_| Msg::ToggleGuideCard(id))}
        >
            <div class="guide-card-header">
                <span class="guide-name">{ entry.name }</span>
                <i class={ if expanded { "fa-solid fa-chevron-up" } else { "fa-solid fa-chevron-down" } }></i>
            </div>
            { if expanded {
                html! { <p class="guide-desc">{ entry.summary }</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_tips(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = ui::strings(model.language);

    html! {
        <div class="tips">
            <h3 class="tab-title">{ strings.tips_title }</h3>
            { for guide::growing_tips(model.language).iter().map(|section| html! {
                <div class="tips-section">
                    <h4 class="tips-stage">{ section.title }</h4>
                    { for section.tips.iter().map(|tip| html! {
                        <div class="tip-item">
                            <i class="fa-solid fa-seedling"></i>
                            <p>{ *tip }</p>
                        </div>
                    })}
                </div>
            })}

            <h4 class="videos-title">{ strings.videos_title }</h4>
            { for guide::VIDEO_TUTORIALS.iter().map(|video| {
                let url = video.url;
                html! {
                    <button
                        class="video-link"
                        onclick={ctx.link().callback(move |_| Msg::OpenExternal(url.to_string()))}
                    >
                        <i class="fa-solid fa-circle-play"></i>{ format!(" {}", video.title) }
                    </button>
                }
            })}
        </div>
    }
}
