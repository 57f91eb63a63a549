use shared::constants::MAX_PRIZE_NAME_LENGTH;
use shared::leads::{leads_to_csv, Lead};
use shared::wheel::{Segment, WheelConfig, MAX_SEGMENTS, SEGMENT_COLORS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_feedback, Feedback};
use crate::storage::browser_store;
use crate::styles;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Leads,
    Config,
}

/// Operator dashboard: collected leads with CSV export on one tab, the
/// segment editor on the other.
#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let tab = use_state(|| AdminTab::Leads);
    let leads = use_state(|| browser_store().load_leads());
    let edited = use_state(|| browser_store().load_segments());
    let has_changes = use_state(|| false);
    let feedback = use_feedback();

    let select_leads = {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(AdminTab::Leads))
    };
    let select_config = {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(AdminTab::Config))
    };

    let download_csv = {
        let leads = leads.clone();
        Callback::from(move |_: MouseEvent| {
            if leads.is_empty() {
                return;
            }
            let csv = leads_to_csv(&leads);
            let filename = format!("leads_{}.csv", chrono::Utc::now().format("%Y-%m-%d"));
            trigger_download(&csv, &filename);
            log::info!("exported {} leads to {filename}", leads.len());
        })
    };

    let add_segment = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let clear = feedback.clear.clone();
        Callback::from(move |_: MouseEvent| {
            let mut config = WheelConfig { segments: (*edited).clone() };
            if config.add_segment(uuid::Uuid::new_v4().to_string()) {
                edited.set(config.segments);
                has_changes.set(true);
                clear.emit(());
            }
        })
    };

    let save_changes = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let saved = feedback.saved.clone();
        let error = feedback.error.clone();
        Callback::from(move |_: MouseEvent| {
            let config = WheelConfig { segments: (*edited).clone() };
            if !config.is_probability_valid() {
                error.emit(format!(
                    "Total probability must equal 100%. Current: {:.1}%",
                    config.total_probability()
                ));
                return;
            }
            browser_store().save_segments(&config.segments);
            has_changes.set(false);
            saved.emit("Wheel configuration saved".to_string());
            log::info!("wheel config saved: {} segments", config.segments.len());
        })
    };

    let config = WheelConfig { segments: (*edited).clone() };
    let total_probability = config.total_probability();
    let is_probability_valid = config.is_probability_valid();

    html! {
        <div class={styles::ADMIN_CONTAINER}>
            <div class="flex items-center gap-4 mb-8">
                <Link<Route> to={Route::Home} classes={styles::ADMIN_LINK}>{"←"}</Link<Route>>
                <div>
                    <h1 class="text-2xl md:text-3xl font-bold text-white">{"Admin Dashboard"}</h1>
                    <p class={styles::CARD_TEXT}>{"Manage leads and configure your wheel"}</p>
                </div>
            </div>

            <div class={styles::TAB_LIST}>
                <button
                    class={if *tab == AdminTab::Leads { styles::TAB_ACTIVE } else { styles::TAB_INACTIVE }}
                    onclick={select_leads}
                >
                    {format!("Leads ({})", leads.len())}
                </button>
                <button
                    class={if *tab == AdminTab::Config { styles::TAB_ACTIVE } else { styles::TAB_INACTIVE }}
                    onclick={select_config}
                >
                    {"Wheel Config"}
                </button>
            </div>

            if *tab == AdminTab::Leads {
                <div class={styles::CARD}>
                    <div class="flex items-center justify-between mb-6">
                        <h2 class={styles::CARD_TITLE}>{"Collected Leads"}</h2>
                        <button
                            class={styles::BUTTON_PRIMARY}
                            disabled={leads.is_empty()}
                            onclick={download_csv}
                        >
                            {"Download CSV"}
                        </button>
                    </div>
                    { leads_view(&leads) }
                </div>
            } else {
                <div class={styles::CARD}>
                    <div class="flex items-center justify-between mb-6">
                        <div>
                            <h2 class={styles::CARD_TITLE}>{"Wheel Segments"}</h2>
                            <p class={styles::CARD_TEXT}>{"Configure prizes and their win probability"}</p>
                        </div>
                        <div class="flex items-center gap-3">
                            <button
                                class={styles::BUTTON_SECONDARY}
                                disabled={edited.len() >= MAX_SEGMENTS}
                                onclick={add_segment}
                            >
                                {"+ Add Segment"}
                            </button>
                            <button
                                class={styles::BUTTON_PRIMARY}
                                disabled={!*has_changes || !is_probability_valid}
                                onclick={save_changes}
                            >
                                {"Save Changes"}
                            </button>
                        </div>
                    </div>

                    if !is_probability_valid {
                        <div class={styles::ALERT_ERROR}>
                            {format!("Total probability must equal 100%. Current: {total_probability:.1}%")}
                        </div>
                    }
                    if let Some(Feedback::Saved(message)) = &feedback.current {
                        <div class={styles::ALERT_SUCCESS}>{message}</div>
                    }
                    if let Some(Feedback::Error(message)) = &feedback.current {
                        <div class={styles::ALERT_ERROR}>{message}</div>
                    }

                    <div class="space-y-4">
                        { for edited.iter().map(|segment| segment_row(
                            segment,
                            &edited,
                            &has_changes,
                            &feedback.clear,
                        )) }
                    </div>

                    <div class="mt-6 pt-6 border-t border-gray-800 flex items-center justify-between">
                        <span class={styles::CARD_TEXT}>{"Total Probability:"}</span>
                        <span class={classes!(
                            "font-mono", "font-bold", "text-lg",
                            if is_probability_valid { "text-green-400" } else { "text-red-400" }
                        )}>
                            {format!("{total_probability:.1}%")}
                        </span>
                    </div>
                </div>
            }
        </div>
    }
}

fn leads_view(leads: &[Lead]) -> Html {
    if leads.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-400">{"No leads collected yet"}</p>
                <p class={styles::CARD_TEXT}>{"Leads will appear here after users spin the wheel"}</p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class={styles::TABLE}>
                <thead class={styles::TABLE_HEAD}>
                    <tr>
                        <th class={styles::TABLE_CELL}>{"Name"}</th>
                        <th class={styles::TABLE_CELL}>{"Phone"}</th>
                        <th class={styles::TABLE_CELL}>{"Email"}</th>
                        <th class={styles::TABLE_CELL}>{"Prize Won"}</th>
                        <th class={styles::TABLE_CELL}>{"Timestamp"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for leads.iter().map(|lead| html! {
                        <tr key={lead.id.clone()} class={styles::TABLE_ROW}>
                            <td class={classes!(styles::TABLE_CELL, "font-medium", "text-white")}>{&lead.name}</td>
                            <td class={classes!(styles::TABLE_CELL, "text-gray-400")}>{&lead.phone}</td>
                            <td class={classes!(styles::TABLE_CELL, "text-gray-400")}>{&lead.email}</td>
                            <td class={styles::TABLE_CELL}>
                                <span class={styles::PRIZE_TAG}>{&lead.prize_won}</span>
                            </td>
                            <td class={classes!(styles::TABLE_CELL, "text-gray-400")}>
                                {format_timestamp(&lead.timestamp)}
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn segment_row(
    segment: &Segment,
    edited: &UseStateHandle<Vec<Segment>>,
    has_changes: &UseStateHandle<bool>,
    clear_feedback: &Callback<()>,
) -> Html {
    let update_name = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let clear = clear_feedback.clone();
        let id = segment.id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*edited).clone();
            if let Some(seg) = next.iter_mut().find(|s| s.id == id) {
                seg.name = input.value();
            }
            edited.set(next);
            has_changes.set(true);
            clear.emit(());
        })
    };

    let update_color = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let clear = clear_feedback.clone();
        let id = segment.id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*edited).clone();
            if let Some(seg) = next.iter_mut().find(|s| s.id == id) {
                seg.color = select.value();
            }
            edited.set(next);
            has_changes.set(true);
            clear.emit(());
        })
    };

    let update_probability = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let clear = clear_feedback.clone();
        let id = segment.id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let probability = input.value().parse::<f64>().unwrap_or(0.0);
            let mut next = (*edited).clone();
            if let Some(seg) = next.iter_mut().find(|s| s.id == id) {
                seg.probability = probability;
            }
            edited.set(next);
            has_changes.set(true);
            clear.emit(());
        })
    };

    let remove = {
        let edited = edited.clone();
        let has_changes = has_changes.clone();
        let clear = clear_feedback.clone();
        let id = segment.id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut config = WheelConfig { segments: (*edited).clone() };
            if config.remove_segment(&id) {
                edited.set(config.segments);
                has_changes.set(true);
                clear.emit(());
            }
        })
    };

    html! {
        <div key={segment.id.clone()} class={styles::SEGMENT_ROW}>
            <div
                class={styles::SEGMENT_SWATCH}
                style={format!("background-color: {};", segment.color)}
            />

            <div class="flex-1 min-w-0">
                <label class={styles::FIELD_LABEL_XS}>{"Prize Name"}</label>
                <input
                    type="text"
                    value={segment.name.clone()}
                    oninput={update_name}
                    placeholder="Prize name"
                    maxlength={MAX_PRIZE_NAME_LENGTH.to_string()}
                    class={styles::INPUT_COMPACT}
                />
            </div>

            <div class="w-32">
                <label class={styles::FIELD_LABEL_XS}>{"Color"}</label>
                <select onchange={update_color} class={styles::SELECT_COMPACT}>
                    { for SEGMENT_COLORS.iter().enumerate().map(|(i, color)| html! {
                        <option value={*color} selected={segment.color == *color}>
                            {format!("Color {}", i + 1)}
                        </option>
                    }) }
                </select>
            </div>

            <div class="w-28">
                <label class={styles::FIELD_LABEL_XS}>{"Probability %"}</label>
                <input
                    type="number"
                    min="0"
                    max="100"
                    step="0.1"
                    value={segment.probability.to_string()}
                    oninput={update_probability}
                    class={styles::INPUT_COMPACT}
                />
            </div>

            <button
                class={styles::BUTTON_GHOST_DANGER}
                disabled={edited.len() <= shared::wheel::MIN_SEGMENTS}
                onclick={remove}
                title="Remove segment"
            >
                {"🗑"}
            </button>
        </div>
    }
}

fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Hands the export to the browser as a file download: a text/csv blob
/// behind an object URL, clicked through a detached anchor.
fn trigger_download(contents: &str, filename: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        log::warn!("failed to build CSV blob");
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        log::warn!("failed to create object URL for CSV export");
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}
