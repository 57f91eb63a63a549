use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::leads::{Lead, LeadDraft};
use shared::spin::{SpinFlow, SpinPhase};
use shared::wheel::{
    random_extra_turns, select_prize, target_rotation, SPIN_DURATION_MS, WIN_REVEAL_DELAY_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::spin_button::SpinButton;
use crate::components::wheel_canvas::{ease_out, WheelCanvas};
use crate::components::win_modal::WinModal;
use crate::storage::browser_store;
use crate::styles;
use crate::Route;

/// The public widget page. Owns the spin flow, the wheel's cumulative
/// rotation, and the two modals. The winning segment is decided the moment
/// the contact form is submitted; the animation that follows only
/// dramatizes it.
#[function_component(Home)]
pub fn home() -> Html {
    let segments = use_state(|| browser_store().load_segments());
    let flow = use_state(|| SpinFlow::new(browser_store().has_played()));
    // Cumulative degrees: each spin adds its delta so the wheel keeps
    // turning forward instead of snapping back.
    let rotation = use_state(|| 0.0f64);
    let won_prize = use_state(String::new);
    let show_win_modal = use_state(|| false);

    let handle_spin_click = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*flow).clone();
            if next.request_spin() {
                flow.set(next);
            }
        })
    };

    let handle_form_close = {
        let flow = flow.clone();
        Callback::from(move |_| {
            let mut next = (*flow).clone();
            if next.cancel_form() {
                flow.set(next);
            }
        })
    };

    let handle_form_submit = {
        let segments = segments.clone();
        let flow = flow.clone();
        let rotation = rotation.clone();
        let won_prize = won_prize.clone();
        let show_win_modal = show_win_modal.clone();

        Callback::from(move |draft: LeadDraft| {
            let mut next = (*flow).clone();
            if !next.begin_spin() {
                return;
            }

            // The outcome is fixed here, before any animation runs.
            let mut rng = rand::thread_rng();
            let winner = match select_prize(&segments, &mut rng) {
                Some(winner) => winner.clone(),
                None => return,
            };
            let extra_turns = random_extra_turns(&mut rng);
            let delta = target_rotation(&segments, &winner, extra_turns);
            log::info!(
                "wheel spin: selected '{}' with {} extra turns",
                winner.name,
                extra_turns
            );

            flow.set(next);
            won_prize.set(winner.name.clone());

            let start_rotation = *rotation;
            let final_rotation = start_rotation + delta;
            let start_time = js_sys::Date::now();
            let duration = f64::from(SPIN_DURATION_MS);

            let rotation = rotation.clone();
            let flow = flow.clone();
            let show_win_modal = show_win_modal.clone();
            let prize_name = winner.name;

            // requestAnimationFrame loop; the closure re-schedules itself
            // until the spin duration elapses.
            let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let schedule = frame.clone();

            *schedule.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let progress = (elapsed / duration).min(1.0);
                rotation.set(start_rotation + delta * ease_out(progress));

                if elapsed < duration {
                    if let Some(window) = web_sys::window() {
                        if let Some(callback) = frame.borrow().as_ref() {
                            let _ = window
                                .request_animation_frame(callback.as_ref().unchecked_ref());
                        }
                    }
                } else {
                    rotation.set(final_rotation);

                    // Spinning -> Resolved: the lead is recorded exactly
                    // once, and the profile locks, at this transition.
                    let store = browser_store();
                    store.append_lead(Lead::from_draft(
                        uuid::Uuid::new_v4().to_string(),
                        draft.clone(),
                        prize_name.clone(),
                        chrono::Utc::now().to_rfc3339(),
                    ));
                    store.mark_played();
                    flow.set(SpinFlow { phase: SpinPhase::Resolved, has_played: true });

                    let show_win_modal = show_win_modal.clone();
                    Timeout::new(WIN_REVEAL_DELAY_MS, move || {
                        show_win_modal.set(true);
                    })
                    .forget();
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                if let Some(callback) = schedule.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            }
        })
    };

    let handle_win_close = {
        let flow = flow.clone();
        let show_win_modal = show_win_modal.clone();
        Callback::from(move |_| {
            show_win_modal.set(false);
            let mut next = (*flow).clone();
            if next.dismiss() {
                flow.set(next);
            }
        })
    };

    let tagline = if flow.has_played {
        "You've already spun! Check your email for your prize."
    } else {
        "Try your luck and win amazing prizes! Every spin wins something."
    };

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <Link<Route> to={Route::Admin} classes={styles::ADMIN_LINK}>
                    <span title="Admin access">{"⚙"}</span>
                </Link<Route>>
            </header>

            <main class={styles::MAIN}>
                <div class={styles::EVENT_BADGE}>
                    <span>{"★"}</span>
                    <span class={styles::EVENT_BADGE_TEXT}>{"Exclusive Event"}</span>
                    <span>{"★"}</span>
                </div>

                <h1 class={styles::TITLE}>{"Spin to Win!"}</h1>
                <p class={styles::SUBTITLE}>{tagline}</p>

                <div class="mb-8">
                    <WheelCanvas
                        segments={(*segments).clone()}
                        rotation={*rotation}
                        is_spinning={flow.is_spinning()}
                    />
                </div>

                <SpinButton
                    is_spinning={flow.is_spinning()}
                    has_played={flow.has_played}
                    onclick={handle_spin_click}
                />

                <div class={styles::PRIZE_HINTS}>
                    { for segments.iter().take(4).map(|segment| html! {
                        <span key={segment.id.clone()} class={styles::PRIZE_CHIP}>
                            {&segment.name}
                        </span>
                    }) }
                    if segments.len() > 4 {
                        <span class={styles::PRIZE_CHIP}>
                            {format!("+{} more", segments.len() - 4)}
                        </span>
                    }
                </div>
            </main>

            <footer class={styles::FOOTER}>
                <p class={styles::FOOTER_TEXT}>{"© Spin & Win. All rights reserved."}</p>
            </footer>

            <LeadForm
                open={flow.phase == SpinPhase::FormOpen}
                on_close={handle_form_close}
                on_submit={handle_form_submit}
            />

            <WinModal
                open={*show_win_modal}
                prize={(*won_prize).clone()}
                on_close={handle_win_close}
            />
        </div>
    }
}
