use shared::constants::INCORRECT_PIN_ERROR;
use shared::validation::verify_admin_pin;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    pub on_unlock: Callback<()>,
}

/// PIN gate in front of the operator dashboard. A convenience gate only;
/// the PIN is a static shared secret.
#[function_component(AdminLogin)]
pub fn admin_login(props: &AdminLoginProps) -> Html {
    let pin = use_state(String::new);
    let error = use_state(String::new);

    let on_pin_input = {
        let pin = pin.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pin.set(input.value());
            error.set(String::new());
        })
    };

    let handle_submit = {
        let pin = pin.clone();
        let error = error.clone();
        let on_unlock = props.on_unlock.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if verify_admin_pin(&pin) {
                pin.set(String::new());
                error.set(String::new());
                on_unlock.emit(());
            } else {
                error.set(INCORRECT_PIN_ERROR.to_string());
            }
        })
    };

    html! {
        <div class="min-h-[80vh] flex items-center justify-center px-4">
            <div class={classes!(styles::MODAL_CARD, "w-full", "max-w-sm")}>
                <div class={styles::MODAL_HEADER}>
                    <div class="inline-flex items-center justify-center w-14 h-14 rounded-full bg-gray-800 mb-4 text-2xl">
                        {"🛡"}
                    </div>
                    <h2 class={styles::MODAL_TITLE}>{"Admin Access"}</h2>
                    <p class={styles::MODAL_SUBTITLE}>{"Enter your PIN to access the dashboard"}</p>
                </div>

                <form onsubmit={handle_submit} class={styles::FORM}>
                    <div>
                        <label for="pin" class={styles::TEXT_LABEL}>{"PIN Code"}</label>
                        <input
                            id="pin"
                            type="password"
                            value={(*pin).clone()}
                            oninput={on_pin_input}
                            placeholder="••••"
                            maxlength="10"
                            autocomplete="off"
                            class={classes!(styles::INPUT, "text-center", "tracking-[0.5em]", "text-lg")}
                        />
                        if !(*error).is_empty() {
                            <p class={classes!(styles::TEXT_ERROR, "text-center")}>{&*error}</p>
                        }
                    </div>

                    <button type="submit" class={styles::BUTTON_SUBMIT}>
                        {"Enter Dashboard"}
                    </button>
                </form>

                <div class="mt-4 text-center">
                    <Link<Route> to={Route::Home} classes="text-sm text-gray-500 hover:text-gray-300 transition-colors">
                        {"← Back to the wheel"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
