use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub open: bool,
    pub prize: String,
    pub on_close: Callback<()>,
}

/// Prize reveal shown once the wheel has stopped.
#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let handle_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class={styles::MODAL_BACKDROP} />

            <div class={styles::MODAL_WIDE}>
                <div class={classes!(styles::MODAL_CARD, "text-center", "overflow-hidden")}>
                    <button type="button" class={styles::MODAL_CLOSE} onclick={handle_close.clone()}>
                        {"✕"}
                    </button>

                    <div class="inline-flex items-center justify-center w-20 h-20 rounded-full bg-gradient-to-r from-amber-400 to-yellow-500 mb-6 text-4xl shadow-lg shadow-amber-500/30">
                        {"🏆"}
                    </div>

                    <div class="flex justify-center gap-2 mb-4 text-2xl">
                        {"🎉"}
                    </div>

                    <h2 class="text-3xl md:text-4xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-amber-300 to-yellow-500 mb-2">
                        {"Congratulations!"}
                    </h2>
                    <p class="text-gray-400 mb-6">{"You've won an amazing prize!"}</p>

                    <div class="bg-gray-800/60 rounded-2xl p-6 mb-8 border border-amber-400/30">
                        <p class="text-sm text-gray-400 uppercase tracking-wider mb-2">{"Your Prize"}</p>
                        <p class="text-3xl md:text-4xl font-bold text-white">{&props.prize}</p>
                    </div>

                    <button
                        type="button"
                        class={classes!(styles::BUTTON_SUBMIT, "max-w-xs", "mx-auto")}
                        onclick={handle_close}
                    >
                        {"Claim My Prize!"}
                    </button>
                    <p class={styles::TEXT_HINT}>
                        {"Check your email for redemption instructions"}
                    </p>
                </div>
            </div>
        </>
    }
}
