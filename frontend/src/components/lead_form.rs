use shared::constants::{
    EMAIL_REQUIRED_ERROR, INVALID_EMAIL_ERROR, INVALID_PHONE_ERROR, MAX_EMAIL_LENGTH,
    MAX_NAME_LENGTH, MAX_PHONE_LENGTH, NAME_REQUIRED_ERROR, NAME_TOO_SHORT_ERROR,
    PHONE_REQUIRED_ERROR,
};
use shared::leads::LeadDraft;
use shared::validation::{validate_email, validate_lead_name, validate_phone, ValidationError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<LeadDraft>,
}

fn field_message(err: &ValidationError) -> &'static str {
    match err.code.as_ref() {
        "name_required" => NAME_REQUIRED_ERROR,
        "name_too_short" => NAME_TOO_SHORT_ERROR,
        "phone_required" => PHONE_REQUIRED_ERROR,
        "invalid_phone_format" => INVALID_PHONE_ERROR,
        "email_required" => EMAIL_REQUIRED_ERROR,
        _ => INVALID_EMAIL_ERROR,
    }
}

fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        styles::INPUT_ERROR
    } else {
        styles::INPUT
    }
}

/// Contact capture modal. Validation runs on submit; field errors block
/// the spin without leaving the form.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let name_error = use_state(|| None::<&'static str>);
    let phone_error = use_state(|| None::<&'static str>);
    let email_error = use_state(|| None::<&'static str>);

    if !props.open {
        return html! {};
    }

    let handle_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let handle_submit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let name_error = name_error.clone();
        let phone_error = phone_error.clone();
        let email_error = email_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_check = validate_lead_name(&name).err();
            let phone_check = validate_phone(&phone).err();
            let email_check = validate_email(&email).err();

            name_error.set(name_check.as_ref().map(field_message));
            phone_error.set(phone_check.as_ref().map(field_message));
            email_error.set(email_check.as_ref().map(field_message));

            if name_check.is_some() || phone_check.is_some() || email_check.is_some() {
                return;
            }

            on_submit.emit(LeadDraft {
                name: name.trim().to_string(),
                phone: phone.trim().to_string(),
                email: email.trim().to_string(),
            });

            name.set(String::new());
            phone.set(String::new());
            email.set(String::new());
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <>
            <div class={styles::MODAL_BACKDROP} onclick={handle_close.clone()} />

            <div class={styles::MODAL}>
                <div class={styles::MODAL_CARD}>
                    <button type="button" class={styles::MODAL_CLOSE} onclick={handle_close}>
                        {"✕"}
                    </button>

                    <div class={styles::MODAL_HEADER}>
                        <div class="inline-flex items-center justify-center w-14 h-14 rounded-full bg-gradient-to-r from-amber-400 to-yellow-500 mb-4 text-2xl">
                            {"✨"}
                        </div>
                        <h2 class={styles::MODAL_TITLE}>{"Unlock Your Spin!"}</h2>
                        <p class={styles::MODAL_SUBTITLE}>{"Enter your details to reveal your prize"}</p>
                    </div>

                    <form onsubmit={handle_submit} class={styles::FORM}>
                        <div>
                            <label for="name" class={styles::TEXT_LABEL}>{"Full Name"}</label>
                            <input
                                id="name"
                                type="text"
                                value={(*name).clone()}
                                oninput={on_name_input}
                                placeholder="John Smith"
                                maxlength={MAX_NAME_LENGTH.to_string()}
                                class={input_class(*name_error)}
                            />
                            if let Some(message) = *name_error {
                                <p class={styles::TEXT_ERROR}>{message}</p>
                            }
                        </div>

                        <div>
                            <label for="phone" class={styles::TEXT_LABEL}>{"Phone Number"}</label>
                            <input
                                id="phone"
                                type="tel"
                                value={(*phone).clone()}
                                oninput={on_phone_input}
                                placeholder="+1 (555) 123-4567"
                                maxlength={MAX_PHONE_LENGTH.to_string()}
                                class={input_class(*phone_error)}
                            />
                            if let Some(message) = *phone_error {
                                <p class={styles::TEXT_ERROR}>{message}</p>
                            }
                        </div>

                        <div>
                            <label for="email" class={styles::TEXT_LABEL}>{"Email Address"}</label>
                            <input
                                id="email"
                                type="email"
                                value={(*email).clone()}
                                oninput={on_email_input}
                                placeholder="john@company.com"
                                maxlength={MAX_EMAIL_LENGTH.to_string()}
                                class={input_class(*email_error)}
                            />
                            if let Some(message) = *email_error {
                                <p class={styles::TEXT_ERROR}>{message}</p>
                            }
                        </div>

                        <button type="submit" class={classes!(styles::BUTTON_SUBMIT, "mt-6")}>
                            {"Spin the Wheel!"}
                        </button>

                        <p class={styles::TEXT_HINT}>
                            {"By spinning, you agree to receive promotional content from us."}
                        </p>
                    </form>
                </div>
            </div>
        </>
    }
}
