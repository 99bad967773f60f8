use dioxus::prelude::*;

use crate::{
    domain::ContactRequest,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn ContactSection() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = {
        let toasts = toasts.clone();
        move |_| {
            let request = ContactRequest {
                name: name(),
                email: email(),
                company: company(),
                message: message(),
            };
            match request.validate() {
                Ok(()) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Thank you for your interest! Our team will contact you within \
                         24 hours to schedule your AI strategy consultation.",
                    );
                    name.set(String::new());
                    email.set(String::new());
                    company.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    rsx! {
        section { id: "contact", class: "page-section",
            p { class: "{theme::section_kicker()}", "Contact" }
            h2 { class: "{theme::section_title()}", "Book your AI strategy consultation" }
            div { class: "{theme::panel()} contact-form",
                div { class: "form-grid",
                    div { class: "form-field",
                        label { class: "{theme::label_class()}", "Name" }
                        input {
                            class: "{theme::input_class()}",
                            placeholder: "Jane Doe",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "{theme::label_class()}", "Work email" }
                        input {
                            class: "{theme::input_class()}",
                            placeholder: "jane@company.com",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "{theme::label_class()}", "Company (optional)" }
                        input {
                            class: "{theme::input_class()}",
                            placeholder: "Acme Corp",
                            value: company(),
                            oninput: move |evt| company.set(evt.value()),
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "{theme::label_class()}", "What would you like to automate?" }
                    textarea {
                        class: "{theme::input_class()} field-textarea",
                        rows: "4",
                        placeholder: "Tell us about your processes, data and goals...",
                        value: message(),
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary(true)}",
                    onclick: on_submit,
                    "Request Consultation"
                }
            }
        }
    }
}
