//! Small form controls shared by the views.
//!
//! Thin wrappers over the plain HTML elements that keep class names and
//! variants in one place.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = format!("{} {}", variant.class(), class);

    rsx! {
        button {
            class: class,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] min: Option<String>,
    #[props(default)] readonly: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let class = format!("input {class}");

    rsx! {
        input {
            id: id,
            class: class,
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            min: min,
            readonly: readonly,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            {children}
        }
    }
}
