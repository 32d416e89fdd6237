use leptos::*;

#[component]
pub fn Button(
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(into, default = false.into())] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "button".to_string()
    } else {
        format!("button {class}")
    };
    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
