use crate::pages::login::{components::form::LoginForm, utils::Credentials, view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(on_login: Callback<Credentials>) -> impl IntoView {
    let vm = view_model::use_login_view_model(on_login);

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    let email_input = Callback::new(move |value: String| vm.on_email_input(value));
    let password_input = Callback::new(move |value: String| vm.on_password_input(value));
    let email_blur = Callback::new(move |_: ()| vm.on_email_blur());
    let password_blur = Callback::new(move |_: ()| vm.on_password_blur());

    view! {
        <LoginForm
            form=vm.form
            on_email_input=email_input
            on_password_input=password_input
            on_email_blur=email_blur
            on_password_blur=password_blur
            on_submit=handle_submit
        />
    }
}
