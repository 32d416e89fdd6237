use crate::{
    components::{button::Button, card::Card},
    pages::login::utils::{field_class, LoginFormState},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    form: LoginFormState,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_email_blur: Callback<()>,
    on_password_blur: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email = form.email_signal();
    let password = form.password_signal();
    let email_validity = form.email_validity_signal();
    let password_validity = form.password_validity_signal();
    let form_valid = form.form_valid_signal();

    view! {
        <Card class="login">
            <form on:submit=move |ev| on_submit.call(ev)>
                <div class=move || field_class(email_validity.get())>
                    <label for="email">{"E-Mail"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            on_email_input.call(target.value());
                        }
                        on:blur=move |_| on_email_blur.call(())
                    />
                </div>
                <div class=move || field_class(password_validity.get())>
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            on_password_input.call(target.value());
                        }
                        on:blur=move |_| on_password_blur.call(())
                    />
                </div>
                <div class="actions">
                    <Button
                        button_type="submit"
                        class="btn"
                        disabled=Signal::derive(move || !form_valid.get())
                    >
                        {"Login"}
                    </Button>
                </div>
            </form>
        </Card>
    }
}
