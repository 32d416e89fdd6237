use crate::state::auth;
use self::utils::Credentials;
use leptos::*;

pub mod components;
pub mod utils;
pub mod validator;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_auth, set_auth) = auth::use_auth();
    let on_login = Callback::new(move |credentials: Credentials| auth::login(set_auth, credentials));
    view! { <LoginPanel on_login=on_login /> }
}
