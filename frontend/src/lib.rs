use leptos::*;
use leptos_meta::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::{home::HomePage, login::LoginPage};
use state::auth::{use_auth, AuthProvider};

/// Installs the console logger at the configured level. Must run after
/// `config::init`.
pub fn init_logging(config: &config::LoginConfig) {
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Login"/>
        <AuthProvider>
            <Shell/>
        </AuthProvider>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let logged_in = move || auth_state.get().is_logged_in;

    view! {
        <main>
            <Show when=logged_in fallback=|| view! { <LoginPage/> }>
                <HomePage/>
            </Show>
        </main>
    }
}
