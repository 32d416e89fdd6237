use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposing it afterwards so
/// signals and stored values created by `f` are dropped.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_html<N>(view: impl FnOnce() -> N + 'static) -> String
where
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
