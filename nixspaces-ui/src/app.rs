use leptos::*;

pub const TITLE: &str = "NixSpaces";
pub const TAGLINE: &str = "Branch Everything - Development Environment Platform";

/// Landing view. Static: no props, no signals, no handlers.
#[component]
pub fn App() -> impl IntoView {
    view! {
      <div>
        <h1>{TITLE}</h1>
        <p>{TAGLINE}</p>
      </div>
    }
}
