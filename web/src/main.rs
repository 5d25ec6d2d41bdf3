use dioxus::prelude::*;
use tracing::Level;

mod pages;
use pages::{About, Blog, Home, NotFound, Projects, Uses};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/projects")]
    Projects {},
    #[route("/blog")]
    Blog {},
    #[route("/uses")]
    Uses {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Lives above the router so the chosen theme survives navigation.
    ui::use_theme_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Path of the route currently rendered, as the shell compares it against
/// menu hrefs.
fn use_current_path() -> String {
    use_route::<Route>().to_string()
}
