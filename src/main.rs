use dioxus::prelude::*;

mod components;
mod error;
mod library;
mod player;
mod settings;
mod utils;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Wavebox" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
