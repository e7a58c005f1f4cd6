use dioxus::prelude::*;

use ui::{AuthProvider, RequireAuth};
use views::{
    Dashboard, Forbidden, Home, Login, Logout, NotFound, Profile, Register, SiteNav, TaskDetail,
    TaskEdit, TaskList, TaskNew, Unauthorized,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/logout")]
    Logout {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/forbidden")]
    Forbidden {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/tasks")]
        TaskList {},
        #[route("/tasks/new")]
        TaskNew {},
        #[route("/tasks/edit/:id")]
        TaskEdit { id: i64 },
        #[route("/tasks/:id")]
        TaskDetail { id: i64 },
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Session gate plus the shared navbar for every task and profile page.
#[component]
fn Protected() -> Element {
    rsx! {
        RequireAuth {
            SiteNav {}
            Outlet::<Route> {}
        }
    }
}
