use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// The app's navigation links inside the shared navbar shell.
#[component]
pub fn SiteNav() -> Element {
    rsx! {
        Navbar {
            li {
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
            li {
                Link { to: Route::TaskList {}, "Task List" }
            }
            li {
                Link { to: Route::TaskNew {}, "New Task" }
            }
            li {
                Link { to: Route::Profile {}, "Profile" }
            }
            li {
                Link { to: Route::Logout {}, "Logout" }
            }
        }
    }
}
