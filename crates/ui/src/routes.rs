use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{FinishedView, WorkoutPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WorkoutPage)] Workout {},
        #[route("/finished", FinishedView)] Finished {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
