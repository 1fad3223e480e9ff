use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.question_count();

    rsx! {
        div { class: "page home",
            h2 { "What's your type?" }
            p {
                "Answer {count} quick either-or questions. "
                "There are no right answers; pick whichever feels closer."
            }
            p { class: "muted",
                "Your four-letter type is worked out from how your answers lean on "
                "four axes: E/I, S/N, T/F and J/P."
            }
            Link { class: "button primary", to: Route::Quiz {}, "Start the test" }
        }
    }
}
