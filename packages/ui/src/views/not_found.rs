use dioxus::prelude::*;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100",
            div { class: "text-center",
                h1 { class: "text-4xl font-bold mb-4", "404" }
                p { class: "text-xl text-gray-600 mb-4", "Oops! Page not found" }
                Link { to: "/", class: "text-blue-500 hover:text-blue-700 underline", "Return to Home" }
            }
        }
    }
}
