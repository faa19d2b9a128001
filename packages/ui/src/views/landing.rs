use dioxus::prelude::*;

use crate::components::Button;
use crate::use_auth;

const FEATURES: [(&str, &str); 4] = [
    (
        "Fully Customizable",
        "Personalize every aspect of your page with backgrounds, links and social icons.",
    ),
    (
        "Lightning Fast",
        "Optimized for speed and performance, ensuring your links load instantly for your audience.",
    ),
    (
        "Always Free",
        "100% free to use with no hidden costs. All core features available to everyone.",
    ),
    (
        "Open Source",
        "Built and maintained by a global community of developers.",
    ),
];

/// `/`: a short pitch and the way in.
#[component]
pub fn LandingView() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let signed_in = auth.read().user().is_some();

    rsx! {
        div { class: "min-h-screen bg-white",
            header { class: "flex items-center justify-between max-w-6xl mx-auto px-6 py-5",
                span { class: "logo", "Link" span { class: "logo-accent", "Free" } }
                nav { class: "flex gap-3",
                    if signed_in {
                        Link { to: "/dashboard", class: "btn btn-primary", "Dashboard" }
                    } else {
                        Link { to: "/login", class: "btn btn-ghost", "Sign in" }
                        Link { to: "/signup", class: "btn btn-primary", "Sign up" }
                    }
                }
            }
            section { class: "max-w-4xl mx-auto px-6 py-20 text-center",
                p { class: "badge mb-4", "Open Source Alternative to Linktree" }
                h1 { class: "text-5xl font-bold mb-6", "One link for everything you share" }
                p { class: "text-xl text-gray-600 mb-8",
                    "The powerful, customizable, open-source solution for creating beautiful link pages that truly represent your brand."
                }
                Button {
                    onclick: move |_| {
                        let target = if signed_in { "/dashboard" } else { "/signup" };
                        nav.push(target);
                    },
                    "Get Started for Free"
                }
            }
            section { class: "max-w-6xl mx-auto px-6 pb-20 grid grid-cols-1 md:grid-cols-2 gap-6",
                for (title, description) in FEATURES {
                    div { key: "{title}", class: "card",
                        h3 { class: "font-semibold mb-2", "{title}" }
                        p { class: "view-muted", "{description}" }
                    }
                }
            }
            footer { class: "border-t py-6 text-center view-muted", "LinkFree" }
        }
    }
}
