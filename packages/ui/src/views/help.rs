use dioxus::prelude::*;

use crate::components::Input;

const FAQ: [(&str, &str); 5] = [
    (
        "How do I customize my LinkFree profile?",
        "You can customize your profile by adding links, changing your background image, and updating your bio in the dashboard.",
    ),
    (
        "How do I see analytics for my profile?",
        "Your profile analytics are shown on the dashboard, displaying total views and link clicks.",
    ),
    (
        "Can I change my username?",
        "Currently, usernames cannot be changed after account creation to ensure link permanence.",
    ),
    (
        "How do I make my profile visible/invisible?",
        "Toggle the visibility switch in the page editor header to control your page's public visibility.",
    ),
    (
        "How do I share my profile?",
        "Click the 'Share' button in the page editor header to get a shareable link to your profile.",
    ),
];

fn matches(query: &str, question: &str, answer: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || question.to_lowercase().contains(&query)
        || answer.to_lowercase().contains(&query)
}

/// `/dashboard/help`: a searchable FAQ.
#[component]
pub fn HelpView() -> Element {
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| Option::<usize>::None);

    let q = query();
    let entries: Vec<(usize, &str, &str)> = FAQ
        .iter()
        .enumerate()
        .filter(|(_, (question, answer))| matches(&q, question, answer))
        .map(|(i, (question, answer))| (i, *question, *answer))
        .collect();

    rsx! {
        div { class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "Help Center" }
            Input {
                class: "w-full mb-6",
                placeholder: "Search help articles, FAQs, and guides...",
                value: q.clone(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            section { class: "card",
                h2 { class: "view-section-title", "Frequently Asked Questions" }
                for (i, question, answer) in entries.iter().copied() {
                    div { key: "{i}", class: "faq-item",
                        button {
                            class: "faq-question",
                            onclick: move |_| {
                                let next = if open() == Some(i) { None } else { Some(i) };
                                open.set(next);
                            },
                            "{question}"
                        }
                        if open() == Some(i) {
                            p { class: "faq-answer", "{answer}" }
                        }
                    }
                }
                if entries.is_empty() {
                    p { class: "view-muted", "No articles match your search." }
                }
            }
        }
    }
}
