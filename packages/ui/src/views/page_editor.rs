use dioxus::prelude::*;
use forms::links::{LinkField, LinkId};
use forms::page::{PageDraft, PageError};
use forms::share::ShareLinks;
use forms::social::SocialLinks;

use super::profile_card::{CardLink, ProfileCard};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label, Spinner, Textarea};
use crate::dialogs::{BackgroundDialog, ShareDialog, SocialLinksDialog, SuccessCard};
use crate::icons::{FaFloppyDisk, FaPalette, FaPenToSquare, FaPlus, FaShareNodes, FaTrash};
use crate::navigation::open_in_new_tab;
use crate::toast::{toast, use_toasts, ToastLevel};
use crate::{use_api, use_config, Icon, SocialIcon, VisibilitySwitch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Social,
    Background,
    Share,
    Published,
}

/// Page editor. With a `page_id` it edits that page (`/edit-page/:id`); without
/// one it prepares and publishes a new page (`/dashboard/pages/create`).
#[component]
pub fn PageEditorView(page_id: Option<String>) -> Element {
    let api = use_api();
    let origin = use_config().share.public_origin;
    let mut toasts = use_toasts();
    let mut draft = use_signal(|| Option::<PageDraft>::None);
    let mut load_failed = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut slug_error = use_signal(|| Option::<String>::None);
    let mut dialog = use_signal(|| Option::<Dialog>::None);
    let mut published = use_signal(|| Option::<ShareLinks>::None);

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        let page_id = page_id.clone();
        async move {
            let result = match &page_id {
                Some(id) => PageDraft::load(&api, id).await,
                None => PageDraft::for_create(&api).await,
            };
            match result {
                Ok(loaded) => draft.set(Some(loaded)),
                Err(e) => {
                    toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string());
                    load_failed.set(true);
                }
            }
        }
    });

    let save_origin = origin.clone();
    let on_save = move |_| {
        let api = api.clone();
        let origin = save_origin.clone();
        async move {
            let Some(current) = draft() else {
                return;
            };
            saving.set(true);
            slug_error.set(None);
            if current.id().is_some() {
                match current.save(&api).await {
                    Ok(()) => toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Changes saved",
                        "Your profile has been updated successfully",
                    ),
                    Err(e) => toast(&mut toasts, ToastLevel::Error, "Save failed", &e.to_string()),
                }
            } else {
                match current.publish(&api, &origin).await {
                    Ok(links) => {
                        toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Page Created",
                            "Your Page is created successfully",
                        );
                        if let Some(links) = links {
                            published.set(Some(links));
                            dialog.set(Some(Dialog::Published));
                        }
                    }
                    Err(PageError::Invalid(e)) => slug_error.set(Some(e.to_string())),
                    Err(e) => toast(&mut toasts, ToastLevel::Error, "Save failed", &e.to_string()),
                }
            }
            saving.set(false);
        }
    };

    let share_origin = origin.clone();
    let on_share = move |_| {
        let links = draft
            .read()
            .as_ref()
            .and_then(|d| d.share_links(&share_origin));
        match links {
            Some(links) => {
                published.set(Some(links));
                dialog.set(Some(Dialog::Share));
            }
            None => toast(
                &mut toasts,
                ToastLevel::Info,
                "Nothing to share yet",
                "Finish setting up your username first.",
            ),
        }
    };

    let mut edit = move |apply: &dyn Fn(&mut PageDraft)| {
        if let Some(current) = draft.write().as_mut() {
            apply(current);
        }
    };

    if load_failed() {
        return rsx! {
            div { class: "view-page",
                p { class: "view-muted", "Failed to load page" }
            }
        };
    }
    let Some(current) = draft() else {
        return rsx! {
            Spinner {}
        };
    };

    let is_new = current.id().is_none();
    let preview_links: Vec<CardLink> = current
        .links
        .entries()
        .iter()
        .map(|entry| CardLink {
            title: entry.title.clone(),
            url: entry.url.clone(),
        })
        .collect();
    let socials = current.social.to_links();
    let social_platforms: Vec<_> = current.social.iter().map(|l| l.platform).collect();
    let entries = current.links.entries().to_vec();

    let overlay = match (dialog(), published()) {
        (Some(Dialog::Social), _) => rsx! {
            SocialLinksDialog {
                links: current.social.clone(),
                on_change: move |links: SocialLinks| edit(&|d: &mut PageDraft| d.social = links.clone()),
                on_close: move |_| dialog.set(None),
            }
        },
        (Some(Dialog::Background), _) => rsx! {
            BackgroundDialog {
                current: current.background.clone(),
                on_change: move |value: String| edit(&|d: &mut PageDraft| d.background = value.clone()),
                on_close: move |_| dialog.set(None),
            }
        },
        (Some(Dialog::Share), Some(links)) => rsx! {
            ShareDialog { links, on_close: move |_| dialog.set(None) }
        },
        (Some(Dialog::Published), Some(links)) => rsx! {
            SuccessCard {
                links,
                on_share: move |_| dialog.set(Some(Dialog::Share)),
                on_close: move |_| dialog.set(None),
            }
        },
        _ => rsx! {},
    };

    rsx! {
        div { class: "view-page max-w-7xl mx-auto",
            header { class: "flex flex-col md:flex-row items-start md:items-center justify-between mb-8",
                div {
                    h1 { class: "view-title",
                        if is_new { "Create a page" } else { "My LinkFree" }
                    }
                    p { class: "view-muted", "Manage your profile and links" }
                }
                div { class: "flex flex-wrap items-center gap-3 mt-4 md:mt-0",
                    if let Some(id) = current.id() {
                        VisibilitySwitch {
                            page_id: id.to_string(),
                            visible: current.visibility,
                            on_change: move |visible| edit(&|d: &mut PageDraft| d.visibility = visible),
                        }
                    }
                    Button { disabled: saving(), onclick: on_save,
                        if saving() {
                            "Saving..."
                        } else {
                            Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                            if is_new { "Publish" } else { "Save Changes" }
                        }
                    }
                    if !is_new {
                        Button { variant: ButtonVariant::Outline, onclick: on_share,
                            Icon { icon: FaShareNodes, width: 14, height: 14 }
                            "Share"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dialog.set(Some(Dialog::Background)),
                        Icon { icon: FaPalette, width: 14, height: 14 }
                        "Theme"
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                div { class: "md:col-span-2 space-y-6",
                    section { class: "card",
                        h2 { class: "view-section-title", "Profile" }
                        div { class: "mb-4",
                            Label { html_for: "page-slug", "ID" }
                            if current.is_default {
                                span { class: "view-muted mx-3", "{current.slug}" }
                            } else {
                                div { class: "flex items-center gap-2 mt-1.5",
                                    span { class: "view-muted truncate", "{current.owner.username}/" }
                                    Input {
                                        id: "page-slug",
                                        class: "flex-1",
                                        value: current.slug.clone(),
                                        placeholder: "my-page",
                                        oninput: move |evt: FormEvent| {
                                            slug_error.set(None);
                                            let value = evt.value();
                                            edit(&|d: &mut PageDraft| d.slug = value.clone());
                                        },
                                    }
                                }
                                FieldError { message: slug_error() }
                            }
                        }
                        div { class: "mb-4",
                            Label { html_for: "page-bio", "Bio" }
                            Textarea {
                                id: "page-bio",
                                class: "w-full mt-1.5",
                                value: current.bio.clone(),
                                oninput: move |evt: FormEvent| {
                                    let value = evt.value();
                                    edit(&|d: &mut PageDraft| d.bio = value.clone());
                                },
                            }
                        }
                        div {
                            div { class: "flex justify-between items-center mb-2",
                                Label { "Social Links" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| dialog.set(Some(Dialog::Social)),
                                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                    "Edit"
                                }
                            }
                            div { class: "flex flex-wrap gap-3 p-3 border rounded-md",
                                for platform in social_platforms.iter().copied() {
                                    div { key: "{platform.as_str()}", class: "social-chip",
                                        SocialIcon { platform }
                                    }
                                }
                                if social_platforms.is_empty() {
                                    p { class: "view-muted", "No social links added yet" }
                                }
                            }
                        }
                    }

                    section { class: "card",
                        div { class: "flex items-center justify-between mb-4",
                            h2 { class: "view-section-title", "Links" }
                            Button {
                                onclick: move |_| edit(&|d: &mut PageDraft| {
                                    d.links.add();
                                }),
                                Icon { icon: FaPlus, width: 14, height: 14 }
                                "Add"
                            }
                        }
                        div { class: "space-y-4",
                            for entry in entries.iter().cloned() {
                                LinkRow {
                                    key: "{entry.id:?}",
                                    id: entry.id,
                                    title: entry.title,
                                    url: entry.url,
                                    on_edit: move |(id, field, value): (LinkId, LinkField, String)| {
                                        edit(&|d: &mut PageDraft| {
                                            d.links.update(id, field, value.clone());
                                        });
                                    },
                                    on_remove: move |id: LinkId| edit(&|d: &mut PageDraft| {
                                        d.links.remove(id);
                                    }),
                                }
                            }
                            if entries.is_empty() {
                                div { class: "text-center py-8 view-muted",
                                    p { "No links added yet. Click the Add button to create your first link!" }
                                }
                            }
                        }
                    }
                }

                div { class: "space-y-6",
                    section { class: "card",
                        h2 { class: "view-section-title", "Preview" }
                        ProfileCard {
                            display_name: current.owner.display_name.clone(),
                            avatar: current.owner.profile_pic.clone(),
                            initials: current.owner.initials(),
                            bio: current.bio.clone(),
                            background: current.resolved_background(),
                            links: preview_links,
                            socials,
                            on_link: move |url: String| open_in_new_tab(&url),
                            compact: true,
                        }
                    }
                    if !is_new {
                        section { class: "card",
                            h2 { class: "view-section-title", "Analytics" }
                            div { class: "grid grid-cols-2 gap-4",
                                div {
                                    p { class: "view-muted", "Total Views" }
                                    p { class: "text-2xl font-bold", "{current.total_views}" }
                                }
                                div {
                                    p { class: "view-muted", "Link Clicks" }
                                    p { class: "text-2xl font-bold", "{current.total_link_clicks()}" }
                                }
                            }
                        }
                    }
                }
            }

            {overlay}
        }
    }
}

/// One editable link: title, URL and a delete button.
#[component]
fn LinkRow(
    id: LinkId,
    title: String,
    url: String,
    on_edit: EventHandler<(LinkId, LinkField, String)>,
    on_remove: EventHandler<LinkId>,
) -> Element {
    rsx! {
        div { class: "border rounded-md p-4",
            div { class: "flex justify-between items-center mb-2 gap-2",
                Input {
                    class: "flex-1 font-medium",
                    value: title,
                    placeholder: "Link Title",
                    oninput: move |evt: FormEvent| on_edit.call((id, LinkField::Title, evt.value())),
                }
                button {
                    class: "text-red-500 hover:text-red-700",
                    title: "Delete link",
                    onclick: move |_| on_remove.call(id),
                    Icon { icon: FaTrash, width: 16, height: 16 }
                }
            }
            Input {
                class: "w-full text-sm",
                value: url,
                placeholder: "https://",
                oninput: move |evt: FormEvent| on_edit.call((id, LinkField::Url, evt.value())),
            }
        }
    }
}
