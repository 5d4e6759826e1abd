use leptos::*;

use super::browser;
use super::session::use_session;

/// University → branch → subject dropdowns. Picking a parent clears its children
/// and loads the options that belong to the new choice.
#[component]
pub fn MetadataSelects(
    university: RwSignal<String>,
    #[prop(optional)] branch: Option<RwSignal<String>>,
    #[prop(optional)] subject: Option<RwSignal<String>>,
    /// Offer an empty "all" choice instead of a "choose" placeholder.
    #[prop(optional)]
    allow_any: bool,
    #[prop(optional)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();
    let (universities, set_universities) = create_signal(Vec::<String>::new());
    let (branches, set_branches) = create_signal(Vec::<String>::new());
    let (subjects, set_subjects) = create_signal(Vec::<String>::new());

    spawn_local(async move {
        match session.client().universities().await {
            Ok(list) => set_universities.set(list),
            Err(e) => browser::warn(&format!("Failed to load universities: {}", e)),
        }
    });

    if branch.is_some() {
        create_effect(move |_| {
            let univ = university.get();
            if univ.is_empty() {
                set_branches.set(Vec::new());
                return;
            }
            spawn_local(async move {
                match session.client().branches(&univ).await {
                    Ok(list) if university.get_untracked() == univ => set_branches.set(list),
                    Ok(_) => {}
                    Err(e) => browser::warn(&format!("Failed to load branches: {}", e)),
                }
            });
        });
    }

    if let (Some(branch), Some(_)) = (branch, subject) {
        create_effect(move |_| {
            let univ = university.get();
            let br = branch.get();
            if univ.is_empty() || br.is_empty() {
                set_subjects.set(Vec::new());
                return;
            }
            spawn_local(async move {
                match session.client().subjects(&univ, &br).await {
                    Ok(list) if branch.get_untracked() == br => set_subjects.set(list),
                    Ok(_) => {}
                    Err(e) => browser::warn(&format!("Failed to load subjects: {}", e)),
                }
            });
        });
    }

    let notify = move || {
        if let Some(callback) = on_change {
            callback.call(());
        }
    };

    let placeholder = move |all: &'static str, choose: &'static str| {
        if allow_any {
            all
        } else {
            choose
        }
    };

    let on_university = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        batch(|| {
            university.set(value);
            if let Some(branch) = branch {
                branch.set(String::new());
            }
            if let Some(subject) = subject {
                subject.set(String::new());
            }
            notify();
        });
    };

    let branch_select = branch.map(|branch| {
        let on_branch = move |ev: ev::Event| {
            let value = event_target_value(&ev);
            batch(|| {
                branch.set(value);
                if let Some(subject) = subject {
                    subject.set(String::new());
                }
                notify();
            });
        };
        view! {
            <select
                class="meta-select border-container"
                on:change=on_branch
                disabled=move || university.get().is_empty()
            >
                <option value="" prop:selected=move || branch.get().is_empty()>
                    {placeholder("All branches", "Choose branch")}
                </option>
                <For each=move || branches.get() key=|b| b.clone() let:name>
                    <option
                        value=name.clone()
                        prop:selected={
                            let name = name.clone();
                            move || branch.get() == name
                        }
                    >
                        {name.clone()}
                    </option>
                </For>
            </select>
        }
    });

    let subject_select = branch.zip(subject).map(|(branch, subject)| {
        let on_subject = move |ev: ev::Event| {
            let value = event_target_value(&ev);
            batch(|| {
                subject.set(value);
                notify();
            });
        };
        view! {
            <select
                class="meta-select border-container"
                on:change=on_subject
                disabled=move || branch.get().is_empty()
            >
                <option value="" prop:selected=move || subject.get().is_empty()>
                    {placeholder("All subjects", "Choose subject")}
                </option>
                <For each=move || subjects.get() key=|s| s.clone() let:name>
                    <option
                        value=name.clone()
                        prop:selected={
                            let name = name.clone();
                            move || subject.get() == name
                        }
                    >
                        {name.clone()}
                    </option>
                </For>
            </select>
        }
    });

    view! {
        <div class="meta-selects">
            <select class="meta-select border-container" on:change=on_university>
                <option value="" prop:selected=move || university.get().is_empty()>
                    {placeholder("All universities", "Choose university")}
                </option>
                <For each=move || universities.get() key=|u| u.clone() let:name>
                    <option
                        value=name.clone()
                        prop:selected={
                            let name = name.clone();
                            move || university.get() == name
                        }
                    >
                        {name.clone()}
                    </option>
                </For>
            </select>
            {branch_select}
            {subject_select}
        </div>
    }
}
