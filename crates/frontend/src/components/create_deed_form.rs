//! Form for posting a new help request.

use kindmap_types::{Category, DeedDraft, DraftError, REWARD_MAX, REWARD_MIN, Urgency};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for CreateDeedForm component.
#[derive(Properties, PartialEq)]
pub struct CreateDeedFormProps {
    pub on_submit: Callback<DeedDraft>,
    pub on_cancel: Callback<()>,
}

/// Forward `draft` unless it breaks the field constraints.
fn submit_draft(draft: &DeedDraft, on_submit: &Callback<DeedDraft>) -> Result<(), DraftError> {
    draft.validate()?;
    on_submit.emit(draft.clone());
    Ok(())
}

/// Create request form component.
#[function_component(CreateDeedForm)]
pub fn create_deed_form(props: &CreateDeedFormProps) -> Html {
    let draft = use_state(DeedDraft::default);
    let error = use_state(|| None::<String>);

    // Each field replaces one property of the draft.
    let update = |apply: fn(&mut DeedDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_title = {
        let set = update(|d, v| d.title = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_description = {
        let set = update(|d, v| d.description = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_location = {
        let set = update(|d, v| d.location = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_reward = {
        let set = update(|d, v| d.set_reward_input(&v));
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_category = {
        let set = update(|d, v| d.category = v.parse().ok());
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };

    let on_urgency = {
        let set = update(|d, v| d.urgency = v.parse().unwrap_or_default());
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };

    let on_form_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_draft(&draft, &on_submit) {
                Ok(()) => {
                    tracing::info!(title = %draft.title, reward = draft.reward, "help request submitted");
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!(%err, "help request rejected");
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let selected_category = draft.category.map(Category::label).unwrap_or_default();

    html! {
        <div class="card create-form">
            <div class="create-form-intro">
                <h2>{"Request Help"}</h2>
                <p class="text-secondary">
                    {"Describe what you need help with and let the community assist you!"}
                </p>
            </div>

            <form onsubmit={on_form_submit}>
                <div class="form-field">
                    <label for="title">{"What do you need help with?"}</label>
                    <input
                        id="title"
                        type="text"
                        value={draft.title.clone()}
                        oninput={on_title}
                        placeholder="e.g., Help moving furniture, Walk my dog, Grocery shopping"
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        value={draft.description.clone()}
                        oninput={on_description}
                        placeholder="Provide more details about what you need help with..."
                        required=true
                    />
                </div>

                <div class="form-grid">
                    <div class="form-field">
                        <label for="location">{"Location"}</label>
                        <div class="input-with-icon">
                            <Icon kind={IconKind::MapPin} class="icon icon-sm input-icon" />
                            <input
                                id="location"
                                type="text"
                                value={draft.location.clone()}
                                oninput={on_location}
                                placeholder="Address or area"
                                required=true
                            />
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="category">{"Category"}</label>
                        <select id="category" class="filter-select" onchange={on_category}>
                            <option value="" selected={draft.category.is_none()} disabled=true>
                                {"Select category"}
                            </option>
                            { for Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.label()}
                                    selected={selected_category == category.label()}
                                >
                                    { category.label() }
                                </option>
                            })}
                        </select>
                    </div>
                </div>

                <div class="form-grid">
                    <div class="form-field">
                        <label for="urgency">{"Priority Level"}</label>
                        <select id="urgency" class="filter-select" onchange={on_urgency}>
                            { for Urgency::ALL.iter().map(|urgency| html! {
                                <option
                                    value={urgency.as_str()}
                                    selected={draft.urgency == *urgency}
                                >
                                    { format!("{} ({})", urgency.label(), urgency.reward_hint()) }
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="reward">{"Karma Reward"}</label>
                        <div class="input-with-icon">
                            <Icon kind={IconKind::Star} class="icon icon-sm input-icon icon-accent" />
                            <input
                                id="reward"
                                type="number"
                                value={draft.reward.to_string()}
                                oninput={on_reward}
                                placeholder="10"
                                min={REWARD_MIN.to_string()}
                                max={REWARD_MAX.to_string()}
                                required=true
                            />
                        </div>
                    </div>
                </div>

                <div class="karma-info">
                    <div class="karma-info-title">
                        <Icon kind={IconKind::Star} class="icon icon-accent" />
                        <h3>{"About Karma Points"}</h3>
                    </div>
                    <p class="text-secondary">
                        {"Karma points are earned by helpers who complete your request. Higher rewards attract more helpers! \
                          Typical range: 5-15 for simple tasks, 15-30 for moderate help, 30+ for urgent or complex requests."}
                    </p>
                </div>

                if let Some(message) = &*error {
                    <div class="inline-error">
                        <p>{ message }</p>
                    </div>
                }

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {"Post Care Request"}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<DeedDraft>>>, Callback<DeedDraft>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, Callback::from(move |d: DeedDraft| sink.borrow_mut().push(d)))
    }

    fn filled() -> DeedDraft {
        DeedDraft::default()
            .with_title("Carry groceries")
            .with_description("Two bags, fourth floor")
            .with_location("Harlem")
            .with_urgency(Urgency::High)
            .with_reward(40)
            .with_category(Category::GroceryShopping)
    }

    #[test]
    fn test_valid_draft_forwarded_once_unmodified() {
        let (calls, on_submit) = recorder();
        let draft = filled();

        assert!(submit_draft(&draft, &on_submit).is_ok());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], draft);
    }

    #[test]
    fn test_reward_out_of_range_not_forwarded() {
        let (calls, on_submit) = recorder();

        for reward in [0, 4, 101, 500] {
            let draft = filled().with_reward(reward);
            assert_eq!(
                submit_draft(&draft, &on_submit),
                Err(DraftError::RewardOutOfRange(reward))
            );
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_title_not_forwarded() {
        let (calls, on_submit) = recorder();
        let draft = filled().with_title("");

        assert_eq!(submit_draft(&draft, &on_submit), Err(DraftError::MissingTitle));
        assert!(calls.borrow().is_empty());
    }
}
