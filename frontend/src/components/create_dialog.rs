//! "Create OSSC" dialog.
//!
//! The form only collects input; there is no create endpoint to submit to yet.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct OsscDraft {
    name: String,
    region: String,
    description: String,
    subcity: String,
    district: String,
    house_number: String,
    phone: String,
}

/// Which draft field an input edits.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DraftField {
    Name,
    Region,
    Description,
    Subcity,
    District,
    HouseNumber,
    Phone,
}

impl OsscDraft {
    fn with(&self, field: DraftField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::Name => next.name = value,
            DraftField::Region => next.region = value,
            DraftField::Description => next.description = value,
            DraftField::Subcity => next.subcity = value,
            DraftField::District => next.district = value,
            DraftField::HouseNumber => next.house_number = value,
            DraftField::Phone => next.phone = value,
        }
        next
    }
}

#[derive(Properties, PartialEq)]
pub struct CreateDialogProps {
    pub region_options: Vec<String>,
    pub on_close: Callback<()>,
}

#[function_component(CreateDialog)]
pub fn create_dialog(props: &CreateDialogProps) -> Html {
    let draft = use_state(OsscDraft::default);

    let on_input = |field: DraftField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(draft.with(field, input.value()));
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(draft.with(field, area.value()));
            }
        })
    };

    let on_select = |field: DraftField| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                draft.set(draft.with(field, select.value()));
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("Create form submitted: {:?}", *draft);
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <button class="modal-close" onclick={on_close} title="Close">{ "×" }</button>
                <h2>{ "Create OSSC" }</h2>
                <form onsubmit={on_submit}>
                    <div class="form-grid">
                        <label>
                            { "OSSC Name *" }
                            <input
                                type="text"
                                placeholder="Enter name"
                                value={draft.name.clone()}
                                oninput={on_input(DraftField::Name)}
                            />
                        </label>
                        <label>
                            { "Region *" }
                            <select onchange={on_select(DraftField::Region)}>
                                <option value="" selected={draft.region.is_empty()}>
                                    { "Select Region" }
                                </option>
                                {
                                    props.region_options.iter().map(|region| html! {
                                        <option
                                            value={region.clone()}
                                            selected={*region == draft.region}
                                        >
                                            { region }
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </label>
                    </div>

                    <label>
                        { "Description" }
                        <textarea
                            placeholder="Write description"
                            value={draft.description.clone()}
                            oninput={on_input(DraftField::Description)}
                        />
                    </label>

                    <div class="form-grid">
                        <label>
                            { "Zone or Sub-city *" }
                            <input
                                type="text"
                                placeholder="Enter zone or sub-city"
                                value={draft.subcity.clone()}
                                oninput={on_input(DraftField::Subcity)}
                            />
                        </label>
                        <label>
                            { "Woreda or District *" }
                            <input
                                type="text"
                                placeholder="Enter woreda or district"
                                value={draft.district.clone()}
                                oninput={on_input(DraftField::District)}
                            />
                        </label>
                    </div>

                    <div class="form-grid">
                        <label>
                            { "House Number *" }
                            <input
                                type="text"
                                placeholder="Enter house number"
                                value={draft.house_number.clone()}
                                oninput={on_input(DraftField::HouseNumber)}
                            />
                        </label>
                        <label>
                            { "Phone Number *" }
                            <input
                                type="text"
                                placeholder="Enter phone number"
                                value={draft.phone.clone()}
                                oninput={on_input(DraftField::Phone)}
                            />
                        </label>
                    </div>

                    <button type="submit" class="save-button">{ "Save" }</button>
                </form>
            </div>
        </div>
    }
}
