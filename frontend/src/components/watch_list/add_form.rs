use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::watch_list::form::{FormField, PACKING_GROUPS};
use common::watch_list::page::WatchListPage;

use super::messages::Msg;
use super::state::WatchListComponent;

/// Collapsible "Add Chemical" form. Collapsed it is a single button.
pub fn add_form(page: &WatchListPage, link: &Scope<WatchListComponent>) -> Html {
    let form = &page.form;
    if !form.open {
        return html! {
            <button class="btn btn-add" onclick={link.callback(|_: MouseEvent| Msg::OpenForm)}>
                {"Add Chemical"}
            </button>
        };
    }

    let adding = page.activity.is_adding();
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitAdd
    });
    let on_packing_group = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(FormField::PackingGroup, select.value())
    });
    let on_hazardous = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetHazardous(input.checked())
    });
    let on_dangerous_good = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDangerousGood(input.checked())
    });

    html! {
        <form class="add-form" onsubmit={on_submit}>
            <div class="grid">
                { text_input(page, link, FormField::ProductName, "Product name *", "text") }
                { text_input(page, link, FormField::SdsUrl, "SDS URL", "url") }
                { text_input(page, link, FormField::Vendor, "Vendor", "text") }
                { text_input(page, link, FormField::IssueDate, "Issue date", "date") }
                { text_input(page, link, FormField::DgClass, "DG class", "text") }
                <label>
                    {"Packing group"}
                    <select onchange={on_packing_group}>
                        <option value="" selected={form.packing_group.is_empty()}>{"—"}</option>
                        { for PACKING_GROUPS.iter().map(|group| html! {
                            <option value={*group} selected={form.packing_group == *group}>
                                { *group }
                            </option>
                        }) }
                    </select>
                </label>
            </div>
            <div class="checks">
                <label>
                    <input type="checkbox" checked={form.hazardous} onchange={on_hazardous} />
                    {" Hazardous substance"}
                </label>
                <label>
                    <input type="checkbox" checked={form.dangerous_good} onchange={on_dangerous_good} />
                    {" Dangerous good"}
                </label>
            </div>
            <div class="actions">
                <button type="submit" class="btn btn-primary" disabled={adding}>
                    { if adding { "Adding..." } else { "Add" } }
                </button>
                <button
                    type="button"
                    class="btn btn-muted"
                    disabled={adding}
                    onclick={link.callback(|_: MouseEvent| Msg::CloseForm)}
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}

fn text_input(
    page: &WatchListPage,
    link: &Scope<WatchListComponent>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });
    html! {
        <label>
            { label }
            <input
                type={input_type}
                value={page.form.field(field).to_string()}
                required={field == FormField::ProductName}
                {oninput}
            />
        </label>
    }
}
