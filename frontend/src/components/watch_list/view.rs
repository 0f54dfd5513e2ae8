//! View rendering for the watch-list page.
//!
//! Layout, top to bottom: title, transient status banner, the collapsible
//! add form, load state, and the register table. Column headers for product,
//! vendor, issue date and date added are clickable and sort the table.

use yew::html::Scope;
use yew::prelude::*;

use common::model::merged::MergedViewRow;
use common::watch_list::page::WatchListPage;
use common::watch_list::sort::SortKey;

use super::add_form::add_form;
use super::messages::Msg;
use super::state::WatchListComponent;

const EMPTY_CELL: &str = "—";

pub fn view(component: &WatchListComponent, ctx: &Context<WatchListComponent>) -> Html {
    let link = ctx.link();
    let page = &component.page;

    html! {
        <div class="watch-list-root">
            <h1 class="page-title">{"Chemical Register List"}</h1>
            { status_banner(page) }
            { add_form(page, link) }
            {
                if page.loading {
                    html! { <p>{"Loading..."}</p> }
                } else {
                    html! {}
                }
            }
            {
                match &page.load_error {
                    Some(message) => html! { <p class="error-text">{ message.clone() }</p> },
                    None => html! {},
                }
            }
            {
                if page.rows().is_empty() && !page.loading {
                    html! { <p>{"No entries found."}</p> }
                } else {
                    build_table(page, link)
                }
            }
        </div>
    }
}

fn status_banner(page: &WatchListPage) -> Html {
    match &page.status {
        Some(status) => html! {
            <div class={classes!("status-banner", status.is_error().then_some("error"))}>
                { status.text.clone() }
            </div>
        },
        None => html! {},
    }
}

fn build_table(page: &WatchListPage, link: &Scope<WatchListComponent>) -> Html {
    html! {
        <div style="overflow-x: auto;">
            <table class="register-table">
                <thead>
                    <tr>
                        { sort_header(page, link, SortKey::Name) }
                        { sort_header(page, link, SortKey::Vendor) }
                        { sort_header(page, link, SortKey::IssueDate) }
                        <th>{"Hazardous"}</th>
                        <th>{"Dangerous Good"}</th>
                        <th>{"DG Class"}</th>
                        <th>{"Packing Group"}</th>
                        <th>{"Subsidiary Risks"}</th>
                        { sort_header(page, link, SortKey::DateAdded) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.visible_rows().iter().map(|row| build_row(page, link, row)) }
                </tbody>
            </table>
        </div>
    }
}

fn sort_header(page: &WatchListPage, link: &Scope<WatchListComponent>, key: SortKey) -> Html {
    let arrow = if page.sort.key == key {
        page.sort.direction.arrow()
    } else {
        ""
    };
    html! {
        <th class="sortable" onclick={link.callback(move |_: MouseEvent| Msg::SortBy(key))}>
            { key.label() }{ " " }{ arrow }
        </th>
    }
}

fn build_row(page: &WatchListPage, link: &Scope<WatchListComponent>, row: &MergedViewRow) -> Html {
    let entry_id = row.id;
    let busy = page.activity.is_row_busy(row);
    let updating = row
        .product_id
        .as_deref()
        .is_some_and(|product_id| page.activity.is_updating(product_id));
    let deleting = page.activity.is_deleting(entry_id);
    let can_reparse = row.can_reparse();

    let product_cell = match row.sds_url.as_deref().filter(|_| can_reparse) {
        Some(url) => html! {
            <a href={url.to_string()} target="_blank" rel="noopener noreferrer">
                { row.product_name.clone() }
            </a>
        },
        None => html! { <>{ row.product_name.clone() }</> },
    };
    let update_title = if can_reparse {
        "Parse SDS and update metadata"
    } else {
        "Add an SDS PDF URL to this product first"
    };

    html! {
        <tr key={entry_id.to_string()}>
            <td>{ product_cell }</td>
            <td>{ text_or_dash(row.vendor.as_deref()) }</td>
            <td>{ text_or_dash(row.issue_date.as_deref()) }</td>
            <td class="center">{ yes_no(row.hazardous_substance) }</td>
            <td class="center">{ yes_no(row.dangerous_good) }</td>
            <td>{ text_or_dash(row.dangerous_goods_class.as_deref()) }</td>
            <td>{ text_or_dash(row.packing_group.as_deref()) }</td>
            <td>{ text_or_dash(row.subsidiary_risks.as_deref()) }</td>
            <td>
                {
                    row.created_at
                        .map(|created| created.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| EMPTY_CELL.to_string())
                }
            </td>
            <td>
                <div class="row-actions">
                    <button
                        class="btn btn-primary"
                        title={update_title}
                        disabled={busy || !can_reparse}
                        onclick={link.callback(move |_: MouseEvent| Msg::Reparse(entry_id))}
                    >
                        { if updating { "Parsing…" } else { "Update SDS" } }
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled={busy}
                        onclick={link.callback(move |_: MouseEvent| Msg::Delete(entry_id))}
                    >
                        { if deleting { "Deleting…" } else { "Delete" } }
                    </button>
                </div>
            </td>
        </tr>
    }
}

fn text_or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string()
}

fn yes_no(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) {
        "Yes"
    } else {
        "No"
    }
}
