//! Update function for the watch-list component.
//!
//! Elm-style: every `Msg` is handed to the `WatchListPage` state machine,
//! which mutates itself and answers with the `Command`s to run. This module
//! runs them: HTTP calls through `crate::api`, delays through `gloo_timers`,
//! and results come back in as further messages.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::watch_list::page::Command;

use crate::api;

use super::messages::Msg;
use super::state::WatchListComponent;

/// Central update function for the component. Always re-renders.
pub fn update(
    component: &mut WatchListComponent,
    ctx: &Context<WatchListComponent>,
    msg: Msg,
) -> bool {
    let page = &mut component.page;
    let commands = match msg {
        Msg::Reload => page.reload(),
        Msg::Loaded(result) => {
            if let Err(err) = &result {
                error!(format!("Loading watch list failed: {err}"));
            }
            page.rows_loaded(result);
            Vec::new()
        }
        Msg::SortBy(key) => {
            page.select_sort(key);
            Vec::new()
        }
        Msg::OpenForm => {
            page.form.open();
            Vec::new()
        }
        Msg::CloseForm => {
            page.form.close();
            Vec::new()
        }
        Msg::SetField(field, value) => {
            page.form.set_field(field, value);
            Vec::new()
        }
        Msg::SetHazardous(checked) => {
            page.form.hazardous = checked;
            Vec::new()
        }
        Msg::SetDangerousGood(checked) => {
            page.form.dangerous_good = checked;
            Vec::new()
        }
        Msg::SubmitAdd => page.submit_add(),
        Msg::AddFinished(result) => {
            if let Err(err) = &result {
                error!(format!("Adding chemical failed: {err}"));
            }
            page.add_finished(result)
        }
        Msg::Delete(entry_id) => {
            let confirmed = page
                .delete_prompt(entry_id)
                .is_some_and(|prompt| confirm(&prompt));
            page.request_delete(entry_id, confirmed)
        }
        Msg::DeleteFinished(entry_id, result) => page.delete_finished(entry_id, result),
        Msg::Reparse(entry_id) => page.request_reparse(entry_id),
        Msg::ReparseFinished(product_id, result) => {
            if let Err(err) = &result {
                error!(format!("SDS update for {product_id} failed: {err}"));
            }
            page.reparse_finished(&product_id, result)
        }
        Msg::ClearStatus => {
            page.clear_status();
            Vec::new()
        }
    };

    run_commands(ctx, commands);
    true
}

fn run_commands(ctx: &Context<WatchListComponent>, commands: Vec<Command>) {
    for command in commands {
        let link = ctx.link().clone();
        match command {
            Command::Fetch => spawn_local(async move {
                link.send_message(Msg::Loaded(api::fetch_watch_list().await));
            }),
            Command::FetchAfter(delay_ms) => spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                link.send_message(Msg::Reload);
            }),
            Command::Add(request) => spawn_local(async move {
                link.send_message(Msg::AddFinished(api::add_chemical(&request).await));
            }),
            Command::Delete { id } => spawn_local(async move {
                link.send_message(Msg::DeleteFinished(id, api::delete_entry(id).await));
            }),
            Command::Reparse(request) => spawn_local(async move {
                let result = api::update_sds(&request).await;
                link.send_message(Msg::ReparseFinished(request.product_id, result));
            }),
            Command::ClearStatusAfter(delay_ms) => spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                link.send_message(Msg::ClearStatus);
            }),
        }
    }
}

/// Blocking browser confirmation. Anything but an explicit "OK" is a no.
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
