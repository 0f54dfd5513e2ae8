//! Thin client for the register's HTTP API.
//!
//! Every call returns a [`RegisterError`] on failure. Error bodies from the
//! backend (`{ "error": "..." }`) are surfaced with their message intact.

use common::error::RegisterError;
use common::model::merged::MergedViewRow;
use common::requests::{
    AddChemicalRequest, AddChemicalResponse, ErrorBody, UpdateSdsRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const WATCH_LIST_PATH: &str = "/api/watch-list";
const UPDATE_SDS_PATH: &str = "/api/update-sds";

pub async fn fetch_watch_list() -> Result<Vec<MergedViewRow>, RegisterError> {
    let response = Request::get(WATCH_LIST_PATH)
        .send()
        .await
        .map_err(network_error)?;
    read_json(response, "Failed to load watch list").await
}

pub async fn add_chemical(
    request: &AddChemicalRequest,
) -> Result<AddChemicalResponse, RegisterError> {
    let response = Request::post(WATCH_LIST_PATH)
        .json(request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response, "Failed to add chemical").await
}

pub async fn delete_entry(entry_id: i64) -> Result<(), RegisterError> {
    let response = Request::delete(&format!("{WATCH_LIST_PATH}/{entry_id}"))
        .send()
        .await
        .map_err(network_error)?;
    if response.ok() {
        Ok(())
    } else {
        let (status, message) = read_error(response, "Failed to delete chemical").await;
        Err(RegisterError::from_api_status(status, message))
    }
}

pub async fn update_sds(request: &UpdateSdsRequest) -> Result<(), RegisterError> {
    let response = Request::post(UPDATE_SDS_PATH)
        .json(request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    if response.ok() {
        Ok(())
    } else {
        // Relayed from the parsing service: its 400/503 are not ours.
        let (status, message) = read_error(response, "Failed to parse SDS").await;
        Err(RegisterError::Backend { status, message })
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, RegisterError> {
    if !response.ok() {
        let (status, message) = read_error(response, fallback).await;
        return Err(RegisterError::from_api_status(status, message));
    }
    response.json::<T>().await.map_err(network_error)
}

/// Status and `{ "error" }` text of a failed response. Unreadable bodies
/// fall back to `fallback`.
async fn read_error(response: Response, fallback: &str) -> (u16, String) {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.trim().is_empty() => body.error,
        _ => fallback.to_string(),
    };
    (status, message)
}

fn network_error(err: gloo_net::Error) -> RegisterError {
    RegisterError::Network(err.to_string())
}
