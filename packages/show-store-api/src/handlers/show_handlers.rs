//! CRUD endpoints for the `shows` collection.

use hyper::{body::Bytes, Response};
use serde_json::json;

use crate::router::{AppState, RouterError};
use show_store_core::{EpisodesSeen, Show, SHOWS_COLLECTION};

use super::request_utils::{id_param, parse_int, MatchitParams, QueryArgs};
use super::response::{create_response, status_response, DEFAULT_STATUS};

const NOT_FOUND_MESSAGE: &str = "ID not found.";

/// Looks up the show named by the `id` path parameter.
fn find_show(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Option<Show>, RouterError> {
    match id_param(params)? {
        Some(id) => Ok(state.store.get_by_id(SHOWS_COLLECTION, id)?),
        None => Ok(None),
    }
}

/// Lists shows, optionally keeping only those watched at least `minEpisodes` times.
///
/// # Endpoint
/// `GET /shows[?minEpisodes=<n>]`
///
/// # Response
/// - **200 OK**: `{"shows": [...]}`
///
/// # Errors
/// - **500 Internal Server Error**: `minEpisodes` is not an integer, or a
///   stored `episodes_seen` is text and cannot be compared
///
/// # Notes
/// - A `minEpisodes` beyond the `i64` range keeps no show (too large) or
///   every show with a numeric count (too small)
///
/// # Example
/// ```bash
/// curl "http://localhost:8080/shows?minEpisodes=5"
/// ```
pub fn list_shows(query: &QueryArgs, state: &AppState) -> Result<Response<Bytes>, RouterError> {
    let Some(raw_min) = query.get("minEpisodes") else {
        let shows = state.store.get(SHOWS_COLLECTION)?;
        return create_response(&json!({ "shows": shows }), DEFAULT_STATUS, "");
    };
    let min_episodes = parse_int("minEpisodes", raw_min)?;

    let mut shows = Vec::new();
    for show in state.store.get(SHOWS_COLLECTION)? {
        let seen = show.episodes_seen.count().ok_or_else(|| {
            RouterError::InternalError(format!(
                "Show {} has non-numeric episodes_seen '{}'",
                show.id, show.episodes_seen
            ))
        })?;
        if min_episodes.is_reached_by(seen) {
            shows.push(show);
        }
    }
    create_response(&json!({ "shows": shows }), DEFAULT_STATUS, "")
}

/// Reads one show.
///
/// # Endpoint
/// `GET /shows/{id}`
///
/// # Response
/// - **200 OK**: `{"id": 1, "name": "...", "episodes_seen": 0}`
/// - **404 Not Found**: `ID not found.`
///
/// # Notes
/// - `id` is the stored integer, not the path text: `/shows/03` answers
///   `"id": 3`
pub fn get_show(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let Some(show) = find_show(params, state)? else {
        return status_response(404, NOT_FOUND_MESSAGE);
    };
    create_response(
        &json!({
            "id": show.id,
            "name": show.name,
            "episodes_seen": show.episodes_seen,
        }),
        DEFAULT_STATUS,
        "",
    )
}

/// Creates a show from query arguments.
///
/// # Endpoint
/// `POST /shows?name=<name>&episodes_seen=<n>`
///
/// # Response
/// - **201 Created**: the stored record with its assigned id
/// - **422 Unprocessable Entity**: `name` or `episodes_seen` missing; the
///   result echoes `name` (or `null`)
///
/// # Notes
/// - `episodes_seen` is stored as the text that was sent
///
/// # Example
/// ```bash
/// curl -X POST "http://localhost:8080/shows?name=Dark&episodes_seen=26"
/// ```
pub fn create_show(query: &QueryArgs, state: &AppState) -> Result<Response<Bytes>, RouterError> {
    let name = query.get("name");
    let episodes_seen = query.get("episodes_seen");
    let (Some(name), Some(episodes_seen)) = (name, episodes_seen) else {
        return create_response(
            &json!({ "name": name }),
            422,
            r#"Must provide "name" and "episodes_seen""#,
        );
    };

    let created = state.store.create(
        SHOWS_COLLECTION,
        Show::new(name, EpisodesSeen::from(episodes_seen)),
    )?;
    tracing::info!("Created show {} ({})", created.id, created.name);
    create_response(&created, 201, "")
}

/// Overwrites the fields supplied as query arguments.
///
/// # Endpoint
/// `PUT /shows/{id}?name=<name>&episodes_seen=<n>`
///
/// # Response
/// - **201 Created**: the updated record
/// - **404 Not Found**: `ID not found.`
/// - **422 Unprocessable Entity**: neither `name` nor `episodes_seen` supplied
///
/// # Notes
/// - Answers 201 although nothing is created, for compatibility with
///   existing clients
pub fn update_show(
    params: &MatchitParams<'_, '_>,
    query: &QueryArgs,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let Some(mut show) = find_show(params, state)? else {
        return status_response(404, NOT_FOUND_MESSAGE);
    };

    let name = query.get("name");
    let episodes_seen = query.get("episodes_seen");
    if name.is_none() && episodes_seen.is_none() {
        return create_response(
            &json!({ "name": name }),
            422,
            r#"Must provide "name" or "episodes_seen" or both"#,
        );
    }

    if let Some(name) = name {
        show.name = name.to_string();
    }
    if let Some(episodes_seen) = episodes_seen {
        show.episodes_seen = EpisodesSeen::from(episodes_seen);
    }
    let updated = state.store.update_by_id(SHOWS_COLLECTION, show.id, show)?;
    tracing::info!("Updated show {}", updated.id);
    create_response(&updated, 201, "")
}

/// Deletes a show.
///
/// # Endpoint
/// `DELETE /shows/{id}`
///
/// # Response
/// - **200 OK**: `Show deleted`
/// - **404 Not Found**: `No show with this id exists`
pub fn delete_show(
    params: &MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let Some(show) = find_show(params, state)? else {
        return status_response(404, "No show with this id exists");
    };
    state.store.delete_by_id(SHOWS_COLLECTION, show.id)?;
    tracing::info!("Deleted show {}", show.id);
    status_response(DEFAULT_STATUS, "Show deleted")
}
