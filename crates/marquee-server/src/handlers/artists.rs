//! Artist endpoints: listing, search, detail, create, edit.
//!
//! Mirrors the venue endpoints minus deletion and area grouping.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Utc;
use marquee_db::{ArtistStore, ShowStore};
use marquee_types::{Artist, ArtistId};
use marquee_views::{artist_full, artist_short, lookup_count};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::flash::Flash;
use crate::forms::{ArtistForm, SearchForm};
use crate::handlers::{home_page, page, parse_id};
use crate::state::AppState;

/// The not-found flash for artist detail and edit routes.
const ARTIST_MISSING: &str = "An error occurred. Artist does not exist!";

/// `GET /artists` -- every artist, short-projected.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let artists = ArtistStore::new(state.db.pool()).list_all().await?;

    let now = Utc::now();
    let ids: Vec<Uuid> = artists.iter().map(|a| a.id.into_inner()).collect();
    let counts = ShowStore::new(state.db.pool())
        .upcoming_counts_for_artists(&ids, now)
        .await?;

    let data: Vec<_> = artists
        .iter()
        .map(|a| artist_short(a, lookup_count(&counts, a.id.into_inner())))
        .collect();

    page(&state, "artists", &json!({ "artists": data }))
}

/// `POST /artists/search` -- case-insensitive substring search on names.
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let matches = ArtistStore::new(state.db.pool())
        .search_by_name(&form.search_term)
        .await?;

    let now = Utc::now();
    let ids: Vec<Uuid> = matches.iter().map(|a| a.id.into_inner()).collect();
    let counts = ShowStore::new(state.db.pool())
        .upcoming_counts_for_artists(&ids, now)
        .await?;

    let data: Vec<_> = matches
        .iter()
        .map(|a| artist_short(a, lookup_count(&counts, a.id.into_inner())))
        .collect();

    page(
        &state,
        "search_artists",
        &json!({
            "results": { "count": data.len(), "data": data },
            "search_term": form.search_term,
        }),
    )
}

/// `GET /artists/{id}` -- the full artist projection, or a not-found
/// flash on the landing page.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(artist_id) = parse_id::<ArtistId>(&id) else {
        return home_page(&state, Some(Flash::error(ARTIST_MISSING)));
    };
    render_detail(&state, artist_id, None).await
}

/// `GET /artists/create` -- the blank artist form.
pub async fn create_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    page(
        &state,
        "artist_form",
        &form_context(None, "/artists/create", "List a new artist"),
    )
}

/// `POST /artists/create` -- validate, insert, flash the outcome.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>, AppError> {
    let name = form.name.clone();

    if let Err(errors) = form.validate() {
        tracing::warn!(%errors, "Artist form rejected");
        return home_page(&state, Some(could_not_be(&name, "listed")));
    }

    match ArtistStore::new(state.db.pool())
        .insert(&form.into_new_artist())
        .await
    {
        Ok(_) => home_page(
            &state,
            Some(Flash::success(format!("Artist {name} was successfully listed!"))),
        ),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Artist insert failed");
            home_page(&state, Some(could_not_be(&name, "listed")))
        }
    }
}

/// `GET /artists/{id}/edit` -- the artist form populated from the record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(artist_id) = parse_id::<ArtistId>(&id) else {
        return home_page(&state, Some(Flash::error(ARTIST_MISSING)));
    };

    let Some(artist) = ArtistStore::new(state.db.pool()).get(artist_id).await? else {
        return home_page(&state, Some(Flash::error(ARTIST_MISSING)));
    };

    page(
        &state,
        "artist_form",
        &form_context(
            Some(&artist),
            &format!("/artists/{artist_id}/edit"),
            "Edit artist",
        ),
    )
}

/// `POST /artists/{id}/edit` -- overwrite every field, then render the
/// detail page with the outcome flash.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>, AppError> {
    let Some(artist_id) = parse_id::<ArtistId>(&id) else {
        return home_page(&state, Some(Flash::error(ARTIST_MISSING)));
    };

    let name = form.name.clone();

    if let Err(errors) = form.validate() {
        tracing::warn!(%errors, "Artist form rejected");
        return render_detail(&state, artist_id, Some(could_not_be(&name, "updated"))).await;
    }

    match ArtistStore::new(state.db.pool())
        .update(artist_id, &form.into_new_artist())
        .await
    {
        Ok(0) => render_detail(&state, artist_id, Some(could_not_be(&name, "updated"))).await,
        Ok(_) => {
            render_detail(
                &state,
                artist_id,
                Some(Flash::success(format!("Artist {name} was successfully updated!"))),
            )
            .await
        }
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Artist update failed");
            render_detail(&state, artist_id, Some(could_not_be(&name, "updated"))).await
        }
    }
}

/// Fetch, project, and render the artist detail page.
async fn render_detail(
    state: &AppState,
    artist_id: ArtistId,
    flash: Option<Flash>,
) -> Result<Html<String>, AppError> {
    let Some(artist) = ArtistStore::new(state.db.pool()).get(artist_id).await? else {
        return home_page(state, flash.or_else(|| Some(Flash::error(ARTIST_MISSING))));
    };

    let listings = ShowStore::new(state.db.pool()).list_for_artist(artist_id).await?;
    let now = Utc::now();

    page(
        state,
        "artist_detail",
        &json!({
            "artist": artist_full(&artist, &listings, now),
            "flash": flash,
        }),
    )
}

/// Build the artist form context, blank or populated from a record.
fn form_context(artist: Option<&Artist>, action: &str, title: &str) -> serde_json::Value {
    let form = artist.map_or_else(
        || {
            json!({
                "name": "", "city": "", "state": "", "phone": "", "genres": "",
                "image_link": "", "facebook_link": "", "website": "",
                "seeking_venue": false, "seeking_description": "",
            })
        },
        |a| {
            json!({
                "name": a.name, "city": a.city, "state": a.state, "phone": a.phone,
                "genres": a.genres, "image_link": a.image_link,
                "facebook_link": a.facebook_link, "website": a.website,
                "seeking_venue": a.seeking_venue,
                "seeking_description": a.seeking_description,
            })
        },
    );

    json!({ "form": form, "action": action, "title": title })
}

/// The generic write-failure flash naming the artist.
fn could_not_be(name: &str, verb: &str) -> Flash {
    Flash::error(format!("An error occurred. Artist {name} could not be {verb}."))
}
