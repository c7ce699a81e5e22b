//! Venue endpoints: area listing, search, detail, create, edit, delete.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Utc;
use marquee_db::{ShowStore, VenueStore};
use marquee_types::{Venue, VenueId};
use marquee_views::{group_by_area, lookup_count, venue_full, venue_short};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::flash::Flash;
use crate::forms::{SearchForm, VenueForm};
use crate::handlers::{home_page, page, parse_id};
use crate::state::AppState;

/// The not-found flash for venue detail and edit routes.
const VENUE_MISSING: &str = "An error occurred. Venue does not exist!";

/// `GET /venues` -- every venue, grouped by (city, state) area.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let venues = VenueStore::new(state.db.pool()).list_all().await?;

    let now = Utc::now();
    let ids: Vec<Uuid> = venues.iter().map(|v| v.id.into_inner()).collect();
    let counts = ShowStore::new(state.db.pool())
        .upcoming_counts_for_venues(&ids, now)
        .await?;

    let areas = group_by_area(&venues, &counts);
    page(&state, "venues", &json!({ "areas": areas }))
}

/// `POST /venues/search` -- case-insensitive substring search on names.
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let matches = VenueStore::new(state.db.pool())
        .search_by_name(&form.search_term)
        .await?;

    let now = Utc::now();
    let ids: Vec<Uuid> = matches.iter().map(|v| v.id.into_inner()).collect();
    let counts = ShowStore::new(state.db.pool())
        .upcoming_counts_for_venues(&ids, now)
        .await?;

    let data: Vec<_> = matches
        .iter()
        .map(|v| venue_short(v, lookup_count(&counts, v.id.into_inner())))
        .collect();

    page(
        &state,
        "search_venues",
        &json!({
            "results": { "count": data.len(), "data": data },
            "search_term": form.search_term,
        }),
    )
}

/// `GET /venues/{id}` -- the full venue projection, or a not-found flash
/// on the landing page.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(venue_id) = parse_id::<VenueId>(&id) else {
        return home_page(&state, Some(Flash::error(VENUE_MISSING)));
    };
    render_detail(&state, venue_id, None).await
}

/// `GET /venues/create` -- the blank venue form.
pub async fn create_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    page(
        &state,
        "venue_form",
        &form_context(None, "/venues/create", "List a new venue"),
    )
}

/// `POST /venues/create` -- validate, insert, flash the outcome.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>, AppError> {
    let name = form.name.clone();

    if let Err(errors) = form.validate() {
        tracing::warn!(%errors, "Venue form rejected");
        return home_page(&state, Some(could_not_be(&name, "listed")));
    }

    match VenueStore::new(state.db.pool())
        .insert(&form.into_new_venue())
        .await
    {
        Ok(_) => home_page(
            &state,
            Some(Flash::success(format!("Venue {name} was successfully listed!"))),
        ),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Venue insert failed");
            home_page(&state, Some(could_not_be(&name, "listed")))
        }
    }
}

/// `GET /venues/{id}/edit` -- the venue form populated from the record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(venue_id) = parse_id::<VenueId>(&id) else {
        return home_page(&state, Some(Flash::error(VENUE_MISSING)));
    };

    let Some(venue) = VenueStore::new(state.db.pool()).get(venue_id).await? else {
        return home_page(&state, Some(Flash::error(VENUE_MISSING)));
    };

    page(
        &state,
        "venue_form",
        &form_context(
            Some(&venue),
            &format!("/venues/{venue_id}/edit"),
            "Edit venue",
        ),
    )
}

/// `POST /venues/{id}/edit` -- overwrite every field, then render the
/// detail page with the outcome flash.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>, AppError> {
    let Some(venue_id) = parse_id::<VenueId>(&id) else {
        return home_page(&state, Some(Flash::error(VENUE_MISSING)));
    };

    let name = form.name.clone();

    if let Err(errors) = form.validate() {
        tracing::warn!(%errors, "Venue form rejected");
        return render_detail(&state, venue_id, Some(could_not_be(&name, "updated"))).await;
    }

    match VenueStore::new(state.db.pool())
        .update(venue_id, &form.into_new_venue())
        .await
    {
        Ok(0) => render_detail(&state, venue_id, Some(could_not_be(&name, "updated"))).await,
        Ok(_) => {
            render_detail(
                &state,
                venue_id,
                Some(Flash::success(format!("Venue {name} was successfully updated!"))),
            )
            .await
        }
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Venue update failed");
            render_detail(&state, venue_id, Some(could_not_be(&name, "updated"))).await
        }
    }
}

/// `DELETE /venues/{id}` -- delete by ID and flash the outcome.
///
/// A delete matching zero rows commits and reports success with zero
/// effect: an informational "not found" flash, never an error path.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(venue_id) = parse_id::<VenueId>(&id) else {
        return home_page(
            &state,
            Some(Flash::error("An error occurred! Venue was not deleted")),
        );
    };

    match VenueStore::new(state.db.pool()).delete(venue_id).await {
        Ok(0) => home_page(
            &state,
            Some(Flash::error("Venue was not found, nothing was deleted")),
        ),
        Ok(_) => home_page(&state, Some(Flash::success("Venue was successfully deleted"))),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Venue delete failed");
            home_page(
                &state,
                Some(Flash::error("An error occurred! Venue was not deleted")),
            )
        }
    }
}

/// Fetch, project, and render the venue detail page.
///
/// One show fetch and one captured "now" feed both partitions and both
/// counts. A missing venue falls back to the landing page.
async fn render_detail(
    state: &AppState,
    venue_id: VenueId,
    flash: Option<Flash>,
) -> Result<Html<String>, AppError> {
    let Some(venue) = VenueStore::new(state.db.pool()).get(venue_id).await? else {
        return home_page(state, flash.or_else(|| Some(Flash::error(VENUE_MISSING))));
    };

    let listings = ShowStore::new(state.db.pool()).list_for_venue(venue_id).await?;
    let now = Utc::now();

    page(
        state,
        "venue_detail",
        &json!({
            "venue": venue_full(&venue, &listings, now),
            "flash": flash,
        }),
    )
}

/// Build the venue form context, blank or populated from a record.
fn form_context(venue: Option<&Venue>, action: &str, title: &str) -> serde_json::Value {
    let form = venue.map_or_else(
        || {
            json!({
                "name": "", "city": "", "state": "", "address": "", "phone": "",
                "image_link": "", "facebook_link": "", "website": "", "genres": "",
                "seeking_talent": false, "seeking_description": "",
            })
        },
        |v| {
            json!({
                "name": v.name, "city": v.city, "state": v.state, "address": v.address,
                "phone": v.phone, "image_link": v.image_link,
                "facebook_link": v.facebook_link, "website": v.website,
                "genres": v.genres, "seeking_talent": v.seeking_talent,
                "seeking_description": v.seeking_description,
            })
        },
    );

    json!({ "form": form, "action": action, "title": title })
}

/// The generic write-failure flash naming the venue.
fn could_not_be(name: &str, verb: &str) -> Flash {
    Flash::error(format!("An error occurred. Venue {name} could not be {verb}."))
}
