//! HTTP handler functions for the vacancy map API.

use actix_web::{HttpResponse, web};
use vacancy_map_building_models::BuildingRecord;
use vacancy_map_bridge::{BridgeError, GenerateModelRequest};
use vacancy_map_geometry::{derive_vacancy_volume, footprint_area_m2};
use vacancy_map_search::SearchHit;
use vacancy_map_server_models::{
    ApiBuilding, ApiHealth, ApiOverrideAck, ApiSearchMatch, BuildingQueryParams, OverrideBody,
    OverrideQueryParams, SearchQueryParams,
};
use vacancy_map_vacancy::{OverrideStore, floors, resolve_vacancy_fraction};

use crate::{AppState, SEARCH_RESULT_LIMIT};

/// `GET /health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        ok: true,
        features: state.index.len(),
    })
}

/// `GET /search`
///
/// Returns the top matches for a free-text address or name query.
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchQueryParams>,
) -> HttpResponse {
    if vacancy_map_search::normalize(&params.query).is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Query cannot be empty"
        }));
    }

    let matches: Vec<ApiSearchMatch> = state
        .index
        .search(&params.query, SEARCH_RESULT_LIMIT)
        .iter()
        .map(|hit| search_match(hit, &state.overrides))
        .collect();

    HttpResponse::Ok().json(matches)
}

/// `GET /building`
///
/// Building detail by exact id. An unknown id answers `found: false`
/// with the id echoed, not an error status.
pub async fn building(
    state: web::Data<AppState>,
    params: web::Query<BuildingQueryParams>,
) -> HttpResponse {
    state.index.lookup_by_id(&params.id).map_or_else(
        || HttpResponse::Ok().json(ApiBuilding::not_found(params.id.clone())),
        |record| HttpResponse::Ok().json(building_response(record, &state.overrides)),
    )
}

/// `GET /building_by_address`
///
/// Building detail from the single best search match. No threshold is
/// applied beyond "scored above zero".
pub async fn building_by_address(
    state: web::Data<AppState>,
    params: web::Query<SearchQueryParams>,
) -> HttpResponse {
    if vacancy_map_search::normalize(&params.query).is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Query cannot be empty"
        }));
    }

    state.index.best_match(&params.query).map_or_else(
        || HttpResponse::Ok().json(ApiBuilding::not_found(params.query.clone())),
        |hit| HttpResponse::Ok().json(building_response(hit.record, &state.overrides)),
    )
}

/// `POST /override`
///
/// Sets (or replaces) the available-area override for a building.
/// Rejected for unknown ids so the store never accumulates dead keys.
pub async fn set_override(
    state: web::Data<AppState>,
    body: web::Json<OverrideBody>,
) -> HttpResponse {
    if state.index.lookup_by_id(&body.id).is_none() {
        return HttpResponse::NotFound().json(ApiOverrideAck {
            ok: false,
            id: body.id.clone(),
            removed: None,
        });
    }

    state.overrides.set(&body.id, body.available_area_m2);
    HttpResponse::Ok().json(ApiOverrideAck {
        ok: true,
        id: body.id.clone(),
        removed: None,
    })
}

/// `DELETE /override`
///
/// Clears the override for a building. Idempotent; reports whether an
/// override was present.
pub async fn clear_override(
    state: web::Data<AppState>,
    params: web::Query<OverrideQueryParams>,
) -> HttpResponse {
    let removed = state.overrides.clear(&params.id);
    HttpResponse::Ok().json(ApiOverrideAck {
        ok: true,
        id: params.id.clone(),
        removed: Some(removed),
    })
}

/// `POST /generate_model`
///
/// Proxies a model-generation request to the external bridge service.
pub async fn generate_model(
    state: web::Data<AppState>,
    body: web::Json<GenerateModelRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    match state.bridge.generate(&request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e @ BridgeError::Unavailable(_)) => {
            log::error!("Model bridge unreachable: {e}");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "error": format!("Bridge service unavailable at {}", state.bridge.base_url())
            }))
        }
        Err(e @ BridgeError::Status { .. }) => {
            log::error!("Model bridge failed: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
        Err(e @ BridgeError::Parse(_)) => {
            log::error!("Model bridge returned garbage: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Bridge response was not valid JSON"
            }))
        }
    }
}

/// Projects a search hit into the ranked-match payload.
fn search_match(hit: &SearchHit<'_>, overrides: &OverrideStore) -> ApiSearchMatch {
    let record = hit.record;
    ApiSearchMatch {
        id: record.id.clone(),
        score: hit.score,
        address: record.display_address(),
        number: record.number.clone(),
        street: record.street.clone(),
        postcode: record.postcode.clone(),
        height_m: record.height_m,
        vacancy_pct: resolved_vacancy(record, overrides),
    }
}

/// Assembles the full building detail payload: static metrics (area,
/// floors), the resolved vacancy fraction, and, when enough is known,
/// the derived vacant sub-volume.
fn building_response(record: &BuildingRecord, overrides: &OverrideStore) -> ApiBuilding {
    let area = footprint_area_m2(&record.footprint);
    let vacancy = resolve_vacancy_fraction(record, overrides.get(&record.id).as_ref(), area);

    let volume = match (record.height_m, vacancy) {
        (Some(height), Some(fraction)) => {
            derive_vacancy_volume(&record.id, &record.footprint, height, fraction)
        }
        _ => None,
    };

    ApiBuilding {
        found: true,
        id: record.id.clone(),
        address: Some(record.display_address()),
        height_m: record.height_m,
        vacancy_pct: vacancy,
        floors: floors(record),
        area_m2: area,
        properties: Some(serde_json::Value::Object(record.properties.clone())),
        geometry: record.geometry.clone(),
        vacancy_volume: volume,
    }
}

/// Resolves the effective vacancy fraction for a record against the
/// session override store, using the footprint area as the denominator
/// for area-based overrides.
fn resolved_vacancy(record: &BuildingRecord, overrides: &OverrideStore) -> Option<f64> {
    let area = footprint_area_m2(&record.footprint);
    resolve_vacancy_fraction(record, overrides.get(&record.id).as_ref(), area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint() -> Vec<Vec<f64>> {
        vec![
            vec![-122.4000, 37.7900],
            vec![-122.3989, 37.7900],
            vec![-122.3989, 37.7909],
            vec![-122.4000, 37.7909],
            vec![-122.4000, 37.7900],
        ]
    }

    fn record(vacancy_fraction: Option<f64>) -> BuildingRecord {
        BuildingRecord {
            id: "bldg-1".to_string(),
            address: None,
            number: Some("123".to_string()),
            street: Some("Main St".to_string()),
            postcode: Some("94105".to_string()),
            name: None,
            use_class: Some("office".to_string()),
            footprint: footprint(),
            height_m: Some(34.0),
            stories: None,
            vacancy_fraction,
            properties: serde_json::Map::new(),
            geometry: None,
        }
    }

    #[test]
    fn assembles_found_building() {
        let response = building_response(&record(Some(0.25)), &OverrideStore::new());
        assert!(response.found);
        assert_eq!(response.id, "bldg-1");
        assert_eq!(response.address.as_deref(), Some("123 Main St 94105"));
        assert_eq!(response.height_m, Some(34.0));
        assert_eq!(response.vacancy_pct, Some(0.25));
        assert_eq!(response.floors, Some(10));
        assert!(response.area_m2.is_some());
    }

    #[test]
    fn derives_volume_when_vacancy_known() {
        let response = building_response(&record(Some(0.25)), &OverrideStore::new());
        let volume = response.vacancy_volume.expect("volume");
        assert!((volume.height_m - 8.5).abs() < 1e-9);
        assert!(volume.top_m() <= 34.0);
    }

    #[test]
    fn no_volume_when_vacancy_unknown() {
        let response = building_response(&record(None), &OverrideStore::new());
        assert_eq!(response.vacancy_pct, None);
        assert!(response.vacancy_volume.is_none());
    }

    #[test]
    fn override_fills_in_for_missing_authoritative_value() {
        let overrides = OverrideStore::new();
        overrides.set("bldg-1", Some(500.0));

        let response = building_response(&record(None), &overrides);
        let vacancy = response.vacancy_pct.expect("vacancy");
        assert!(vacancy > 0.0 && vacancy <= 1.0);
        assert!(response.vacancy_volume.is_some());
    }

    #[test]
    fn authoritative_value_ignores_override() {
        let overrides = OverrideStore::new();
        overrides.set("bldg-1", Some(500.0));

        let response = building_response(&record(Some(0.25)), &overrides);
        assert_eq!(response.vacancy_pct, Some(0.25));
    }

    #[test]
    fn search_match_carries_record_fields() {
        let r = record(Some(0.25));
        let hit = SearchHit {
            record: &r,
            score: 3,
        };
        let payload = search_match(&hit, &OverrideStore::new());
        assert_eq!(payload.id, "bldg-1");
        assert_eq!(payload.score, 3);
        assert_eq!(payload.number.as_deref(), Some("123"));
        assert_eq!(payload.street.as_deref(), Some("Main St"));
        assert_eq!(payload.vacancy_pct, Some(0.25));
    }
}
