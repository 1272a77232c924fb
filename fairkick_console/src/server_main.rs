use std::sync::Arc;

use anyhow::Context;
use fairkick::api::{ErrorResponse, TeamRequest, TeamResponse};
use fairkick::generator::GenerateError;
use log::{info, warn};
use serde::Serialize;
use tide::http::headers::HeaderValue;
use tide::security::{CorsMiddleware, Origin};
use tide::{Body, Request, Response, StatusCode};

use crate::http_server_state::*;
use crate::server_config::{AllowedOrigin, ServerConfig};


pub const HEALTH_PATH: &str = "/health";
pub const GENERATE_PATH: &str = "/generate";

fn json_response(status: StatusCode, value: &impl Serialize) -> tide::Result {
    let mut resp = Response::new(status);
    resp.set_body(Body::from_json(value)?);
    Ok(resp)
}

fn error_response(status: StatusCode, detail: String) -> tide::Result {
    json_response(status, &ErrorResponse { detail })
}

fn cors_middleware(allowed_origin: &AllowedOrigin) -> CorsMiddleware {
    let origin = match allowed_origin {
        AllowedOrigin::Any => Origin::Any,
        AllowedOrigin::ThisSite(site) => Origin::Exact(site.clone()),
    };
    CorsMiddleware::new()
        .allow_methods("GET, POST, OPTIONS".parse::<HeaderValue>().unwrap())
        .allow_origin(origin)
        .allow_credentials(false)
}

async fn handle_health(_req: Request<HttpServerState>) -> tide::Result {
    json_response(StatusCode::Ok, &serde_json::json!({ "status": "ok" }))
}

async fn handle_generate(mut req: Request<HttpServerState>) -> tide::Result {
    let request: TeamRequest = match req.body_json().await {
        Ok(request) => request,
        Err(err) => {
            warn!("Malformed generate request: {}", err);
            return error_response(StatusCode::BadRequest, format!("Malformed request: {err}"));
        }
    };
    if let Err(detail) = request.validate() {
        warn!("Rejected generate request: {}", detail);
        return error_response(StatusCode::BadRequest, detail);
    }

    let generator = Arc::clone(&req.state().generator);
    let result = generator
        .generate(&request.players, &request.captain_a_id, &request.captain_b_id)
        .await;
    match result {
        Ok(lineup) => {
            info!(
                "Generated teams for {} players: {} vs {}",
                request.players.len(),
                lineup.tally.total_a,
                lineup.tally.total_b
            );
            json_response(StatusCode::Ok, &TeamResponse::from(&lineup))
        }
        Err(err @ (GenerateError::Invalid(_) | GenerateError::Rejected(_))) => {
            warn!("Rejected generate request: {}", err);
            error_response(StatusCode::BadRequest, err.to_string())
        }
        Err(err @ GenerateError::Unavailable(_)) => {
            error_response(StatusCode::BadGateway, err.to_string())
        }
    }
}

pub fn build_app(
    state: HttpServerState, allowed_origin: &AllowedOrigin,
) -> tide::Server<HttpServerState> {
    let mut app = tide::with_state(state);
    app.with(tide::log::LogMiddleware::new());
    app.with(cors_middleware(allowed_origin));
    app.at(HEALTH_PATH).get(handle_health);
    app.at(GENERATE_PATH).post(handle_generate);
    app
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let generator = config.generator.make_generator()?;
    info!("Using {:?} team generator", config.generator);
    let app = build_app(new_server_state(generator), &config.allowed_origin);
    app.listen(format!("0.0.0.0:{}", config.port))
        .await
        .context("Failed to start the tide server")?;
    Ok(())
}
