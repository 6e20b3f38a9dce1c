use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{ProjectionSummary, ScenarioInputs, YearSnapshot, project, summarize};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    property_price: Option<f64>,
    #[serde(alias = "depositAmount")]
    deposit: Option<f64>,
    #[serde(alias = "interestRate")]
    mortgage_rate: Option<f64>,
    #[serde(alias = "mortgageYears")]
    mortgage_length: Option<i32>,
    #[serde(alias = "appreciationRate")]
    property_appreciation_rate: Option<f64>,
    monthly_rent: Option<f64>,
    rent_increase_rate: Option<f64>,
    council_tax: Option<f64>,
    #[serde(alias = "maintenance")]
    maintenance_costs: Option<f64>,
    #[serde(alias = "bedrooms")]
    num_bedrooms: Option<u32>,
    #[serde(alias = "roomIncome")]
    room_rental_income: Option<f64>,
    #[serde(alias = "years")]
    timeframe: Option<i32>,
}

#[derive(Parser, Debug)]
#[command(
    name = "rentbuy",
    about = "Rent vs buy projection: cumulative cost of renting against buying with a mortgage"
)]
struct Cli {
    #[arg(long, default_value_t = 300_000.0)]
    property_price: f64,
    #[arg(long, default_value_t = 30_000.0)]
    deposit: f64,
    #[arg(
        long,
        default_value_t = 4.5,
        help = "Annual mortgage interest rate in percent, e.g. 4.5"
    )]
    mortgage_rate: f64,
    #[arg(
        long,
        default_value_t = 25,
        help = "Mortgage term in years; clamped to the timeframe"
    )]
    mortgage_length: i32,
    #[arg(
        long,
        default_value_t = 3.0,
        allow_negative_numbers = true,
        help = "Annual property appreciation in percent"
    )]
    property_appreciation_rate: f64,
    #[arg(long, default_value_t = 1_200.0)]
    monthly_rent: f64,
    #[arg(
        long,
        default_value_t = 3.0,
        allow_negative_numbers = true,
        help = "Annual rent increase in percent"
    )]
    rent_increase_rate: f64,
    #[arg(long, default_value_t = 150.0, help = "Monthly council tax")]
    council_tax: f64,
    #[arg(long, default_value_t = 100.0, help = "Monthly maintenance costs")]
    maintenance_costs: f64,
    #[arg(long, default_value_t = 2)]
    num_bedrooms: u32,
    #[arg(
        long,
        default_value_t = 600.0,
        help = "Monthly income from letting spare rooms, only counted with 2+ bedrooms"
    )]
    room_rental_income: f64,
    #[arg(long, default_value_t = 25, help = "Projection horizon in years")]
    timeframe: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    inputs: ScenarioInputs,
    snapshots: Vec<YearSnapshot>,
    summary: Option<ProjectionSummary>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(cli: Cli) -> Result<ScenarioInputs, String> {
    let inputs = ScenarioInputs {
        property_price: cli.property_price,
        deposit: cli.deposit,
        mortgage_rate: cli.mortgage_rate,
        mortgage_length: cli.mortgage_length,
        property_appreciation_rate: cli.property_appreciation_rate,
        monthly_rent: cli.monthly_rent,
        rent_increase_rate: cli.rent_increase_rate,
        council_tax: cli.council_tax,
        maintenance_costs: cli.maintenance_costs,
        num_bedrooms: cli.num_bedrooms,
        room_rental_income: cli.room_rental_income,
        timeframe: cli.timeframe,
    }
    .with_timeframe(cli.timeframe);

    inputs.validate().map_err(|e| e.to_string())?;
    Ok(inputs)
}

/// Parses command line arguments and returns the projection as JSON.
pub fn run_cli<I, T>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let inputs = build_inputs(Cli::parse_from(args))?;
    let response = build_project_response(inputs);
    serde_json::to_string_pretty(&response).map_err(|e| format!("Failed to encode projection: {e}"))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("Rent vs buy HTTP API listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    let inputs = match inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => {
            log::warn!("rejected projection request: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    log::debug!(
        "projecting {} years for price {}",
        inputs.timeframe,
        inputs.property_price
    );
    json_response(StatusCode::OK, build_project_response(inputs))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<ScenarioInputs, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    inputs_from_payload(payload)
}

fn inputs_from_payload(payload: ProjectPayload) -> Result<ScenarioInputs, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.property_price {
        cli.property_price = v;
    }
    if let Some(v) = payload.deposit {
        cli.deposit = v;
    }
    if let Some(v) = payload.mortgage_rate {
        cli.mortgage_rate = v;
    }
    if let Some(v) = payload.mortgage_length {
        cli.mortgage_length = v;
    }
    if let Some(v) = payload.property_appreciation_rate {
        cli.property_appreciation_rate = v;
    }
    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v;
    }
    if let Some(v) = payload.rent_increase_rate {
        cli.rent_increase_rate = v;
    }
    if let Some(v) = payload.council_tax {
        cli.council_tax = v;
    }
    if let Some(v) = payload.maintenance_costs {
        cli.maintenance_costs = v;
    }
    if let Some(v) = payload.num_bedrooms {
        cli.num_bedrooms = v;
    }
    if let Some(v) = payload.room_rental_income {
        cli.room_rental_income = v;
    }
    if let Some(v) = payload.timeframe {
        cli.timeframe = v;
    }

    build_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    let defaults = ScenarioInputs::default();
    Cli {
        property_price: defaults.property_price,
        deposit: defaults.deposit,
        mortgage_rate: defaults.mortgage_rate,
        mortgage_length: defaults.mortgage_length,
        property_appreciation_rate: defaults.property_appreciation_rate,
        monthly_rent: defaults.monthly_rent,
        rent_increase_rate: defaults.rent_increase_rate,
        council_tax: defaults.council_tax,
        maintenance_costs: defaults.maintenance_costs,
        num_bedrooms: defaults.num_bedrooms,
        room_rental_income: defaults.room_rental_income,
        timeframe: defaults.timeframe,
    }
}

fn build_project_response(inputs: ScenarioInputs) -> ProjectResponse {
    let snapshots = project(&inputs);
    let summary = summarize(&inputs, &snapshots);
    ProjectResponse {
        inputs,
        snapshots,
        summary,
    }
}
