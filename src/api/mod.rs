use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    AmortizationYear, CostComparisonYear, MonthlyRentData, MortgageAmortizationData,
    calculate_monthly_rent_data, calculate_mortgage_amortization, compare_buy_vs_rent,
    summarize_amortization_years,
};
use crate::field::{
    ANALYSIS_YEARS, DOWN_PAYMENT_AMOUNT, DOWN_PAYMENT_PERCENT, FieldDescriptor, FieldValue,
    HOME_PRICE, INTEREST_RATE, MONTHLY_RENT, MirroredQuantity, RENT_INCREASE, Representation,
    TERM_YEARS, percentage_to_amount, projection_field_descriptors, raw_text,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn into_field_value(self) -> FieldValue {
        match self {
            RawNumber::Number(v) => FieldValue::Number(v),
            RawNumber::Text(text) => FieldValue::from_text(&text),
        }
    }
}

fn field_value(raw: Option<RawNumber>) -> FieldValue {
    raw.map_or(FieldValue::Empty, RawNumber::into_field_value)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionPayload {
    pub price: Option<RawNumber>,
    pub down_payment_percent: Option<RawNumber>,
    pub down_payment: Option<RawNumber>,
    pub interest_rate: Option<RawNumber>,
    pub term_years: Option<RawNumber>,
    pub monthly_rent: Option<RawNumber>,
    pub analysis_years: Option<RawNumber>,
    pub rent_increase: Option<RawNumber>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    pub price: f64,
    pub down_payment_percent: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub monthly_rent: f64,
    pub analysis_years: u32,
    pub rent_increase: f64,
}

impl ProjectionInputs {
    pub fn query_string(&self) -> String {
        [
            ("price", self.price),
            ("downPaymentPercent", self.down_payment_percent),
            ("interestRate", self.interest_rate),
            ("termYears", self.term_years as f64),
            ("monthlyRent", self.monthly_rent),
            ("analysisYears", self.analysis_years as f64),
            ("rentIncrease", self.rent_increase),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", raw_text(*value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        reconcile_inputs(ProjectionPayload::default())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub inputs: ProjectionInputs,
    pub query: String,
    pub mortgage: MortgageAmortizationData,
    pub mortgage_years: Vec<AmortizationYear>,
    pub rent: MonthlyRentData,
    pub comparison: Vec<CostComparisonYear>,
}

#[derive(Debug, Serialize)]
struct FieldsResponse {
    fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn reconcile_inputs(payload: ProjectionPayload) -> ProjectionInputs {
    let price = HOME_PRICE.clamp(field_value(payload.price));

    // A numeric percentage wins; otherwise a numeric amount is converted
    // against price. Blank or unparseable values count as absent.
    let pct = field_value(payload.down_payment_percent);
    let amount = field_value(payload.down_payment);
    let down_payment_percent = match (pct, amount) {
        (FieldValue::Number(_), _) => DOWN_PAYMENT_PERCENT.clamp(pct),
        (FieldValue::Empty, FieldValue::Number(_)) => {
            let amount = DOWN_PAYMENT_AMOUNT.clamp(amount);
            let pct = MirroredQuantity::new(
                Representation::Amount,
                amount,
                DOWN_PAYMENT_PERCENT.default_value(),
            )
            .switch_representation(Representation::Percentage, Some(price))
            .value();
            DOWN_PAYMENT_PERCENT.clamp(FieldValue::Number(pct))
        }
        (FieldValue::Empty, FieldValue::Empty) => DOWN_PAYMENT_PERCENT.default_value(),
    };
    let down_payment = percentage_to_amount(down_payment_percent, Some(price)).unwrap_or(0.0);

    ProjectionInputs {
        price,
        down_payment_percent,
        down_payment,
        interest_rate: INTEREST_RATE.clamp(field_value(payload.interest_rate)),
        term_years: TERM_YEARS.clamp(field_value(payload.term_years)),
        monthly_rent: MONTHLY_RENT.clamp(field_value(payload.monthly_rent)),
        analysis_years: ANALYSIS_YEARS.clamp(field_value(payload.analysis_years)),
        rent_increase: RENT_INCREASE.clamp(field_value(payload.rent_increase)),
    }
}

pub fn build_projection_response(inputs: ProjectionInputs) -> ProjectionResponse {
    let mortgage = calculate_mortgage_amortization(
        inputs.price,
        inputs.down_payment_percent,
        inputs.interest_rate,
        inputs.term_years,
    );
    let mortgage_years = summarize_amortization_years(&mortgage);
    let rent = calculate_monthly_rent_data(
        inputs.monthly_rent,
        inputs.analysis_years,
        inputs.rent_increase,
    );
    let comparison = compare_buy_vs_rent(inputs.down_payment, &mortgage, &rent);

    ProjectionResponse {
        query: inputs.query_string(),
        inputs,
        mortgage,
        mortgage_years,
        rent,
        comparison,
    }
}

pub fn router() -> Router {
    Router::new()
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .route("/api/fields", get(fields_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("buy vs. rent API listening on http://{addr}");
    tracing::info!("local access: http://127.0.0.1:{port}/api/projection");

    axum::serve(listener, router()).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn fields_handler() -> Response {
    json_response(
        StatusCode::OK,
        FieldsResponse {
            fields: projection_field_descriptors(),
        },
    )
}

async fn projection_get_handler(
    payload: Result<Query<ProjectionPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => projection_handler_impl(payload),
        Err(rejection) => error_response(rejection.status(), &rejection.body_text()),
    }
}

async fn projection_post_handler(
    payload: Result<Json<ProjectionPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => projection_handler_impl(payload),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected projection body");
            error_response(StatusCode::BAD_REQUEST, &rejection.body_text())
        }
    }
}

fn projection_handler_impl(payload: ProjectionPayload) -> Response {
    let inputs = reconcile_inputs(payload);
    tracing::debug!(?inputs, "recomputing projection");
    json_response(StatusCode::OK, build_projection_response(inputs))
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
