//! Bill and debt REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    CreateGasBillRequest, CreateWaterBillRequest, DebtEntryDto, GasBillResponse, SetDebtRequest,
    WaterBillResponse,
};
use crate::domain::billing::{ExtraCharge, GasBill, WaterBill};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{building_id}/water-bills",
    tag = "Bills",
    params(("building_id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Water bills in period order", body = ApiResponse<Vec<WaterBillResponse>>)
    )
)]
pub async fn list_water_bills(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<WaterBillResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let bills = match state
        .repos
        .billing()
        .find_water_bills_for_building(building_id)
        .await
    {
        Ok(bills) => bills,
        Err(e) => return Err(domain_error(e)),
    };

    let mut responses = Vec::with_capacity(bills.len());
    for bill in bills {
        match state.repos.billing().extra_charges_for(bill.id).await {
            Ok(charges) => responses.push(WaterBillResponse::from_bill(bill, charges)),
            Err(e) => return Err(domain_error(e)),
        }
    }
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/water-bills/{id}",
    tag = "Bills",
    params(("id" = i32, Path, description = "Water bill ID")),
    responses(
        (status = 200, description = "Water bill with extra charges", body = ApiResponse<WaterBillResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_water_bill(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<WaterBillResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let bill = match state.repos.billing().find_water_bill(id).await {
        Ok(Some(bill)) => bill,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Water bill {} not found", id))),
            ));
        }
        Err(e) => return Err(domain_error(e)),
    };

    match state.repos.billing().extra_charges_for(bill.id).await {
        Ok(charges) => Ok(Json(ApiResponse::success(WaterBillResponse::from_bill(
            bill, charges,
        )))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/buildings/{building_id}/water-bills",
    tag = "Bills",
    params(("building_id" = i32, Path, description = "Building ID")),
    request_body = CreateWaterBillRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<WaterBillResponse>),
        (status = 400, description = "Inconsistent bill amounts or period"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_water_bill(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateWaterBillRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WaterBillResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    if req.consumption_price >= req.total_payment {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "consumption_price must be less than total_payment",
            )),
        ));
    }
    if req.period_end <= req.period_start {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "period_end must be after period_start",
            )),
        ));
    }

    let bill = WaterBill {
        id: 0,
        building_id,
        total_payment: req.total_payment,
        consumption_price: req.consumption_price,
        period_start: req.period_start,
        period_end: req.period_end,
        created_at: Utc::now(),
    };
    let charges: Vec<ExtraCharge> = req
        .extra_charges
        .into_iter()
        .enumerate()
        .map(|(i, c)| ExtraCharge {
            id: 0,
            water_bill_id: 0,
            title: c.title,
            amount: c.amount,
            position: i as i32,
        })
        .collect();

    match state.repos.billing().save_water_bill(bill, charges).await {
        Ok(saved) => {
            let charges = state
                .repos
                .billing()
                .extra_charges_for(saved.id)
                .await
                .map_err(domain_error)?;
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(WaterBillResponse::from_bill(
                    saved, charges,
                ))),
            ))
        }
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{building_id}/gas-bills",
    tag = "Bills",
    params(("building_id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Gas bill list", body = ApiResponse<Vec<GasBillResponse>>)
    )
)]
pub async fn list_gas_bills(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<GasBillResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .billing()
        .find_gas_bills_for_building(building_id)
        .await
    {
        Ok(bills) => {
            let responses: Vec<GasBillResponse> = bills.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/buildings/{building_id}/gas-bills",
    tag = "Bills",
    params(("building_id" = i32, Path, description = "Building ID")),
    request_body = CreateGasBillRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<GasBillResponse>),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_gas_bill(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateGasBillRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GasBillResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let bill = GasBill {
        id: 0,
        building_id,
        total_payment: req.total_payment,
        created_at: Utc::now(),
    };

    match state.repos.billing().save_gas_bill(bill).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{building_id}/debts",
    tag = "Debts",
    params(("building_id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Debt ledger entries", body = ApiResponse<Vec<DebtEntryDto>>)
    )
)]
pub async fn list_debts(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<DebtEntryDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.billing().debts_for(building_id).await {
        Ok(ledger) => {
            let entries: Vec<DebtEntryDto> = ledger
                .entries()
                .iter()
                .map(|(&unit, &amount)| DebtEntryDto { unit, amount })
                .collect();
            Ok(Json(ApiResponse::success(entries)))
        }
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/buildings/{building_id}/debts",
    tag = "Debts",
    params(("building_id" = i32, Path, description = "Building ID")),
    request_body = SetDebtRequest,
    responses(
        (status = 200, description = "Entry set", body = ApiResponse<DebtEntryDto>),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn set_debt(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SetDebtRequest>,
) -> Result<Json<ApiResponse<DebtEntryDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .billing()
        .set_debt(building_id, req.unit, req.amount)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::success(DebtEntryDto {
            unit: req.unit,
            amount: req.amount,
        }))),
        Err(e) => Err(domain_error(e)),
    }
}
