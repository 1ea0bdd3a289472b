//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::AllocationService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{allocations, bills, buildings, health, usages};

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub allocation: Arc<AllocationService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Buildings
        buildings::handlers::list_buildings,
        buildings::handlers::get_building,
        buildings::handlers::create_building,
        buildings::handlers::delete_building,
        // Snapshots
        usages::handlers::list_snapshots,
        usages::handlers::get_snapshot,
        usages::handlers::create_snapshot,
        usages::handlers::delete_snapshot,
        // Bills & debts
        bills::handlers::list_water_bills,
        bills::handlers::get_water_bill,
        bills::handlers::create_water_bill,
        bills::handlers::list_gas_bills,
        bills::handlers::create_gas_bill,
        bills::handlers::list_debts,
        bills::handlers::set_debt,
        // Allocations
        allocations::handlers::run_allocation,
        allocations::handlers::get_allocation,
        allocations::handlers::list_allocations,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Buildings
            buildings::BuildingResponse,
            buildings::CreateBuildingRequest,
            // Snapshots
            usages::SnapshotResponse,
            usages::ReadingDto,
            usages::CreateSnapshotRequest,
            // Bills & debts
            bills::WaterBillResponse,
            bills::CreateWaterBillRequest,
            bills::ExtraChargeDto,
            bills::GasBillResponse,
            bills::CreateGasBillRequest,
            bills::DebtEntryDto,
            bills::SetDebtRequest,
            // Allocations
            allocations::RunAllocationRequest,
            allocations::AllocationResponse,
            allocations::UnitAllocationDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Buildings", description = "Building CRUD operations"),
        (name = "Snapshots", description = "Per-unit water meter readings taken on one date"),
        (name = "Bills", description = "Water and gas bills with extra charge lines"),
        (name = "Debts", description = "Per-unit carried-over balances"),
        (name = "Allocations", description = "Water cost allocation runs and audit records"),
    ),
    info(
        title = "Watershare API",
        version = "1.0.0",
        description = "REST API for allocating shared water costs across building units",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    allocation: Arc<AllocationService>,
    db: DatabaseConnection,
) -> Router {
    let state = AppState {
        repos,
        allocation,
        db,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let building_routes = Router::new()
        .route(
            "/",
            get(buildings::handlers::list_buildings).post(buildings::handlers::create_building),
        )
        .route(
            "/{id}",
            get(buildings::handlers::get_building).delete(buildings::handlers::delete_building),
        )
        .route(
            "/{building_id}/snapshots",
            get(usages::handlers::list_snapshots).post(usages::handlers::create_snapshot),
        )
        .route(
            "/{building_id}/water-bills",
            get(bills::handlers::list_water_bills).post(bills::handlers::create_water_bill),
        )
        .route(
            "/{building_id}/gas-bills",
            get(bills::handlers::list_gas_bills).post(bills::handlers::create_gas_bill),
        )
        .route(
            "/{building_id}/debts",
            get(bills::handlers::list_debts).put(bills::handlers::set_debt),
        )
        .route(
            "/{building_id}/allocations",
            get(allocations::handlers::list_allocations).post(allocations::handlers::run_allocation),
        );

    let snapshot_routes = Router::new().route(
        "/{id}",
        get(usages::handlers::get_snapshot).delete(usages::handlers::delete_snapshot),
    );

    let water_bill_routes = Router::new().route("/{id}", get(bills::handlers::get_water_bill));

    let allocation_routes = Router::new().route("/{id}", get(allocations::handlers::get_allocation));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .nest("/api/v1/buildings", building_routes)
        .nest("/api/v1/snapshots", snapshot_routes)
        .nest("/api/v1/water-bills", water_bill_routes)
        .nest("/api/v1/allocations", allocation_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
