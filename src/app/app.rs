use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::config::{AppConfig, MinioConfig, MongoConfig};
use crate::repository::mongo;
use crate::router::charge_router::charge_router;
use crate::router::contract_router::contract_router;
use crate::router::customer_router::customer_router;
use crate::router::facture_router::facture_router;
use crate::router::fleet_router::fleet_router;
use crate::router::incident_router::incident_router;
use crate::router::payment_router::payment_router;
use crate::router::reservation_router::reservation_router;
use crate::router::user_router::user_router;
use crate::router::vehicle_router::vehicle_router;
use crate::service::charge_service::ChargeService;
use crate::service::contract_service::ContractServiceImpl;
use crate::service::customer_service::CustomerService;
use crate::service::facture_service::FactureServiceImpl;
use crate::service::fleet_service::FleetService;
use crate::service::incident_service::IncidentService;
use crate::service::payment_service::PaymentServiceImpl;
use crate::service::reservation_service::ReservationService;
use crate::service::user_service::UserService;
use crate::service::vehicle_service::VehicleService;
use crate::util::minio::{MinioService, ObjectStore};

pub struct App {
    config: AppConfig,
    router: Router,
    pub contract_service: Arc<ContractServiceImpl>,
    pub customer_service: Arc<CustomerService>,
    pub vehicle_service: Arc<VehicleService>,
    pub facture_service: Arc<FactureServiceImpl>,
    pub payment_service: Arc<PaymentServiceImpl>,
    pub incident_service: Arc<IncidentService>,
    pub fleet_service: Arc<FleetService>,
    pub reservation_service: Arc<ReservationService>,
    pub charge_service: Arc<ChargeService>,
    pub user_service: Arc<UserService>,
}

impl App {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env()?;
        let minio_config = MinioConfig::from_env()?;

        let db = mongo::connect(&mongo_config).await?;

        let store: Arc<dyn ObjectStore> =
            Arc::new(MinioService::new(minio_config).await?);

        let contract_service = Arc::new(ContractServiceImpl::new(&db, store.clone()));
        let customer_service = Arc::new(CustomerService::new(&db, store.clone()));
        let vehicle_service = Arc::new(VehicleService::new(&db, store.clone()));
        let facture_service = Arc::new(FactureServiceImpl::new(&db));
        let payment_service = Arc::new(PaymentServiceImpl::new(&db, store.clone()));
        let incident_service = Arc::new(IncidentService::new(&db, store.clone()));
        let fleet_service = Arc::new(FleetService::new(&db, store.clone()));
        let reservation_service = Arc::new(ReservationService::new(&db));
        let charge_service = Arc::new(ChargeService::new(&db));
        let user_service = Arc::new(UserService::new(&db));

        let mut app = App {
            config,
            router: Router::new(),
            contract_service,
            customer_service,
            vehicle_service,
            facture_service,
            payment_service,
            incident_service,
            fleet_service,
            reservation_service,
            charge_service,
            user_service,
        };
        app.router = app.create_router();
        Ok(app)
    }

    fn create_router(&self) -> Router {
        let api = Router::new()
            .merge(contract_router(self.contract_service.clone()))
            .merge(customer_router(self.customer_service.clone()))
            .merge(vehicle_router(self.vehicle_service.clone()))
            .merge(facture_router(self.facture_service.clone()))
            .merge(payment_router(self.payment_service.clone()))
            .merge(incident_router(self.incident_service.clone()))
            .merge(fleet_router(self.fleet_service.clone()))
            .merge(reservation_router(self.reservation_service.clone()))
            .merge(charge_router(self.charge_service.clone()))
            .merge(user_router(self.user_service.clone()));

        Router::new()
            .nest("/api", api)
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = SocketAddr::new(self.config.host.parse()?, self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
