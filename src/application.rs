use std::{net::TcpListener, time::Instant};

use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;
use userfn_db::users::store::UserStore;
use userfn_shared::{
    error_chain_fmt,
    settings::{get_db_pool, Settings},
};

use crate::routes::{health_check, users};

///
/// Errors that keep the application from starting.
///
#[derive(thiserror::Error)]
pub enum ApplicationError {
    #[error("Failed to initialize the database pool")]
    PoolInitialization(#[source] sqlx::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl std::fmt::Debug for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, ApplicationError> {
        let started = Instant::now();
        let db_pool = get_db_pool(&settings.database)
            .await
            .map_err(ApplicationError::PoolInitialization)?;

        tracing::info!(elapsed = ?started.elapsed(), "Database pool created");

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, db_pool)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

///
/// Serve the users function from `store` on `listener`.
///
pub fn run<S: UserStore>(listener: TcpListener, store: S) -> Result<Server, std::io::Error> {
    let store = Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .route("/health_check", web::get().to(health_check))
            .default_service(web::to(users::invoke::<S>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
