pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::matching;
pub use modules::mentor;
pub use modules::user;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::service::{BasicPasswordPolicy, LoginUserService, SignupUserService};
use crate::auth::application::AuthUseCases;

use crate::matching::adapter::outgoing::match_request_query_postgres::MatchRequestQueryPostgres;
use crate::matching::adapter::outgoing::match_request_store_postgres::MatchRequestStorePostgres;
use crate::matching::application::service::{
    AcceptMatchRequestService, CancelMatchRequestService, CreateMatchRequestService,
    ListIncomingRequestsService, ListOutgoingRequestsService, RejectMatchRequestService,
};
use crate::matching::application::MatchingUseCases;

use crate::mentor::adapter::outgoing::mentor_query_postgres::MentorQueryPostgres;
use crate::mentor::application::service::ListMentorsService;
use crate::mentor::application::MentorUseCases;

use crate::user::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::user::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::user::application::service::{
    GetAvatarService, GetMyProfileService, UpdateProfileService,
};
use crate::user::application::UserUseCases;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::custom_json_config;

use actix_web::{get, http::header, web, App, HttpResponse, HttpServer, Responder};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub user: UserUseCases,
    pub mentor: MentorUseCases,
    pub matching: MatchingUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::other(e.to_string())
    })?;

    let server_url = config.server.bind_address();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(config.database.acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        std::io::Error::other(e.to_string())
    })?;

    if config.database.run_migrations {
        Migrator::up(&conn, None).await.map_err(|e| {
            error!(error = %e, "Migrations failed");
            std::io::Error::other(e.to_string())
        })?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new(&config.argon2));

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        signup: Arc::new(SignupUserService::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&password_hasher),
            Arc::new(BasicPasswordPolicy),
        )),
        login: Arc::new(LoginUserService::new(
            user_query,
            password_hasher,
            Arc::clone(&token_provider_arc),
        )),
    };

    // Profiles
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let user = UserUseCases {
        get_me: Arc::new(GetMyProfileService::new(profile_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(
            ProfileRepositoryPostgres::new(Arc::clone(&db_arc)),
            config.avatar.clone(),
        )),
        get_avatar: Arc::new(GetAvatarService::new(profile_query, config.avatar.clone())),
    };

    // Directory
    let mentor = MentorUseCases {
        list: Arc::new(ListMentorsService::new(
            MentorQueryPostgres::new(Arc::clone(&db_arc)),
            config.directory,
        )),
    };

    // Match requests
    let store = MatchRequestStorePostgres::new(Arc::clone(&db_arc));
    let match_query = MatchRequestQueryPostgres::new(Arc::clone(&db_arc));
    let matching = MatchingUseCases {
        create: Arc::new(CreateMatchRequestService::new(store.clone())),
        list_incoming: Arc::new(ListIncomingRequestsService::new(match_query.clone())),
        list_outgoing: Arc::new(ListOutgoingRequestsService::new(match_query)),
        accept: Arc::new(AcceptMatchRequestService::new(store.clone())),
        reject: Arc::new(RejectMatchRequestService::new(store.clone())),
        cancel: Arc::new(CancelMatchRequestService::new(store)),
    };

    let state = AppState {
        auth,
        user,
        mentor,
        matching,
    };

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Sends browsers hitting the root to the API docs.
#[get("/")]
async fn docs_redirect() -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/swagger-ui/"))
        .finish()
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(docs_redirect);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    // Profiles
    cfg.service(crate::user::adapter::incoming::web::routes::get_me_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_avatar_handler);
    // Directory
    cfg.service(crate::mentor::adapter::incoming::web::routes::list_mentors_handler);
    // Match requests
    cfg.service(crate::matching::adapter::incoming::web::routes::create_match_request_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::list_incoming_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::list_outgoing_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::accept_match_request_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::reject_match_request_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::cancel_match_request_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
