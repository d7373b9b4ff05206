//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! PostgreSQL 연결 풀을 생성하여 저장소와 헬스체크에 주입하고,
//! 서버가 종료되면 풀을 닫습니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{
    CorsConfig, DatabaseConfig, Environment, LocaleConfig, RateLimitConfig, ServerConfig,
};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{PgUserRepository, UserRepository};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;
use user_service_backend::validation::Locale;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중... (환경: {:?})", Environment::current());

    // 데이터 스토어 초기화
    let database = initialize_database().await?;

    // 저장소 → 서비스 조립
    let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(database.pool().clone()));
    let user_service = web::Data::new(UserService::new(user_repo));
    let locale = LocaleConfig::locale();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다! (메시지 언어: {})", locale);

    // HTTP 서버 시작
    let result = start_http_server(database.clone(), user_service, locale).await;

    database.close().await;
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    database: Database,
    user_service: web::Data<UserService>,
    locale: Locale,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other(format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config)))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let database = web::Data::new(database);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 상태
            .app_data(user_service.clone())
            .app_data(database.clone())
            .app_data(web::Data::new(locale))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info,sqlx=warn")
///
/// ```bash
/// RUST_LOG=user_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info,sqlx=warn"));
}

/// PostgreSQL 연결 풀을 초기화하고 마이그레이션을 실행합니다
async fn initialize_database() -> std::io::Result<Database> {
    let config = DatabaseConfig::from_env();

    info!("📡 데이터베이스 연결 중... ({})", config.redacted_url());

    let database = Database::connect(&config).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    if config.run_migrations {
        database.migrate().await.map_err(|e| {
            error!("마이그레이션 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    }

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`로 지정합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
