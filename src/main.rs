//! 퍼블리셔 관리자 백엔드 메인 애플리케이션
//!
//! Actix-web 기반 HTTP 서버를 구동합니다. 저장소 백엔드(MongoDB + Redis 또는 메모리)를
//! 선택해 서비스를 조립하고, 관리자 온보딩 리뷰와 벤더 API를 제공합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use publisher_admin_backend::config::{ServerConfig, StorageBackend};
use publisher_admin_backend::core::AppState;
use publisher_admin_backend::routes::configure_all_routes;
use publisher_admin_backend::utils::display_terminal::print_startup_summary;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // RUST_LOG도 .env에서 읽으므로 파일을 먼저 로드하고, 결과는 로거 초기화 후 기록합니다
    let env_file = load_env_file();
    init_logging();
    report_env_file(env_file);

    info!("🚀 퍼블리셔 관리자 백엔드 시작중...");

    let backend = StorageBackend::current();
    let state = AppState::for_backend(backend).await.map_err(|e| {
        error!("❌ 저장소 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다! (storage: {})", backend);

    let result = start_http_server(state.clone()).await;

    // 종료 전에 큐에 남은 알림을 처리합니다
    state.dispatcher.flush().await;
    info!("👋 서버 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    print_startup_summary(&state.backend.to_string(), &bind_address, AppState::SERVICE_COUNT);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/vendors", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let state = state.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| state.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일 로드 결과
struct EnvFileLoad {
    profile: String,
    file_name: &'static str,
    result: dotenv::Result<std::path::PathBuf>,
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = env_file_name(&profile);
    let result = match file_name {
        ".env" => dotenv(),
        named => dotenv::from_filename(named),
    };

    EnvFileLoad {
        profile,
        file_name,
        result,
    }
}

fn env_file_name(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

fn report_env_file(load: EnvFileLoad) {
    info!("Current profile: {}", load.profile);

    match load.result {
        Ok(_) => info!("{} 파일 로드 됨", load.file_name),
        Err(e) => error!("{} 파일 로드 실패: {}", load.file_name, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 기본값은 `info,actix_web=debug`입니다.
///
/// ```bash
/// RUST_LOG=publisher_admin_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 관리자 프론트엔드와의 통신을 위한 CORS 설정
///
/// `X-Items-Count` 헤더는 목록 응답의 전체 개수이므로 브라우저에 노출합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-items-count")])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_name_per_profile() {
        assert_eq!(env_file_name("prod"), ".env.prod");
        assert_eq!(env_file_name("dev"), ".env.dev");
        assert_eq!(env_file_name("staging"), ".env");
    }

    #[test]
    fn test_missing_env_file_is_reported() {
        let load = EnvFileLoad {
            profile: "dev".to_string(),
            file_name: ".env.dev",
            result: dotenv::from_filename("missing.env.for-test"),
        };
        assert!(load.result.is_err());

        let _ = env_logger::builder().is_test(true).try_init();
        report_env_file(load);
    }
}
