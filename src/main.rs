use actix_files as fs;
use actix_web::{
    get, http::Method, middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer,
    Result as ActixResult,
};
use academic_net::config::DEFAULT_API_BASE;
use academic_net::ClientConfig;
use clap::Parser;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Serves the Academic-Net browser client. The REST API itself lives elsewhere.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Root URL of the Academic-Net API, as seen from the browser
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Directory with stylesheets, icons and other static assets
    #[arg(long, default_value = "./static")]
    static_dir: String,

    /// Directory with the compiled wasm bundle
    #[arg(long, default_value = "./pkg")]
    pkg_dir: String,

    /// Enable debug mode in the client
    #[arg(long)]
    debug: bool,
}

#[derive(Clone)]
struct AppState {
    client_config: ClientConfig,
}

fn shell() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

// Serve the main HTML page
#[get("/")]
async fn index() -> ActixResult<HttpResponse> {
    Ok(shell())
}

// Runtime configuration for the client
#[get("/config")]
async fn client_config(data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(&data.client_config))
}

// Client-side routes (/files/42, /leaderboard, ...) all load the shell
async fn spa_fallback(req: HttpRequest) -> HttpResponse {
    let last_segment = req.path().rsplit('/').next().unwrap_or_default();
    if req.method() == Method::GET && !last_segment.contains('.') {
        shell()
    } else {
        HttpResponse::NotFound().body("Not Found")
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Academic-Net client host at http://{}", args.bind);
    log::info!("API base: {}", args.api_base);

    if args.debug {
        log::info!("Debug mode enabled");
    }

    let app_state = AppState {
        client_config: ClientConfig {
            api_base: args.api_base.clone(),
            debug_mode: args.debug,
        },
    };
    let static_dir = args.static_dir.clone();
    let pkg_dir = args.pkg_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .service(index)
            .service(client_config)
            // Compiled wasm bundle and its JS glue
            .service(fs::Files::new("/pkg", &pkg_dir))
            // Serve static files (CSS, icons)
            .service(fs::Files::new("/static", &static_dir))
            .default_service(web::route().to(spa_fallback))
    })
    .bind(&args.bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    fn state(debug_mode: bool) -> web::Data<AppState> {
        web::Data::new(AppState {
            client_config: ClientConfig {
                api_base: "https://api.academic.example".to_string(),
                debug_mode,
            },
        })
    }

    #[actix_web::test]
    async fn test_config_reflects_settings() {
        let app = test::init_service(
            App::new()
                .app_data(state(true))
                .service(client_config),
        )
        .await;

        let req = test::TestRequest::get().uri("/config").to_request();
        let config: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(config.api_base, "https://api.academic.example");
        assert!(config.debug_mode);
    }

    #[actix_web::test]
    async fn test_index_serves_shell() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, INDEX_HTML.as_bytes());
    }

    #[actix_web::test]
    async fn test_client_routes_fall_back_to_shell() {
        let app = test::init_service(
            App::new()
                .service(index)
                .default_service(web::route().to(spa_fallback)),
        )
        .await;

        let req = test::TestRequest::get().uri("/files/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/missing.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post().uri("/leaderboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
