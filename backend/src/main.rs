use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use roster_server::{services, AppState, Config, StudentStore};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Serves the UI assets; unknown paths get `index.html` so client-side routes resolve.
fn static_files(dir: PathBuf) -> Files {
    let index = dir.join("index.html");
    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    let state = AppState::new(StudentStore::open(&config.data_file));

    let static_dir = if config.static_dir.is_dir() {
        Some(config.static_dir.clone())
    } else {
        warn!(
            "static directory {} not found, serving the API only",
            config.static_dir.display()
        );
        None
    };

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    let body_limit = config.json_limit;
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .configure(services::configure(state.clone(), body_limit));
        match &static_dir {
            Some(dir) => app.service(static_files(dir.clone())),
            None => app,
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
