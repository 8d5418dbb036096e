use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::path::PathBuf;

async fn spa() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));        // = site/
    log::info!("serving on http://127.0.0.1:3000");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // ① top-level static assets (images, icons, videos, css)
            .service(Files::new("/assets", root.join("../assets")))
            // ② the SPA bundle built by Trunk
            .service(Files::new("/", "../dist").index_file("index.html"))
            // ③ fallback -> SPA for any client-routed path
            .default_service(web::get().to(spa))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await
}
