use tileboard::infrastructure::config::Settings;
use tileboard::interfaces::http::start_server;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    info!(source = %settings.source_path.display(), "tileboard starting");
    start_server(settings)?.await
}
