use rocket::fs::{FileServer, NamedFile};
use rocket::*;

use config::ServerConfig;
use store::SaveStore;

mod config;
mod cors;
mod store;

#[launch]
fn rocket() -> _ {
    // Read the port and file locations from the environment
    dotenv::dotenv().ok();
    let config = ServerConfig::from_env();

    build(config)
}

/// Assembles the server: save endpoints under `/api`,
/// the game page at `/`, and static files for every other GET.
fn build(config: ServerConfig) -> Rocket<Build> {
    let store =
        SaveStore::open(config.data_file.clone()).expect("failed to initialize the save file");

    let figment = Config::figment().merge(("port", config.port));

    rocket::custom(figment)
        .mount("/", routes![index, cors::preflight])
        .mount(
            "/api",
            routes![
                store::requests::get_save,
                store::requests::get_coins,
                store::requests::post_save,
                store::requests::post_coins
            ],
        )
        .mount("/", FileServer::from(config.static_dir.clone()))
        .attach(cors::Cors)
        .manage(store)
        .manage(config)
}

/// Serves the game's HTML entry file.
#[get("/")]
async fn index(config: &State<ServerConfig>) -> Option<NamedFile> {
    NamedFile::open(config.static_dir.join(&config.game_page))
        .await
        .ok()
}
