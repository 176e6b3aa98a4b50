use std::path::PathBuf;

/// Startup configuration, read once from the environment.
pub struct ServerConfig {
    pub port: u16,
    /// Location of the persisted save record.
    pub data_file: PathBuf,
    /// Directory static files are served from.
    pub static_dir: PathBuf,
    /// Name of the game's HTML entry file inside `static_dir`.
    pub game_page: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = dotenv::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8000);
        let data_file = dotenv::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("playerdata.json"));
        let static_dir = dotenv::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let game_page =
            dotenv::var("GAME_PAGE").unwrap_or_else(|_| "shatterrealms_v5.html".to_owned());

        Self {
            port,
            data_file,
            static_dir,
            game_page,
        }
    }
}
