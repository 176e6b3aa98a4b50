use rocket::serde::json::{serde_json, Json};
use rocket::serde::Serialize;
use rocket::{get, post, Responder, State};

use super::*;

/// Successful write response: the stored record plus a success flag.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SaveReply {
    pub success: bool,
    #[serde(flatten)]
    pub record: SaveRecord,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RequestFailure {
    pub error: String,
}

#[derive(Responder)]
pub enum SaveResponse {
    #[response(status = 200)]
    Stored(Json<SaveReply>),
    #[response(status = 400)]
    Invalid(Json<RequestFailure>),
}

/// Returns the current record from disk.
#[get("/save")]
pub async fn get_save(store: &State<SaveStore>) -> StoreResult<Json<SaveRecord>> {
    Ok(Json(store.load()?))
}

/// Alias kept for older builds of the game that still save under `/api/coins`.
#[get("/coins")]
pub async fn get_coins(store: &State<SaveStore>) -> StoreResult<Json<SaveRecord>> {
    get_save(store).await
}

/// Parses the body as a record, filling absent fields with the
/// defaults and dropping unknown ones, then replaces the file.
/// A body that is not valid JSON gets a 400 carrying the parse error.
#[post("/save", data = "<body>")]
pub async fn post_save(body: String, store: &State<SaveStore>) -> StoreResult<SaveResponse> {
    let record = match serde_json::from_str::<SaveRecord>(&body) {
        Ok(record) => record,
        Err(error) => {
            return Ok(SaveResponse::Invalid(Json(RequestFailure {
                error: error.to_string(),
            })));
        }
    };

    store.replace(&record)?;

    Ok(SaveResponse::Stored(Json(SaveReply {
        success: true,
        record,
    })))
}

/// Alias kept for older builds of the game that still save under `/api/coins`.
#[post("/coins", data = "<body>")]
pub async fn post_coins(body: String, store: &State<SaveStore>) -> StoreResult<SaveResponse> {
    post_save(body, store).await
}
