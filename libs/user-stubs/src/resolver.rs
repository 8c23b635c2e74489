//! Decision table mapping a stubbed operation to the canned HTTP
//! response the mock endpoint should serve.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::entities::{User, UserFields};
use crate::errors_stub::StubError;
use crate::validation;

pub const SERVICE_NAME: &str = "user-service";

/// Status code plus optional JSON body. `body: None` means the response
/// is empty (the 204 delete case).
#[derive(Debug, Clone, PartialEq)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl CannedResponse {
    fn with_body(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Whether earlier scenario setup marked a read id as present.
#[derive(Debug, Clone)]
pub enum UserLookup {
    Present(User),
    Absent,
}

pub fn health() -> CannedResponse {
    CannedResponse::with_body(
        200,
        json!({ "status": "UP", "service": SERVICE_NAME }),
    )
}

/// Either echoes the candidate back under a fresh id (201) or reports
/// the first failing validation rule (400). Ids are generated anew on
/// every call and never collision-checked.
pub fn create_user(fields: &UserFields) -> Result<CannedResponse, StubError> {
    if let Some(message) = validation::validate(fields) {
        tracing::debug!(reason = message, "candidate user rejected");
        return Ok(CannedResponse::with_body(400, validation_error(message)));
    }
    let user = fields.materialize(Uuid::new_v4().to_string())?;
    tracing::debug!(id = %user.id, "candidate user accepted");
    Ok(CannedResponse::with_body(201, serde_json::to_value(&user)?))
}

pub fn read_user(id: &str, lookup: &UserLookup) -> Result<CannedResponse, StubError> {
    match lookup {
        UserLookup::Present(user) => {
            Ok(CannedResponse::with_body(200, serde_json::to_value(user)?))
        }
        UserLookup::Absent => Ok(CannedResponse::with_body(
            404,
            json!({
                "error": "User not found",
                "message": format!("User with ID {id} does not exist"),
            }),
        )),
    }
}

/// The updated record keeps the id it was addressed with.
pub fn update_user(id: &str, fields: &UserFields) -> Result<CannedResponse, StubError> {
    let user = fields.materialize(id)?;
    Ok(CannedResponse::with_body(200, serde_json::to_value(&user)?))
}

pub fn delete_user() -> CannedResponse {
    CannedResponse::empty(204)
}

fn validation_error(message: &str) -> Value {
    json!({ "error": "Validation Error", "message": message })
}
