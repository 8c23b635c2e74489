use cucumber::gherkin::Step;
use cucumber::when;
use serde_json::{json, Value};

use user_stubs::entities::UserFields;

use crate::support::world::TestWorld;

/// Reads a two-column `field | value` table into candidate fields.
fn fields_from_table(step: &Step) -> UserFields {
    let mut fields = UserFields::default();
    if let Some(table) = &step.table {
        for row in &table.rows {
            if let [key, value] = row.as_slice() {
                fields.insert(key, value);
            }
        }
    }
    fields
}

/// The outbound request mirrors what a real caller would send: a
/// numeric age, zero when the textual form does not parse.
fn request_body(fields: &UserFields) -> Value {
    json!({
        "firstName": fields.first_name,
        "lastName": fields.last_name,
        "email": fields.email,
        "age": fields
            .age
            .as_deref()
            .and_then(|age| age.parse::<i64>().ok())
            .unwrap_or(0),
    })
}

async fn submit_create(world: &mut TestWorld, fields: UserFields) {
    world
        .registry
        .stub_create_user(&fields)
        .await
        .expect("create stub should mount");

    let response = world
        .client()
        .post_json("/users", &request_body(&fields))
        .await
        .expect("create call should succeed");
    world.last_response = Some(response);
    world.current_fields = Some(fields);
}

async fn submit_update(world: &mut TestWorld, id: String, fields: UserFields) {
    world
        .registry
        .stub_update_user(&id, &fields)
        .await
        .expect("update stub should mount");

    let response = world
        .client()
        .put_json(&format!("/users/{id}"), &request_body(&fields))
        .await
        .expect("update call should succeed");
    world.current_user = Some(
        fields
            .materialize(id)
            .expect("submitted age should be numeric"),
    );
    world.current_fields = Some(fields);
    world.last_response = Some(response);
}

#[when("I create a user with details:")]
pub async fn create_user(world: &mut TestWorld, step: &Step) {
    submit_create(world, fields_from_table(step)).await;
}

#[when("I attempt to create a user with invalid data:")]
pub async fn attempt_create_invalid_user(world: &mut TestWorld, step: &Step) {
    submit_create(world, fields_from_table(step)).await;
}

#[when(expr = "I attempt to create a user with invalid email {string}")]
pub async fn attempt_create_with_invalid_email(world: &mut TestWorld, email: String) {
    let fields = UserFields {
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        email: Some(email),
        age: Some("25".to_string()),
    };
    submit_create(world, fields).await;
}

#[when(expr = "I request the user profile for ID {string}")]
pub async fn request_user_profile(world: &mut TestWorld, user_id: String) {
    let response = world
        .client()
        .get(&format!("/users/{user_id}"))
        .await
        .expect("read call should succeed");
    world.last_response = Some(response);
}

#[when("I update the user profile with details:")]
pub async fn update_user_with_details(world: &mut TestWorld, step: &Step) {
    let id = world
        .current_user
        .as_ref()
        .map(|user| user.id.clone())
        .unwrap_or_else(|| "test-123".to_string());
    submit_update(world, id, fields_from_table(step)).await;
}

#[when("I update the user profile with:")]
pub async fn update_current_user(world: &mut TestWorld, step: &Step) {
    let id = world
        .current_user
        .as_ref()
        .expect("a user should exist before updating")
        .id
        .clone();
    submit_update(world, id, fields_from_table(step)).await;
}

#[when(expr = "I delete the user with ID {string}")]
pub async fn delete_user(world: &mut TestWorld, user_id: String) {
    world
        .registry
        .stub_delete_user(&user_id)
        .await
        .expect("delete stub should mount");

    let response = world
        .client()
        .delete(&format!("/users/{user_id}"))
        .await
        .expect("delete call should succeed");
    world.last_response = Some(response);
}
