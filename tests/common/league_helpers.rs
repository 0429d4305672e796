use reqwest::Client;
use serde_json::{json, Value};

/// Create a team through the admin API and return its id
pub async fn create_team(client: &Client, address: &str, name: &str) -> i64 {
    let response = client
        .post(&format!("{}/admin/teams", address))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create team.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    body["data"]["id"].as_i64().unwrap()
}

/// Register a player on `team_id` and return the player's id
pub async fn create_player(client: &Client, address: &str, team_id: i64, name: &str, jersey: i32) -> i64 {
    let response = client
        .post(&format!("{}/admin/players", address))
        .json(&json!({ "team_id": team_id, "name": name, "jersey_number": jersey }))
        .send()
        .await
        .expect("Failed to create player.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    body["data"]["id"].as_i64().unwrap()
}
