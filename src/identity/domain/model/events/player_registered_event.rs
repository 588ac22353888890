use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PlayerRegisteredEvent {
    pub player_id: Uuid,
    pub email: String,
    pub nationality: String,
    pub registered_at: DateTime<Utc>,
}
