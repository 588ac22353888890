use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct LoginAcceptedEvent {
    pub player_id: Uuid,
    pub email: String,
    pub remember_me: bool,
}
