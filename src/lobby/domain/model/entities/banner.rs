use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Banner {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub description: String,
}
