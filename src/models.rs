use serde::{Deserialize, Serialize};

// POST /menu-items body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct NewMenuItem {
    pub name: String,
}

// POST /generate-item-details body
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub item_name: String,
    #[serde(default)]
    pub gpt_version: Option<String>, // model hint, "gpt-3.5" when absent
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MenuItemResponse {
    pub description: String,
    pub upsell: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MenuItemsResponse {
    pub items: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ItemAddedResponse {
    pub message: String,
    pub items: Vec<String>,
}
