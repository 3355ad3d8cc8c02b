use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Contadores agregados que entrega `stats.php?type=dashboard`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_creators: u32,
    #[serde(default)]
    pub total_favorites: u32,
    #[serde(default)]
    pub new_this_month: u32,
    #[serde(default)]
    pub by_modality: HashMap<String, u32>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<DashboardStats>,
    #[serde(default)]
    pub message: Option<String>,
}
