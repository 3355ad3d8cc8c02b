use serde::{Deserialize, Serialize};

/// Perfil de creador de contenido. Solo lectura desde esta app,
/// salvo `is_favorite` (el servidor es la fuente de verdad).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Creator {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub age: u32,
    /// Convención del backend: "chilena" / "extranjera"
    pub nationality: String,
    /// Slug de ciudad/región, texto libre
    pub location: String,
    /// "presencial" | "remoto" | "hibrido"
    pub modality: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub social_networks: Vec<SocialNetwork>,
    #[serde(default)]
    pub is_favorite: bool,
    /// ISO-8601, inmutable
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SocialNetwork {
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub total: u32,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CreatorsData {
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub total: u32,
    /// Si el servidor la omite, no hay más páginas que pedir
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CreatorsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<CreatorsData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct FavoriteData {
    /// "added" | "removed"
    pub action: String,
    pub is_favorite: bool,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct FavoriteResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<FavoriteData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ExportData {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ExportResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ExportData>,
}
