// ============================================================================
// CREATORS DATA SOURCE
// ============================================================================
// Estrategia inyectada al arrancar: la implementación remota (API) o la
// de fixtures en memoria (modo demo). Nada de branching por llamada.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;

use crate::models::creator::{ExportResponse, FavoriteResponse};
use crate::models::{Creator, CreatorFilters, CreatorsResponse, DashboardStats, Pagination, StatsResponse};
use crate::services::api_client::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Debug)]
pub struct CreatorQuery {
    pub filters: CreatorFilters,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CreatorPage {
    pub creators: Vec<Creator>,
    pub total: u32,
    pub page: u32,
    pub has_more: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FavoriteOutcome {
    /// "added" | "removed", según reporta el servidor
    pub action: String,
    pub is_favorite: bool,
}

/// `has_more` sale estrictamente de los metadatos del servidor.
/// Sin metadatos no se especula: no hay más páginas.
pub fn has_more_from(pagination: Option<&Pagination>) -> bool {
    pagination.map(|p| p.page < p.pages).unwrap_or(false)
}

#[async_trait(?Send)]
pub trait CreatorDataSource {
    async fn fetch_page(&self, query: &CreatorQuery) -> Result<CreatorPage, ApiError>;

    /// El servidor es autoritativo sobre el booleano resultante.
    async fn toggle_favorite(
        &self,
        creator_id: u32,
        current: bool,
    ) -> Result<FavoriteOutcome, ApiError>;

    async fn remove_favorite(&self, creator_id: u32) -> Result<(), ApiError>;

    async fn favorites(&self) -> Result<Vec<Creator>, ApiError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;

    /// Export generado por el servidor, si está disponible.
    /// `None` ⇒ el caller usa la ruta CSV del lado cliente.
    async fn export_url(&self, filters: &CreatorFilters) -> Option<String>;
}

pub struct RemoteCreators {
    api: Rc<ApiClient>,
}

impl RemoteCreators {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl CreatorDataSource for RemoteCreators {
    async fn fetch_page(&self, query: &CreatorQuery) -> Result<CreatorPage, ApiError> {
        let params = query.filters.to_query(query.page, query.limit);

        log::info!("📋 Pidiendo creadores: página {}", query.page);

        let response: CreatorsResponse = self.api.get("creators.php", &params).await?;
        if !response.success {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Error desconocido".to_string()),
            ));
        }

        let data = response
            .data
            .ok_or_else(|| ApiError::Parse("Respuesta sin datos".to_string()))?;

        let has_more = has_more_from(data.pagination.as_ref());
        let page = data
            .pagination
            .as_ref()
            .map(|p| p.page)
            .unwrap_or(query.page);
        let total = data
            .pagination
            .as_ref()
            .map(|p| p.total)
            .unwrap_or(data.total);

        log::info!(
            "✅ {} creadores recibidos (total {}, has_more={})",
            data.creators.len(),
            total,
            has_more
        );

        Ok(CreatorPage {
            creators: data.creators,
            total,
            page,
            has_more,
        })
    }

    async fn toggle_favorite(
        &self,
        creator_id: u32,
        current: bool,
    ) -> Result<FavoriteOutcome, ApiError> {
        log::info!("⭐ Toggle favorito {} (local={})", creator_id, current);

        let body = serde_json::json!({ "creator_id": creator_id });
        let response: FavoriteResponse = self.api.post("favorites.php", &[], &body).await?;

        if !response.success {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "No se pudo actualizar el favorito".to_string()),
            ));
        }

        let data = response
            .data
            .ok_or_else(|| ApiError::Parse("Respuesta de favorito sin datos".to_string()))?;

        Ok(FavoriteOutcome {
            action: data.action,
            is_favorite: data.is_favorite,
        })
    }

    async fn remove_favorite(&self, creator_id: u32) -> Result<(), ApiError> {
        let query = [("creator_id", creator_id.to_string())];
        let response: FavoriteResponse = self.api.delete("favorites.php", &query).await?;
        if !response.success {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "No se pudo quitar el favorito".to_string()),
            ));
        }
        Ok(())
    }

    async fn favorites(&self) -> Result<Vec<Creator>, ApiError> {
        let response: CreatorsResponse = self.api.get("favorites.php", &[]).await?;
        if !response.success {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "No se pudo listar favoritos".to_string()),
            ));
        }
        Ok(response.data.map(|d| d.creators).unwrap_or_default())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let query = [("type", "dashboard".to_string())];
        let response: StatsResponse = self.api.get("stats.php", &query).await?;
        if !response.success {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "No se pudieron cargar las estadísticas".to_string()),
            ));
        }
        Ok(response.data.unwrap_or_default())
    }

    async fn export_url(&self, filters: &CreatorFilters) -> Option<String> {
        // El export no está paginado: viajan solo los filtros
        let mut params: Vec<(&str, String)> = filters
            .to_query(1, 1)
            .into_iter()
            .filter(|(k, _)| *k != "page" && *k != "limit")
            .collect();
        params.push(("export", "csv".to_string()));

        match self.api.get::<ExportResponse>("creators.php", &params).await {
            Ok(response) if response.success => response.data.and_then(|d| d.url),
            Ok(_) => None,
            Err(e) => {
                log::warn!("⚠️ Export remoto no disponible, se usa CSV local: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_sigue_estrictamente_los_metadatos() {
        let meta = Pagination {
            page: 1,
            pages: 3,
            total: 30,
        };
        assert!(has_more_from(Some(&meta)));

        let last = Pagination {
            page: 3,
            pages: 3,
            total: 30,
        };
        assert!(!has_more_from(Some(&last)));
    }

    #[test]
    fn total_no_se_segunda_adivina() {
        // Aunque total sugiera registros pendientes, page == pages manda
        let meta = Pagination {
            page: 2,
            pages: 2,
            total: 999,
        };
        assert!(!has_more_from(Some(&meta)));
    }

    #[test]
    fn sin_metadatos_no_hay_mas_paginas() {
        assert!(!has_more_from(None));
    }
}
