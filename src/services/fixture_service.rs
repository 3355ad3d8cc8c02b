// ============================================================================
// FIXTURE DATA SOURCE - modo demo sin backend
// ============================================================================

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};

use crate::models::{Creator, CreatorFilters, DashboardStats, SocialNetwork};
use crate::services::api_client::ApiError;
use crate::services::creator_service::{
    CreatorDataSource, CreatorPage, CreatorQuery, FavoriteOutcome,
};

pub struct FixtureCreators {
    creators: RefCell<Vec<Creator>>,
}

impl FixtureCreators {
    pub fn from_creators(creators: Vec<Creator>) -> Self {
        Self {
            creators: RefCell::new(creators),
        }
    }

    pub fn with_demo_data() -> Self {
        Self::from_creators(demo_creators())
    }
}

#[async_trait(?Send)]
impl CreatorDataSource for FixtureCreators {
    async fn fetch_page(&self, query: &CreatorQuery) -> Result<CreatorPage, ApiError> {
        let matched: Vec<Creator> = self
            .creators
            .borrow()
            .iter()
            .filter(|c| query.filters.matches(c))
            .cloned()
            .collect();

        Ok(page_of(matched, query.page, query.limit))
    }

    async fn toggle_favorite(
        &self,
        creator_id: u32,
        _current: bool,
    ) -> Result<FavoriteOutcome, ApiError> {
        let mut creators = self.creators.borrow_mut();
        let creator = creators
            .iter_mut()
            .find(|c| c.id == creator_id)
            .ok_or_else(|| ApiError::Rejected("Creador no encontrado".to_string()))?;

        // El fixture emula la autoridad del servidor: ignora el estado
        // que el cliente cree tener y conmuta el suyo propio.
        creator.is_favorite = !creator.is_favorite;
        let action = if creator.is_favorite {
            "added"
        } else {
            "removed"
        };

        Ok(FavoriteOutcome {
            action: action.to_string(),
            is_favorite: creator.is_favorite,
        })
    }

    async fn remove_favorite(&self, creator_id: u32) -> Result<(), ApiError> {
        let mut creators = self.creators.borrow_mut();
        let creator = creators
            .iter_mut()
            .find(|c| c.id == creator_id)
            .ok_or_else(|| ApiError::Rejected("Creador no encontrado".to_string()))?;
        creator.is_favorite = false;
        Ok(())
    }

    async fn favorites(&self) -> Result<Vec<Creator>, ApiError> {
        Ok(self
            .creators
            .borrow()
            .iter()
            .filter(|c| c.is_favorite)
            .cloned()
            .collect())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        Ok(compute_stats(&self.creators.borrow(), Utc::now()))
    }

    async fn export_url(&self, _filters: &CreatorFilters) -> Option<String> {
        None
    }
}

/// Paginación en memoria con el mismo contrato que el servidor:
/// `has_more ⟺ page < pages`.
fn page_of(matched: Vec<Creator>, page: u32, limit: u32) -> CreatorPage {
    let total = matched.len() as u32;
    let limit = limit.max(1);
    let pages = total.div_ceil(limit).max(1);

    let start = page.saturating_sub(1).saturating_mul(limit) as usize;
    let creators: Vec<Creator> = matched
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    CreatorPage {
        creators,
        total,
        page,
        has_more: page < pages,
    }
}

fn compute_stats(creators: &[Creator], now: DateTime<Utc>) -> DashboardStats {
    let mut stats = DashboardStats {
        total_creators: creators.len() as u32,
        ..Default::default()
    };

    for creator in creators {
        if creator.is_favorite {
            stats.total_favorites += 1;
        }
        if let Ok(created) = DateTime::parse_from_rfc3339(&creator.created_at) {
            let created = created.with_timezone(&Utc);
            if created.year() == now.year() && created.month() == now.month() {
                stats.new_this_month += 1;
            }
        }
        *stats.by_modality.entry(creator.modality.clone()).or_insert(0) += 1;
    }

    stats
}

fn demo_creators() -> Vec<Creator> {
    let raw: &[(u32, &str, &str, u32, &str, &str, &str, &[&str], &[&str], &str)] = &[
        (
            1,
            "Ana Ruiz",
            "ana.ruiz@mail.cl",
            24,
            "chilena",
            "santiago",
            "presencial",
            &["moda", "belleza"],
            &["instagram", "tiktok"],
            "2026-07-12T14:30:00Z",
        ),
        (
            2,
            "Benjamín Soto",
            "benja.soto@mail.cl",
            29,
            "chilena",
            "valparaiso",
            "remoto",
            &["tecnologia", "gaming"],
            &["youtube", "twitch"],
            "2026-06-02T09:15:00Z",
        ),
        (
            3,
            "Camila Fuentes",
            "cami.fuentes@mail.cl",
            31,
            "chilena",
            "concepcion",
            "hibrido",
            &["gastronomia", "viajes"],
            &["instagram", "youtube"],
            "2026-05-21T18:00:00Z",
        ),
        (
            4,
            "Diego Paredes",
            "diego.paredes@mail.cl",
            22,
            "chilena",
            "santiago",
            "presencial",
            &["deporte", "fitness"],
            &["instagram"],
            "2026-08-01T11:45:00Z",
        ),
        (
            5,
            "Elena Petrova",
            "elena.petrova@mail.com",
            27,
            "extranjera",
            "vina-del-mar",
            "remoto",
            &["viajes", "moda"],
            &["instagram", "tiktok", "youtube"],
            "2026-07-28T08:20:00Z",
        ),
        (
            6,
            "Felipe Araya",
            "felipe.araya@mail.cl",
            35,
            "chilena",
            "la-serena",
            "hibrido",
            &["gastronomia"],
            &["facebook", "instagram"],
            "2026-03-14T16:10:00Z",
        ),
        (
            7,
            "Gabriela Núñez",
            "gabi.nunez@mail.cl",
            19,
            "chilena",
            "santiago",
            "remoto",
            &["belleza", "moda", "fitness"],
            &["tiktok"],
            "2026-08-05T20:05:00Z",
        ),
        (
            8,
            "Hugo Martínez",
            "hugo.martinez@mail.com",
            42,
            "extranjera",
            "antofagasta",
            "presencial",
            &["tecnologia"],
            &["youtube", "facebook"],
            "2026-01-30T12:00:00Z",
        ),
    ];

    raw.iter()
        .map(
            |(id, name, email, age, nationality, location, modality, interests, platforms, created)| {
                Creator {
                    id: *id,
                    full_name: name.to_string(),
                    email: email.to_string(),
                    phone: Some(format!("+56 9 {:04} {:04}", 1000 + id * 7, 2000 + id * 13)),
                    age: *age,
                    nationality: nationality.to_string(),
                    location: location.to_string(),
                    modality: modality.to_string(),
                    interests: interests.iter().map(|i| i.to_string()).collect(),
                    social_networks: platforms
                        .iter()
                        .map(|p| SocialNetwork {
                            platform: p.to_string(),
                            url: Some(format!("https://{}.com/{}", p, id)),
                        })
                        .collect(),
                    is_favorite: false,
                    created_at: created.to_string(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn creators(n: u32) -> Vec<Creator> {
        (1..=n)
            .map(|id| Creator {
                id,
                full_name: format!("Creador {}", id),
                email: format!("c{}@test.cl", id),
                phone: None,
                age: 20 + id,
                nationality: "chilena".to_string(),
                location: "santiago".to_string(),
                modality: if id % 2 == 0 { "remoto" } else { "presencial" }.to_string(),
                interests: vec![],
                social_networks: vec![],
                is_favorite: id % 3 == 0,
                created_at: "2026-08-03T10:00:00Z".to_string(),
            })
            .collect()
    }

    #[test]
    fn pagina_intermedia_reporta_has_more() {
        let page = page_of(creators(25), 1, 10);
        assert_eq!(page.creators.len(), 10);
        assert_eq!(page.total, 25);
        assert!(page.has_more);
    }

    #[test]
    fn ultima_pagina_corta_has_more() {
        let page = page_of(creators(25), 3, 10);
        assert_eq!(page.creators.len(), 5);
        assert!(!page.has_more);
    }

    #[test]
    fn lista_vacia_produce_pagina_vacia() {
        let page = page_of(vec![], 1, 10);
        assert!(page.creators.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn stats_cuentan_favoritos_y_mes_actual() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let stats = compute_stats(&creators(6), now);

        assert_eq!(stats.total_creators, 6);
        assert_eq!(stats.total_favorites, 2); // ids 3 y 6
        assert_eq!(stats.new_this_month, 6);
        assert_eq!(stats.by_modality.get("remoto"), Some(&3));
        assert_eq!(stats.by_modality.get("presencial"), Some(&3));
    }

    #[test]
    fn stats_fuera_de_mes_no_cuentan_como_nuevas() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        let stats = compute_stats(&creators(4), now);
        assert_eq!(stats.new_this_month, 0);
    }

    #[test]
    fn toggle_devuelve_el_valor_que_confirma_la_fuente() {
        let source = FixtureCreators::from_creators(creators(3));

        let outcome =
            futures::executor::block_on(source.toggle_favorite(1, false)).unwrap();
        assert!(outcome.is_favorite);
        assert_eq!(outcome.action, "added");

        // El estado que el cliente cree tener no importa: la fuente
        // conmuta el suyo propio
        let outcome =
            futures::executor::block_on(source.toggle_favorite(1, false)).unwrap();
        assert!(!outcome.is_favorite);
        assert_eq!(outcome.action, "removed");
    }

    #[test]
    fn fetch_page_aplica_el_predicado_de_filtros() {
        use crate::models::CreatorFilters;
        use crate::services::creator_service::CreatorQuery;

        let source = FixtureCreators::from_creators(creators(6));
        let mut filters = CreatorFilters::default();
        filters.set_modality("remoto");

        let page = futures::executor::block_on(source.fetch_page(&CreatorQuery {
            filters,
            page: 1,
            limit: 10,
        }))
        .unwrap();

        assert_eq!(page.total, 3); // ids pares
        assert!(page.creators.iter().all(|c| c.modality == "remoto"));
        assert!(!page.has_more);
    }

    #[test]
    fn remove_favorite_apaga_el_flag() {
        let source = FixtureCreators::from_creators(creators(3));

        futures::executor::block_on(source.remove_favorite(3)).unwrap();
        let favorites = futures::executor::block_on(source.favorites()).unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn demo_data_es_consistente() {
        let creators = demo_creators();
        assert_eq!(creators.len(), 8);

        let mut ids: Vec<u32> = creators.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(creators.iter().all(|c| (18..=80).contains(&c.age)));
        assert!(creators.iter().all(|c| !c.social_networks.is_empty()));
    }
}
