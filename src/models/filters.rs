use serde::{Deserialize, Serialize};

use crate::models::creator::Creator;

/// Estado de filtros de la vista de creadores. Vive solo en memoria;
/// `search` es la copia ya debounced, la única que llega a la query.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, Debug)]
pub struct CreatorFilters {
    pub search: String,
    pub interests: Vec<String>,
    pub platforms: Vec<String>,
    pub nationality: Option<String>,
    pub location: Option<String>,
    pub modality: Option<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

impl CreatorFilters {
    /// Alta/baja simétrica: si el valor ya está seleccionado se quita.
    /// El orden de inserción solo afecta al despliegue de badges.
    pub fn toggle_interest(&mut self, value: &str) {
        toggle_value(&mut self.interests, value);
    }

    pub fn toggle_platform(&mut self, value: &str) {
        toggle_value(&mut self.platforms, value);
    }

    /// Cadena vacía ⇒ filtro desactivado
    pub fn set_nationality(&mut self, value: &str) {
        self.nationality = non_empty(value);
    }

    pub fn set_location(&mut self, value: &str) {
        self.location = non_empty(value);
    }

    pub fn set_modality(&mut self, value: &str) {
        self.modality = non_empty(value);
    }

    /// Hay filtros activos si cualquier faceta/escalar está en uso,
    /// incluido el término de búsqueda.
    pub fn has_active(&self) -> bool {
        !self.search.is_empty()
            || !self.interests.is_empty()
            || !self.platforms.is_empty()
            || self.nationality.is_some()
            || self.location.is_some()
            || self.modality.is_some()
            || self.age_min.is_some()
            || self.age_max.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query limpia para `creators.php`: los campos vacíos no viajan.
    pub fn to_query(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];

        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if !self.interests.is_empty() {
            params.push(("interests", self.interests.join(",")));
        }
        if !self.platforms.is_empty() {
            params.push(("platforms", self.platforms.join(",")));
        }
        if let Some(nationality) = &self.nationality {
            params.push(("nationality", nationality.clone()));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        if let Some(modality) = &self.modality {
            params.push(("modality", modality.clone()));
        }
        if let Some(min) = self.age_min {
            params.push(("ageMin", min.to_string()));
        }
        if let Some(max) = self.age_max {
            params.push(("ageMax", max.to_string()));
        }

        params
    }

    /// Predicado puro para la ruta en memoria (fixtures / fallback).
    /// Todas las cláusulas son AND; dentro de una faceta multi-valor
    /// basta con que coincida una selección (OR).
    pub fn matches(&self, creator: &Creator) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let in_name = creator.full_name.to_lowercase().contains(&term);
            let in_email = creator.email.to_lowercase().contains(&term);
            if !in_name && !in_email {
                return false;
            }
        }

        if !self.interests.is_empty()
            && !self.interests.iter().any(|i| creator.interests.contains(i))
        {
            return false;
        }

        if !self.platforms.is_empty()
            && !self
                .platforms
                .iter()
                .any(|p| creator.social_networks.iter().any(|s| &s.platform == p))
        {
            return false;
        }

        if creator.age < self.age_min.unwrap_or(0) {
            return false;
        }
        if let Some(max) = self.age_max {
            if creator.age > max {
                return false;
            }
        }

        if let Some(nationality) = &self.nationality {
            if &creator.nationality != nationality {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &creator.location != location {
                return false;
            }
        }
        if let Some(modality) = &self.modality {
            if &creator.modality != modality {
                return false;
            }
        }

        true
    }
}

fn toggle_value(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(name: &str, age: u32, interests: &[&str]) -> Creator {
        Creator {
            id: 1,
            full_name: name.to_string(),
            email: format!("{}@test.cl", name.to_lowercase().replace(' ', ".")),
            phone: None,
            age,
            nationality: "chilena".to_string(),
            location: "santiago".to_string(),
            modality: "remoto".to_string(),
            interests: interests.iter().map(|i| i.to_string()).collect(),
            social_networks: vec![],
            is_favorite: false,
            created_at: "2026-01-15T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn filtro_por_interes_es_disyuntivo_dentro_de_la_faceta() {
        let creators = [
            creator("Ana", 25, &["moda"]),
            creator("Beto", 25, &["tecnologia"]),
            creator("Carla", 25, &["moda", "deporte"]),
        ];

        let mut filters = CreatorFilters::default();
        filters.toggle_interest("moda");

        let matched: Vec<&str> = creators
            .iter()
            .filter(|c| filters.matches(c))
            .map(|c| c.full_name.as_str())
            .collect();
        assert_eq!(matched, vec!["Ana", "Carla"]);
    }

    #[test]
    fn facetas_se_combinan_con_and() {
        let mut ana = creator("Ana", 25, &["moda"]);
        ana.social_networks = vec![crate::models::SocialNetwork {
            platform: "instagram".to_string(),
            url: None,
        }];

        let mut filters = CreatorFilters::default();
        filters.toggle_interest("moda");
        filters.toggle_platform("instagram");
        assert!(filters.matches(&ana));

        // La misma creadora deja de pasar si se exige una plataforma que no tiene
        filters.toggle_platform("instagram");
        filters.toggle_platform("tiktok");
        assert!(!filters.matches(&ana));
    }

    #[test]
    fn rango_de_edad_es_inclusivo() {
        let creators = [
            creator("Ana", 22, &[]),
            creator("Beto", 28, &[]),
            creator("Carla", 31, &[]),
        ];

        let filters = CreatorFilters {
            age_min: Some(25),
            age_max: Some(30),
            ..Default::default()
        };

        let matched: Vec<u32> = creators
            .iter()
            .filter(|c| filters.matches(c))
            .map(|c| c.age)
            .collect();
        assert_eq!(matched, vec![28]);
    }

    #[test]
    fn busqueda_ignora_mayusculas_y_revisa_nombre_y_email() {
        let ana = creator("Ana Ruiz", 25, &[]);

        let filters = CreatorFilters {
            search: "RUIZ".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&ana));

        let filters = CreatorFilters {
            search: "ana.ruiz@test".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&ana));

        let filters = CreatorFilters {
            search: "pedro".to_string(),
            ..Default::default()
        };
        assert!(!filters.matches(&ana));
    }

    #[test]
    fn toggle_es_simetrico() {
        let mut filters = CreatorFilters::default();
        filters.toggle_interest("moda");
        filters.toggle_interest("deporte");
        assert_eq!(filters.interests, vec!["moda", "deporte"]);

        filters.toggle_interest("moda");
        assert_eq!(filters.interests, vec!["deporte"]);
    }

    #[test]
    fn has_active_incluye_el_termino_de_busqueda() {
        let mut filters = CreatorFilters::default();
        assert!(!filters.has_active());

        filters.search = "ana".to_string();
        assert!(filters.has_active());

        filters.clear();
        assert!(!filters.has_active());

        filters.set_modality("remoto");
        assert!(filters.has_active());
    }

    #[test]
    fn la_query_omite_campos_vacios() {
        let filters = CreatorFilters {
            search: "ana".to_string(),
            interests: vec!["moda".to_string(), "deporte".to_string()],
            age_min: Some(25),
            ..Default::default()
        };

        let params = filters.to_query(2, 12);
        assert_eq!(
            params,
            vec![
                ("page", "2".to_string()),
                ("limit", "12".to_string()),
                ("search", "ana".to_string()),
                ("interests", "moda,deporte".to_string()),
                ("ageMin", "25".to_string()),
            ]
        );
    }

    #[test]
    fn scalars_vacios_desactivan_el_filtro() {
        let mut filters = CreatorFilters::default();
        filters.set_nationality("chilena");
        assert_eq!(filters.nationality.as_deref(), Some("chilena"));

        filters.set_nationality("");
        assert_eq!(filters.nationality, None);
        assert!(!filters.has_active());
    }
}
