use wasm_bindgen::{JsCast, JsValue};

use crate::models::Creator;

/// Orden fijo de columnas del export
pub const CSV_HEADERS: [&str; 10] = [
    "Nombre",
    "Email",
    "Teléfono",
    "Edad",
    "Nacionalidad",
    "Ubicación",
    "Modalidad",
    "Plataformas",
    "Intereses",
    "Fecha de registro",
];

/// Serializa el listado visible a CSV. Todos los campos van entre
/// comillas; las comillas embebidas se escapan duplicándolas.
pub fn creators_to_csv(creators: &[Creator]) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(vec![]);

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| format!("Error escribiendo encabezado: {}", e))?;

    for creator in creators {
        let platforms = creator
            .social_networks
            .iter()
            .map(|s| s.platform.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let record = [
            creator.full_name.clone(),
            creator.email.clone(),
            creator.phone.clone().unwrap_or_default(),
            creator.age.to_string(),
            creator.nationality.clone(),
            creator.location.clone(),
            creator.modality.clone(),
            platforms,
            creator.interests.join(", "),
            creator.created_at.clone(),
        ];

        writer
            .write_record(&record)
            .map_err(|e| format!("Error escribiendo fila: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Error cerrando CSV: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV no es UTF-8: {}", e))
}

/// Descarga del lado cliente vía Blob + anchor; no requiere backend.
pub fn download_csv(filename: &str, content: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Sin objeto window")?;
    let document = window.document().ok_or("Sin document")?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "No se pudo crear el blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "No se pudo crear la URL del blob".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "No se pudo crear el anchor".to_string())?
        .dyn_into()
        .map_err(|_| "El elemento creado no es un anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("📄 CSV descargado: {} ({} bytes)", filename, content.len());
    Ok(())
}

/// Abre en una pestaña nueva el archivo que generó el servidor.
pub fn open_remote_export(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Sin objeto window")?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| "No se pudo abrir el export remoto".to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SocialNetwork;

    fn ana() -> Creator {
        Creator {
            id: 1,
            full_name: "Ana Ruiz".to_string(),
            email: "a@b.com".to_string(),
            phone: Some("+56 9 1234 5678".to_string()),
            age: 24,
            nationality: "chilena".to_string(),
            location: "santiago".to_string(),
            modality: "presencial".to_string(),
            interests: vec!["moda".to_string(), "belleza".to_string()],
            social_networks: vec![
                SocialNetwork {
                    platform: "instagram".to_string(),
                    url: None,
                },
                SocialNetwork {
                    platform: "tiktok".to_string(),
                    url: None,
                },
            ],
            is_favorite: false,
            created_at: "2026-07-12T14:30:00Z".to_string(),
        }
    }

    #[test]
    fn encabezado_es_la_primera_linea() {
        let csv = creators_to_csv(&[ana()]).unwrap();
        let first = csv.lines().next().unwrap();
        assert_eq!(
            first,
            "\"Nombre\",\"Email\",\"Teléfono\",\"Edad\",\"Nacionalidad\",\"Ubicación\",\"Modalidad\",\"Plataformas\",\"Intereses\",\"Fecha de registro\""
        );
    }

    #[test]
    fn fila_va_toda_entre_comillas() {
        let csv = creators_to_csv(&[ana()]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Ana Ruiz\",\"a@b.com\","));
        assert!(row.contains("\"instagram, tiktok\""));
        assert!(row.contains("\"moda, belleza\""));
    }

    #[test]
    fn comillas_embebidas_se_duplican() {
        let mut creator = ana();
        creator.full_name = "Ana \"La Jefa\" Ruiz".to_string();
        let csv = creators_to_csv(&[creator]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Ana \"\"La Jefa\"\" Ruiz\","));
    }

    #[test]
    fn comas_embebidas_no_rompen_columnas() {
        let mut creator = ana();
        creator.location = "santiago, providencia".to_string();
        let csv = creators_to_csv(&[creator]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"santiago, providencia\""));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), CSV_HEADERS.len());
        assert_eq!(&record[5], "santiago, providencia");
    }

    #[test]
    fn lista_vacia_produce_solo_encabezado() {
        let csv = creators_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
