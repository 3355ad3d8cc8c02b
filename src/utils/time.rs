use chrono::{DateTime, NaiveDateTime, Utc};

/// Convierte un timestamp ISO-8601 en un texto relativo tipo "hace 3 días".
/// `now` se pasa explícito para poder testearlo.
pub fn time_ago(iso: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(iso) else {
        return iso.to_string();
    };

    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        return "hace un momento".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minuto", "minutos");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hora", "horas");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "día", "días");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "mes", "meses");
    }

    plural(months / 12, "año", "años")
}

fn plural(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("hace 1 {}", singular)
    } else {
        format!("hace {} {}", n, plural)
    }
}

/// El backend entrega RFC 3339; algunos registros antiguos vienen como
/// "YYYY-MM-DD HH:MM:SS" sin zona horaria (se asumen UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn momentos_recientes() {
        assert_eq!(time_ago("2026-08-07T11:59:40Z", now()), "hace un momento");
        assert_eq!(time_ago("2026-08-07T11:15:00Z", now()), "hace 45 minutos");
    }

    #[test]
    fn horas_y_dias() {
        assert_eq!(time_ago("2026-08-07T09:00:00Z", now()), "hace 3 horas");
        assert_eq!(time_ago("2026-08-04T12:00:00Z", now()), "hace 3 días");
        assert_eq!(time_ago("2026-08-06T12:00:00Z", now()), "hace 1 día");
    }

    #[test]
    fn formato_legacy_sin_zona() {
        assert_eq!(time_ago("2026-08-07 09:00:00", now()), "hace 3 horas");
    }

    #[test]
    fn timestamp_invalido_se_devuelve_tal_cual() {
        assert_eq!(time_ago("ayer", now()), "ayer");
    }
}
