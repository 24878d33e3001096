use crate::models::{AccountProfile, Calculations, Comments, DailyMetrics};
use chrono::{Duration, NaiveDate};

/// `DD/MM/YY` for the day before `today`.
pub fn default_report_date(today: NaiveDate) -> String {
    let yesterday = today - Duration::days(1);
    yesterday.format("%d/%m/%y").to_string()
}

/// Renders the plain-text daily report. The comments block is only added when
/// `comments` is present.
pub fn generate_report(
    date: &str,
    account: Option<&AccountProfile>,
    metrics: &DailyMetrics,
    calculations: &Calculations,
    comments: Option<&Comments>,
) -> String {
    let (handler, link) = account
        .map(|acc| (acc.handler.as_str(), acc.link.as_str()))
        .unwrap_or_default();

    let mut report = format!(
        "Reporte {date}\n\
         \n\
         Cuenta: @{handler}\n\
         Enlace: {link}\n\
         \n\
         1. Videos subidos 24 h: {}\n\
         2. Videos editados listos total: {}\n\
         3. Ideas listas para editar total: {}\n\
         4. Visitas 24 h: {}\n\
         5. Clicks perfil 24 h: {}\n\
         6. Clicks enlace 24 h: {}\n\
         7. Conversión de Visitas a visitas al perfil 24 h: {:.2}%\n\
         8. Conversión de Clicks Perfil a toques en enlace externo 24 h: {:.2}%",
        metrics.videos_uploaded,
        metrics.videos_ready,
        metrics.ideas_ready,
        metrics.visits,
        metrics.profile_clicks,
        metrics.link_clicks,
        calculations.visit_to_profile_conversion,
        calculations.profile_to_link_conversion,
    );

    if let Some(comments) = comments {
        report.push_str(&format!(
            "\n\n🔎 Comentario:\n\
             - Bien: {}\n\
             - A mejorar: {}\n\
             - Bloqueos / peticiones: {}",
            comments.bien, comments.mejorar, comments.bloqueos
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> AccountProfile {
        AccountProfile {
            id: "1".into(),
            handler: "fit_team".into(),
            link: "https://www.instagram.com/fit_team".into(),
        }
    }

    fn sample_metrics() -> DailyMetrics {
        DailyMetrics {
            videos_uploaded: "2".into(),
            videos_ready: "5".into(),
            ideas_ready: "8".into(),
            visits: "200".into(),
            profile_clicks: "50".into(),
            link_clicks: "10".into(),
        }
    }

    fn numbered_lines(report: &str) -> Vec<&str> {
        report
            .lines()
            .filter(|line| {
                line.split_once(". ")
                    .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            })
            .collect()
    }

    #[test]
    fn report_has_header_and_eight_numbered_lines() {
        let metrics = sample_metrics();
        let calc = Calculations::from_metrics(&metrics);
        let report = generate_report("04/01/26", Some(&sample_account()), &metrics, &calc, None);

        assert!(report.starts_with("Reporte 04/01/26\n"));
        assert!(report.contains("Cuenta: @fit_team\n"));
        assert!(report.contains("Enlace: https://www.instagram.com/fit_team\n"));

        let lines = numbered_lines(&report);
        assert_eq!(lines.len(), 8);
        for (index, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", index + 1)));
        }
        assert_eq!(
            lines[6],
            "7. Conversión de Visitas a visitas al perfil 24 h: 25.00%"
        );
        assert_eq!(
            lines[7],
            "8. Conversión de Clicks Perfil a toques en enlace externo 24 h: 20.00%"
        );
        assert!(!report.contains("Comentario"));
    }

    #[test]
    fn percentages_always_have_two_decimals() {
        let metrics = DailyMetrics {
            visits: "3".into(),
            profile_clicks: "1".into(),
            link_clicks: "0".into(),
            ..DailyMetrics::default()
        };
        let calc = Calculations::from_metrics(&metrics);
        let report = generate_report("01/01/26", None, &metrics, &calc, None);

        assert!(report.contains("perfil 24 h: 33.33%"));
        assert!(report.contains("externo 24 h: 0.00%"));
    }

    #[test]
    fn comments_block_follows_metrics() {
        let metrics = sample_metrics();
        let calc = Calculations::from_metrics(&metrics);
        let comments = Comments {
            bien: "buen alcance".into(),
            mejorar: "".into(),
            bloqueos: "falta música".into(),
        };
        let report = generate_report(
            "04/01/26",
            Some(&sample_account()),
            &metrics,
            &calc,
            Some(&comments),
        );

        assert!(report.ends_with(
            "20.00%\n\n🔎 Comentario:\n- Bien: buen alcance\n- A mejorar: \n- Bloqueos / peticiones: falta música"
        ));
        assert_eq!(numbered_lines(&report).len(), 8);
    }

    #[test]
    fn missing_account_renders_blank_handle() {
        let metrics = DailyMetrics::default();
        let calc = Calculations::from_metrics(&metrics);
        let report = generate_report("", None, &metrics, &calc, None);
        assert!(report.contains("Cuenta: @\nEnlace: \n"));
        assert!(report.contains("1. Videos subidos 24 h: \n"));
    }

    #[test]
    fn default_date_is_yesterday() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(default_report_date(today), "31/12/25");

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(default_report_date(today), "09/03/26");
    }
}
