use crate::models::{
    AccountProfile, Calculations, Comments, DailyMetrics, SessionUpdate, SessionView,
};
use crate::report::{default_report_date, generate_report};
use chrono::NaiveDate;

/// Transient form state for one reporting session. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub report_date: String,
    pub metrics: DailyMetrics,
    pub comments: Comments,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            report_date: default_report_date(today),
            metrics: DailyMetrics::default(),
            comments: Comments::default(),
        }
    }

    pub fn update(&mut self, update: SessionUpdate) {
        if let Some(report_date) = update.report_date {
            self.report_date = report_date;
        }
        if let Some(metrics) = update.metrics {
            self.metrics = metrics;
        }
        if let Some(comments) = update.comments {
            self.comments = comments;
        }
    }

    pub fn calculations(&self) -> Calculations {
        Calculations::from_metrics(&self.metrics)
    }

    pub fn view(&self, include_comments: bool) -> SessionView {
        SessionView {
            report_date: self.report_date.clone(),
            metrics: self.metrics.clone(),
            comments: self.comments.clone(),
            calculations: self.calculations(),
            include_comments,
        }
    }

    pub fn report(&self, account: Option<&AccountProfile>, include_comments: bool) -> String {
        generate_report(
            &self.report_date,
            account,
            &self.metrics,
            &self.calculations(),
            include_comments.then_some(&self.comments),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn new_session_defaults_to_yesterday() {
        let session = Session::new(today());
        assert_eq!(session.report_date, "31/01/26");
        assert_eq!(session.metrics, DailyMetrics::default());
    }

    #[test]
    fn update_only_touches_provided_groups() {
        let mut session = Session::new(today());
        session.update(SessionUpdate {
            metrics: Some(DailyMetrics {
                visits: "200".into(),
                profile_clicks: "50".into(),
                ..DailyMetrics::default()
            }),
            ..SessionUpdate::default()
        });

        assert_eq!(session.report_date, "31/01/26");
        assert_eq!(session.calculations().visit_to_profile_conversion, 25.0);

        session.update(SessionUpdate {
            report_date: Some("15/01/26".into()),
            ..SessionUpdate::default()
        });
        assert_eq!(session.report_date, "15/01/26");
        assert_eq!(session.metrics.visits, "200");
    }

    #[test]
    fn report_respects_comments_flag() {
        let mut session = Session::new(today());
        session.comments.bien = "todo ok".into();

        assert!(session.report(None, true).contains("- Bien: todo ok"));
        assert!(!session.report(None, false).contains("Comentario"));
    }
}
