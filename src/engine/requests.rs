//! Form validation and the views built from one-off request results.

use eframe::egui::Color32;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ANIMATION;
use crate::domain::{
    BookingRequest, GraphModel, PathResult, ProcessedBooking, RouteQuery, RouteQueryResult,
    StationId,
};
use crate::ui::config::UI_TEXT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select valid and different departure/destination stations!")]
    MissingEndpoint,
    #[error("Please select valid and different departure/destination stations!")]
    SameEndpoints,
    #[error("Station {0} is not on the map")]
    UnknownStation(StationId),
    #[error("Please enter the passenger name")]
    MissingName,
}

fn check_endpoints(
    from: Option<StationId>,
    to: Option<StationId>,
    graph: &GraphModel,
) -> Result<(StationId, StationId), ValidationError> {
    let (Some(from), Some(to)) = (from, to) else {
        return Err(ValidationError::MissingEndpoint);
    };
    if from == to {
        return Err(ValidationError::SameEndpoints);
    }
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(ValidationError::UnknownStation(id));
        }
    }
    Ok((from, to))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub from: Option<StationId>,
    pub to: Option<StationId>,
}

impl BookingForm {
    pub fn validate(&self, graph: &GraphModel) -> Result<BookingRequest, ValidationError> {
        let (from, to) = check_endpoints(self.from, self.to, graph)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(BookingRequest {
            name: name.to_string(),
            from,
            to,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteForm {
    pub from: Option<StationId>,
    pub to: Option<StationId>,
}

impl RouteForm {
    pub fn validate(&self, graph: &GraphModel) -> Result<RouteQuery, ValidationError> {
        let (from, to) = check_endpoints(self.from, self.to, graph)?;
        Ok(RouteQuery { from, to })
    }
}

/// Station names joined with arrows
pub fn path_label(path: &[StationId], graph: &GraphModel) -> String {
    path.iter().map(|&id| graph.station_label(id)).join(" → ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Fastest,
    Cheapest,
}

impl RouteKind {
    pub fn color(self) -> Color32 {
        match self {
            RouteKind::Fastest => ANIMATION.paths.fastest,
            RouteKind::Cheapest => ANIMATION.paths.cheapest,
        }
    }

    fn title(self) -> &'static str {
        match self {
            RouteKind::Fastest => UI_TEXT.fastest_title,
            RouteKind::Cheapest => UI_TEXT.cheapest_title,
        }
    }

    pub fn metric_label(self, metric: f64) -> String {
        match self {
            RouteKind::Fastest => format!(
                "{} {} {}",
                UI_TEXT.total_time_prefix, metric, UI_TEXT.minutes_suffix
            ),
            RouteKind::Cheapest => format!("{} ₹{}", UI_TEXT.total_cost_prefix, metric),
        }
    }
}

/// One clickable route result. Clicking replays the animation in `kind`'s colour.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResultEntry {
    pub kind: RouteKind,
    pub title: &'static str,
    pub path: Vec<StationId>,
    pub path_label: String,
    pub metric_label: String,
    pub reachable: bool,
}

impl RouteResultEntry {
    fn new(kind: RouteKind, result: &PathResult, graph: &GraphModel) -> Self {
        let reachable = result.is_reachable();
        let (path_label, metric_label) = if reachable {
            (path_label(&result.path, graph), kind.metric_label(result.metric))
        } else {
            (UI_TEXT.no_route_available.to_string(), String::new())
        };
        Self {
            kind,
            title: kind.title(),
            path: result.path.clone(),
            path_label,
            metric_label,
            reachable,
        }
    }

    pub fn color(&self) -> Color32 {
        self.kind.color()
    }
}

/// Content of the route result region: two entries, or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResultView {
    Results(Vec<RouteResultEntry>),
    Error(String),
}

impl RouteResultView {
    pub fn from_result(result: &RouteQueryResult, graph: &GraphModel) -> Self {
        RouteResultView::Results(vec![
            RouteResultEntry::new(RouteKind::Fastest, &result.fastest, graph),
            RouteResultEntry::new(RouteKind::Cheapest, &result.cheapest, graph),
        ])
    }

    pub fn entries(&self) -> &[RouteResultEntry] {
        match self {
            RouteResultView::Results(entries) => entries,
            RouteResultView::Error(_) => &[],
        }
    }

    pub fn entry(&self, kind: RouteKind) -> Option<&RouteResultEntry> {
        self.entries().iter().find(|e| e.kind == kind)
    }
}

/// Text of the confirmation shown after the admin processes the queue head
pub fn confirmation_text(booking: &ProcessedBooking, graph: &GraphModel) -> String {
    format!(
        "{}\n\n{} {}\n{} {}\n\n{} ({} {}):\n{}\n\n{} (₹{}):\n{}",
        UI_TEXT.confirmed_title,
        UI_TEXT.booking_id_label,
        booking.id,
        UI_TEXT.passenger_label,
        booking.name,
        UI_TEXT.fastest_title_short,
        booking.fastest.metric,
        UI_TEXT.minutes_suffix,
        path_label(&booking.fastest.path, graph),
        UI_TEXT.cheapest_title_short,
        booking.cheapest.metric,
        path_label(&booking.cheapest.path, graph),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_form_rejects_missing_or_identical_endpoints() {
        let graph = GraphModel::default_network();
        let mut form = BookingForm {
            name: "Ravi".to_string(),
            from: Some(2),
            to: None,
        };
        assert_eq!(form.validate(&graph), Err(ValidationError::MissingEndpoint));

        form.to = Some(2);
        assert_eq!(form.validate(&graph), Err(ValidationError::SameEndpoints));

        form.to = Some(20);
        assert_eq!(form.validate(&graph), Err(ValidationError::UnknownStation(20)));
    }

    #[test]
    fn booking_form_trims_name() {
        let graph = GraphModel::default_network();
        let form = BookingForm {
            name: "  Ravi Kumar ".to_string(),
            from: Some(0),
            to: Some(4),
        };
        assert_eq!(
            form.validate(&graph),
            Ok(BookingRequest {
                name: "Ravi Kumar".to_string(),
                from: 0,
                to: 4
            })
        );

        let blank = BookingForm {
            name: "   ".to_string(),
            ..form
        };
        assert_eq!(blank.validate(&graph), Err(ValidationError::MissingName));
    }

    #[test]
    fn route_form_validation() {
        let graph = GraphModel::default_network();
        let form = RouteForm {
            from: Some(5),
            to: Some(5),
        };
        assert_eq!(form.validate(&graph), Err(ValidationError::SameEndpoints));
        let form = RouteForm {
            from: Some(5),
            to: Some(0),
        };
        assert_eq!(form.validate(&graph), Ok(RouteQuery { from: 5, to: 0 }));
    }

    #[test]
    fn result_view_labels_paths() {
        let graph = GraphModel::default_network();
        let result = RouteQueryResult {
            fastest: PathResult::new(vec![0, 1, 3], 600.0),
            cheapest: PathResult::new(vec![0, 2, 3], 1900.0),
        };
        let view = RouteResultView::from_result(&result, &graph);
        assert_eq!(view.entries().len(), 2);

        let fastest = view.entry(RouteKind::Fastest).unwrap();
        assert_eq!(fastest.path_label, "Delhi → Agra → Mumbai");
        assert!(fastest.metric_label.contains("600"));
        assert_eq!(fastest.color(), ANIMATION.paths.fastest);

        let cheapest = view.entry(RouteKind::Cheapest).unwrap();
        assert_eq!(cheapest.path_label, "Delhi → Jaipur → Mumbai");
        assert!(cheapest.metric_label.contains("₹1900"));
        assert_eq!(cheapest.color(), ANIMATION.paths.cheapest);
    }

    #[test]
    fn unreachable_result_is_marked() {
        let graph = GraphModel::default_network();
        let result = RouteQueryResult {
            fastest: PathResult::new(vec![], -1.0),
            cheapest: PathResult::new(vec![], -1.0),
        };
        let view = RouteResultView::from_result(&result, &graph);
        assert!(view.entries().iter().all(|e| !e.reachable));
        assert_eq!(view.entries()[0].path_label, UI_TEXT.no_route_available);
    }

    #[test]
    fn confirmation_lists_both_paths() {
        let graph = GraphModel::default_network();
        let booking = ProcessedBooking {
            id: 3,
            name: "Asha".to_string(),
            fastest: PathResult::new(vec![0, 1], 120.0),
            cheapest: PathResult::new(vec![0, 1], 500.0),
        };
        let text = confirmation_text(&booking, &graph);
        assert!(text.contains("Asha"));
        assert!(text.contains("Delhi → Agra"));
        assert!(text.contains("₹500"));
    }
}
