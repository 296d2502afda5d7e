//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Station;
use crate::generator::Departure;
use crate::route::{Route, Train, TrainStatus};

use super::dto::DepartureResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the connection search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
}

/// Info page.
#[derive(Template)]
#[template(path = "info.html")]
pub struct InfoTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Connection results fragment.
#[derive(Template)]
#[template(path = "route_list.html")]
pub struct RouteListTemplate {
    pub from_name: String,
    pub to_name: String,
    pub routes: Vec<RouteView>,
}

/// Departure board fragment.
#[derive(Template)]
#[template(path = "departure_board.html")]
pub struct DepartureBoardTemplate {
    pub station_name: String,
    pub departures: Vec<DepartureView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station entry in a select box.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub id: String,
    pub name: String,
}

impl StationOption {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
        }
    }
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub id: String,
    pub departure: String,
    pub arrival: String,
    pub duration_display: String,
    pub transfers: usize,
    pub total_delay: u32,
    pub trains: Vec<TrainView>,
}

impl RouteView {
    /// Create from a display route. Routes are never empty once converted.
    pub fn from_route(route: &Route) -> Self {
        let departure = route
            .trains
            .first()
            .map(|t| t.departure.clone())
            .unwrap_or_default();
        let arrival = route
            .trains
            .last()
            .map(|t| t.arrival.clone())
            .unwrap_or_default();

        Self {
            id: route.id.clone(),
            departure,
            arrival,
            duration_display: format_duration(route.total_duration),
            transfers: route.transfers,
            total_delay: route.total_delay,
            trains: route.trains.iter().map(TrainView::from_train).collect(),
        }
    }

    /// "Direct", "1 change", "2 changes".
    pub fn transfers_display(&self) -> String {
        match self.transfers {
            0 => "Direct".to_string(),
            1 => "1 change".to_string(),
            n => format!("{n} changes"),
        }
    }

    pub fn is_delayed(&self) -> bool {
        self.total_delay > 0
    }

    /// Whether any train of the route is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.trains.iter().any(|t| t.is_cancelled())
    }
}

/// Train row view model.
#[derive(Debug, Clone)]
pub struct TrainView {
    pub number: String,
    pub badge: String,
    pub from_name: String,
    pub to_name: String,
    pub departure: String,
    pub arrival: String,
    pub platform: String,
    pub delay: u32,
    pub status: TrainStatus,
}

impl TrainView {
    pub fn from_train(train: &Train) -> Self {
        Self {
            number: train.number.clone(),
            badge: train.train_type.as_str().to_string(),
            from_name: train.from.name.clone(),
            to_name: train.to.name.clone(),
            departure: train.departure.clone(),
            arrival: train.arrival.clone(),
            platform: train.platform.clone(),
            delay: train.delay,
            status: train.status,
        }
    }

    /// CSS modifier for the train badge, e.g. "ice".
    pub fn badge_class(&self) -> String {
        self.badge.to_lowercase()
    }

    pub fn status_class(&self) -> &'static str {
        self.status.as_str()
    }

    /// Human-readable status.
    pub fn status_display(&self) -> String {
        match self.status {
            TrainStatus::OnTime => "On time".to_string(),
            TrainStatus::Delayed => format!("+{} min", self.delay),
            TrainStatus::Cancelled => "Cancelled".to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == TrainStatus::Cancelled
    }
}

/// Departure board row view model.
#[derive(Debug, Clone)]
pub struct DepartureView {
    pub line: String,
    pub badge_class: String,
    pub direction: String,
    pub planned_time: String,
    pub expected_time: String,
    pub delay_minutes: u32,
    pub platform: String,
    pub is_cancelled: bool,
}

impl DepartureView {
    pub fn from_departure(departure: &Departure) -> Self {
        let result = DepartureResult::from_departure(departure);
        Self {
            line: result.line,
            badge_class: departure.line.product_name.to_lowercase(),
            direction: result.direction,
            planned_time: result.planned_time,
            expected_time: result.expected_time,
            delay_minutes: result.delay_minutes,
            platform: result.platform,
            is_cancelled: result.cancelled,
        }
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_minutes > 0 && !self.is_cancelled
    }
}

/// Format minutes as "4h 30m", or "45m" under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
