use crate::models::{RoutePoint, RouteRequest, SuggestedRoute};

/// Average walking pace used to derive a duration from the requested distance.
const WALKING_PACE_KM_PER_MIN: f64 = 0.06;
const STEPS_PER_KM: f64 = 1000.0;

const ROUTE_TITLE: &str = "静寂のリバーサイドウォーク";
const ROUTE_SUMMARY: &str =
    "信号の少ない川沿いの一本道。一定のリズムで歩くことで、頭の中を整理することができます。";
const ROUTE_SPOTS: [&str; 3] = ["水面に映る夕日", "長く続く遊歩道", "静かな橋の下"];
const ROUTE_POLYLINE: [(f64, f64); 4] = [
    (37.772, -122.214),
    (21.291, -157.821),
    (-18.142, 178.431),
    (-27.467, 153.027),
];

/// Build the placeholder suggestion for a request.
///
/// The route itself (title, polyline, summary, spots) is a fixed placeholder
/// until a generative backend produces real candidates; only the mood label,
/// the echoed distance and the derived duration/steps depend on the input.
pub fn build_suggestion(request: &RouteRequest) -> SuggestedRoute {
    let duration_min = request.distance / WALKING_PACE_KM_PER_MIN;

    SuggestedRoute {
        mood: format!("{}な気分", request.mood),
        title: ROUTE_TITLE.to_string(),
        polyline: ROUTE_POLYLINE
            .iter()
            .map(|&(lat, lng)| RoutePoint { lat, lng })
            .collect(),
        distance_km: request.distance,
        duration_min: duration_min
            .is_finite()
            .then(|| duration_min.round() as i64),
        steps: request.distance * STEPS_PER_KM,
        summary: ROUTE_SUMMARY.to_string(),
        spots: ROUTE_SPOTS.iter().map(|s| s.to_string()).collect(),
    }
}
