use crate::models::weather::{Alert, AlertKind, ForecastSample, Severity};

/// At or below this temperature (°C) frost is expected.
pub const FROST_TEMP_C: f64 = 0.0;
/// At or above this temperature (°C) plants are heat-stressed.
pub const HEAT_TEMP_C: f64 = 30.0;
/// Rain per sample (mm) above which it counts as heavy.
pub const HEAVY_RAIN_MM: f64 = 10.0;
/// Wind speed (m/s) above which it counts as strong.
pub const STRONG_WIND_MS: f64 = 10.0;

fn alert(kind: AlertKind, severity: Severity, message: &str, action: &str) -> Alert {
    Alert {
        kind,
        severity,
        message: message.into(),
        action: action.into(),
    }
}

/// Derives gardening alerts from a forecast, in a fixed order:
/// frost, heat, drought, heavy rain, wind.
///
/// An empty forecast carries no rain and so raises only the drought alert.
pub fn derive_alerts(forecast: &[ForecastSample]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if forecast.iter().any(|s| s.temperature <= FROST_TEMP_C) {
        alerts.push(alert(
            AlertKind::Frost,
            Severity::High,
            "Frost risk detected in the next few days. Protect sensitive plants.",
            "Cover tender plants with a frost blanket or bring potted plants indoors.",
        ));
    }
    if forecast.iter().any(|s| s.temperature >= HEAT_TEMP_C) {
        alerts.push(alert(
            AlertKind::Heat,
            Severity::High,
            "High temperatures expected. Plants may be stressed.",
            "Increase watering frequency and consider providing shade for sensitive plants.",
        ));
    }
    if !forecast.iter().any(|s| s.rain > 0.0) {
        alerts.push(alert(
            AlertKind::Drought,
            Severity::Medium,
            "No rain predicted in the next few days.",
            "Ensure adequate watering, especially for newly planted crops.",
        ));
    }
    if forecast.iter().any(|s| s.rain > HEAVY_RAIN_MM) {
        alerts.push(alert(
            AlertKind::HeavyRain,
            Severity::Medium,
            "Heavy rain predicted. Risk of soil erosion and waterlogging.",
            "Ensure good drainage and consider protecting delicate plants.",
        ));
    }
    if forecast.iter().any(|s| s.wind_speed > STRONG_WIND_MS) {
        alerts.push(alert(
            AlertKind::Wind,
            Severity::Medium,
            "Strong winds predicted. Risk of plant and structure damage.",
            "Stake tall plants and secure garden structures.",
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f64, rain: f64, wind_speed: f64) -> ForecastSample {
        ForecastSample {
            timestamp: 1_700_000_000,
            temperature,
            wind_speed,
            rain,
        }
    }

    fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn test_mild_wet_forecast_has_no_alerts() {
        let forecast = vec![sample(12.0, 0.4, 3.0), sample(15.0, 0.0, 4.0)];
        assert!(derive_alerts(&forecast).is_empty());
    }

    #[test]
    fn test_frost_threshold_is_inclusive() {
        let alerts = derive_alerts(&[sample(0.0, 1.0, 0.0)]);
        assert_eq!(kinds(&alerts), vec![AlertKind::Frost]);
        assert_eq!(alerts[0].severity, Severity::High);
    }

    #[test]
    fn test_heat_threshold_is_inclusive() {
        let alerts = derive_alerts(&[sample(30.0, 1.0, 0.0)]);
        assert_eq!(kinds(&alerts), vec![AlertKind::Heat]);
    }

    #[test]
    fn test_dry_forecast_raises_drought() {
        let alerts = derive_alerts(&[sample(20.0, 0.0, 2.0), sample(22.0, 0.0, 2.0)]);
        assert_eq!(kinds(&alerts), vec![AlertKind::Drought]);
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_heavy_rain_and_wind_are_strict_thresholds() {
        assert!(derive_alerts(&[sample(10.0, 10.0, 10.0)]).is_empty());
        let alerts = derive_alerts(&[sample(10.0, 10.5, 10.5)]);
        assert_eq!(kinds(&alerts), vec![AlertKind::HeavyRain, AlertKind::Wind]);
    }

    #[test]
    fn test_alert_order_is_stable() {
        let forecast = vec![
            sample(-2.0, 0.0, 12.0),
            sample(33.0, 0.0, 1.0),
        ];
        assert_eq!(
            kinds(&derive_alerts(&forecast)),
            vec![AlertKind::Frost, AlertKind::Heat, AlertKind::Drought, AlertKind::Wind]
        );
    }

    #[test]
    fn test_empty_forecast_only_reports_drought() {
        assert_eq!(kinds(&derive_alerts(&[])), vec![AlertKind::Drought]);
    }
}
