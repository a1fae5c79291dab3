//! Plain-text rendering of a route overview.

use route_core::cost::{CostConsistency, PriceComparison};
use route_core::format::PLACEHOLDER;
use route_core::RouteOverview;
use std::fmt::Write;

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<22} {value}");
}

fn opt_number(value: Option<i64>, unit: &str) -> String {
    value
        .map(|v| format!("{v}{unit}"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Render every section; missing sections print as pending.
pub fn render_overview(overview: &RouteOverview) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Маршрут {}",
        overview.route_id.as_deref().unwrap_or(PLACEHOLDER)
    );
    line(&mut out, "Расстояние", &overview.distance_label);
    line(&mut out, "Время в пути", &overview.duration_label);
    if let Some(path) = &overview.path_length_label {
        line(&mut out, "Длина трека", path);
    }
    if let Some(conditions) = &overview.weather_conditions {
        line(&mut out, "Погода", conditions);
    }

    out.push_str("\nРиски\n");
    match &overview.risk {
        Some(risk) => {
            for (label, classification) in [
                ("Общий", &risk.overall),
                ("Погода", &risk.weather),
                ("Дорога", &risk.road_quality),
            ] {
                line(
                    &mut out,
                    label,
                    &format!(
                        "{} ({}, {:?})",
                        classification.score,
                        classification.band.label(),
                        classification.variant
                    ),
                );
            }
            for recommendation in &risk.recommendations {
                let _ = writeln!(out, "  * {recommendation}");
            }
        }
        None => line(&mut out, "Статус", "загрузка…"),
    }

    out.push_str("\nСтоимость\n");
    match &overview.costs {
        Some(costs) => {
            line(&mut out, "Топливо", &format!("{} ({})", costs.fuel_label, costs.fuel_share));
            line(&mut out, "Платные дороги", &format!("{} ({})", costs.tolls_label, costs.tolls_share));
            line(&mut out, "Водитель", &format!("{} ({})", costs.driver_label, costs.driver_share));
            line(&mut out, "Итого", &costs.total_label);
            if costs.consistency == CostConsistency::Unknown {
                line(&mut out, "Проверка", PLACEHOLDER);
            }
        }
        None => line(&mut out, "Статус", "нет данных"),
    }

    out.push_str("\nТопливо\n");
    match &overview.fuel {
        Some(fuel) if fuel.has_data() => {
            line(&mut out, "Средняя цена", &fuel.average_label);
            for station in &fuel.stations {
                let marker = match station.comparison {
                    PriceComparison::Cheaper => "↓",
                    PriceComparison::NotCheaper => " ",
                    PriceComparison::Unknown => "?",
                };
                let _ = writeln!(
                    out,
                    "  {marker} {} [{}] {}",
                    station.station_name, station.fuel_type, station.price_label
                );
            }
        }
        Some(_) => line(&mut out, "Статус", "АЗС не найдены"),
        None => line(&mut out, "Статус", "загрузка…"),
    }

    out.push_str("\nПлатные участки\n");
    match &overview.tolls {
        Some(tolls) => {
            line(&mut out, "Участков", &tolls.segment_count.to_string());
            line(&mut out, "Сумма", &tolls.total_label);
        }
        None => line(&mut out, "Статус", "загрузка…"),
    }

    out.push_str("\nПрогноз погоды\n");
    match &overview.weather {
        Some(weather) => {
            line(&mut out, "Средняя температура", &opt_number(weather.average_temperature, "°C"));
            line(&mut out, "Средний ветер", &opt_number(weather.average_wind_speed, " м/с"));
            line(&mut out, "Средняя влажность", &opt_number(weather.average_humidity, "%"));
            line(&mut out, "Точек", &weather.point_count.to_string());
        }
        None => line(&mut out, "Статус", "загрузка…"),
    }

    out.push_str("\nОстановки\n");
    match &overview.rest {
        Some(rest) => {
            for row in &rest.rows {
                let _ = writeln!(
                    out,
                    "  {}. {} {} — {}, {} от старта, {} (прибытие {})",
                    row.sequence,
                    row.type_label,
                    row.location_name,
                    row.duration_label,
                    row.distance_label,
                    row.time_from_departure,
                    row.arrival_label
                );
            }
            line(&mut out, "Отдых всего", &rest.total_rest_label);
            line(&mut out, "Вождение", &rest.driving_time_label);
            for advisory in &rest.advisories {
                let _ = writeln!(out, "  ! {advisory}");
            }
        }
        None => line(&mut out, "Статус", "нет рекомендаций"),
    }

    for warning in &overview.warnings {
        let _ = writeln!(out, "\n! {warning}");
    }
    out
}
