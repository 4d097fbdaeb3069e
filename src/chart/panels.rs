//! One builder per dashboard panel.
//!
//! Each builder takes the already-combined data for its panel plus the shared
//! [`ChartStyle`] and returns a complete [`ChartSpec`]. Titles, palette picks,
//! margins and headline formats follow the original dashboard layout.

use crate::chart::render::{
    fmt_value, last_value_label, month_label, month_ticks, date_ticks, padded_range,
    trace_points,
};
use crate::chart::spec::{ChartSpec, Legend, Margin, Trace, XAxis, YAxis};
use crate::chart::style::{palette, ChartStyle};
use crate::series::{resample_monthly_last, CombinedTable, Series};

/// Trace colors of the basket panel, in column order.
const BASKET_COLORS: [&str; 4] = [palette::ORANGE, palette::BLUE, palette::GREEN, palette::SKY];

fn base_spec(title: &str, height: u32, margin: Margin, style: &ChartStyle) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        subtitle: None,
        headline: None,
        height,
        margin,
        background: style.background.clone(),
        font_family: style.font_family.clone(),
        font_size: style.font_size,
        font_color: style.font_color.clone(),
        x_axis: XAxis::default(),
        y_axis: YAxis::default(),
        legend: None,
        traces: Vec::new(),
    }
}

fn series_dates(series: &Series) -> impl Iterator<Item = chrono::NaiveDate> + '_ {
    series.observations().iter().map(|obs| obs.date)
}

fn table_dates(table: &CombinedTable) -> impl Iterator<Item = chrono::NaiveDate> + '_ {
    table.rows().iter().map(|row| row.date)
}

/// Monthly CPI variation, tall area panel with one tick per observation.
pub fn inflation_chart(series: &Series, style: &ChartStyle) -> ChartSpec {
    let mut spec = base_spec(
        "Inflación mensual",
        style.tall_height,
        Margin::new(25, 25, 200, 30),
        style,
    );
    if let Some((value, label)) = last_value_label(series) {
        spec.headline = Some(format!("{} %", fmt_value(value, 1)));
        spec.subtitle = Some(label);
    }
    spec.x_axis.ticks = date_ticks(series_dates(series));
    spec.traces = vec![Trace::area(
        series.name(),
        palette::BLUE,
        style.line_width,
        trace_points(series),
    )];
    spec
}

/// Policy rate: daily trace, monthly-resampled ticks and headline.
pub fn policy_rate_chart(series: &Series, style: &ChartStyle) -> ChartSpec {
    let monthly = resample_monthly_last(series);

    let mut spec = base_spec(
        "Tasa de Política Monetaria",
        style.panel_height,
        Margin::new(25, 25, 100, 30),
        style,
    );
    if let Some((value, label)) = last_value_label(&monthly) {
        spec.headline = Some(format!("{} %", fmt_value(value, 1)));
        spec.subtitle = Some(label);
    }
    spec.x_axis.ticks = date_ticks(series_dates(&monthly));
    spec.y_axis.range = series.value_bounds().map(padded_range);
    spec.traces = vec![Trace::area(
        series.name(),
        palette::BLUE,
        style.line_width,
        trace_points(series),
    )];
    spec
}

/// Gross reserves, displayed in thousands of millions of USD.
pub fn reserves_chart(series: &Series, style: &ChartStyle) -> ChartSpec {
    let scaled = series.map_values(|v| v / 1000.0);

    let mut spec = base_spec(
        "Reservas Internacionales (000's M USD)",
        style.panel_height,
        Margin::new(25, 25, 100, 30),
        style,
    );
    if let Some((value, label)) = last_value_label(&scaled) {
        spec.headline = Some(format!("{} M", fmt_value(value, 1)));
        spec.subtitle = Some(label);
    }
    spec.x_axis.ticks = month_ticks(series_dates(&scaled));
    spec.y_axis.range = scaled.value_bounds().map(padded_range);
    spec.traces = vec![Trace::area(
        series.name(),
        palette::GREEN,
        style.line_width,
        trace_points(&scaled),
    )];
    spec
}

/// Official vs. parallel USD rate, two traces over an outer-joined table.
pub fn exchange_rate_chart(table: &CombinedTable, style: &ChartStyle) -> ChartSpec {
    let mut spec = base_spec(
        "Tipo de Cambio (USD Oficial y Blue)",
        style.panel_height,
        Margin::new(25, 25, 100, 30),
        style,
    );

    let official = table.column("usd_oficial");
    let blue = table.column("usd_blue");

    if let (Some(official), Some(blue)) = (&official, &blue) {
        if let (Some((off, _)), Some((blu, label))) =
            (last_value_label(official), last_value_label(blue))
        {
            spec.headline = Some(format!(
                "Oficial: {} | Blue: {}",
                fmt_value(off, 0),
                fmt_value(blu, 0)
            ));
            spec.subtitle = Some(label);
        }
    }

    spec.x_axis.ticks = month_ticks(table_dates(table));
    spec.y_axis.range = table.value_bounds().map(padded_range);
    spec.legend = Some(Legend { y: -0.9 });
    spec.traces = official
        .iter()
        .map(|s| Trace::area("USD Oficial", palette::GREEN, style.line_width, trace_points(s)))
        .chain(blue.iter().map(|s| {
            Trace::line("USD Blue", palette::GREEN, style.line_width, trace_points(s)).dotted()
        }))
        .collect();
    spec
}

/// CNY/ARS cross rate.
pub fn cross_rate_chart(series: &Series, style: &ChartStyle) -> ChartSpec {
    let mut spec = base_spec(
        "Tipo de Cambio (CNY/ARS)",
        style.panel_height,
        Margin::new(25, 25, 100, 30),
        style,
    );
    if let Some((value, label)) = last_value_label(series) {
        spec.headline = Some(fmt_value(value, 1));
        spec.subtitle = Some(label);
    }
    spec.x_axis.ticks = month_ticks(series_dates(series));
    spec.y_axis.range = series.value_bounds().map(padded_range);
    spec.traces = vec![Trace::area(
        series.name(),
        palette::GREEN,
        style.line_width,
        trace_points(series),
    )];
    spec
}

/// Merval index in parallel-rate dollars.
pub fn equity_usd_chart(series: &Series, style: &ChartStyle) -> ChartSpec {
    let mut spec = base_spec(
        "Merval en USD",
        style.panel_height,
        Margin::new(25, 25, 100, 30),
        style,
    );
    if let Some((value, label)) = last_value_label(series) {
        spec.headline = Some(fmt_value(value, 0));
        spec.subtitle = Some(label);
    }
    spec.x_axis.ticks = month_ticks(series_dates(series));
    spec.y_axis.range = series.value_bounds().map(padded_range);
    spec.traces = vec![Trace::area(
        series.name(),
        palette::ORANGE,
        style.line_width,
        trace_points(series),
    )];
    spec
}

/// CEDEAR basket rebased to 100, one colored trace per column.
pub fn cedear_chart(table: &CombinedTable, style: &ChartStyle) -> ChartSpec {
    let mut spec = base_spec(
        "Evolución principales acciones",
        style.tall_height,
        Margin::new(25, 25, 150, 30),
        style,
    );
    if let Some(first) = table.rows().first() {
        spec.subtitle = Some(format!("Indice 100 - {}", month_label(first.date)));
    }
    spec.legend = Some(Legend { y: -0.25 });
    spec.traces = table
        .columns()
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            table.column(name).map(|series| {
                Trace::line(
                    name,
                    BASKET_COLORS[idx % BASKET_COLORS.len()],
                    style.basket_line_width,
                    trace_points(&series),
                )
            })
        })
        .collect();
    spec
}
