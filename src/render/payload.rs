//! Dashboard data payload
//!
//! Everything the client script needs is serialized into one JSON document.
//! List entries use the compact keys the script reads (`n` name, `c` code,
//! `v` value, `e` entity, `h` home, `a` authority, `s` service). Headline
//! figures and donut geometry are precomputed here so that the template
//! carries no arithmetic on empty registers.

use crate::constants::{
    COUNTRY_NAMES, GENERATED_DATE_FORMAT, authority_short_name, country_name, donut,
};
use crate::models::{CountrySummary, RegisterAnalysis, ServiceCount, percentage};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDatum {
    pub n: String,
    pub c: String,
    pub v: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginDatum {
    pub n: String,
    pub v: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomesticDatum {
    pub n: String,
    pub e: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDatum {
    pub s: String,
    pub v: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryDatum {
    pub n: String,
    pub e: String,
    pub h: String,
    pub a: String,
}

/// Country headline with its share of all providers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubSummary {
    pub code: String,
    pub name: String,
    pub count: usize,
    pub pct: u32,
}

/// Service headline with its share of all providers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceHighlight {
    pub name: String,
    pub count: usize,
    pub pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceHighlights {
    pub most: Option<ServiceHighlight>,
    pub second: Option<ServiceHighlight>,
    pub least: Option<ServiceHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    pub code: String,
    pub name: String,
    pub authority: String,
    pub home_count: usize,
    pub cross_border_count: usize,
    pub total_active: usize,
    pub origin_countries: usize,
}

/// One ring segment: `dash` is its arc length, `offset` where it starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSegment {
    pub color: String,
    pub dash: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub detail: String,
    pub color: String,
    pub pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub circumference: f64,
    pub segments: Vec<DonutSegment>,
    pub legend: Vec<LegendItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub num_countries: usize,
    pub unknown_home: usize,
    pub top_country: Option<HubSummary>,
    pub hubs: Vec<HubSummary>,
    pub target: TargetSummary,
    pub services: ServiceHighlights,
    pub donut: DonutChart,
    pub generated: String,
}

/// Complete data document embedded in the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub country_data: Vec<CountryDatum>,
    pub cross_border_origin: Vec<OriginDatum>,
    pub domestic: Vec<DomesticDatum>,
    pub services: Vec<ServiceDatum>,
    pub directory: Vec<DirectoryDatum>,
    pub country_names: BTreeMap<&'static str, &'static str>,
    pub summary: DashboardSummary,
}

impl DashboardPayload {
    /// Build the payload, stamping today's local date
    pub fn from_analysis(analysis: &RegisterAnalysis) -> Self {
        let generated = chrono::Local::now()
            .format(GENERATED_DATE_FORMAT)
            .to_string();
        Self::with_generated_date(analysis, generated)
    }

    /// Build the payload with an explicit generation date
    pub fn with_generated_date(analysis: &RegisterAnalysis, generated: impl Into<String>) -> Self {
        let cross_border = &analysis.cross_border;

        Self {
            country_data: analysis
                .countries
                .iter()
                .map(|c| CountryDatum {
                    n: c.name.clone(),
                    c: c.code.clone(),
                    v: c.count,
                })
                .collect(),
            cross_border_origin: cross_border
                .origins
                .iter()
                .map(|c| OriginDatum {
                    n: c.name.clone(),
                    v: c.count,
                })
                .collect(),
            domestic: cross_border
                .domestic
                .iter()
                .map(|p| DomesticDatum {
                    n: p.name.clone(),
                    e: p.entity.clone(),
                })
                .collect(),
            services: analysis
                .services
                .iter()
                .map(|s| ServiceDatum {
                    s: s.name.clone(),
                    v: s.count,
                })
                .collect(),
            directory: analysis
                .directory
                .iter()
                .map(|d| DirectoryDatum {
                    n: d.name.clone(),
                    e: d.entity.clone(),
                    h: d.home.clone(),
                    a: d.authority.clone(),
                })
                .collect(),
            country_names: COUNTRY_NAMES.iter().copied().collect(),
            summary: summarize(analysis, generated.into()),
        }
    }
}

fn summarize(analysis: &RegisterAnalysis, generated: String) -> DashboardSummary {
    let total = analysis.total;
    let cross_border = &analysis.cross_border;
    let hub = |c: &CountrySummary| HubSummary {
        code: c.code.clone(),
        name: c.name.clone(),
        count: c.count,
        pct: percentage(c.count, total),
    };

    DashboardSummary {
        total,
        num_countries: analysis.num_countries,
        unknown_home: analysis.unknown_home,
        top_country: analysis.top_country().map(hub),
        hubs: analysis.countries.iter().take(3).map(hub).collect(),
        target: TargetSummary {
            code: cross_border.target.clone(),
            name: country_name(&cross_border.target).to_string(),
            authority: authority_short_name(&cross_border.target).to_string(),
            home_count: cross_border.home_count,
            cross_border_count: cross_border.cross_border_count,
            total_active: cross_border.total_active(),
            origin_countries: cross_border.origins.len(),
        },
        services: service_highlights(&analysis.services, total),
        donut: donut_chart(&analysis.countries, total, analysis.num_countries),
        generated,
    }
}

/// Most, second most and least offered services by provider count.
/// Ranked by count rather than by position in the display order.
/// Equal counts keep display order.
pub fn service_highlights(services: &[ServiceCount], total: usize) -> ServiceHighlights {
    let mut ranked: Vec<&ServiceCount> = services.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let highlight = |s: &&ServiceCount| ServiceHighlight {
        name: s.name.clone(),
        count: s.count,
        pct: percentage(s.count, total),
    };

    ServiceHighlights {
        most: ranked.first().map(highlight),
        second: ranked.get(1).map(highlight),
        least: ranked.last().map(highlight),
    }
}

/// Arc length for `part` of `whole`, rounded half-to-even at one decimal; zero when empty
fn arc_length(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let arc = part as f64 / whole as f64 * donut::CIRCUMFERENCE;
    (arc * 10.0).round_ties_even() / 10.0
}

/// Donut of the top home countries plus an "Other" segment.
///
/// When the fourth and fifth countries tie they share one legend line.
pub fn donut_chart(countries: &[CountrySummary], total: usize, num_countries: usize) -> DonutChart {
    let top: Vec<&CountrySummary> = countries.iter().take(donut::TOP_SEGMENTS).collect();
    let other_color = donut::COLORS[donut::TOP_SEGMENTS];

    let mut segments = Vec::with_capacity(top.len() + 1);
    let mut offset = 0.0;
    for (i, country) in top.iter().enumerate() {
        let dash = arc_length(country.count, total);
        segments.push(DonutSegment {
            color: donut::COLORS[i].to_string(),
            dash,
            offset: -offset,
        });
        offset += dash;
    }

    let top_total: usize = top.iter().map(|c| c.count).sum();
    let rest = total.saturating_sub(top_total);
    segments.push(DonutSegment {
        color: other_color.to_string(),
        dash: arc_length(rest, total),
        offset: -offset,
    });

    let merge_tail = top.len() > 4 && top[3].count == top[4].count;
    let mut legend = Vec::with_capacity(top.len() + 1);
    for (i, country) in top.iter().enumerate() {
        if i == 4 && merge_tail {
            continue;
        }
        let (label, detail) = if i == 3 && merge_tail {
            (
                format!("{} & {}", country.name, top[4].name),
                format!("{} providers each", country.count),
            )
        } else {
            (country.name.clone(), format!("{} providers", country.count))
        };
        legend.push(LegendItem {
            label,
            detail,
            color: donut::COLORS[i].to_string(),
            pct: percentage(country.count, total),
        });
    }

    let other_countries = num_countries.saturating_sub(top.len());
    legend.push(LegendItem {
        label: format!("Other ({} countries)", other_countries),
        detail: format!("{} providers", rest),
        color: other_color.to_string(),
        pct: percentage(rest, total),
    });

    DonutChart {
        circumference: donut::CIRCUMFERENCE,
        segments,
        legend,
    }
}
