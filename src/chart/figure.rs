//! # 그래프 구성
//!
//! 명세와 저장소로부터 렌더러에 독립적인 그림 설명을 만든다.
//! 방식마다 자신의 필터 결과만 그리며, 다른 방식의 범위에 맞춰 보간하지 않는다.

use log::{debug, warn};

use crate::chart::spec::{ChartKind, ChartSpec, Orientation, ReferenceLine};
use crate::chart::theme::{ChartTheme, MethodStyle, Rgb};
use crate::series::{filter_series, Metric, SeriesStore};

/// 방식 하나의 선/점 시리즈
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub method_id: String,
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: MethodStyle,
}

/// 방식 하나의 막대
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub method_id: String,
    pub label: String,
    pub value: f64,
    /// 오차 막대 (최소, 최대)
    pub error: Option<(f64, f64)>,
    /// 막대 위 표시 문자열
    pub annotation: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Lines(Vec<Trace>),
    Scatter(Vec<Trace>),
    Bars(Vec<Bar>),
}

/// 좌표축 하나를 공유하는 그림 영역
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// x 축을 큰 값에서 작은 값 방향으로 표시
    pub invert_x: bool,
    pub reference_lines: Vec<ReferenceLine>,
    pub content: PanelContent,
}

/// 출력 파일 하나에 해당하는 그림
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub id: String,
    pub size: (u32, u32),
    pub panels: Vec<Panel>,
    /// 방식별로 첫 패널에 남은 점/막대 수
    pub retained: Vec<(String, usize)>,
}

/// 명세 하나를 그림으로 구성
pub fn build_figure(spec: &ChartSpec, store: &SeriesStore, theme: &ChartTheme) -> Figure {
    let panels = match &spec.kind {
        ChartKind::Trend { metric } => vec![trend_panel(spec, *metric, store, theme)],
        ChartKind::Comparison { metrics } => metrics
            .iter()
            .map(|&metric| comparison_panel(spec, metric, store, theme))
            .collect(),
        ChartKind::Range => vec![range_panel(spec, store, theme)],
        ChartKind::Tradeoff => vec![tradeoff_panel(spec, store, theme)],
    };

    let retained = store
        .methods()
        .iter()
        .map(|method| {
            let count = panels
                .first()
                .map(|panel| panel.count_for(method.id()))
                .unwrap_or(0);
            (method.id().to_string(), count)
        })
        .collect::<Vec<_>>();

    if retained.iter().all(|(_, count)| *count == 0) {
        warn!("'{}' 에 그릴 데이터가 없습니다", spec.id);
    }
    debug!("그림 구성: {} {:?}", spec.id, retained);

    Figure {
        id: spec.id.clone(),
        size: spec.size,
        panels,
        retained,
    }
}

impl Panel {
    fn count_for(&self, method_id: &str) -> usize {
        match &self.content {
            PanelContent::Lines(traces) | PanelContent::Scatter(traces) => traces
                .iter()
                .filter(|t| t.method_id == method_id)
                .map(|t| t.points.len())
                .sum(),
            PanelContent::Bars(bars) => bars.iter().filter(|b| b.method_id == method_id).count(),
        }
    }
}

fn trend_panel(spec: &ChartSpec, metric: Metric, store: &SeriesStore, theme: &ChartTheme) -> Panel {
    let traces: Vec<Trace> = store
        .methods()
        .iter()
        .enumerate()
        .map(|(i, method)| Trace {
            method_id: method.id().to_string(),
            label: method.label().to_string(),
            points: filter_series(method, spec.threshold, metric).points(),
            style: theme.method_style(i),
        })
        .collect();

    let xs = traces.iter().flat_map(|t| t.points.iter().map(|p| p.0));
    let ys = traces
        .iter()
        .flat_map(|t| t.points.iter().map(|p| p.1))
        .chain(reference_values(&spec.reference_lines, Orientation::Horizontal));
    let x_range = spec.x_range.unwrap_or_else(|| padded_range(xs));
    let y_range = spec.y_range.unwrap_or_else(|| padded_range(ys));

    Panel {
        title: spec.title.clone(),
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        x_range,
        y_range,
        invert_x: false,
        reference_lines: spec.reference_lines.clone(),
        content: PanelContent::Lines(traces),
    }
}

fn comparison_panel(
    spec: &ChartSpec,
    metric: Metric,
    store: &SeriesStore,
    theme: &ChartTheme,
) -> Panel {
    let dimension = spec.threshold;
    let bars: Vec<Bar> = store
        .methods()
        .iter()
        .enumerate()
        .filter_map(|(i, method)| {
            let value = filter_series(method, dimension, metric).value_at(dimension, metric)?;
            Some(Bar {
                method_id: method.id().to_string(),
                label: method.label().to_string(),
                value,
                error: None,
                annotation: metric.format_value(value),
                color: theme.method_style(i).color,
            })
        })
        .collect();

    let y_max = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    Panel {
        title: format!("{dimension}차원 방식별 {} 비교", metric.axis_label()),
        x_label: spec.x_label.clone(),
        y_label: metric.axis_label().to_string(),
        x_range: bar_x_range(bars.len()),
        y_range: spec.panel_y_range(metric).unwrap_or_else(|| bar_y_range(y_max)),
        invert_x: false,
        reference_lines: spec.reference_lines.clone(),
        content: PanelContent::Bars(bars),
    }
}

fn range_panel(spec: &ChartSpec, store: &SeriesStore, theme: &ChartTheme) -> Panel {
    let dimension = spec.threshold;
    let bars: Vec<Bar> = store
        .methods()
        .iter()
        .enumerate()
        .filter_map(|(i, method)| {
            let view = filter_series(method, dimension, Metric::MseMean);
            let mean = view.value_at(dimension, Metric::MseMean)?;
            let min = view.value_at(dimension, Metric::MseMin)?;
            let max = view.value_at(dimension, Metric::MseMax)?;
            Some(Bar {
                method_id: method.id().to_string(),
                label: format!("{} ({dimension}차원)", method.label()),
                value: mean,
                error: Some((min, max)),
                annotation: format!("평균: {mean:.2}"),
                color: theme.method_style(i).color,
            })
        })
        .collect();

    let y_max = bars
        .iter()
        .map(|b| b.error.map_or(b.value, |(_, max)| max))
        .fold(0.0, f64::max);

    Panel {
        title: spec.title.clone(),
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        x_range: bar_x_range(bars.len()),
        y_range: spec.y_range.unwrap_or_else(|| bar_y_range(y_max)),
        invert_x: false,
        reference_lines: spec.reference_lines.clone(),
        content: PanelContent::Bars(bars),
    }
}

fn tradeoff_panel(spec: &ChartSpec, store: &SeriesStore, theme: &ChartTheme) -> Panel {
    let dimension = spec.threshold;
    let traces: Vec<Trace> = store
        .methods()
        .iter()
        .enumerate()
        .filter_map(|(i, method)| {
            let view = filter_series(method, dimension, Metric::MemoryPercent);
            let memory = view.value_at(dimension, Metric::MemoryPercent)?;
            let mse = view.value_at(dimension, Metric::MseMean)?;
            Some(Trace {
                method_id: method.id().to_string(),
                label: method.label().to_string(),
                points: vec![(memory, mse)],
                style: theme.method_style(i),
            })
        })
        .collect();

    let xs = traces.iter().flat_map(|t| t.points.iter().map(|p| p.0));
    let ys = traces.iter().flat_map(|t| t.points.iter().map(|p| p.1));
    let x_range = spec.x_range.unwrap_or_else(|| padded_range(xs));
    let y_range = spec.y_range.unwrap_or_else(|| padded_range(ys));

    Panel {
        title: spec.title.clone(),
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        x_range,
        y_range,
        invert_x: true,
        reference_lines: spec.reference_lines.clone(),
        content: PanelContent::Scatter(traces),
    }
}

fn reference_values(
    lines: &[ReferenceLine],
    orientation: Orientation,
) -> impl Iterator<Item = f64> + '_ {
    lines
        .iter()
        .filter(move |l| l.orientation == orientation)
        .map(|l| l.value)
}

/// 데이터 범위에 여백 10% 를 더한 축 범위 (데이터가 없으면 0..1)
pub fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { (hi.abs() * 0.1).max(1.0) };
    (lo - pad, hi + pad)
}

/// 막대 인덱스 0..n 을 담는 x 범위
fn bar_x_range(count: usize) -> (f64, f64) {
    (-0.5, count.max(1) as f64 - 0.5)
}

/// 0 부터 최대값 위 값 표시 여유까지
fn bar_y_range(max: f64) -> (f64, f64) {
    if max > 0.0 {
        (0.0, max * 1.15)
    } else {
        (0.0, 1.0)
    }
}
