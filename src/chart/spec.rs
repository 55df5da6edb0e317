//! # 그래프 명세
//!
//! 출력 그래프 한 장을 설명하는 상태 없는 설정 값.
//! 그래프마다 다른 라벨과 축 범위는 코드가 아닌 데이터로 표현한다.

use serde::Serialize;

use crate::series::Metric;

/// 그래프 종류
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    /// 차원 대비 지표 선 그래프 (`threshold` 이하 차원만)
    Trend { metric: Metric },
    /// `threshold` 차원에서 방식별 막대 비교 (지표마다 패널 하나)
    Comparison { metrics: Vec<Metric> },
    /// `threshold` 차원에서 MSE 평균 막대 + 최소/최대 오차 막대
    Range,
    /// `threshold` 차원에서 메모리 사용량(반전 축) 대비 MSE 산점도
    Tradeoff,
}

/// 기준선 방향
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// 고정 기준선 (예: 메모리 상한)
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
    pub label: String,
}

impl ReferenceLine {
    pub fn horizontal(value: f64, label: impl Into<String>) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            value,
            label: label.into(),
        }
    }

    pub fn vertical(value: f64, label: impl Into<String>) -> Self {
        Self {
            orientation: Orientation::Vertical,
            value,
            label: label.into(),
        }
    }
}

/// 그래프 한 장의 명세
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// 출력 식별자 (파일 이름 본체)
    pub id: String,
    pub kind: ChartKind,
    /// 차원 기준값: Trend 는 포함 상한, 나머지는 비교 차원
    pub threshold: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// 고정 x 축 범위 (없으면 데이터로 계산)
    pub x_range: Option<(f64, f64)>,
    /// 고정 y 축 범위 (없으면 데이터로 계산)
    pub y_range: Option<(f64, f64)>,
    /// 지표별 패널 y 축 범위 (비교 그래프에서 `y_range` 보다 우선)
    pub panel_y_ranges: Vec<(Metric, (f64, f64))>,
    pub reference_lines: Vec<ReferenceLine>,
    /// 기본 픽셀 크기 (배율 적용 전)
    pub size: (u32, u32),
}

const DIMENSION_LABEL: &str = "은닉층 차원";

impl ChartSpec {
    /// 차원 대비 지표 선 그래프
    pub fn trend(metric: Metric, threshold: u32) -> Self {
        Self {
            id: format!("{}_vs_dimension_upto{}", metric.slug(), threshold),
            kind: ChartKind::Trend { metric },
            threshold,
            title: format!("은닉층 차원과 {} 의 관계 (≤{})", metric.axis_label(), threshold),
            x_label: DIMENSION_LABEL.to_string(),
            y_label: metric.axis_label().to_string(),
            x_range: None,
            y_range: None,
            panel_y_ranges: Vec::new(),
            reference_lines: Vec::new(),
            size: (1200, 800),
        }
    }

    /// 같은 차원에서의 방식별 막대 비교
    pub fn comparison(dimension: u32, metrics: Vec<Metric>) -> Self {
        Self {
            id: format!("comparison_{dimension}dim"),
            kind: ChartKind::Comparison { metrics },
            threshold: dimension,
            title: format!("{dimension}차원에서의 압축 방식 비교"),
            x_label: format!("압축 방식 ({dimension}차원)"),
            y_label: String::new(),
            x_range: None,
            y_range: None,
            panel_y_ranges: Vec::new(),
            reference_lines: Vec::new(),
            size: (1400, 600),
        }
    }

    /// MSE 범위 (최소~최대) 막대
    pub fn range(dimension: u32) -> Self {
        Self {
            id: format!("mse_range_{dimension}dim"),
            kind: ChartKind::Range,
            threshold: dimension,
            title: format!("{dimension}차원에서의 방식별 MSE 비교 (최소~최대)"),
            x_label: "압축 방식".to_string(),
            y_label: "MSE".to_string(),
            x_range: None,
            y_range: None,
            panel_y_ranges: Vec::new(),
            reference_lines: Vec::new(),
            size: (1200, 800),
        }
    }

    /// 메모리 사용량과 MSE 의 트레이드오프
    pub fn tradeoff(dimension: u32) -> Self {
        Self {
            id: format!("memory_mse_tradeoff_{dimension}dim"),
            kind: ChartKind::Tradeoff,
            threshold: dimension,
            title: format!("{dimension}차원에서의 메모리 사용량과 MSE 트레이드오프"),
            x_label: Metric::MemoryPercent.axis_label().to_string(),
            y_label: Metric::MseMean.axis_label().to_string(),
            x_range: None,
            y_range: None,
            panel_y_ranges: Vec::new(),
            reference_lines: Vec::new(),
            size: (1000, 800),
        }
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn with_panel_y_range(mut self, metric: Metric, min: f64, max: f64) -> Self {
        self.panel_y_ranges.retain(|(m, _)| *m != metric);
        self.panel_y_ranges.push((metric, (min, max)));
        self
    }

    /// `metric` 패널의 고정 y 범위 (지표별 범위, 없으면 공통 범위)
    pub fn panel_y_range(&self, metric: Metric) -> Option<(f64, f64)> {
        self.panel_y_ranges
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, range)| *range)
            .or(self.y_range)
    }

    pub fn with_reference_line(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    /// 결정적인 출력 파일 이름
    pub fn file_name(&self) -> String {
        format!("{}.png", self.id)
    }

    /// 필터에 넘길 필수 지표 목록 (패널 순서)
    pub fn required_metrics(&self) -> Vec<Metric> {
        match &self.kind {
            ChartKind::Trend { metric } => vec![*metric],
            ChartKind::Comparison { metrics } => metrics.clone(),
            ChartKind::Range => vec![Metric::MseMean],
            ChartKind::Tradeoff => vec![Metric::MemoryPercent],
        }
    }
}
