//! # 시리즈 필터
//!
//! 차원 상한과 필수 지표로 한 그래프에 쓸 정렬된 부분 시리즈를 만든다.
//! 필수 지표가 없는 위치는 다른 지표가 있어도 버린다. 보간이나 대체값은 없다.

use log::debug;

use crate::series::{MethodSeries, Metric, MetricColumns};

/// 한 방식의 필터링 결과 (그래프 한 장 동안만 사용)
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    method: &'a MethodSeries,
    required: Metric,
    threshold: u32,
    dimensions: Vec<u32>,
    columns: MetricColumns,
}

/// `dimension <= threshold` 이고 `required` 값이 있는 인덱스만 남긴다
///
/// 나머지 지표 값은 같은 인덱스에서 그대로 옮겨오며 `None` 일 수 있다.
/// 원본 순서를 유지하고, 남는 점이 없으면 빈 뷰를 돌려준다.
pub fn filter_series(series: &MethodSeries, threshold: u32, required: Metric) -> FilteredView<'_> {
    let source = series.columns();
    let mut dimensions = Vec::new();
    let mut columns = MetricColumns::default();

    for (index, &dimension) in series.dimensions().iter().enumerate() {
        if dimension > threshold || source.value(required, index).is_none() {
            continue;
        }
        dimensions.push(dimension);
        columns.push_row(source, index);
    }

    debug!(
        "필터: {} ({} <= {}) -> {}/{} 점",
        series.id(),
        required.slug(),
        threshold,
        dimensions.len(),
        series.len()
    );

    FilteredView {
        method: series,
        required,
        threshold,
        dimensions,
        columns,
    }
}

impl<'a> FilteredView<'a> {
    pub fn method(&self) -> &'a MethodSeries {
        self.method
    }

    pub fn required(&self) -> Metric {
        self.required
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn dimensions(&self) -> &[u32] {
        &self.dimensions
    }

    pub fn columns(&self) -> &MetricColumns {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// (차원, 필수 지표) 좌표 목록
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.dimensions
            .iter()
            .zip(self.columns.column(self.required))
            .filter_map(|(&d, v)| v.map(|v| (d as f64, v)))
            .collect()
    }

    /// 정확히 `dimension` 위치에 남은 지표 값
    pub fn value_at(&self, dimension: u32, metric: Metric) -> Option<f64> {
        let index = self.dimensions.iter().position(|&d| d == dimension)?;
        self.columns.value(metric, index)
    }
}
