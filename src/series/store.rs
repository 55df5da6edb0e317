//! # 시리즈 저장소
//!
//! 방식별 측정값을 차원 순서에 맞춘 병렬 배열로 보관한다.
//! 측정이 없는 위치는 `None` 으로 자리만 차지하며, 인덱스를 생략하지 않는다.

use crate::error::SeriesError;
use crate::series::Metric;

/// 차원 배열과 인덱스가 정렬된 지표 배열 묶음
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricColumns {
    /// MSE 평균
    pub mse_mean: Vec<Option<f64>>,
    /// MSE 최소
    pub mse_min: Vec<Option<f64>>,
    /// MSE 최대
    pub mse_max: Vec<Option<f64>>,
    /// 메모리 사용량 (바이트)
    pub memory_bytes: Vec<Option<f64>>,
    /// 메모리 사용량 (%)
    pub memory_percent: Vec<Option<f64>>,
    /// 컴파일 시간 (초)
    pub compile_time: Vec<Option<f64>>,
}

impl MetricColumns {
    pub fn column(&self, metric: Metric) -> &[Option<f64>] {
        match metric {
            Metric::MseMean => &self.mse_mean,
            Metric::MseMin => &self.mse_min,
            Metric::MseMax => &self.mse_max,
            Metric::MemoryBytes => &self.memory_bytes,
            Metric::MemoryPercent => &self.memory_percent,
            Metric::CompileTime => &self.compile_time,
        }
    }

    fn column_mut(&mut self, metric: Metric) -> &mut Vec<Option<f64>> {
        match metric {
            Metric::MseMean => &mut self.mse_mean,
            Metric::MseMin => &mut self.mse_min,
            Metric::MseMax => &mut self.mse_max,
            Metric::MemoryBytes => &mut self.memory_bytes,
            Metric::MemoryPercent => &mut self.memory_percent,
            Metric::CompileTime => &mut self.compile_time,
        }
    }

    /// 인덱스 위치의 값 (범위 밖이거나 측정이 없으면 `None`)
    pub fn value(&self, metric: Metric, index: usize) -> Option<f64> {
        self.column(metric).get(index).copied().flatten()
    }

    /// `source` 의 인덱스 위치 값을 모든 지표에 걸쳐 그대로 덧붙인다
    pub(crate) fn push_row(&mut self, source: &MetricColumns, index: usize) {
        for metric in Metric::ALL {
            let value = source.value(metric, index);
            self.column_mut(metric).push(value);
        }
    }
}

/// 모든 값이 측정된 배열을 `Option` 배열로 변환
pub fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// 하나의 압축 방식과 그 측정 시리즈
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSeries {
    id: String,
    label: String,
    dimensions: Vec<u32>,
    columns: MetricColumns,
}

impl MethodSeries {
    /// 길이와 차원 순서를 검증한 뒤 생성
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        dimensions: Vec<u32>,
        columns: MetricColumns,
    ) -> Result<Self, SeriesError> {
        let id = id.into();

        for metric in Metric::ALL {
            let actual = columns.column(metric).len();
            if actual != dimensions.len() {
                return Err(SeriesError::LengthMismatch {
                    method: id,
                    metric,
                    expected: dimensions.len(),
                    actual,
                });
            }
        }

        let mut previous = 0u32;
        for (index, &dimension) in dimensions.iter().enumerate() {
            if dimension <= previous {
                return Err(SeriesError::InvalidDimension {
                    method: id,
                    index,
                    dimension,
                });
            }
            previous = dimension;
        }

        Ok(Self {
            id,
            label: label.into(),
            dimensions,
            columns,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 범례에 표시할 이름
    pub fn label(&self) -> &str {
        &self.label
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
}

/// 방식 시리즈의 읽기 전용 저장소 (등록 순서 유지)
#[derive(Debug, Clone)]
pub struct SeriesStore {
    methods: Vec<MethodSeries>,
}

impl SeriesStore {
    pub fn new(methods: Vec<MethodSeries>) -> Result<Self, SeriesError> {
        if methods.is_empty() {
            return Err(SeriesError::EmptyStore);
        }

        for (i, method) in methods.iter().enumerate() {
            if methods[..i].iter().any(|m| m.id == method.id) {
                return Err(SeriesError::DuplicateMethod(method.id.clone()));
            }
        }

        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[MethodSeries] {
        &self.methods
    }

    pub fn get(&self, id: &str) -> Option<&MethodSeries> {
        self.methods.iter().find(|m| m.id == id)
    }

    /// 전체 방식 중 가장 큰 차원
    pub fn max_dimension(&self) -> Option<u32> {
        self.methods
            .iter()
            .filter_map(|m| m.dimensions.last().copied())
            .max()
    }
}
