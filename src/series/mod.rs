//! # 측정 시리즈 모듈
//!
//! 정적 실험 데이터 저장소와 그래프별 필터

pub mod metric;
pub mod store;
pub mod filter;
pub mod dataset;

pub use metric::Metric;
pub use store::{MetricColumns, MethodSeries, SeriesStore};
pub use filter::{filter_series, FilteredView};
pub use dataset::{experiment_store, MEMORY_CAPACITY_BYTES};

// 테스트 모듈들
#[cfg(test)]
pub mod __tests__;
