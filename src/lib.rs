//! 압축 방식별 실험 결과 그래프 라이브러리
//!
//! 은닉층 차원에 따른 MSE, 메모리 사용량, 컴파일 시간 측정값을 정적 그래프로 그린다.

pub mod error;
pub mod series;
pub mod chart;
pub mod config;
pub mod orchestrator;
pub mod report;

// 핵심 타입 재수출
pub use error::SeriesError;
pub use series::{
    experiment_store, filter_series, FilteredView, MethodSeries, Metric, MetricColumns,
    SeriesStore,
};
pub use chart::{
    build_figure, default_chart_specs, ChartKind, ChartRenderer, ChartSpec, ChartTheme,
    PlottersRenderer, ReferenceLine,
};
pub use config::RenderConfig;
pub use orchestrator::{ChartOrchestrator, ChartOutcome, ChartStatus, RunSummary};
