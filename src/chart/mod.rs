//! # 그래프 모듈
//!
//! 명세 → 그림 설명 → 렌더러 순서로 그래프 한 장을 만든다.

pub mod spec;
pub mod theme;
pub mod figure;
pub mod renderer;
pub mod catalog;

pub use spec::{ChartKind, ChartSpec, Orientation, ReferenceLine};
pub use theme::{ChartTheme, Marker, MethodStyle, Rgb};
pub use figure::{build_figure, Bar, Figure, Panel, PanelContent, Trace};
pub use renderer::{ChartRenderer, PlottersRenderer};
pub use catalog::default_chart_specs;

// 테스트 모듈들
#[cfg(test)]
pub mod __tests__;
