//! 기본 출력 그래프 목록

use crate::chart::spec::{ChartSpec, ReferenceLine};
use crate::series::Metric;

/// 선 그래프 차원 상한
pub const DIMENSION_CUTOFFS: [u32; 2] = [120, 600];

/// 방식별 비교 그래프 차원
pub const COMPARISON_DIMENSIONS: [u32; 2] = [40, 80];

/// 선 그래프 지표
pub const TREND_METRICS: [Metric; 3] = [Metric::MseMean, Metric::MemoryPercent, Metric::CompileTime];

/// 선 그래프 (지표 × 상한) + 비교/범위/트레이드오프 그래프
pub fn default_chart_specs() -> Vec<ChartSpec> {
    let mut specs = Vec::new();

    for metric in TREND_METRICS {
        for cutoff in DIMENSION_CUTOFFS {
            specs.push(trend_spec(metric, cutoff));
        }
    }

    for dimension in COMPARISON_DIMENSIONS {
        specs.push(comparison_spec(dimension));
    }

    specs.push(ChartSpec::range(40));
    specs.push(ChartSpec::tradeoff(40));
    specs
}

fn comparison_spec(dimension: u32) -> ChartSpec {
    let spec = ChartSpec::comparison(dimension, vec![Metric::MseMean, Metric::MemoryPercent]);

    // 메모리 패널은 차원마다 고정 상한, MSE 패널은 자동 범위
    match dimension {
        40 => spec.with_panel_y_range(Metric::MemoryPercent, 0.0, 50.0),
        80 => spec.with_panel_y_range(Metric::MemoryPercent, 0.0, 35.0),
        _ => spec,
    }
}

fn trend_spec(metric: Metric, cutoff: u32) -> ChartSpec {
    let mut spec = ChartSpec::trend(metric, cutoff);

    // 전체 범위 그래프는 x 축 고정
    if cutoff >= 600 {
        spec = spec.with_x_range(30.0, 650.0);
    }

    if metric == Metric::MemoryPercent {
        spec = spec
            .with_y_range(0.0, 110.0)
            .with_reference_line(ReferenceLine::horizontal(100.0, "메모리 상한 (32KB)"));
    }
    spec
}
