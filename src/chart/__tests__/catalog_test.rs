use std::collections::HashSet;

use crate::chart::catalog::{COMPARISON_DIMENSIONS, DIMENSION_CUTOFFS, TREND_METRICS};
use crate::chart::{default_chart_specs, ChartKind};
use crate::series::Metric;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 기본_목록_구성_테스트() {
        let specs = default_chart_specs();

        let trends = specs
            .iter()
            .filter(|s| matches!(s.kind, ChartKind::Trend { .. }))
            .count();
        assert_eq!(trends, TREND_METRICS.len() * DIMENSION_CUTOFFS.len());
        assert_eq!(
            specs.len(),
            trends + COMPARISON_DIMENSIONS.len() + 2,
            "선 그래프 + 비교 + 범위 + 트레이드오프"
        );

        // 출력 이름이 겹치면 파일을 덮어쓴다
        let names: HashSet<String> = specs.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), specs.len());
    }

    #[test]
    fn 메모리_그래프는_상한_기준선_포함_테스트() {
        let specs = default_chart_specs();

        for spec in &specs {
            if spec.kind == (ChartKind::Trend { metric: Metric::MemoryPercent }) {
                assert_eq!(spec.y_range, Some((0.0, 110.0)));
                assert_eq!(spec.reference_lines.len(), 1);
                assert_eq!(spec.reference_lines[0].value, 100.0);
            } else {
                assert!(spec.reference_lines.is_empty(), "{}", spec.id);
            }
        }
    }

    #[test]
    fn 비교_그래프_메모리_패널_고정_범위_테스트() {
        let specs = default_chart_specs();
        let comparison = |dimension: u32| {
            specs
                .iter()
                .find(|s| matches!(s.kind, ChartKind::Comparison { .. }) && s.threshold == dimension)
                .unwrap()
        };

        assert_eq!(comparison(40).panel_y_range(Metric::MemoryPercent), Some((0.0, 50.0)));
        assert_eq!(comparison(80).panel_y_range(Metric::MemoryPercent), Some((0.0, 35.0)));
        assert_eq!(comparison(40).panel_y_range(Metric::MseMean), None);
    }
}
