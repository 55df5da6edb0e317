use crate::chart::{ChartKind, ChartSpec, Orientation, ReferenceLine};
use crate::series::Metric;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 출력_파일_이름은_지표와_상한을_포함_테스트() {
        let spec = ChartSpec::trend(Metric::MseMean, 600);

        assert_eq!(spec.file_name(), "mse_mean_vs_dimension_upto600.png");
        assert_eq!(spec.kind, ChartKind::Trend { metric: Metric::MseMean });
        assert_eq!(spec.threshold, 600);
        assert_eq!(spec.required_metrics(), vec![Metric::MseMean]);
    }

    #[test]
    fn 고정_차원_그래프_이름_테스트() {
        assert_eq!(
            ChartSpec::comparison(80, vec![Metric::MseMean]).file_name(),
            "comparison_80dim.png"
        );
        assert_eq!(ChartSpec::range(40).file_name(), "mse_range_40dim.png");
        assert_eq!(ChartSpec::tradeoff(40).file_name(), "memory_mse_tradeoff_40dim.png");
        assert_eq!(ChartSpec::tradeoff(40).required_metrics(), vec![Metric::MemoryPercent]);
    }

    #[test]
    fn 빌더_메서드_테스트() {
        let spec = ChartSpec::trend(Metric::MemoryPercent, 120)
            .with_x_range(30.0, 130.0)
            .with_y_range(0.0, 110.0)
            .with_reference_line(ReferenceLine::horizontal(100.0, "상한"))
            .with_reference_line(ReferenceLine::vertical(70.0, "컴파일 한계"));

        assert_eq!(spec.x_range, Some((30.0, 130.0)));
        assert_eq!(spec.y_range, Some((0.0, 110.0)));
        assert_eq!(spec.reference_lines.len(), 2);
        assert_eq!(spec.reference_lines[1].orientation, Orientation::Vertical);
    }

    #[test]
    fn 지표별_패널_범위_우선_테스트() {
        let spec = ChartSpec::comparison(40, vec![Metric::MseMean, Metric::MemoryPercent])
            .with_y_range(0.0, 900.0)
            .with_panel_y_range(Metric::MemoryPercent, 0.0, 60.0)
            .with_panel_y_range(Metric::MemoryPercent, 0.0, 50.0);

        assert_eq!(spec.panel_y_ranges.len(), 1);
        assert_eq!(spec.panel_y_range(Metric::MemoryPercent), Some((0.0, 50.0)));
        assert_eq!(spec.panel_y_range(Metric::MseMean), Some((0.0, 900.0)));
    }
}
