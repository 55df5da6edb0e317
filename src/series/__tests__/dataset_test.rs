use approx::assert_relative_eq;

use crate::series::{experiment_store, filter_series, Metric, MEMORY_CAPACITY_BYTES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 실험_데이터_로드_테스트() {
        let store = experiment_store().unwrap();

        let ids: Vec<&str> = store.methods().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["dense", "csr", "quantized"]);
        assert_eq!(store.max_dimension(), Some(600));

        println!("✅ 실험 데이터 로드 테스트 통과: {:?}", ids);
    }

    #[test]
    fn 메모리_백분율은_32KB_기준_테스트() {
        let store = experiment_store().unwrap();

        for method in store.methods() {
            let columns = method.columns();
            for index in 0..method.len() {
                let (Some(bytes), Some(percent)) = (
                    columns.value(Metric::MemoryBytes, index),
                    columns.value(Metric::MemoryPercent, index),
                ) else {
                    continue;
                };
                let expected = bytes / MEMORY_CAPACITY_BYTES as f64 * 100.0;
                // 기록된 백분율은 소수점 이하 버림
                assert_relative_eq!(percent, expected.floor());
            }
        }
    }

    #[test]
    fn 밀집_행렬_70차원_결측_테스트() {
        let store = experiment_store().unwrap();
        let dense = store.get("dense").unwrap();

        assert_eq!(dense.dimensions(), &[40, 50, 60, 70]);
        for metric in [Metric::MseMean, Metric::MemoryPercent, Metric::CompileTime] {
            let view = filter_series(dense, 600, metric);
            assert_eq!(view.dimensions(), &[40, 50, 60]);
        }
    }
}
