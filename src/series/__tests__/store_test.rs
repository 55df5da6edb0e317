//! # 저장소 구성 단위테스트
//!
//! 길이/차원 검증과 조회 기능 확인

use crate::error::SeriesError;
use crate::series::store::present;
use crate::series::{MethodSeries, Metric, MetricColumns, SeriesStore};

fn full_columns(values: &[f64]) -> MetricColumns {
    MetricColumns {
        mse_mean: present(values),
        mse_min: present(values),
        mse_max: present(values),
        memory_bytes: present(values),
        memory_percent: present(values),
        compile_time: present(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 정상_시리즈_생성_테스트() {
        let series = MethodSeries::new("csr", "CSR", vec![40, 80], full_columns(&[1.0, 2.0])).unwrap();

        assert_eq!(series.id(), "csr");
        assert_eq!(series.label(), "CSR");
        assert_eq!(series.len(), 2);
        assert_eq!(series.columns().value(Metric::CompileTime, 1), Some(2.0));
        assert_eq!(series.columns().value(Metric::CompileTime, 5), None);
    }

    #[test]
    fn 길이_불일치_거부_테스트() {
        let mut columns = full_columns(&[1.0, 2.0, 3.0]);
        columns.memory_percent.pop();

        let err = MethodSeries::new("dense", "Dense", vec![40, 50, 60], columns).unwrap_err();

        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                method: "dense".to_string(),
                metric: Metric::MemoryPercent,
                expected: 3,
                actual: 2,
            }
        );
        let message = err.to_string();
        assert!(message.contains("dense"));
        assert!(message.contains("memory_percent"));
    }

    #[test]
    fn 결측값은_길이에_포함되는지_테스트() {
        let mut columns = full_columns(&[1.0, 2.0]);
        columns.mse_mean = vec![Some(1.0), None];

        assert!(MethodSeries::new("q", "Q", vec![40, 80], columns).is_ok());
    }

    #[test]
    fn 차원_순서_검증_테스트() {
        let err = MethodSeries::new("a", "A", vec![40, 40], full_columns(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDimension { index: 1, dimension: 40, .. }));

        let err = MethodSeries::new("a", "A", vec![80, 40], full_columns(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDimension { index: 1, .. }));

        let err = MethodSeries::new("a", "A", vec![0], full_columns(&[1.0])).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDimension { index: 0, dimension: 0, .. }));
    }

    #[test]
    fn 저장소_중복_및_빈_저장소_테스트() {
        let a = MethodSeries::new("a", "A", vec![40], full_columns(&[1.0])).unwrap();
        let b = MethodSeries::new("a", "A2", vec![80], full_columns(&[2.0])).unwrap();

        assert_eq!(
            SeriesStore::new(vec![a, b]).unwrap_err(),
            SeriesError::DuplicateMethod("a".to_string())
        );
        assert_eq!(SeriesStore::new(vec![]).unwrap_err(), SeriesError::EmptyStore);
    }

    #[test]
    fn 저장소_조회_테스트() {
        let a = MethodSeries::new("a", "A", vec![40, 50], full_columns(&[1.0, 2.0])).unwrap();
        let b = MethodSeries::new("b", "B", vec![40, 600], full_columns(&[1.0, 2.0])).unwrap();
        let store = SeriesStore::new(vec![a, b]).unwrap();

        let ids: Vec<&str> = store.methods().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.get("b").map(|m| m.len()), Some(2));
        assert!(store.get("c").is_none());
        assert_eq!(store.max_dimension(), Some(600));
    }
}
