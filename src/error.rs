//! 실험 데이터 구조 오류

use std::fmt;

use crate::series::Metric;

/// 시리즈 저장소 구성 시 발생하는 구조적 오류
///
/// 정적 데이터 작성 실수이므로 로드 시점에 한 번 검출하고 렌더링 전에 중단한다.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// 지표 배열 길이가 차원 배열 길이와 다름
    LengthMismatch {
        method: String,
        metric: Metric,
        expected: usize,
        actual: usize,
    },
    /// 차원 값이 0 이거나 엄격히 증가하지 않음
    InvalidDimension {
        method: String,
        index: usize,
        dimension: u32,
    },
    /// 같은 id의 방식이 두 번 등록됨
    DuplicateMethod(String),
    /// 등록된 방식이 없음
    EmptyStore,
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                method,
                metric,
                expected,
                actual,
            } => write!(
                f,
                "'{method}' 의 {} 배열 길이 {actual} 가 차원 배열 길이 {expected} 와 다릅니다",
                metric.slug()
            ),
            Self::InvalidDimension {
                method,
                index,
                dimension,
            } => write!(
                f,
                "'{method}' 의 {index}번째 차원 {dimension} 이 양수가 아니거나 증가하지 않습니다"
            ),
            Self::DuplicateMethod(id) => write!(f, "방식 '{id}' 가 중복 등록되었습니다"),
            Self::EmptyStore => write!(f, "등록된 방식이 없습니다"),
        }
    }
}

impl std::error::Error for SeriesError {}
