//! 측정 지표 정의

use serde::Serialize;

/// 방식별로 기록된 측정 지표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// MSE 평균
    MseMean,
    /// MSE 최소
    MseMin,
    /// MSE 최대
    MseMax,
    /// 메모리 사용량 (바이트)
    MemoryBytes,
    /// 메모리 사용량 (32KB 대비 %)
    MemoryPercent,
    /// 컴파일 시간 (초)
    CompileTime,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::MseMean,
        Metric::MseMin,
        Metric::MseMax,
        Metric::MemoryBytes,
        Metric::MemoryPercent,
        Metric::CompileTime,
    ];

    /// 파일 이름에 쓰이는 식별자
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::MseMean => "mse_mean",
            Metric::MseMin => "mse_min",
            Metric::MseMax => "mse_max",
            Metric::MemoryBytes => "memory_bytes",
            Metric::MemoryPercent => "memory_percent",
            Metric::CompileTime => "compile_time",
        }
    }

    /// 축 이름
    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::MseMean => "MSE 평균",
            Metric::MseMin => "MSE 최소",
            Metric::MseMax => "MSE 최대",
            Metric::MemoryBytes => "메모리 사용량 (바이트)",
            Metric::MemoryPercent => "메모리 사용량 (%)",
            Metric::CompileTime => "컴파일 시간 (초)",
        }
    }

    /// 막대 위에 표시할 값 문자열
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Metric::MemoryPercent => format!("{value:.0}%"),
            Metric::MemoryBytes => format!("{value:.0}"),
            Metric::CompileTime => format!("{value:.3}"),
            _ => format!("{value:.2}"),
        }
    }
}
