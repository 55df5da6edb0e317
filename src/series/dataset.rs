//! 실험 측정값 (실험 기록에서 수기 입력)
//!
//! 메모리 사용률은 32KB(32768 바이트) 대비 백분율.
//! 밀집 행렬 형식은 70차원부터 컴파일에 실패해 해당 위치의 측정값이 없다.

use crate::error::SeriesError;
use crate::series::store::present;
use crate::series::{MethodSeries, MetricColumns, SeriesStore};

/// 메모리 상한 (32KB)
pub const MEMORY_CAPACITY_BYTES: u32 = 32 * 1024;

/// 고정 실험 데이터로 저장소 구성
pub fn experiment_store() -> Result<SeriesStore, SeriesError> {
    let dense = MethodSeries::new(
        "dense",
        "밀집 행렬 (비압축)",
        vec![40, 50, 60, 70],
        MetricColumns {
            mse_mean: vec![Some(595.95), Some(406.93), Some(305.48), None],
            mse_min: vec![Some(277.67), Some(231.11), Some(138.00), None],
            mse_max: vec![Some(792.85), Some(535.59), Some(423.22), None],
            memory_bytes: vec![Some(14524.0), Some(18444.0), Some(23164.0), None],
            memory_percent: vec![Some(44.0), Some(56.0), Some(70.0), None],
            compile_time: vec![Some(4.303), Some(4.589), Some(4.831), None],
        },
    )?;

    let csr = MethodSeries::new(
        "csr",
        "CSR 압축",
        vec![40, 80, 120, 160, 200, 400, 600],
        MetricColumns {
            mse_mean: present(&[518.58, 464.86, 620.49, 589.08, 493.35, 864.40, 670.69]),
            mse_min: present(&[324.00, 225.19, 295.37, 295.52, 291.41, 390.89, 253.44]),
            mse_max: present(&[692.37, 729.26, 814.33, 1179.59, 979.85, 1978.81, 2143.81]),
            memory_bytes: present(&[
                8488.0, 9508.0, 10520.0, 11332.0, 12332.0, 17204.0, 21976.0,
            ]),
            memory_percent: present(&[25.0, 29.0, 32.0, 34.0, 37.0, 52.0, 67.0]),
            compile_time: present(&[3.783, 4.037, 4.062, 4.042, 4.027, 4.316, 4.802]),
        },
    )?;

    let quantized = MethodSeries::new(
        "quantized",
        "CSR+양자화",
        vec![40, 80, 120],
        MetricColumns {
            mse_mean: present(&[408.97, 270.68, 244.83]),
            mse_min: present(&[278.78, 200.22, 169.37]),
            mse_max: present(&[588.15, 323.96, 310.63]),
            memory_bytes: present(&[8160.0, 9148.0, 10132.0]),
            memory_percent: present(&[24.0, 27.0, 30.0]),
            compile_time: present(&[3.772, 3.809, 4.028]),
        },
    )?;

    SeriesStore::new(vec![dense, csr, quantized])
}
