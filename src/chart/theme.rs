//! # 그래프 스타일
//!
//! 렌더러 호출 시 인자로 넘기는 스타일 값과, 실행 시작 시 한 번 수행하는 폰트 등록.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use plotters::style::{register_font, FontStyle};

/// 8비트 RGB 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// 선 그래프 마커 모양
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// 방식별 선/마커 스타일
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodStyle {
    pub color: Rgb,
    pub marker: Marker,
}

/// 그래프 공통 스타일
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    /// 등록된 폰트 이름
    pub font_family: String,
    /// 제목 글자 크기
    pub title_size: f64,
    /// 축 이름 글자 크기
    pub label_size: f64,
    /// 막대 값/점 이름 글자 크기
    pub annotation_size: f64,
    /// 선 두께 (픽셀)
    pub line_width: u32,
    /// 마커 크기 (픽셀)
    pub marker_size: u32,
    /// 방식 순서대로 순환 사용
    pub palette: Vec<MethodStyle>,
    /// 기준선 색상
    pub reference_color: Rgb,
    /// 막대 투명도 (0.0 ~ 1.0)
    pub bar_opacity: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            title_size: 28.0,
            label_size: 20.0,
            annotation_size: 16.0,
            line_width: 2,
            marker_size: 6,
            palette: vec![
                MethodStyle { color: Rgb(0x1f, 0x77, 0xb4), marker: Marker::Circle },
                MethodStyle { color: Rgb(0xff, 0x7f, 0x0e), marker: Marker::Square },
                MethodStyle { color: Rgb(0x2c, 0xa0, 0x2c), marker: Marker::Triangle },
            ],
            reference_color: Rgb(0xd6, 0x27, 0x28),
            bar_opacity: 0.8,
        }
    }
}

impl ChartTheme {
    /// 방식 인덱스에 해당하는 스타일
    pub fn method_style(&self, index: usize) -> MethodStyle {
        if self.palette.is_empty() {
            return MethodStyle { color: Rgb(0, 0, 0), marker: Marker::Circle };
        }
        self.palette[index % self.palette.len()]
    }

    /// 픽셀 배율에 맞춰 글자/선 크기 조정
    pub fn scaled(&self, scale: f64) -> Self {
        let px = |v: u32| ((v as f64 * scale).round() as u32).max(1);
        Self {
            title_size: self.title_size * scale,
            label_size: self.label_size * scale,
            annotation_size: self.annotation_size * scale,
            line_width: px(self.line_width),
            marker_size: px(self.marker_size),
            ..self.clone()
        }
    }
}

/// 후보 경로 중 처음 읽히는 폰트를 `family` 이름으로 등록
///
/// 프로세스 전체에 한 번만 호출한다. 등록된 폰트가 없으면 글자를 그리는 단계에서
/// 그래프별 렌더링 오류로 보고된다.
pub fn install_font(family: &str, candidates: &[PathBuf]) -> Option<PathBuf> {
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match register_font_file(family, path) {
            Ok(()) => {
                info!("폰트 등록: {} <- {}", family, path.display());
                return Some(path.clone());
            }
            Err(e) => warn!("폰트 등록 실패 ({}): {:#}", path.display(), e),
        }
    }
    warn!("사용 가능한 폰트를 찾지 못했습니다. 후보: {:?}", candidates);
    None
}

fn register_font_file(family: &str, path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("폰트 읽기 실패: {}", path.display()))?;
    // 등록된 폰트는 프로세스 종료까지 유지
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("지원하지 않는 폰트 형식: {}", path.display()))
}

/// 운영체제별 기본 한글 폰트 후보
pub fn default_font_candidates() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\malgun.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}
