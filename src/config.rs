//! # 실행 설정
//!
//! 인자 없이 실행하면 기본값으로 현재 디렉토리에 모든 그래프를 만든다.
//! 선택 인자는 출력 위치와 크기만 바꾸며 그래프 내용에는 영향이 없다.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Arg, ArgMatches, Command};

use crate::chart::theme::default_font_candidates;

/// 렌더링 실행 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// 출력 디렉토리
    pub output_dir: PathBuf,
    /// 픽셀 배율 (그래프 기본 크기에 곱함)
    pub scale: f64,
    /// 폰트 파일 후보 (앞에서부터 시도)
    pub font_candidates: Vec<PathBuf>,
    /// 실행 결과 JSON 저장 경로
    pub manifest_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scale: 1.0,
            font_candidates: default_font_candidates(),
            manifest_path: None,
        }
    }
}

impl RenderConfig {
    /// 명령줄 인자로부터 설정 구성
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = matches.get_one::<String>("output-dir") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(scale) = matches.get_one::<String>("scale") {
            config.scale = scale.parse()?;
        }
        if let Some(font) = matches.get_one::<String>("font") {
            // 지정한 폰트를 가장 먼저 시도
            config.font_candidates.insert(0, PathBuf::from(font));
        }
        config.manifest_path = matches.get_one::<String>("manifest").map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            bail!("배율은 0보다 커야 합니다: {}", self.scale);
        }
        Ok(())
    }

    /// 배율을 적용한 픽셀 크기
    pub fn scaled_size(&self, (width, height): (u32, u32)) -> (u32, u32) {
        let px = |v: u32| ((v as f64 * self.scale).round() as u32).max(1);
        (px(width), px(height))
    }
}

/// 명령줄 정의
pub fn command() -> Command {
    Command::new("render_charts")
        .version("0.1.0")
        .about("압축 방식별 실험 결과 그래프 생성")
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .help("그래프 출력 디렉토리 (기본: 현재 디렉토리)"),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .value_name("SCALE")
                .help("픽셀 배율 (기본: 1.0)"),
        )
        .arg(
            Arg::new("font")
                .long("font")
                .value_name("PATH")
                .help("사용할 폰트 파일 (TTF/OTF/TTC)"),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("FILE")
                .help("실행 결과를 JSON 파일로 저장"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 인자_없는_실행은_기본값_테스트() {
        let matches = command().try_get_matches_from(["render_charts"]).unwrap();
        let config = RenderConfig::from_matches(&matches).unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.scaled_size((1200, 800)), (1200, 800));
    }

    #[test]
    fn 선택_인자_적용_테스트() {
        let matches = command()
            .try_get_matches_from([
                "render_charts",
                "-o",
                "out",
                "--scale",
                "1.5",
                "--font",
                "/tmp/font.ttf",
                "--manifest",
                "out/manifest.json",
            ])
            .unwrap();
        let config = RenderConfig::from_matches(&matches).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.scale, 1.5);
        assert_eq!(config.font_candidates[0], PathBuf::from("/tmp/font.ttf"));
        assert_eq!(config.manifest_path, Some(PathBuf::from("out/manifest.json")));
        assert_eq!(config.scaled_size((1200, 800)), (1800, 1200));
    }

    #[test]
    fn 잘못된_배율_거부_테스트() {
        for bad in ["0", "-1", "abc", "NaN"] {
            let matches = command()
                .try_get_matches_from(["render_charts".to_string(), format!("--scale={bad}")])
                .unwrap();
            assert!(RenderConfig::from_matches(&matches).is_err(), "{bad}");
        }
    }
}
