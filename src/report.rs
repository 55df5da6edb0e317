//! 실행 결과 JSON 저장

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::orchestrator::RunSummary;

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generated_at: String,
    pub output_dir: &'a Path,
    #[serde(flatten)]
    pub summary: &'a RunSummary,
}

impl<'a> Manifest<'a> {
    pub fn new(output_dir: &'a Path, summary: &'a RunSummary) -> Self {
        Self {
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            output_dir,
            summary,
        }
    }
}

/// 요약을 JSON 으로 저장
pub fn write_manifest(path: &Path, output_dir: &Path, summary: &RunSummary) -> Result<PathBuf> {
    let manifest = Manifest::new(output_dir, summary);
    let json = serde_json::to_string_pretty(&manifest)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("디렉토리 생성 실패: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("결과 저장 실패: {}", path.display()))?;
    Ok(path.to_path_buf())
}
