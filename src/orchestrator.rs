//! # 그래프 생성 실행기
//!
//! 명세 목록을 순서대로 처리한다. 한 명세의 렌더링 실패는 보고만 하고 다음 명세를 계속한다.

use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use crate::chart::{build_figure, ChartKind, ChartRenderer, ChartSpec, ChartTheme};
use crate::config::RenderConfig;
use crate::series::SeriesStore;

/// 명세 하나의 처리 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartStatus {
    Written,
    Failed { message: String },
}

/// 방식별로 그래프에 남은 점 수
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetainedPoints {
    pub method: String,
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOutcome {
    pub id: String,
    pub kind: ChartKind,
    pub threshold: u32,
    pub file: PathBuf,
    #[serde(flatten)]
    pub status: ChartStatus,
    pub retained: Vec<RetainedPoints>,
}

/// 전체 실행 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub charts: Vec<ChartOutcome>,
}

impl RunSummary {
    pub fn written(&self) -> impl Iterator<Item = &ChartOutcome> {
        self.charts.iter().filter(|c| c.status == ChartStatus::Written)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ChartOutcome> {
        self.charts
            .iter()
            .filter(|c| matches!(c.status, ChartStatus::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    /// 생성된 파일 목록 출력
    pub fn print(&self) {
        println!("\n📊 그래프 생성 완료: {}/{}", self.written().count(), self.charts.len());
        println!("생성된 파일:");
        for chart in self.written() {
            println!("  - {}", chart.file.display());
        }

        if self.has_failures() {
            println!("실패한 그래프:");
            for chart in self.failed() {
                if let ChartStatus::Failed { message } = &chart.status {
                    println!("  - {}: {}", chart.id, message);
                }
            }
        }
    }
}

/// 읽기 전용 저장소를 공유하며 명세를 하나씩 렌더링
pub struct ChartOrchestrator<'a> {
    store: &'a SeriesStore,
    theme: ChartTheme,
    config: &'a RenderConfig,
}

impl<'a> ChartOrchestrator<'a> {
    pub fn new(store: &'a SeriesStore, theme: ChartTheme, config: &'a RenderConfig) -> Self {
        Self {
            store,
            theme: theme.scaled(config.scale),
            config,
        }
    }

    pub fn run<R: ChartRenderer>(&self, specs: &[ChartSpec], renderer: &mut R) -> RunSummary {
        if let Err(e) = fs::create_dir_all(&self.config.output_dir) {
            // 각 명세의 저장 단계에서 개별 실패로 보고된다
            warn!("출력 디렉토리 생성 실패 ({}): {}", self.config.output_dir.display(), e);
        }

        let charts = specs.iter().map(|spec| self.render_one(spec, renderer)).collect();
        RunSummary { charts }
    }

    fn render_one<R: ChartRenderer>(&self, spec: &ChartSpec, renderer: &mut R) -> ChartOutcome {
        let mut figure = build_figure(spec, self.store, &self.theme);
        figure.size = self.config.scaled_size(figure.size);
        let path = self.config.output_dir.join(spec.file_name());

        let status = match renderer.render(&figure, &self.theme, &path) {
            Ok(()) => {
                info!("그래프 저장: {} ({}x{})", path.display(), figure.size.0, figure.size.1);
                println!("✅ 그래프를 저장했습니다: {}", path.display());
                ChartStatus::Written
            }
            Err(e) => {
                debug!("렌더링 오류 상세 ({}): {:?}", spec.id, e);
                eprintln!("❌ 그래프 생성 실패 ({}): {:#}", spec.id, e);
                ChartStatus::Failed {
                    message: format!("{e:#}"),
                }
            }
        };

        ChartOutcome {
            id: spec.id.clone(),
            kind: spec.kind.clone(),
            threshold: spec.threshold,
            file: path,
            status,
            retained: figure
                .retained
                .into_iter()
                .map(|(method, points)| RetainedPoints { method, points })
                .collect(),
        }
    }
}
