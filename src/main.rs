use compression_charts::chart::theme::install_font;
use compression_charts::config::{command, RenderConfig};
use compression_charts::report::write_manifest;
use compression_charts::{
    default_chart_specs, experiment_store, ChartOrchestrator, ChartTheme, PlottersRenderer,
};
use std::process;

fn main() {
    env_logger::init();

    let matches = command().get_matches();

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ 오류: {:#}", e);
            process::exit(1);
        }
    }
}

/// 모든 그래프를 생성하고 실패가 없었는지 돌려준다
fn run(matches: &clap::ArgMatches) -> anyhow::Result<bool> {
    let config = RenderConfig::from_matches(matches)?;

    // 데이터 구조 오류는 렌더링 전에 중단
    let store = experiment_store()?;

    let theme = ChartTheme::default();
    if let Some(path) = install_font(&theme.font_family, &config.font_candidates) {
        println!("🔤 폰트를 설정했습니다: {}", path.display());
    } else {
        println!("⚠️ 폰트를 찾지 못했습니다. --font 로 폰트 파일을 지정해주세요.");
    }

    let specs = default_chart_specs();
    println!("📈 그래프 {}개 생성 시작 → {}", specs.len(), config.output_dir.display());

    let orchestrator = ChartOrchestrator::new(&store, theme, &config);
    let summary = orchestrator.run(&specs, &mut PlottersRenderer);
    summary.print();

    if let Some(path) = &config.manifest_path {
        let path = write_manifest(path, &config.output_dir, &summary)?;
        println!("💾 실행 결과 저장: {}", path.display());
    }

    Ok(!summary.has_failures())
}
