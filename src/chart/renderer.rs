//! # 그래프 렌더러
//!
//! 그림 설명을 PNG 로 그린다. 스타일은 호출마다 인자로 받으며 전역 설정을 읽지 않는다.
//! 그리기 영역은 그림 한 장 동안만 살아 있고, 반환 전에 파일로 내보낸다.

use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::chart::figure::{Bar, Figure, Panel, PanelContent, Trace};
use crate::chart::spec::{Orientation, ReferenceLine};
use crate::chart::theme::{ChartTheme, Marker, Rgb};

/// 그림 설명을 이미지 파일로 만드는 외부 협력자
pub trait ChartRenderer {
    fn render(&mut self, figure: &Figure, theme: &ChartTheme, path: &Path) -> Result<()>;
}

/// plotters 비트맵 백엔드 렌더러
#[derive(Debug, Default, Clone, Copy)]
pub struct PlottersRenderer;

type Area<'b> = DrawingArea<BitMapBackend<'b>, Shift>;
type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

impl ChartRenderer for PlottersRenderer {
    fn render(&mut self, figure: &Figure, theme: &ChartTheme, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, figure.size).into_drawing_area();
        root.fill(&WHITE)?;

        let areas = root.split_evenly((1, figure.panels.len().max(1)));
        for (panel, area) in figure.panels.iter().zip(areas.iter()) {
            draw_panel(area, panel, theme)
                .with_context(|| format!("패널 그리기 실패: {}", panel.title))?;
        }

        root.present()
            .with_context(|| format!("이미지 저장 실패: {}", path.display()))?;
        Ok(())
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn font(theme: &ChartTheme, size: f64) -> FontDesc<'_> {
    FontDesc::new(FontFamily::from(theme.font_family.as_str()), size, FontStyle::Normal)
}

fn draw_panel(area: &Area<'_>, panel: &Panel, theme: &ChartTheme) -> Result<()> {
    match &panel.content {
        PanelContent::Lines(traces) => draw_traces(area, panel, traces, theme, true),
        PanelContent::Scatter(traces) => draw_traces(area, panel, traces, theme, false),
        PanelContent::Bars(bars) => draw_bars(area, panel, bars, theme),
    }
}

/// 반전 축은 음수 좌표로 그리고 눈금 라벨만 부호를 되돌린다
fn x_coord(panel: &Panel, x: f64) -> f64 {
    if panel.invert_x {
        -x
    } else {
        x
    }
}

fn x_span(panel: &Panel) -> Range<f64> {
    let (lo, hi) = panel.x_range;
    if panel.invert_x {
        -hi..-lo
    } else {
        lo..hi
    }
}

fn build_chart<'a, 'b>(area: &'a Area<'b>, panel: &Panel, theme: &ChartTheme) -> Result<Chart<'a, 'b>> {
    let (y_lo, y_hi) = panel.y_range;
    let chart = ChartBuilder::on(area)
        .caption(&panel.title, font(theme, theme.title_size))
        .margin(20)
        .x_label_area_size((theme.label_size * 3.0) as u32)
        .y_label_area_size((theme.label_size * 4.0) as u32)
        .build_cartesian_2d(x_span(panel), y_lo..y_hi)?;
    Ok(chart)
}

fn draw_traces(
    area: &Area<'_>,
    panel: &Panel,
    traces: &[Trace],
    theme: &ChartTheme,
    connect: bool,
) -> Result<()> {
    let mut chart = build_chart(area, panel, theme)?;

    let invert = |v: &f64| format!("{:.0}", -v);
    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .axis_desc_style(font(theme, theme.label_size))
            .label_style(font(theme, theme.label_size * 0.8))
            .light_line_style(&BLACK.mix(0.05));
        if panel.invert_x {
            mesh.x_label_formatter(&invert);
        }
        mesh.draw()?;
    }

    let line_width = theme.line_width;
    let marker_size = theme.marker_size;

    for trace in traces {
        // 남은 점이 없는 방식은 그리지 않는다
        if trace.points.is_empty() {
            continue;
        }
        let color = rgb(trace.style.color);
        let points: Vec<(f64, f64)> = trace
            .points
            .iter()
            .map(|&(x, y)| (x_coord(panel, x), y))
            .collect();

        if connect {
            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(line_width)))?
                .label(trace.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
                });
        }

        let style = color.filled();
        let half = marker_size as i32;
        let anchor = match trace.style.marker {
            Marker::Circle => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, marker_size, style)))?
            }
            Marker::Triangle => chart
                .draw_series(points.iter().map(|&p| TriangleMarker::new(p, marker_size, style)))?,
            Marker::Square => chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p) + Rectangle::new([(-half, -half), (half, half)], style)
            }))?,
        };
        if !connect {
            let anchor = anchor.label(trace.label.as_str());
            match trace.style.marker {
                Marker::Circle => {
                    anchor.legend(move |(x, y)| Circle::new((x + 10, y), marker_size, style))
                }
                Marker::Triangle => anchor
                    .legend(move |(x, y)| TriangleMarker::new((x + 10, y), marker_size, style)),
                Marker::Square => anchor.legend(move |(x, y)| {
                    Rectangle::new([(x + 10 - half, y - half), (x + 10 + half, y + half)], style)
                }),
            };

            let label_style = TextStyle::from(font(theme, theme.annotation_size))
                .pos(Pos::new(HPos::Left, VPos::Bottom));
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| Text::new(trace.label.clone(), p, label_style.clone())),
            )?;
        }
    }

    draw_reference_lines(&mut chart, panel, &panel.reference_lines, theme)?;

    chart
        .configure_series_labels()
        .label_font(font(theme, theme.annotation_size))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

fn draw_reference_lines(
    chart: &mut Chart<'_, '_>,
    panel: &Panel,
    lines: &[ReferenceLine],
    theme: &ChartTheme,
) -> Result<()> {
    let color = rgb(theme.reference_color);
    let width = theme.line_width;
    let x = x_span(panel);
    let (y_lo, y_hi) = panel.y_range;

    for line in lines {
        let points = match line.orientation {
            Orientation::Horizontal => vec![(x.start, line.value), (x.end, line.value)],
            Orientation::Vertical => {
                let v = x_coord(panel, line.value);
                vec![(v, y_lo), (v, y_hi)]
            }
        };
        chart
            .draw_series(DashedLineSeries::new(points, 10, 6, color.stroke_width(width)))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width)));
    }
    Ok(())
}

fn draw_bars(area: &Area<'_>, panel: &Panel, bars: &[Bar], theme: &ChartTheme) -> Result<()> {
    let mut chart = build_chart(area, panel, theme)?;

    let names: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    let category = |v: &f64| {
        let index = v.round();
        if (v - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        names.get(index as usize).map(|s| s.to_string()).unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len().max(1))
        .x_label_formatter(&category)
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .axis_desc_style(font(theme, theme.label_size))
        .label_style(font(theme, theme.label_size * 0.8))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    let half_width = 0.3;
    let (_, y_hi) = panel.y_range;
    let offset = (y_hi * 0.01).max(0.0);
    let value_style =
        TextStyle::from(font(theme, theme.annotation_size)).pos(Pos::new(HPos::Center, VPos::Bottom));

    for (i, bar) in bars.iter().enumerate() {
        let x = i as f64;
        let color = rgb(bar.color);

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - half_width, 0.0), (x + half_width, bar.value)],
            color.mix(theme.bar_opacity).filled(),
        )))?;

        let top = match bar.error {
            Some((min, max)) => {
                chart.draw_series(std::iter::once(ErrorBar::new_vertical(
                    x,
                    min,
                    bar.value,
                    max,
                    BLACK.stroke_width(theme.line_width),
                    (theme.marker_size * 3).max(6),
                )))?;
                max
            }
            None => bar.value,
        };

        chart.draw_series(std::iter::once(Text::new(
            bar.annotation.clone(),
            (x, top + offset),
            value_style.clone(),
        )))?;
    }

    draw_reference_lines(&mut chart, panel, &panel.reference_lines, theme)?;
    Ok(())
}
