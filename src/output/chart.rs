use crate::error::{Error, ErrorKind};
use crate::output::ChartSink;
use std::fmt::{self, Write};
use std::io;
use std::path::{Path, PathBuf};

pub const CHART_FILE: &str = "stats.html";

const TITLE: &str = "Requests response's time stats";
const SERIES: &str = "Response time (ms)";

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 460.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 90.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Renders a line chart of response times to `<root>/stats.html`.
pub struct ChartWriter {
    root: PathBuf,
}

impl ChartWriter {
    pub fn new(root: &Path) -> ChartWriter {
        ChartWriter {
            root: root.to_path_buf(),
        }
    }
}

impl ChartSink for ChartWriter {
    fn render(&self, latencies: &[u64], repetitions: usize) -> Result<PathBuf, Error> {
        let path = self.root.join(CHART_FILE);
        let latencies = &latencies[..repetitions.min(latencies.len())];
        let failure = |source: io::Error| Error {
            kind: ErrorKind::ChartRender {
                path: path.clone(),
                source,
            },
        };
        let page = render_page(latencies)
            .map_err(|e| failure(io::Error::new(io::ErrorKind::Other, e)))?;
        std::fs::write(&path, page).map_err(failure)?;
        Ok(path)
    }
}

/// X axis label of the attempt at `index` (0-based).
pub fn point_label(index: usize) -> String {
    format!("response {}", index + 1)
}

pub fn render_page(latencies: &[u64]) -> Result<String, fmt::Error> {
    Ok(format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; background: #ffffff; }}
.grid {{ stroke: #e6e6e6; }}
.series {{ fill: none; stroke: #2ec7c9; stroke-width: 2; }}
.point {{ fill: #ffffff; stroke: #2ec7c9; stroke-width: 2; }}
.value {{ font-size: 12px; fill: #2ec7c9; text-anchor: middle; }}
.label {{ font-size: 12px; fill: #555555; text-anchor: middle; }}
</style>
</head>
<body>
{svg}
</body>
</html>
",
        title = TITLE,
        svg = render_svg(latencies)?
    ))
}

fn render_svg(latencies: &[u64]) -> Result<String, fmt::Error> {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = latencies.iter().copied().max().unwrap_or(0).max(1) as f64;
    let step = if latencies.len() > 1 {
        plot_width / (latencies.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<(f64, f64)> = latencies
        .iter()
        .enumerate()
        .map(|(index, latency)| {
            let x = if latencies.len() > 1 {
                MARGIN_LEFT + step * index as f64
            } else {
                MARGIN_LEFT + plot_width / 2.0
            };
            let y = MARGIN_TOP + plot_height - (*latency as f64 / max) * plot_height;
            (x, y)
        })
        .collect();

    let mut svg = String::new();
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = WIDTH,
        h = HEIGHT
    )?;
    writeln!(
        svg,
        "<text x=\"{x}\" y=\"30\" font-size=\"18\" font-weight=\"bold\">{title}</text>",
        x = MARGIN_LEFT,
        title = TITLE
    )?;
    writeln!(
        svg,
        "<text x=\"{x}\" y=\"55\" font-size=\"13\" fill=\"#2ec7c9\">{series}</text>",
        x = MARGIN_LEFT,
        series = SERIES
    )?;

    for tick in 0..=4 {
        let y = MARGIN_TOP + plot_height * tick as f64 / 4.0;
        let value = max * (4 - tick) as f64 / 4.0;
        writeln!(
            svg,
            "<line class=\"grid\" x1=\"{x1}\" y1=\"{y:.1}\" x2=\"{x2}\" y2=\"{y:.1}\"/><text class=\"label\" x=\"{tx}\" y=\"{ty:.1}\">{value:.0}</text>",
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + plot_width,
            y = y,
            tx = MARGIN_LEFT - 30.0,
            ty = y + 4.0,
            value = value
        )?;
    }

    let polyline: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();
    writeln!(
        svg,
        "<polyline class=\"series\" points=\"{}\"/>",
        polyline.join(" ")
    )?;

    for (index, ((x, y), latency)) in points.iter().zip(latencies).enumerate() {
        writeln!(
            svg,
            "<circle class=\"point\" cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4\"/><text class=\"value\" x=\"{x:.1}\" y=\"{vy:.1}\">{latency}</text><text class=\"label\" x=\"{x:.1}\" y=\"{ly:.1}\">{label}</text>",
            x = x,
            y = y,
            vy = y - 10.0,
            latency = latency,
            ly = HEIGHT - MARGIN_BOTTOM + 25.0,
            label = point_label(index)
        )?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}
