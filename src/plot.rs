use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::meta::{FileMeta, Marker};
use crate::parse::Series;

/// One input file's measurement series plus the attributes it is drawn with.
pub struct PlotSeries {
    pub meta: FileMeta,
    pub series: Series,
}

/// Output path for the comparison chart, named after the test number and the
/// last-processed file's metadata.
pub fn output_file(graphs_dir: &Path, test_num: u32, meta: &FileMeta) -> PathBuf {
    graphs_dir.join(format!(
        "test{}-{}-{}-{}.png",
        test_num, meta.ds_tag, meta.p1, meta.p2
    ))
}

fn x_desc(test_num: u32) -> &'static str {
    match test_num {
        1 => "#Threads",
        2 => "Key Range",
        3 => "%Reads",
        _ => "",
    }
}

/// Renders all series into one PNG comparison chart.
pub fn render(
    series: &[PlotSeries],
    test_num: u32,
    title: &str,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max, y_max) = axis_bounds(series);

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(title, ("sans-serif", 40).into_font())
        .margin(20)
        .x_label_area_size(35)
        .y_label_area_size(40);

    // Test 2 sweeps the key range over several orders of magnitude.
    if test_num == 2 {
        let mut chart =
            builder.build_cartesian_2d((x_min.max(1.0)..x_max).log_scale(), 0f64..y_max)?;
        draw_series_set(&mut chart, series, test_num)?;
    } else {
        let mut chart = builder.build_cartesian_2d(x_min..x_max, 0f64..y_max)?;
        draw_series_set(&mut chart, series, test_num)?;
    }

    root.present()?;
    Ok(())
}

fn draw_series_set<'a, DB, X>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, RangedCoordf64>>,
    series: &[PlotSeries],
    test_num: u32,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(x_desc(test_num))
        .y_desc("#Operations per ms [K]")
        .draw()?;

    for s in series {
        let color = s.meta.color;
        let points = series_points(&s.series);

        chart
            .draw_series(LineSeries::new(points.clone(), &color))?
            .label(&s.meta.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        match s.meta.marker {
            Marker::Circle => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))?;
            }
            Marker::Square => {
                chart.draw_series(points.iter().map(|&p| {
                    EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], color.filled())
                }))?;
            }
            Marker::Cross => {
                chart.draw_series(points.iter().map(|&p| Cross::new(p, 4, color.filled())))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

// Headers without samples emit an x value but no y value, so pair up only as
// far as both axes reach.
fn series_points(series: &Series) -> Vec<(f64, f64)> {
    series
        .x
        .iter()
        .zip(&series.y)
        .map(|(&x, &y)| (x as f64, y))
        .collect()
}

fn axis_bounds(series: &[PlotSeries]) -> (f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = 0.0f64;
    for s in series {
        for (x, y) in series_points(&s.series) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        return (0.0, 1.0, 1.0);
    }
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    (x_min, x_max, y_max)
}

#[test]
fn output_file_is_named_after_test_and_metadata() {
    let meta = crate::meta::parse_filename_meta("SOFTList-test-90-keys-1024.txt").unwrap();
    let path = output_file(Path::new("graphs"), 2, &meta);
    assert_eq!(path, PathBuf::from("graphs/test2-list-90-1024.png"));
}

#[test]
fn axis_bounds_cover_all_series() {
    let series = vec![
        PlotSeries {
            meta: crate::meta::parse_filename_meta("SOFTList-t-90-k-1024.txt").unwrap(),
            series: Series {
                x: vec![1, 32],
                y: vec![0.5, 2.0],
            },
        },
        PlotSeries {
            meta: crate::meta::parse_filename_meta("LinkFreeList-t-90-k-1024.txt").unwrap(),
            series: Series {
                x: vec![4, 64],
                y: vec![1.0, 3.0],
            },
        },
    ];
    let (x_min, x_max, y_max) = axis_bounds(&series);
    assert_eq!(x_min, 1.0);
    assert_eq!(x_max, 64.0);
    assert!((y_max - 3.3).abs() < 1e-9);
}

#[test]
fn axis_bounds_handle_empty_series() {
    assert_eq!(axis_bounds(&[]), (0.0, 1.0, 1.0));
}

#[test]
fn unpaired_x_values_are_not_plotted() {
    // Second header had no samples, so its x value has no y partner.
    let series = Series {
        x: vec![10, 20, 30],
        y: vec![0.1, 0.2],
    };
    assert_eq!(series_points(&series), vec![(10.0, 0.1), (20.0, 0.2)]);
}
