//! SVG rendering via the `plotters` library.

use plotters::prelude::*;

use super::{outlier_indices, PlotContext, PlotData, Plotter};
use crate::detector::DetectionResult;

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
static SIZE: (u32, u32) = (960, 540);
static POINT_SIZE: u32 = 3;

const DARK_BLUE: RGBColor = RGBColor(31, 120, 180);
const DARK_ORANGE: RGBColor = RGBColor(255, 127, 0);
const DARK_RED: RGBColor = RGBColor(227, 26, 28);

/// Renders detection results to SVG files.
#[derive(Default)]
pub struct PlottersBackend;

impl Plotter for PlottersBackend {
    fn series(&mut self, ctx: PlotContext<'_>, data: PlotData<'_>) {
        let root_area =
            SVGBackend::new(ctx.path, ctx.size.unwrap_or(SIZE)).into_drawing_area();

        let mut cb = ChartBuilder::on(&root_area);
        if let Some(title) = ctx.title {
            cb.caption(title, (DEFAULT_FONT, 20));
        }

        let xs = data.data;
        let x_max = (xs.len() - 1) as f64;
        let x_range = -0.5..(x_max + 0.5);

        // The y range has to cover the fences as well as the data
        let fences = match data.result {
            DetectionResult::Iqr(res) => Some((res.lower_fence, res.upper_fence)),
            DetectionResult::Zscore(_) => None,
        };
        let y_range = match fences {
            Some((lower, upper)) => {
                plotters::data::fitting_range(xs.iter().chain([lower, upper].iter()))
            }
            None => plotters::data::fitting_range(xs.iter()),
        };

        let mut chart = cb
            .margin((5).percent())
            .set_label_area_size(LabelAreaPosition::Left, (5).percent_width().min(60))
            .set_label_area_size(LabelAreaPosition::Bottom, (5).percent_height().min(40))
            .build_cartesian_2d(x_range, y_range)
            .unwrap();

        chart
            .configure_mesh()
            .x_desc("Index")
            .y_desc("Value")
            .light_line_style(TRANSPARENT)
            .draw()
            .unwrap();

        chart
            .draw_series(LineSeries::new(
                xs.iter().enumerate().map(|(i, &y)| (i as f64, y)),
                &DARK_BLUE,
            ))
            .unwrap()
            .label("Data")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_BLUE));

        chart
            .draw_series(
                xs.iter()
                    .enumerate()
                    .map(|(i, &y)| Circle::new((i as f64, y), POINT_SIZE, DARK_BLUE.filled())),
            )
            .unwrap();

        let outliers = outlier_indices(xs, data.result.outliers());
        chart
            .draw_series(
                outliers
                    .iter()
                    .map(|&i| Circle::new((i as f64, xs[i]), POINT_SIZE, DARK_RED.filled())),
            )
            .unwrap()
            .label("Outliers")
            .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, DARK_RED.filled()));

        if let Some((lower, upper)) = fences {
            chart
                .draw_series(vec![
                    PathElement::new(vec![(-0.5, lower), (x_max + 0.5, lower)], DARK_ORANGE),
                    PathElement::new(vec![(-0.5, upper), (x_max + 0.5, upper)], DARK_ORANGE),
                ])
                .unwrap()
                .label("Fences")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_ORANGE));
        }

        if ctx.title.is_some() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .draw()
                .unwrap();
        }
    }
}
