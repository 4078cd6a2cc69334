use plotters::prelude::*;

/// Plots maximum error vs grid spacing on log-log axes and saves the
/// figure to `filename` (PNG). A straight line of slope 2 on this plot
/// confirms second-order convergence.
pub fn plot_error_vs_h(h: &[f64], err: &[f64], filename: &str) {
    assert_eq!(h.len(), err.len());
    if h.is_empty() {
        return;
    }
    let h_min = h.iter().cloned().fold(f64::INFINITY, f64::min);
    let h_max = h.iter().cloned().fold(0.0f64, f64::max);
    let e_min = err.iter().cloned().fold(f64::INFINITY, f64::min);
    let e_max = err.iter().cloned().fold(0.0f64, f64::max);

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    // Create a chart builder
    let mut chart = ChartBuilder::on(&root_area)
        .caption("Maximum Error vs h", ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((h_min..h_max).log_scale(), (e_min..e_max).log_scale())
        .unwrap();

    chart
        .configure_mesh()
        .x_desc("h")
        .y_desc("Maximum Error")
        .draw()
        .unwrap();

    let series: Vec<(f64, f64)> = h.iter().zip(err.iter()).map(|(&x, &y)| (x, y)).collect();
    chart
        .draw_series(LineSeries::new(series.clone(), &Palette99::pick(0)))
        .unwrap()
        .label("max error")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(0)));
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, Palette99::pick(0).filled())),
        )
        .unwrap();

    // Configure the legend
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}
