//! Gnuplot script generation for trajectory visualization.
//!
//! Pure formatting over the exporter's column layout (t, x, y, z).
//! Renders a four-panel multiplot: time series, 3D trajectory, and the
//! x-z / y-z projections.

use std::path::Path;

use crate::ResultsResult;

#[derive(Debug, Clone)]
pub struct GnuplotScript {
    /// Data file the script plots, in exporter column order.
    pub data_file: String,
    /// Title across the multiplot.
    pub title: String,
    /// PNG the script renders to.
    pub output: String,
}

impl GnuplotScript {
    pub fn new(
        data_file: impl Into<String>,
        title: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            title: title.into(),
            output: output.into(),
        }
    }

    /// Render the script text.
    pub fn render(&self) -> String {
        let data = &self.data_file;
        let mut s = String::new();

        s.push_str("set terminal pngcairo enhanced size 1200,800\n");
        s.push_str(&format!("set output '{}'\n", self.output));
        s.push_str(&format!("set multiplot layout 2,2 title '{}'\n\n", self.title));

        s.push_str("set title 'Time Series'\n");
        s.push_str("set xlabel 't'\n");
        s.push_str(&format!("plot '{data}' using 1:2 with lines title 'x(t)', \\\n"));
        s.push_str(&format!("     '{data}' using 1:3 with lines title 'y(t)', \\\n"));
        s.push_str(&format!("     '{data}' using 1:4 with lines title 'z(t)'\n\n"));

        s.push_str("set title '3D Trajectory'\n");
        s.push_str("set view 60,30\n");
        s.push_str("set xlabel 'x'\n");
        s.push_str("set ylabel 'y'\n");
        s.push_str("set zlabel 'z'\n");
        s.push_str(&format!("splot '{data}' using 2:3:4 with lines notitle\n\n"));

        s.push_str("set title 'x-z Projection'\n");
        s.push_str("set xlabel 'x'\n");
        s.push_str("set ylabel 'z'\n");
        s.push_str(&format!("plot '{data}' using 2:4 with lines title 'x-z'\n\n"));

        s.push_str("set title 'y-z Projection'\n");
        s.push_str("set xlabel 'y'\n");
        s.push_str("set ylabel 'z'\n");
        s.push_str(&format!("plot '{data}' using 3:4 with lines title 'y-z'\n\n"));

        s.push_str("unset multiplot\n");
        s
    }

    /// Write the rendered script to `path`.
    pub fn write_to(&self, path: &Path) -> ResultsResult<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
