//! Frame output
//!
//! Writes projected frames as plain text:
//!
//! ```text
//! # frame 12 | 4-simplex | scale 140.000
//! edges 0-1 0-2 ...
//! -12.500 40.250
//! ...
//! ```
//!
//! The edge line is written only when the geometry changed.

use std::io::{self, Write};
use ndpoly_core::Frame;

use crate::config::OutputConfig;

/// Writes frames to any [`Write`] sink
pub struct FrameWriter<W: Write> {
    out: W,
    precision: usize,
    print_edges: bool,
}

impl<W: Write> FrameWriter<W> {
    /// Create a writer configured from `config`
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self {
            out,
            precision: config.precision,
            print_edges: config.print_edges,
        }
    }

    /// Write one frame
    pub fn write_frame(
        &mut self,
        index: u64,
        frame: &Frame<'_>,
        scale: f64,
        geometry_changed: bool,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "# frame {} | {} | scale {:.3}",
            index, frame.description, scale
        )?;

        if geometry_changed && self.print_edges {
            write!(self.out, "edges")?;
            for e in frame.edges {
                write!(self.out, " {}-{}", e.source, e.target)?;
            }
            writeln!(self.out)?;
        }

        let p = self.precision;
        for point in &frame.points {
            writeln!(self.out, "{:.*} {:.*}", p, point.x, p, point.y)?;
        }
        self.out.flush()
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndpoly_core::{PolytopeFamily, PolytopeView};

    fn render(view: &PolytopeView, config: &OutputConfig, geometry_changed: bool) -> String {
        let mut writer = FrameWriter::new(Vec::new(), config);
        writer
            .write_frame(7, &view.frame(), view.scale(), geometry_changed)
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_text() {
        let view = PolytopeView::new(PolytopeFamily::Orthoplex, 2).unwrap();
        let config = OutputConfig { precision: 1, print_edges: true };
        let text = render(&view, &config, true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# frame 7 | 2-orthoplex | scale 140.000");
        assert_eq!(lines[1], "edges 0-2 0-3 1-2 1-3");
        assert_eq!(lines[2], "140.0 0.0");
        assert_eq!(lines[3], "-140.0 0.0");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_edges_skipped_when_unchanged() {
        let view = PolytopeView::new(PolytopeFamily::Simplex, 3).unwrap();
        let config = OutputConfig::default();
        let text = render(&view, &config, false);
        assert!(!text.contains("edges"));
        assert_eq!(text.lines().count(), 1 + 4);
    }

    #[test]
    fn test_edges_disabled() {
        let view = PolytopeView::new(PolytopeFamily::Simplex, 3).unwrap();
        let config = OutputConfig { precision: 3, print_edges: false };
        let text = render(&view, &config, true);
        assert!(!text.contains("edges"));
    }
}
