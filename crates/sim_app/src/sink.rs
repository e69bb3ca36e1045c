//! Presentation sinks for the host binary.

use std::io::{self, Write};

use sim_system::{DisplayRecord, PresentationSink, SystemContext};
use tracing::warn;

/// Prints one `"<image> at (<x>, <y>) HP: <hp>"` line per record, with a
/// frame header.
#[derive(Debug)]
pub struct ConsoleSink<W = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_frame(&mut self, ctx: &SystemContext, records: &[DisplayRecord]) -> io::Result<()> {
        writeln!(self.out, "-- frame {} (dt {:.3}s)", ctx.frame_id, ctx.dt)?;
        for record in records {
            writeln!(self.out, "{record}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn present(&mut self, ctx: &SystemContext, records: &[DisplayRecord]) {
        if let Err(e) = self.write_frame(ctx, records) {
            warn!(frame_id = ctx.frame_id, error = %e, "console sink write failed");
        }
    }
}

/// Prints each frame's records as one JSON array per line.
#[derive(Debug)]
pub struct JsonSink<W = io::Stdout> {
    out: W,
}

impl JsonSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> PresentationSink for JsonSink<W> {
    fn present(&mut self, ctx: &SystemContext, records: &[DisplayRecord]) {
        let written = serde_json::to_writer(&mut self.out, records)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            warn!(frame_id = ctx.frame_id, error = %e, "json sink write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sim_component::Entity;

    use super::*;

    fn records() -> Vec<DisplayRecord> {
        vec![
            DisplayRecord {
                entity: Entity(0),
                image: "neon_samurai".into(),
                x: 3,
                y: 0,
                hp: Some(100),
            },
            DisplayRecord {
                entity: Entity(4),
                image: "crate".into(),
                x: -1,
                y: 2,
                hp: None,
            },
        ]
    }

    #[test]
    fn test_console_lines() {
        let mut out = Vec::new();
        ConsoleSink::new(&mut out)
            .present(&SystemContext::new(7, 0.016, Duration::ZERO), &records());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "-- frame 7 (dt 0.016s)\nneon_samurai at (3, 0) HP: 100\ncrate at (-1, 2)\n"
        );
    }

    #[test]
    fn test_json_line_per_frame() {
        let mut out = Vec::new();
        let mut sink = JsonSink::new(&mut out);
        let ctx = SystemContext::new(1, 0.0, Duration::ZERO);
        sink.present(&ctx, &records());
        sink.present(&ctx, &[]);
        drop(sink);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let frame: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(frame[0]["image"], "neon_samurai");
        assert_eq!(frame[0]["hp"], 100);
        assert!(frame[1].get("hp").is_none());
        assert_eq!(lines[1], "[]");
    }
}
