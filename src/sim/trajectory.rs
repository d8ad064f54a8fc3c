use crate::error::Result;
use crate::physics::Chain;
use std::io::Write;

pub const HEADER: &str = "f,x,y,m";

/// Writes one `frame,x,y,mass` row per body per frame, after a single header line.
pub struct TrajectoryWriter<W: Write> {
    out: W,
    precision: Option<usize>,
    header_written: bool,
    frames_written: usize,
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            precision: None,
            header_written: false,
            frames_written: 0,
        }
    }

    /// Fixed number of decimal digits; `None` writes the shortest exact form.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn emit(&mut self, frame: usize, chain: &Chain) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "{HEADER}")?;
            self.header_written = true;
        }

        for body in &chain.bodies {
            let (x, y, m) = (body.position.x, body.position.y, body.reported_mass());
            match self.precision {
                Some(p) => writeln!(self.out, "{frame},{x:.p$},{y:.p$},{m:.p$}")?,
                None => writeln!(self.out, "{frame},{x},{y},{m}")?,
            }
        }

        self.frames_written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainConfig;

    fn render(precision: Option<usize>, frames: usize) -> String {
        let chain = ChainConfig::single(2.0, 0.5, 0.0).to_chain();
        let mut writer = TrajectoryWriter::new(Vec::new()).with_precision(precision);
        for frame in 0..frames {
            writer.emit(frame, &chain).unwrap();
        }
        assert_eq!(writer.frames_written(), frames);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn header_is_written_once() {
        let text = render(None, 2);
        insta::assert_snapshot!(text.trim_end(), @r"
        f,x,y,m
        0,0,0,0
        0,0,-0.5,2
        1,0,0,0
        1,0,-0.5,2
        ");
    }

    #[test]
    fn fixed_precision_rows() {
        let text = render(Some(3), 1);
        insta::assert_snapshot!(text.trim_end(), @r"
        f,x,y,m
        0,0.000,0.000,0.000
        0,0.000,-0.500,2.000
        ");
    }

    #[test]
    fn rows_parse_back_to_the_written_state() {
        let chain = ChainConfig::triple().to_chain();
        let mut writer = TrajectoryWriter::new(Vec::new());
        writer.emit(7, &chain).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), chain.len());
        for (row, body) in rows.iter().zip(&chain.bodies) {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields[0], "7");
            assert_eq!(fields[1].parse::<f64>().unwrap(), body.position.x);
            assert_eq!(fields[2].parse::<f64>().unwrap(), body.position.y);
            assert_eq!(fields[3].parse::<f64>().unwrap(), body.reported_mass());
        }
    }

    #[test]
    fn nothing_is_written_before_the_first_frame() {
        assert!(render(None, 0).is_empty());
    }
}
