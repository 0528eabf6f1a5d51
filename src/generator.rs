use std::{
    error::Error,
    io::Write,
    path::{Path, PathBuf},
    result,
};

use log::{debug, info};

use crate::canvas::Canvas;
use crate::debug::TIME;
use crate::icon::IconSpec;
use crate::{BACKGROUND, ICON_SPECS, OUTPUT_DIR, STROKE};

type Result<T> = result::Result<T, Box<dyn Error>>;

pub struct GeneratorBuilder {
    output_dir: PathBuf,
    icons: Vec<IconSpec>,
    background: [u8; 4],
    stroke: [u8; 4],
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            icons: ICON_SPECS.to_vec(),
            background: BACKGROUND,
            stroke: STROKE,
        }
    }

    pub fn with_output_dir(mut self, p: impl Into<PathBuf>) -> Self {
        self.output_dir = p.into();
        self
    }

    pub fn with_icons(mut self, icons: Vec<IconSpec>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_background(mut self, c: [u8; 4]) -> Self {
        self.background = c;
        self
    }

    pub fn with_stroke(mut self, c: [u8; 4]) -> Self {
        self.stroke = c;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            output_dir: self.output_dir,
            icons: self.icons,
            background: self.background,
            stroke: self.stroke,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Generator {
    output_dir: PathBuf,
    icons: Vec<IconSpec>,
    background: [u8; 4],
    stroke: [u8; 4],
}

impl Generator {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn render(&self, spec: &IconSpec) -> Canvas {
        let layout = spec.layout();
        debug!(
            "{}: margin={} line_width={} links={:?}",
            spec.filename, layout.margin, layout.line_width, layout.links
        );

        let mut canvas = Canvas::new(spec.size, self.background);
        for link in layout.links {
            canvas.draw_outline(link, self.stroke, layout.line_width);
        }
        canvas
    }

    // output dir must already exist, earlier files are kept if a later one fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>> {
        info!("writing {} icons to {}", self.icons.len(), self.output_dir.display());

        let mut written = Vec::with_capacity(self.icons.len());
        for spec in &self.icons {
            TIME!(format!("generate {}", spec.filename));

            let path = self.output_dir.join(spec.filename);
            self.render(spec).write_png(&path)?;
            writeln!(out, "Created {}", spec.filename)?;

            written.push(path);
        }

        Ok(written)
    }
}

pub fn write_summary<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Icon placeholders created successfully!")?;
    writeln!(
        out,
        "For production, please create professional icons with your design tool."
    )?;
    Ok(())
}
