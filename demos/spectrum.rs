//! Render the anodizing spectrum to `spectrum.html` for a visual check.

use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use rgb::RGB8;
use anodize_spectrum::{css_hex, ColorRange, Spectrum};

type Err = Box<dyn Error>;

fn swatch_row(fh: &mut impl Write, colors: &[RGB8],
              width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn sampled(fh: &mut impl Write, n: usize, width: u32,
           comment: &str) -> Result<(), Err> {
    let colors: Vec<RGB8> = Spectrum.sample(n).map(|(_, c)| c).collect();
    swatch_row(fh, &colors, width, comment)
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("spectrum.html")?);
    writeln!(fh, "<html>\n<head>\n<title>Titanium anodizing spectrum</title>\n\
                  </head>\n<body>")?;

    writeln!(fh, "<h3>Reference stops</h3>")?;
    let stops: Vec<RGB8> = Spectrum.stops().iter().map(|s| s.color).collect();
    swatch_row(&mut fh, &stops, 40, "one cell per stop")?;

    writeln!(fh, "<h3>Interpolated</h3>")?;
    sampled(&mut fh, 12, 43, "12 samples")?;
    sampled(&mut fh, 56, 13, "56 samples")?;
    sampled(&mut fh, 440, 1, "440 samples")?;

    writeln!(fh, "<h3>CSS gradient</h3>")?;
    writeln!(fh, "<div style=\"height: 40px; background: {}\"></div>",
             Spectrum.css_gradient())?;
    writeln!(fh, "<p><code>{}</code></p>", Spectrum.css_gradient())?;

    for (t, c) in Spectrum.sample(12) {
        let r = Spectrum.at_level(t);
        writeln!(fh, "<p>{:.2} → {} V, {} {}</p>",
                 t, r.voltage, r.hex(), r.label)?;
        debug_assert_eq!(c, r.color);
    }

    writeln!(fh, "</body>\n</html>")?;
    Ok(())
}
