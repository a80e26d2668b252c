use rgb::RGB8;

/// A measured reference point on the anodizing voltage spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnodizeStop {
    /// Bath voltage in volts, in \[0, 110\].
    pub voltage: f64,
    /// Interference color of the oxide layer at this voltage.
    pub color: RGB8,
    /// Conventional name of the color.
    pub label: &'static str,
}

const fn stop(voltage: f64, r: u8, g: u8, b: u8, label: &'static str) -> AnodizeStop {
    AnodizeStop { voltage, color: RGB8 { r, g, b }, label }
}

/// Reference stops for commercially pure titanium, sorted by voltage.
///
/// Invariant: voltages are strictly increasing, the first entry is at
/// 0 V and the last at 110 V.
pub static ANODIZE_STOPS: [AnodizeStop; 28] = [
    stop(0., 0xB5, 0xB5, 0xB5, "Raw Titanium"),
    stop(10., 0xCD, 0x7F, 0x32, "Light Bronze"),
    stop(11., 0xB8, 0x73, 0x33, "Copper"),
    stop(15., 0xCD, 0x7F, 0x32, "Bronze"),
    stop(18., 0xA0, 0x52, 0x2D, "Dark Bronze"),
    stop(20., 0x93, 0x70, 0xDB, "Light Purple"),
    stop(23., 0x80, 0x00, 0x80, "Purple"),
    stop(25., 0x80, 0x00, 0x80, "Purple"),
    stop(28., 0x66, 0x33, 0x99, "Dark Purple"),
    stop(30., 0x19, 0x19, 0x70, "Dark Blue"),
    stop(32., 0x00, 0x00, 0xFF, "Blue"),
    stop(35., 0x90, 0xEE, 0x90, "Light Green"),
    stop(36., 0x20, 0xB2, 0xAA, "Light Blue-Green"),
    stop(40., 0xFF, 0xFF, 0x00, "Yellow"),
    stop(45., 0xFF, 0xC0, 0xCB, "Pink"),
    stop(50., 0x00, 0x80, 0x00, "Green"),
    stop(51., 0xFF, 0xD7, 0x00, "Golden Yellow"),
    stop(60., 0xFF, 0xA5, 0x00, "Orange"),
    stop(65., 0xFF, 0xD7, 0x00, "Gold"),
    stop(70., 0xFF, 0xD7, 0x00, "Bright Gold"),
    stop(75., 0xFF, 0x69, 0xB4, "Hot Pink"),
    stop(81., 0xFF, 0x14, 0x93, "Deep Pink"),
    stop(85., 0xFF, 0x00, 0xFF, "Magenta"),
    stop(90., 0xFF, 0xB6, 0xC1, "Light Pink"),
    stop(95., 0x00, 0x80, 0x80, "Teal"),
    stop(100., 0x00, 0xFF, 0x7F, "Spring Green"),
    stop(106., 0x32, 0xCD, 0x32, "Lime Green"),
    stop(110., 0x87, 0xCE, 0xEB, "Light Blue"),
];
