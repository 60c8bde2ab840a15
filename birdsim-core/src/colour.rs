/// How integer channels are turned into the `0..=1` floats a renderer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourScale {
    /// Divide each channel by 255.
    #[default]
    Normalized,
    /// Feed the raw channel value in as if it were already `0..=1` and clamp.
    /// Every non-zero channel saturates, which is how the original scene
    /// ended up rendering near-white creatures.
    Unscaled,
}

impl ColourScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColourScale::Normalized => "normalized",
            ColourScale::Unscaled => "unscaled",
        }
    }
}

impl core::str::FromStr for ColourScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normalized" | "normalised" => Ok(ColourScale::Normalized),
            "unscaled" | "raw" => Ok(ColourScale::Unscaled),
            other => Err(format!("unknown colour scale '{}'", other)),
        }
    }
}

/// Sprite colour with an implicit opaque alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_rgb_f32(&self, scale: ColourScale) -> [f32; 3] {
        let convert = |channel: u8| match scale {
            ColourScale::Normalized => channel as f32 / 255.0,
            ColourScale::Unscaled => (channel as f32).clamp(0.0, 1.0),
        };
        [convert(self.red), convert(self.green), convert(self.blue)]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_scale() {
        let colour = Colour::new(255, 0, 51);
        assert_eq!(colour.to_rgb_f32(ColourScale::Normalized), [1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_unscaled_scale_saturates() {
        let colour = Colour::new(12, 0, 200);
        assert_eq!(colour.to_rgb_f32(ColourScale::Unscaled), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Colour::new(0, 200, 255).to_hex(), "#00c8ff");
    }

    #[test]
    fn test_scale_parse() {
        assert_eq!("Normalized".parse(), Ok(ColourScale::Normalized));
        assert_eq!("raw".parse(), Ok(ColourScale::Unscaled));
        assert!("sepia".parse::<ColourScale>().is_err());
        for scale in [ColourScale::Normalized, ColourScale::Unscaled] {
            assert_eq!(scale.as_str().parse(), Ok(scale));
        }
    }
}
