use sandfall_common::MaterialKind;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgba(200, 200, 200, 255);
    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Fill color for a cell of the given material.
pub fn material_color(kind: MaterialKind) -> Color {
    match kind {
        MaterialKind::Empty => Color::TRANSPARENT,
        MaterialKind::Solid => Color::LIGHT_GRAY,
        MaterialKind::Liquid => Color::BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materials_map_to_palette() {
        assert_eq!(material_color(MaterialKind::Empty), Color::TRANSPARENT);
        assert_eq!(material_color(MaterialKind::Solid), Color::LIGHT_GRAY);
        assert_eq!(material_color(MaterialKind::Liquid), Color::BLUE);
    }

    #[test]
    fn only_empty_is_transparent() {
        for kind in MaterialKind::ALL {
            assert_eq!(material_color(kind).is_transparent(), kind.is_empty());
        }
    }
}
