use std::str::FromStr;

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// the grammar is then an alternation over VARIANTS, synthesized with FromStr
//

#[derive(PartialEq, Debug, Clone, Copy, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

/// Ordered choice tries variants in declaration order, so a variant name that is a
/// prefix of a later one would shadow it.
pub fn fancy_color() -> Parser<FancyColor> {
    alternation(FancyColor::VARIANTS.iter().map(|name| literal(name)))
        .synthesize(|s: Synthesis<'_, FancyColor>| {
            FancyColor::from_str(s.text().unwrap_or_default())
        })
}

/// `Lime, Azure,Burgundy`
pub fn palette() -> Parser<FancyColor> {
    let sep = literal(",") & zero_or_more(literal(" "));
    fancy_color() & zero_or_more(sep & fancy_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_parse_enum() -> Result<(), ParseError> {
        let res = fancy_color().parse("Burgundy Arrow")?;
        assert_eq!(res.attributes(), &[FancyColor::Burgundy]);
        assert_eq!(res.remainder(), " Arrow");

        assert!(!fancy_color().parse("Mauve")?.succeeded());
        Ok(())
    }

    #[test]
    fn test_parse_palette() -> Result<(), ParseError> {
        let res = palette().parse("Lime, Azure,Burgundy.")?;
        assert_eq!(
            res.into_attributes(),
            vec![FancyColor::Lime, FancyColor::Azure, FancyColor::Burgundy]
        );
        Ok(())
    }
}
