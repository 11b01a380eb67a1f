//! Row-band assignment: bucketing glyph runs into reconstructed table rows.
//!
//! A band is the y-range starting at one row boundary and ending just above
//! the next. Glyphs above the first boundary belong to no band (page headers,
//! statement metadata) and play no further role in row extraction.

use crate::geometry::GlyphRun;
use crate::rules::RowRule;
use crate::text::unescape;

/// One table row: a bounding rule plus the glyphs assigned to its band.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowBand {
    /// The row boundary that opens this band.
    pub rule: RowRule,
    /// Glyphs inside the band, in the order they were assigned.
    pub glyphs: Vec<GlyphRun>,
}

impl RowBand {
    /// Concatenate the band's glyph texts in assignment order.
    ///
    /// Texts are percent-decoded and joined with single spaces, with one
    /// leading and one trailing space. The padding lets extraction patterns
    /// that require surrounding whitespace match fields at band edges.
    pub fn band_text(&self) -> String {
        let texts: Vec<String> = self
            .glyphs
            .iter()
            .map(|g| unescape(&g.text).into_owned())
            .collect();
        format!(" {} ", texts.join(" "))
    }
}

/// Assign glyphs to the tightest enclosing row band.
///
/// `glyphs` must already be in reading order; assignment preserves that
/// order within each band. `rules` must be ordered by `y` (the output of
/// [`crate::rules::reconstruct_rules`]). A glyph belongs to the band whose
/// rule satisfies `rule.y <= glyph.y` and is either the last rule or is
/// followed by one with `y > glyph.y`. Glyphs above the first rule are
/// dropped from banding.
pub fn assign_bands(glyphs: &[GlyphRun], rules: &[RowRule]) -> Vec<RowBand> {
    let mut bands: Vec<RowBand> = rules
        .iter()
        .map(|rule| RowBand {
            rule: rule.clone(),
            glyphs: Vec::new(),
        })
        .collect();

    for glyph in glyphs {
        if let Some(index) = enclosing_band(rules, glyph.y) {
            bands[index].glyphs.push(glyph.clone());
        }
    }

    bands
}

/// Index of the tightest band enclosing `y`, if any.
fn enclosing_band(rules: &[RowRule], y: f64) -> Option<usize> {
    rules
        .iter()
        .enumerate()
        .position(|(i, rule)| rule.y <= y && (i + 1 == rules.len() || rules[i + 1].y > y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(y: f64) -> RowRule {
        RowRule {
            x: 0.0,
            y,
            l: 100.0,
        }
    }

    fn glyph(text: &str, x: f64, y: f64) -> GlyphRun {
        GlyphRun::new(text, x, y)
    }

    // --- assign_bands ---

    #[test]
    fn test_glyph_lands_in_tightest_band() {
        let rules = vec![rule(10.0), rule(20.0), rule(30.0)];
        let glyphs = vec![glyph("a", 0.0, 12.0), glyph("b", 0.0, 25.0)];

        let bands = assign_bands(&glyphs, &rules);

        assert_eq!(bands[0].glyphs.len(), 1);
        assert_eq!(bands[0].glyphs[0].text, "a");
        assert_eq!(bands[1].glyphs.len(), 1);
        assert_eq!(bands[1].glyphs[0].text, "b");
        assert!(bands[2].glyphs.is_empty());
    }

    #[test]
    fn test_glyph_on_boundary_belongs_to_that_band() {
        let rules = vec![rule(10.0), rule(20.0)];
        let glyphs = vec![glyph("edge", 0.0, 20.0)];

        let bands = assign_bands(&glyphs, &rules);

        assert!(bands[0].glyphs.is_empty());
        assert_eq!(bands[1].glyphs[0].text, "edge");
    }

    #[test]
    fn test_last_band_is_open_ended() {
        let rules = vec![rule(10.0)];
        let glyphs = vec![glyph("deep", 0.0, 900.0)];

        let bands = assign_bands(&glyphs, &rules);
        assert_eq!(bands[0].glyphs.len(), 1);
    }

    #[test]
    fn test_glyphs_above_first_rule_are_unassigned() {
        let rules = vec![rule(50.0)];
        let glyphs = vec![glyph("header", 0.0, 10.0), glyph("row", 0.0, 55.0)];

        let bands = assign_bands(&glyphs, &rules);

        assert_eq!(bands[0].glyphs.len(), 1);
        assert_eq!(bands[0].glyphs[0].text, "row");
    }

    #[test]
    fn test_no_rules_yields_no_bands() {
        let glyphs = vec![glyph("a", 0.0, 10.0)];
        assert!(assign_bands(&glyphs, &[]).is_empty());
    }

    #[test]
    fn test_assignment_preserves_input_order() {
        let rules = vec![rule(10.0)];
        let glyphs = vec![
            glyph("first", 5.0, 12.0),
            glyph("second", 50.0, 12.0),
            glyph("third", 90.0, 14.0),
        ];

        let bands = assign_bands(&glyphs, &rules);
        let texts: Vec<&str> = bands[0].glyphs.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    // --- band_text ---

    #[test]
    fn test_band_text_is_space_joined_and_padded() {
        let band = RowBand {
            rule: rule(10.0),
            glyphs: vec![
                glyph("101", 0.0, 12.0),
                glyph("265-1234567-70", 20.0, 12.0),
            ],
        };
        assert_eq!(band.band_text(), " 101 265-1234567-70 ");
    }

    #[test]
    fn test_band_text_decodes_percent_sequences() {
        let band = RowBand {
            rule: rule(10.0),
            glyphs: vec![glyph("Iznos%20u%20RSD", 0.0, 12.0)],
        };
        assert_eq!(band.band_text(), " Iznos u RSD ");
    }

    #[test]
    fn test_band_text_empty_band() {
        let band = RowBand {
            rule: rule(10.0),
            glyphs: Vec::new(),
        };
        assert_eq!(band.band_text(), "  ");
    }
}
