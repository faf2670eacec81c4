use compact_str::ToCompactString;

use crate::{FontError, Glyph, Stroke};

/// Decodes the compact stroke-path encoding used by the glyph tables.
///
/// The encoding is a whitespace-separated token stream. A token prefixed with
/// `M` begins a new stroke at the given `x,y` pair; a token prefixed with `L`
/// or a bare `x,y` pair appends a point to the current stroke.
pub(crate) fn decode(path: &str) -> Result<Glyph, FontError> {
    let mut strokes: Vec<Stroke> = Vec::new();
    let mut current: Stroke = Vec::new();

    for token in path.split_whitespace() {
        let (move_to, pair) = match token.as_bytes().first() {
            Some(b'M') => (true, &token[1..]),
            Some(b'L') => (false, &token[1..]),
            _ => (false, token),
        };
        if move_to && !current.is_empty() {
            strokes.push(std::mem::take(&mut current));
        }
        current.push(parse_pair(pair)?);
    }

    if !current.is_empty() {
        strokes.push(current);
    }
    Ok(Glyph { strokes })
}

fn parse_pair(pair: &str) -> Result<[f32; 2], FontError> {
    let malformed = || FontError::Malformed(pair.to_compact_string());
    let (x, y) = pair.split_once(',').ok_or_else(malformed)?;
    let x: f32 = x.trim().parse().map_err(|_| malformed())?;
    let y: f32 = y.trim().parse().map_err(|_| malformed())?;
    Ok([x, y])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stroke() {
        let glyph = decode("M0,0 L8,16").unwrap();
        assert_eq!(glyph.strokes, vec![vec![[0.0, 0.0], [8.0, 16.0]]]);
    }

    #[test]
    fn move_marker_starts_new_stroke() {
        let glyph = decode("M0,0 L4,0 M0,8 L4,8").unwrap();
        assert_eq!(glyph.strokes.len(), 2);
        assert_eq!(glyph.strokes[1], vec![[0.0, 8.0], [4.0, 8.0]]);
    }

    #[test]
    fn bare_pairs_continue_current_stroke() {
        let glyph = decode("M0,0 4,4 8,0").unwrap();
        assert_eq!(glyph.strokes, vec![vec![[0.0, 0.0], [4.0, 4.0], [8.0, 0.0]]]);
    }

    #[test]
    fn degenerate_single_point() {
        let glyph = decode("M8,0").unwrap();
        assert_eq!(glyph.strokes, vec![vec![[8.0, 0.0]]]);
        assert!(!glyph.is_empty());
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(matches!(decode("M8"), Err(FontError::Malformed(_))));
        assert!(matches!(decode("Mx,y"), Err(FontError::Malformed(_))));
        assert!(matches!(decode("M1,2,3"), Err(FontError::Malformed(_))));
    }

    #[test]
    fn empty_input_decodes_to_empty_glyph() {
        assert!(decode("").unwrap().is_empty());
    }
}
