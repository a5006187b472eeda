//! Secret code generation

use crate::core::{Code, Color, EngineError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw a secret of `length` pegs from `palette`
///
/// With repeats, each peg is an independent uniform draw. Without repeats,
/// a partial Fisher-Yates shuffle picks `length` distinct colors, so every
/// ordered selection is equally likely.
///
/// # Errors
/// Returns [`EngineError::Configuration`] if the palette is empty, or if
/// repeats are disallowed and `length` exceeds the palette size.
///
/// # Examples
/// ```
/// use mastermind::core::Color;
/// use mastermind::game::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate(&Color::ALL, 4, false, &mut rng).unwrap();
/// assert_eq!(secret.len(), 4);
/// assert!(!secret.has_repeats());
/// ```
pub fn generate<R: Rng + ?Sized>(
    palette: &[Color],
    length: usize,
    allow_repeats: bool,
    rng: &mut R,
) -> Result<Code, EngineError> {
    if palette.is_empty() || (!allow_repeats && length > palette.len()) {
        return Err(EngineError::Configuration {
            code_length: length,
            palette_size: palette.len(),
        });
    }

    let colors = if allow_repeats {
        (0..length)
            .map(|_| palette[rng.random_range(0..palette.len())])
            .collect()
    } else {
        let mut pool = palette.to_vec();
        let (picked, _) = pool.partial_shuffle(rng, length);
        picked.to_vec()
    };

    Ok(Code::new(colors))
}
