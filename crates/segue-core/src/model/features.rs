use serde::{Deserialize, Serialize};

/// The audio attributes used for numeric similarity.
///
/// All values except `tempo` are conventionally in `[0, 1]`; `tempo`
/// is a positive real in beats per minute. The field order here is
/// the column order of the numeric feature vector and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub valence: f64,
    pub tempo: f64,
}

impl AudioFeatures {
    /// Column names, in vector order.
    pub const COLUMNS: [&'static str; 6] = [
        "danceability",
        "energy",
        "acousticness",
        "instrumentalness",
        "valence",
        "tempo",
    ];

    #[must_use]
    pub const fn new(
        danceability: f64,
        energy: f64,
        acousticness: f64,
        instrumentalness: f64,
        valence: f64,
        tempo: f64,
    ) -> Self {
        Self {
            danceability,
            energy,
            acousticness,
            instrumentalness,
            valence,
            tempo,
        }
    }

    /// The feature vector, in [`Self::COLUMNS`] order.
    #[must_use]
    pub const fn as_vector(&self) -> [f64; 6] {
        [
            self.danceability,
            self.energy,
            self.acousticness,
            self.instrumentalness,
            self.valence,
            self.tempo,
        ]
    }
}

impl Default for AudioFeatures {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}
