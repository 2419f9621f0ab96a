//! Keyword cloud layout.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Bold,
    Black,
}

/// Font size of one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordSize {
    pub px: u16,
    pub weight: FontWeight,
}

/// Descending size scale by keyword rank.
const SIZE_SCALE: [KeywordSize; 5] = [
    KeywordSize {
        px: 72,
        weight: FontWeight::Black,
    },
    KeywordSize {
        px: 56,
        weight: FontWeight::Black,
    },
    KeywordSize {
        px: 48,
        weight: FontWeight::Bold,
    },
    KeywordSize {
        px: 40,
        weight: FontWeight::Bold,
    },
    KeywordSize {
        px: 32,
        weight: FontWeight::Bold,
    },
];

const FALLBACK_SIZE: KeywordSize = KeywordSize {
    px: 24,
    weight: FontWeight::Regular,
};

impl KeywordSize {
    /// Size for the keyword at `rank` (0 = strongest).
    pub fn for_rank(rank: usize) -> Self {
        SIZE_SCALE.get(rank).copied().unwrap_or(FALLBACK_SIZE)
    }
}

/// Horizontal placement of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAlignment {
    Start,
    End,
    Center,
    /// Start, pushed in by 15% of the width
    StartInset,
    /// End, pulled in by 15% of the width
    EndInset,
}

impl RowAlignment {
    /// Alignment of the row at `position` in display order.
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => RowAlignment::Start,
            1 => RowAlignment::End,
            2 => RowAlignment::Center,
            3 => RowAlignment::StartInset,
            4 => RowAlignment::EndInset,
            _ => RowAlignment::Start,
        }
    }

    pub fn inset_percent(self) -> u8 {
        match self {
            RowAlignment::StartInset | RowAlignment::EndInset => 15,
            _ => 0,
        }
    }
}

/// One keyword on its own row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    pub word: String,
    /// Color at the same index in `top_5_colors`, if the backend sent one
    pub color: Option<String>,
    pub size: KeywordSize,
    pub alignment: RowAlignment,
    /// Rank in the backend's list
    pub original_index: usize,
}

/// Keywords in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCloud {
    pub rows: Vec<KeywordRow>,
}

impl KeywordCloud {
    /// Zips keywords with colors and sizes, then shuffles the row order.
    ///
    /// Size and color stay tied to the keyword's rank; only the order and
    /// therefore the alignment change from one render to the next.
    pub fn build<R: Rng + ?Sized>(words: &[String], colors: &[String], rng: &mut R) -> Self {
        let mut ranked: Vec<(usize, &String)> = words.iter().enumerate().collect();
        ranked.shuffle(rng);

        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(position, (rank, word))| KeywordRow {
                word: word.clone(),
                color: colors.get(rank).cloned(),
                size: KeywordSize::for_rank(rank),
                alignment: RowAlignment::for_position(position),
                original_index: rank,
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
