//! Glyph alphabets grouped into semantic categories
//!
//! Each category is an immutable ordered sequence of characters. Cells pick a
//! category from their brightness band and then a uniformly random character
//! from it, so every glyph on screen belongs to exactly one category.

use std::sync::LazyLock;

use rand::Rng;

use crate::math::probability::weighted_pair;

/// A named, fixed-order glyph alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphCategory {
    /// Natural phenomena
    Nature,
    /// Numerals
    Numbers,
    /// Time words
    Time,
    /// Directions and positions
    Space,
    /// Feelings
    Emotions,
    /// Body parts
    Body,
    /// Qualities and opposites
    Qualities,
    /// Classical elements and metals
    Elements,
    /// Verbs
    Actions,
    /// Abstract concepts
    Abstract,
    /// Thin katakana strokes
    Thin,
}

static CATEGORY_CHARS: LazyLock<[Vec<char>; 11]> =
    LazyLock::new(|| GlyphCategory::ALL.map(|category| category.alphabet().chars().collect()));

impl GlyphCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Nature,
        Self::Numbers,
        Self::Time,
        Self::Space,
        Self::Emotions,
        Self::Body,
        Self::Qualities,
        Self::Elements,
        Self::Actions,
        Self::Abstract,
        Self::Thin,
    ];

    /// The category's characters as a string
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Nature => "日月火水木金土雨雪風雲山川海空星光闇霧露霜虹雷電波浪森林花草葉枝根幹種実",
            Self::Numbers => "一二三四五六七八九十百千万億兆京垓",
            Self::Time => "年月日時分秒瞬間永遠過去現在未来朝昼夜暁黄昏",
            Self::Space => "東西南北上下左右中央前後内外遠近高低深浅広狭",
            Self::Emotions => "愛憎喜怒哀楽悲歓希望絶望夢想憂愁恋慕",
            Self::Body => "心魂体血肉骨皮髪目耳鼻口手足頭胸腹背腰膝指爪歯舌唇",
            Self::Qualities => "大小新古高低長短明暗快慢強弱好悪美醜清濁軽重",
            Self::Elements => "氷炎雷風土水火金木石鉄銀銅",
            Self::Actions => "見聞知感思考学習創造破壊建設移動停止",
            Self::Abstract => "真偽善悪正邪道理法則秩序混沌平和戦争",
            Self::Thin => {
                "イロハニホヘトチリヌルヲワカヨタレソツネナラムウヰノオクヤマケフコエテアサキユメミシヱヒモセス"
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// The category's characters in order
    pub fn chars(self) -> &'static [char] {
        CATEGORY_CHARS
            .get(self.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `glyph` appears in this category
    pub fn contains(self, glyph: char) -> bool {
        self.chars().contains(&glyph)
    }

    /// Uniformly random character from this category
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        let chars = self.chars();
        let index = rng.random_range(0..chars.len().max(1));
        chars.get(index).copied().unwrap_or(' ')
    }

    /// Category a cell starts in, from its position
    ///
    /// Diagonal stripes cycle through thin, numbers, nature, time and space.
    pub const fn initial_for_position(x: usize, y: usize) -> Self {
        match (x + y) % 5 {
            0 => Self::Thin,
            1 => Self::Numbers,
            2 => Self::Nature,
            3 => Self::Time,
            _ => Self::Space,
        }
    }

    /// Choose a category for a glyph change from the cell's brightness band
    pub fn for_brightness<R: Rng + ?Sized>(brightness: f64, rng: &mut R) -> Self {
        if brightness > 0.8 {
            weighted_pair(rng, Self::Nature, Self::Elements, 0.6)
        } else if brightness > 0.6 {
            weighted_pair(rng, Self::Emotions, Self::Abstract, 0.5)
        } else if brightness > 0.4 {
            weighted_pair(rng, Self::Time, Self::Space, 0.5)
        } else if brightness > 0.2 {
            weighted_pair(rng, Self::Body, Self::Qualities, 0.5)
        } else {
            weighted_pair(rng, Self::Thin, Self::Numbers, 0.7)
        }
    }
}

/// Whether `glyph` belongs to any category
pub fn is_known_glyph(glyph: char) -> bool {
    GlyphCategory::ALL
        .iter()
        .any(|category| category.contains(glyph))
}
