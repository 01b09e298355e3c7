//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit, ALL_SUITS};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// カードから直接色を取得するショートカット。
    pub fn of(card: &Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Spade ♠️, 2: Diamond ♦️, 3: Club ♣️
/// (ALL_SUITS の並び順と同じだよ)
pub fn foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(foundation_index as usize).copied()
}
