// src/game/state_getter.rs
//! Read-only queries over the engine state, plus the JSON view the
//! presentation layer consumes. Nothing in here mutates anything.

use log::info;
use serde::Serialize;

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::logic::rules;

use super::engine::GameEngine;

/// JSON ビューに載せる 1 枚ぶんのカード情報だよ。
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// "QH" みたいな短縮名。表示側がそのまま使える！
    pub name: String,
}

impl CardData {
    fn from_card(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            is_face_up: card.is_face_up,
            name: card.short_name(),
        }
    }
}

/// ゲーム全体の JSON ビューだよ。表示側はこれを読むだけ！
#[derive(Debug, Clone, Serialize)]
pub struct GameStateData {
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub foundations: Vec<Vec<CardData>>,
    pub tableaus: Vec<Vec<CardData>>,
    pub score: i32,
    pub moves: u32,
    pub elapsed_seconds: u64,
    pub status: GameStatus,
}

impl GameEngine {
    // --- 山の中身を見るクエリ ---

    /// 山札の一番上のカード。
    pub fn top_of_stock(&self) -> Option<&Card> {
        self.stock.top()
    }

    /// 捨て札の一番上のカード。
    pub fn top_of_waste(&self) -> Option<&Card> {
        self.waste.top()
    }

    /// 組札 `index` (0-3) の一番上のカード。範囲外なら None。
    pub fn top_of_foundation(&self, index: u8) -> Option<&Card> {
        self.foundations
            .get(index as usize)
            .and_then(|pile| pile.top())
    }

    /// 組札 `index` の中身 (下から上へ)。範囲外なら空スライス。
    pub fn foundation_cards(&self, index: u8) -> &[Card] {
        self.foundations
            .get(index as usize)
            .map_or(&[], |pile| pile.cards())
    }

    /// 場札 `index` (0-6) の中身 (下から上へ)。範囲外なら空スライス。
    pub fn tableau_cards(&self, index: u8) -> &[Card] {
        self.tableaus
            .get(index as usize)
            .map_or(&[], |pile| pile.cards())
    }

    /// 組札 `index` に対応するスート。範囲外なら None。
    pub fn foundation_suit(&self, index: u8) -> Option<Suit> {
        rules::foundation_suit(index)
    }

    // --- 枚数クエリ ---

    pub fn stock_size(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_size(&self) -> usize {
        self.waste.len()
    }

    pub fn foundation_size(&self, index: u8) -> usize {
        self.foundations.get(index as usize).map_or(0, |p| p.len())
    }

    pub fn tableau_size(&self, index: u8) -> usize {
        self.tableaus.get(index as usize).map_or(0, |p| p.len())
    }

    /// 全部の山のカードの合計。どの時点でも 52 のはず！
    pub fn total_cards(&self) -> usize {
        let mut total = self.stock.len() + self.waste.len();
        for foundation in &self.foundations {
            total += foundation.len();
        }
        for tableau in &self.tableaus {
            total += tableau.len();
        }
        total
    }

    // --- 進行状態クエリ ---

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 勝ったかどうか。勝利判定はムーブ時に済んでいるので、ここは
    /// フラグを読むだけ。何回呼んでもボーナスは増えないよ！
    pub fn is_game_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    /// 経過秒数。
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// "m:ss" 形式の経過時間。1時間を超えたら "h:mm:ss"。
    pub fn formatted_time(&self) -> String {
        let seconds = self.elapsed_secs();
        let minutes = seconds / 60;
        let hours = minutes / 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes % 60, seconds % 60)
        } else {
            format!("{}:{:02}", minutes, seconds % 60)
        }
    }

    // --- 合法手クエリ (状態は変えない！) ---

    /// `card` を組札 `index` に置けるか。置き場のルールだけを見るよ。
    pub fn can_move_to_foundation(&self, card: &Card, index: u8) -> bool {
        if index >= 4 {
            return false;
        }
        rules::can_move_to_foundation(card, index, self.foundations[index as usize].top())
    }

    /// `card` を場札 `index` に置けるか。置き場のルールだけを見るよ。
    pub fn can_move_to_tableau(&self, card: &Card, index: u8) -> bool {
        if index >= 7 {
            return false;
        }
        rules::can_move_to_tableau(card, self.tableaus[index as usize].top())
    }

    /// 場札 `tableau_index` の `start_index` から上が動かせるまとまりか。
    pub fn can_move_sequence(&self, tableau_index: u8, start_index: usize) -> bool {
        if tableau_index >= 7 {
            return false;
        }
        rules::is_movable_run(self.tableaus[tableau_index as usize].cards(), start_index)
    }

    // --- JSON ビュー ---

    /// 表示側に渡すゲーム状態まるごとの JSON 文字列を作るよ。
    pub fn game_state_json(&self) -> Result<String, serde_json::Error> {
        let data = GameStateData {
            stock: self.stock.cards().iter().map(CardData::from_card).collect(),
            waste: self.waste.cards().iter().map(CardData::from_card).collect(),
            foundations: self
                .foundations
                .iter()
                .map(|pile| pile.cards().iter().map(CardData::from_card).collect())
                .collect(),
            tableaus: self
                .tableaus
                .iter()
                .map(|pile| pile.cards().iter().map(CardData::from_card).collect())
                .collect(),
            score: self.score,
            moves: self.moves,
            elapsed_seconds: self.elapsed_secs(),
            status: self.status,
        };
        serde_json::to_string(&data)
    }

    /// ゲーム状態のサマリーをログに出すよ。デバッグ用！
    pub fn log_game_state(&self) {
        info!("=== GAME STATE ===");
        info!(
            "Score: {} | Moves: {} | Time: {}",
            self.score,
            self.moves,
            self.formatted_time()
        );
        info!("Stock: {} cards", self.stock.len());
        info!("Waste: {} cards", self.waste.len());
        info!(
            "Foundations: {}, {}, {}, {}",
            self.foundations[0].len(),
            self.foundations[1].len(),
            self.foundations[2].len(),
            self.foundations[3].len()
        );
        let tableau_sizes: Vec<String> = self
            .tableaus
            .iter()
            .map(|pile| pile.len().to_string())
            .collect();
        info!("Tableau: {}", tableau_sizes.join(" "));
        info!("Total cards: {}", self.total_cards());
        info!("Undo states: {}", self.undo_stack.len());
        info!("==================");
    }
}
