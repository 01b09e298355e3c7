// src/game/snapshot.rs
//! アンドゥ用のスナップショット (全部の山の深いコピー) を定義するよ。
//!
//! 逆操作を組み立てる方式じゃなくて、状態まるごとコピー方式！
//! 1回のコピーはカード52枚ぶんだけだから、このスケールなら全然OK。

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::logic::scoring::MoveKind;

use super::engine::GameEngine;

/// アンドゥ履歴に保持するスナップショットの最大数。
/// いっぱいになったら一番古いものから捨てるよ。
pub(crate) const MAX_UNDO_STATES: usize = 50;

/// ある瞬間のゲーム状態の、完全に独立したコピーだよ。📸
///
/// 全部の山のカード列 (向きも含む) と、その時点の得点・手数を持つ。
/// エンジン本体とカードを共有しない深いコピーなので、後からエンジンが
/// どう変わってもスナップショットは影響を受けないよ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    tableaus: [Vec<Card>; 7],
    score: i32,
    moves: u32,
    label: String,
}

impl GameSnapshot {
    /// 今のエンジン状態を丸ごとコピーしてスナップショットを作るよ。
    pub fn capture(game: &GameEngine, label: &str) -> Self {
        Self {
            stock: game.stock.cards().to_vec(),
            waste: game.waste.cards().to_vec(),
            foundations: [
                game.foundations[0].cards().to_vec(),
                game.foundations[1].cards().to_vec(),
                game.foundations[2].cards().to_vec(),
                game.foundations[3].cards().to_vec(),
            ],
            tableaus: [
                game.tableaus[0].cards().to_vec(),
                game.tableaus[1].cards().to_vec(),
                game.tableaus[2].cards().to_vec(),
                game.tableaus[3].cards().to_vec(),
                game.tableaus[4].cards().to_vec(),
                game.tableaus[5].cards().to_vec(),
                game.tableaus[6].cards().to_vec(),
            ],
            score: game.score,
            moves: game.moves,
            label: label.to_string(),
        }
    }

    /// このスナップショットの状態をエンジンに書き戻すよ。
    /// 山・得点・手数だけを戻す。時計やゲーム進行状態はそのまま！
    pub(crate) fn restore(&self, game: &mut GameEngine) {
        game.stock = Pile::from_cards(self.stock.clone());
        game.waste = Pile::from_cards(self.waste.clone());
        for i in 0..4 {
            game.foundations[i] = Pile::from_cards(self.foundations[i].clone());
        }
        for i in 0..7 {
            game.tableaus[i] = Pile::from_cards(self.tableaus[i].clone());
        }
        game.score = self.score;
        game.moves = self.moves;

        info!(
            "Game state restored: {} (Score: {}, Moves: {})",
            self.label, self.score, self.moves
        );
    }

    /// スナップショットに付けた説明ラベル。デバッグ表示用だよ。
    /// 得点計算には絶対に使わないこと！(ムーブの種類は MoveKind で渡す)
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl GameEngine {
    /// 今の状態をスナップショットとしてアンドゥ履歴に積むよ。
    /// 成功したムーブの最後に1回だけ呼ぶこと！
    pub(crate) fn push_snapshot(&mut self, label: &str) {
        // 履歴がいっぱいなら一番古いものを先に捨てる (FIFO)。
        if self.undo_stack.len() >= MAX_UNDO_STATES {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(GameSnapshot::capture(self, label));
        debug!(
            "Saved game state: {} (Stack size: {})",
            label,
            self.undo_stack.len()
        );
    }

    /// アンドゥできるかどうか。
    /// 履歴の一番下はベースライン (配り終わった状態か、切り捨て後の最古状態)
    /// で、それ自体には戻れないから「2個以上」で true！
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }
}

/// 直前のムーブを取り消すよ。
///
/// 一番上のスナップショット (= 今の状態) を捨てて、その下のスナップショット
/// (= 直前のムーブの前の状態) を書き戻す。そのあと -50 点のペナルティを
/// 得点だけに適用する (手数は増えない)。履歴が足りなければ何もせず false。
pub(crate) fn undo(game: &mut GameEngine) -> bool {
    if !game.can_undo() {
        info!("Cannot undo - no previous states available");
        return false;
    }

    // 一番上 = 今の状態のスナップショット。これはもう要らないので捨てる。
    if let Some(current) = game.undo_stack.pop_back() {
        debug!("Undoing: {}", current.label());
    }

    // 新しい一番上が復元先。
    let previous = match game.undo_stack.back() {
        Some(snapshot) => snapshot.clone(),
        None => return false, // can_undo で弾いているので来ない
    };
    previous.restore(game);

    // ペナルティは得点だけ！手数カウンタは復元された値のまま。
    game.apply_score_only(MoveKind::Undo);
    true
}
