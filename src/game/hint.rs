// src/game/hint.rs
//! 今できる合法手を列挙するモジュールだよ！🪄✨
//! 探索や先読みはしない。ルール判定を全部の組み合わせに当てるだけの
//! 単純なスキャン！表示側がヒント表示に使うよ。

use itertools::Itertools;
use serde::Serialize;

use crate::logic::rules;

use super::engine::GameEngine;

/// 提示できるヒント 1 件ぶんだよ。
/// どのカードをどこへ、が構造的に入ってる。文字列じゃないよ！
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HintMove {
    /// 山札をめくれるよ。
    DrawFromStock,
    /// 捨て札を山札に戻せるよ (-100点だけど！)。
    RecycleWaste,
    /// 捨て札の一番上を組札へ。
    WasteToFoundation { foundation: u8 },
    /// 捨て札の一番上を場札へ。
    WasteToTableau { tableau: u8 },
    /// 場札の一番上を組札へ。
    TableauToFoundation { tableau: u8, foundation: u8 },
    /// 場札のまとまりを別の場札へ。
    TableauToTableau {
        source: u8,
        start_index: usize,
        target: u8,
    },
}

/// 今の状態でできる合法手を全部集めるよ。
pub fn find_available_moves(game: &GameEngine) -> Vec<HintMove> {
    let mut moves = Vec::new();

    // --- 山札 ---
    if !game.stock.is_empty() {
        moves.push(HintMove::DrawFromStock);
    } else if !game.waste.is_empty() {
        moves.push(HintMove::RecycleWaste);
    }

    // --- 捨て札の一番上 ---
    if let Some(top) = game.waste.top() {
        for foundation in 0..4u8 {
            if rules::can_move_to_foundation(
                top,
                foundation,
                game.foundations[foundation as usize].top(),
            ) {
                moves.push(HintMove::WasteToFoundation { foundation });
            }
        }
        for tableau in 0..7u8 {
            if rules::can_move_to_tableau(top, game.tableaus[tableau as usize].top()) {
                moves.push(HintMove::WasteToTableau { tableau });
            }
        }
    }

    // --- 場札の一番上 → 組札 (全組み合わせをチェック) ---
    for (tableau, foundation) in (0..7u8).cartesian_product(0..4u8) {
        if let Some(top) = game.tableaus[tableau as usize].top() {
            if top.is_face_up
                && rules::can_move_to_foundation(
                    top,
                    foundation,
                    game.foundations[foundation as usize].top(),
                )
            {
                moves.push(HintMove::TableauToFoundation { tableau, foundation });
            }
        }
    }

    // --- 場札のまとまり → 別の場札 ---
    for source in 0..7u8 {
        let cards = game.tableaus[source as usize].cards();
        for start_index in 0..cards.len() {
            if !rules::is_movable_run(cards, start_index) {
                continue;
            }
            let bottom = &cards[start_index];
            for target in (0..7u8).filter(|&t| t != source) {
                if rules::can_move_to_tableau(bottom, game.tableaus[target as usize].top()) {
                    moves.push(HintMove::TableauToTableau {
                        source,
                        start_index,
                        target,
                    });
                }
            }
        }
    }

    moves
}
