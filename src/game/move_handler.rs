// src/game/move_handler.rs
//! Executes the user-directed card moves: single cards onto foundations
//! and tableaus, and multi-card tableau sequences.
//!
//! ムーブの流れはどれも同じだよ:
//! 1. 移動元を探して、ルール判定を全部先に済ませる (ダメなら何も変えない)
//! 2. 移動元からカードを取り除く
//! 3. 移動元が場札で、新しい一番上が裏向きならめくる (+5点、手数なし)
//! 4. 移動先に積む
//! 5. ムーブ種別の得点差分を適用して手数を 1 増やす
//! 6. スナップショットを積んで、組札が増えたなら勝利チェック

use log::{debug, info};

use crate::components::card::Card;
use crate::components::pile::PileType;
use crate::logic::rules;
use crate::logic::scoring::MoveKind;

use super::engine::GameEngine;

/// 指定されたカードが今どの山の一番上にあるかを探すよ。
/// 同一性は (suit, rank)。場札は表向きの一番上だけが対象！
/// 得点種別 (MoveKind) はこの結果から構造的に導くので、説明文字列の
/// 中身を見るような判定はどこにもない。
fn find_top_card_source(game: &GameEngine, card: &Card) -> Option<PileType> {
    if game.waste.top().map_or(false, |top| top.is_same_card(card)) {
        return Some(PileType::Waste);
    }

    for (i, tableau) in game.tableaus.iter().enumerate() {
        if tableau
            .top()
            .map_or(false, |top| top.is_face_up && top.is_same_card(card))
        {
            return Some(PileType::Tableau(i as u8));
        }
    }

    for (i, foundation) in game.foundations.iter().enumerate() {
        if foundation.top().map_or(false, |top| top.is_same_card(card)) {
            return Some(PileType::Foundation(i as u8));
        }
    }

    None
}

/// 移動元が場札だったとき、新しく見えた一番上のカードをめくるよ。
/// めくれたら +5 点 (手数は増えない)。
fn flip_revealed_card(game: &mut GameEngine, tableau_index: usize) {
    let mut revealed = None;
    if let Some(top) = game.tableaus[tableau_index].top_mut() {
        if !top.is_face_up {
            top.is_face_up = true;
            revealed = Some(top.short_name());
        }
    }

    if let Some(name) = revealed {
        info!("Flipped card: {}", name);
        game.apply_score_only(MoveKind::RevealTableauCard);
    }
}

/// 指定のカードを組札 `foundation_index` (0-3) に動かすよ。
/// 移動元は捨て札か場札の一番上だけ。組札から組札へは動かさない。
pub(crate) fn move_to_foundation(game: &mut GameEngine, card: &Card, foundation_index: u8) -> bool {
    if foundation_index >= 4 {
        debug!("Invalid foundation index: {}", foundation_index);
        return false;
    }
    let target = foundation_index as usize;

    let source = match find_top_card_source(game, card) {
        Some(source @ (PileType::Waste | PileType::Tableau(_))) => source,
        _ => {
            debug!("Card {} is not movable to a foundation.", card.short_name());
            return false;
        }
    };

    if !rules::can_move_to_foundation(card, foundation_index, game.foundations[target].top()) {
        info!(
            "Cannot add {} to foundation {}",
            card.short_name(),
            foundation_index
        );
        return false;
    }

    let (moved, kind) = match source {
        PileType::Waste => (game.waste.pop(), MoveKind::WasteToFoundation),
        PileType::Tableau(i) => {
            let popped = game.tableaus[i as usize].pop();
            flip_revealed_card(game, i as usize);
            (popped, MoveKind::TableauToFoundation)
        }
        // Stock と Foundation は上で弾いているので来ない
        PileType::Stock | PileType::Foundation(_) => return false,
    };

    let moved = match moved {
        Some(card) => card,
        None => return false,
    };

    info!(
        "Successfully moved {} to foundation {}",
        moved.short_name(),
        foundation_index
    );
    game.foundations[target].push(moved);

    game.apply_move_score(kind);
    game.push_snapshot(&format!("Move to Foundation {}", foundation_index));
    game.check_win_after_foundation_move();
    true
}

/// 指定のカードを場札 `tableau_index` (0-6) に動かすよ。
/// 移動元は捨て札・組札・別の場札いずれかの一番上。
pub(crate) fn move_to_tableau(game: &mut GameEngine, card: &Card, tableau_index: u8) -> bool {
    if tableau_index >= 7 {
        debug!("Invalid tableau index: {}", tableau_index);
        return false;
    }
    let target = tableau_index as usize;

    let source = match find_top_card_source(game, card) {
        Some(source) => source,
        None => {
            debug!("Card {} is not on top of any pile.", card.short_name());
            return false;
        }
    };

    // 同じ場札の上に乗せ直すのはムーブじゃない！
    if source == PileType::Tableau(tableau_index) {
        return false;
    }

    // 判定は実際に山にあるカードで行う (呼び出し側のコピーの向きは信用しない)。
    let actual = match source {
        PileType::Waste => game.waste.top().cloned(),
        PileType::Tableau(i) => game.tableaus[i as usize].top().cloned(),
        PileType::Foundation(i) => game.foundations[i as usize].top().cloned(),
        PileType::Stock => None, // 山札から直接場札へは動かせない
    };
    let actual = match actual {
        Some(card) => card,
        None => return false,
    };

    if !rules::can_move_to_tableau(&actual, game.tableaus[target].top()) {
        info!(
            "Cannot add {} to tableau {}",
            actual.short_name(),
            tableau_index
        );
        return false;
    }

    let (moved, kind) = match source {
        PileType::Waste => (game.waste.pop(), MoveKind::WasteToTableau),
        PileType::Foundation(i) => (
            game.foundations[i as usize].pop(),
            MoveKind::FoundationToTableau,
        ),
        PileType::Tableau(i) => {
            let popped = game.tableaus[i as usize].pop();
            flip_revealed_card(game, i as usize);
            (popped, MoveKind::TableauToTableau)
        }
        PileType::Stock => return false,
    };

    let moved = match moved {
        Some(card) => card,
        None => return false,
    };

    info!(
        "Successfully moved {} to tableau {}",
        moved.short_name(),
        tableau_index
    );
    game.tableaus[target].push(moved);

    game.apply_move_score(kind);
    game.push_snapshot(&format!("Move to Tableau {}", tableau_index));
    true
}

/// 場札 `source_tableau` の `start_index` から上のまとまりをまるごと
/// `target_tableau` へ動かすよ。1枚だけのまとまりも OK！
pub(crate) fn move_sequence(
    game: &mut GameEngine,
    source_tableau: u8,
    start_index: usize,
    target_tableau: u8,
) -> bool {
    if source_tableau >= 7 || target_tableau >= 7 {
        debug!(
            "Invalid tableau index: {} -> {}",
            source_tableau, target_tableau
        );
        return false;
    }
    if source_tableau == target_tableau {
        return false;
    }
    let source = source_tableau as usize;
    let target = target_tableau as usize;

    if !rules::is_movable_run(game.tableaus[source].cards(), start_index) {
        debug!(
            "Tableau {} from index {} is not a movable run.",
            source_tableau, start_index
        );
        return false;
    }

    // まとまりの一番下のカードが移動先に乗せられるか。
    // is_movable_run が通っているので start_index は必ず範囲内！
    let bottom = game.tableaus[source].cards()[start_index].clone();
    if !rules::can_move_to_tableau(&bottom, game.tableaus[target].top()) {
        info!(
            "Cannot move sequence starting with {} to tableau {}",
            bottom.short_name(),
            target_tableau
        );
        return false;
    }

    let moving = game.tableaus[source].split_off(start_index);
    flip_revealed_card(game, source);

    let count = moving.len();
    game.tableaus[target].extend(moving);

    info!(
        "Moved sequence of {} cards from tableau {} to tableau {}",
        count, source_tableau, target_tableau
    );
    game.apply_move_score(MoveKind::TableauToTableau);
    game.push_snapshot(&format!("Move sequence to Tableau {}", target_tableau));
    true
}
