// src/game/stock_handler.rs
//! Handles the Stock pile actions: dealing one card to Waste, and
//! recycling the Waste back into the Stock when the Stock runs out.

use log::info;

use crate::logic::rules::stock_waste;
use crate::logic::scoring::MoveKind;

use super::engine::GameEngine;

/// 山札アクションの入り口だよ。
///
/// - 山札にカードがあれば 1 枚めくって捨て札へ (1手、得点なし)。
/// - 山札が空で捨て札にカードがあれば、捨て札を全部裏向きにして
///   山札に戻す「リサイクル」(1手、-100点)。
/// - 両方空なら何もしないで false。スナップショットも取らない。
pub fn draw_from_stock(game: &mut GameEngine) -> bool {
    // 最初の山札アクションでゲーム時計がスタートする。
    game.start_game();

    let stock_empty = game.stock.is_empty();
    if stock_waste::can_deal_from_stock(stock_empty) {
        deal_one_card(game)
    } else if stock_waste::can_recycle_waste(stock_empty, game.waste.is_empty()) {
        recycle_waste(game)
    } else {
        info!("Stock and Waste are both empty. Nothing to draw.");
        false
    }
}

/// Deals the top card of the Stock to the Waste, face up.
fn deal_one_card(game: &mut GameEngine) -> bool {
    let mut card = match game.stock.pop() {
        Some(card) => card,
        None => return false, // can_deal_from_stock checked, should not happen
    };

    card.is_face_up = true;
    info!("Dealt {} from Stock to Waste.", card.short_name());
    game.waste.push(card);

    // めくるのは 1 手。ただし得点は動かないので moves だけ進める。
    game.moves += 1;
    game.push_snapshot("Draw from Stock");
    true
}

/// Moves every Waste card back onto the Stock, face down, one at a time
/// from the top of the Waste. The Waste order reversed becomes the new
/// draw order.
fn recycle_waste(game: &mut GameEngine) -> bool {
    info!("Recycling {} cards from Waste to Stock.", game.waste.len());

    while let Some(mut card) = game.waste.pop() {
        card.is_face_up = false;
        game.stock.push(card);
    }

    // リサイクルは -100 点の 1 手。通常のめくりとは別のラベルで記録！
    game.apply_move_score(MoveKind::RecycleWaste);
    game.push_snapshot("Recycle Waste to Stock");
    true
}
