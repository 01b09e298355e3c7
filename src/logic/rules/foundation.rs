//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
// 共通ヘルパーを使うためにインポート
use super::common::foundation_suit;
use log::debug;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// ルールはこれだけ！
/// - スートが組札のスートと一致していること
/// - 組札が空なら A だけが置ける
/// - 空じゃなければ、一番上のカードのちょうど次のランクだけが置ける
pub fn can_move_to_foundation(
    card: &Card,
    target_foundation_index: u8,
    foundation_top: Option<&Card>,
) -> bool {
    let target_suit = match foundation_suit(target_foundation_index) {
        Some(suit) => suit,
        None => {
            debug!("[Foundation Rule] Invalid foundation index: {}", target_foundation_index);
            return false;
        }
    };

    if card.suit != target_suit {
        debug!(
            "[Foundation Rule] Suit mismatch: {:?} vs foundation {:?}",
            card.suit, target_suit
        );
        return false;
    }

    match foundation_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.value() == top.rank.value() + 1,
    }
}
