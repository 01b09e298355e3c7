//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
// 共通ヘルパーを使うためにインポート
use super::common::CardColor;
use log::debug;

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// - 空の列には K だけ置ける
/// - 空じゃない列では、置くカードが表向きで、一番上と色違い、
///   かつランクがちょうど 1 小さいこと
/// - 一番上が裏向きの列には何も置けない！
pub fn can_move_to_tableau(card: &Card, tableau_top: Option<&Card>) -> bool {
    match tableau_top {
        None => {
            let is_king = card.rank == Rank::King;
            debug!(
                "[Tableau Rule] Moving {:?} onto empty tableau. Is King: {}.",
                card.rank, is_king
            );
            is_king
        }
        Some(top) => {
            // カードは必ず表向きで動かすルール！裏のまま置くのはナシ。
            if !card.is_face_up {
                debug!("[Tableau Rule] Cannot place a face-down card.");
                return false;
            }
            // 裏向きのカードの上には何も積めない。
            if !top.is_face_up {
                debug!("[Tableau Rule] Target top card is face-down.");
                return false;
            }

            let colors_different = CardColor::of(card) != CardColor::of(top);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();

            debug!(
                "[Tableau Rule] Moving {:?} onto {:?}. Colors different: {}. Rank is one less: {}.",
                card.rank, top.rank, colors_different, rank_is_one_less
            );

            colors_different && rank_is_one_less
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Suit;

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.is_face_up = true;
        card
    }

    #[test]
    fn test_empty_tableau_accepts_only_king() {
        let king = face_up(Suit::Club, Rank::King);
        let queen = face_up(Suit::Diamond, Rank::Queen);

        assert!(can_move_to_tableau(&king, None), "空の場札に K は置けるはず");
        assert!(!can_move_to_tableau(&queen, None), "空の場札に Q は置けないはず");
        println!("空の場札テスト、成功！🎉");
    }

    #[test]
    fn test_alternating_descending() {
        let queen_red = face_up(Suit::Heart, Rank::Queen);
        let jack_black = face_up(Suit::Spade, Rank::Jack);
        let jack_red = face_up(Suit::Diamond, Rank::Jack);
        let ten_black = face_up(Suit::Spade, Rank::Ten);

        // 赤Q の上に 黒J は OK！
        assert!(can_move_to_tableau(&jack_black, Some(&queen_red)));
        // 赤Q の上に 赤J はダメ (同色)
        assert!(!can_move_to_tableau(&jack_red, Some(&queen_red)));
        // 赤Q の上に 黒10 はダメ (ランク飛ばし)
        assert!(!can_move_to_tableau(&ten_black, Some(&queen_red)));
        // 逆方向 (黒J の上に 赤Q) もダメ
        assert!(!can_move_to_tableau(&queen_red, Some(&jack_black)));
        println!("色違い降順テスト、成功！🎉");
    }

    #[test]
    fn test_face_down_cards_block_moves() {
        let queen_red_down = Card::new(Suit::Heart, Rank::Queen); // 裏向き
        let jack_black = face_up(Suit::Spade, Rank::Jack);
        let jack_black_down = Card::new(Suit::Spade, Rank::Jack); // 裏向き
        let queen_red = face_up(Suit::Heart, Rank::Queen);

        // 裏向きのカードの上には置けない
        assert!(!can_move_to_tableau(&jack_black, Some(&queen_red_down)));
        // 裏向きのカードを動かして置くこともできない
        assert!(!can_move_to_tableau(&jack_black_down, Some(&queen_red)));
        println!("裏向きカードテスト、成功！🎉");
    }
}
