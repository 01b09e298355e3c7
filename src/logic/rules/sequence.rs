//! 場札の複数枚移動（連続したカードのまとまり）のルールを定義するよ。

use crate::components::card::Card;
use super::common::CardColor;

/// 場札の `start_index` から一番上までが「動かせるまとまり」かチェックする。
///
/// 条件はこう！
/// - `start_index` のカードが表向きであること
/// - まとまりの中の隣り合う 2 枚がすべて、両方表向きで、色違いで、
///   ランクがちょうど 1 ずつ下がっていくこと
/// - 一番上の 1 枚だけなら、表向きでさえあれば OK
///
/// まとまりの一番下 (インデックス最小 = ランク最大) のカードが
/// 移動先に置けるかどうかは `can_move_to_tableau` で別途チェックしてね。
pub fn is_movable_run(cards: &[Card], start_index: usize) -> bool {
    if start_index >= cards.len() {
        return false;
    }

    if !cards[start_index].is_face_up {
        return false;
    }

    // 隣り合うペアを順番にチェック。1枚だけならループは回らず true！
    for pair in cards[start_index..].windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        if !current.is_face_up || !next.is_face_up {
            return false;
        }

        let different_color = CardColor::of(current) != CardColor::of(next);
        let descending = current.rank.value() == next.rank.value() + 1;

        if !different_color || !descending {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.is_face_up = true;
        card
    }

    #[test]
    fn test_single_top_card_is_movable() {
        let pile = vec![
            Card::new(Suit::Club, Rank::Nine), // 裏向き
            face_up(Suit::Heart, Rank::Five),
        ];
        // 一番上の表向き 1 枚は自明に動かせる
        assert!(is_movable_run(&pile, 1));
        // 裏向きのカードから始まるまとまりはダメ
        assert!(!is_movable_run(&pile, 0));
        println!("1枚まとまりテスト、成功！🎉");
    }

    #[test]
    fn test_valid_alternating_run() {
        let pile = vec![
            face_up(Suit::Spade, Rank::Queen),  // 黒Q
            face_up(Suit::Heart, Rank::Jack),   // 赤J
            face_up(Suit::Club, Rank::Ten),     // 黒10
        ];
        // Q-J-10 の色違い降順はまるごと動かせる！
        assert!(is_movable_run(&pile, 0));
        // 途中からでも OK
        assert!(is_movable_run(&pile, 1));
        assert!(is_movable_run(&pile, 2));
        println!("色違い降順まとまりテスト、成功！🎉");
    }

    #[test]
    fn test_broken_runs_are_not_movable() {
        // 同色が続くまとまり
        let same_color = vec![
            face_up(Suit::Spade, Rank::Queen), // 黒Q
            face_up(Suit::Club, Rank::Jack),   // 黒J (同色！)
        ];
        assert!(!is_movable_run(&same_color, 0));

        // ランクが飛ぶまとまり
        let skipping = vec![
            face_up(Suit::Spade, Rank::Queen), // 黒Q
            face_up(Suit::Heart, Rank::Ten),   // 赤10 (J を飛ばしてる！)
        ];
        assert!(!is_movable_run(&skipping, 0));

        // 途中に裏向きが混ざるまとまり
        let hidden_middle = vec![
            face_up(Suit::Spade, Rank::Queen),
            Card::new(Suit::Heart, Rank::Jack), // 裏向き！
            face_up(Suit::Club, Rank::Ten),
        ];
        assert!(!is_movable_run(&hidden_middle, 0));

        println!("壊れたまとまりテスト、成功！🎉");
    }

    #[test]
    fn test_out_of_range_start_index() {
        let pile = vec![face_up(Suit::Heart, Rank::Five)];
        assert!(!is_movable_run(&pile, 1));
        assert!(!is_movable_run(&pile, 99));
        assert!(!is_movable_run(&[], 0));
        println!("範囲外開始インデックステスト、成功！🎉");
    }
}
