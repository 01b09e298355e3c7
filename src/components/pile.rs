// src/components/pile.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Debug: println! などで中身をデバッグ表示できるようにする。
/// PartialEq, Eq: == 演算子で比較できるようにする。
/// Serialize, Deserialize: この Enum を JSON 形式に変換したり、JSON から戻したりできるようにする！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 番号 (0-3) で管理するよ。
    /// 0: Heart ❤️, 1: Spade ♠️, 2: Diamond ♦️, 3: Club ♣️ の約束！
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

/// カードの山そのものを表す構造体だよ。
/// 順序付きのスタックで、Vec の末尾が「一番上」！
/// 一番上のカードが最初に取り除かれて、新しいカードも一番上に積まれるよ。
///
/// 受け入れルール (どのカードを置けるか) はここには持たせず、
/// `logic::rules` の判定関数にまとめてあるよ。Pile は純粋な入れ物！
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// 空の山を作るよ。
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// カードのリストから山を作るよ。末尾が一番上になる！
    /// スナップショットからの復元で使うよ。
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// 一番上にカードを積むよ。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上のカードを取り除いて返すよ。空なら None！
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 一番上のカードを覗くよ（取り除かない）。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番上のカードへの可変参照。表向きにひっくり返す時に使うよ。
    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// 山が空かどうか。
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 山の枚数。
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 下から上への並びをスライスで見るよ（読み取り専用！）。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// `at` 番目から上をまとめて取り外すよ。場札の連続移動で使う！
    /// 戻り値は下から上への並びのまま。
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<Card> {
        self.cards.split_off(at)
    }

    /// まとめて積むよ。`cards` は下から上への並びで渡してね。
    pub(crate) fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn test_pile_stack_order() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());

        pile.push(Card::new(Suit::Heart, Rank::Ace));
        pile.push(Card::new(Suit::Spade, Rank::Two));

        // 後から積んだカードが一番上！
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top().unwrap().rank, Rank::Two);

        let popped = pile.pop().unwrap();
        assert_eq!(popped.suit, Suit::Spade);
        assert_eq!(pile.top().unwrap().rank, Rank::Ace);

        println!("Pile のスタック順テスト、成功！👍");
    }

    #[test]
    fn test_pile_split_and_extend() {
        let mut pile = Pile::new();
        pile.push(Card::new(Suit::Heart, Rank::King));
        pile.push(Card::new(Suit::Spade, Rank::Queen));
        pile.push(Card::new(Suit::Diamond, Rank::Jack));

        // 上 2 枚をまとめて取り外す
        let moved = pile.split_off(1);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[0].rank, Rank::Queen); // 下から上への並び
        assert_eq!(pile.len(), 1);

        // 別の山に積み直す
        let mut other = Pile::new();
        other.extend(moved);
        assert_eq!(other.len(), 2);
        assert_eq!(other.top().unwrap().rank, Rank::Jack);

        println!("Pile の split/extend テスト、成功！👍");
    }

    #[test]
    fn test_pop_empty_pile() {
        let mut pile = Pile::new();
        // 空の山から取ろうとしても None が返るだけ。パニックしない！
        assert!(pile.pop().is_none());
        assert!(pile.top().is_none());
        println!("空の Pile テスト、成功！👍");
    }
}
