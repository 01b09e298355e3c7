// src/components/card.rs

// serde を使う宣言！カード情報を JSON ビューとして出力する時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♠️♦️♣️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashSet で重複チェックする時に使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Spade,   // ♠️
    Diamond, // ♦️
    Club,    // ♣️
}

impl Suit {
    /// ログや JSON ビューで使う 1 文字の略記を返すよ。("H", "S", "D", "C")
    pub fn short(self) -> &'static str {
        match self {
            Suit::Heart => "H",
            Suit::Spade => "S",
            Suit::Diamond => "D",
            Suit::Club => "C",
        }
    }
}

/// 全スートの一覧。デッキ生成でループするのに使うよ。
/// 並び順は組札 (Foundation) のインデックス割り当てと同じ！
/// (0: Heart, 1: Spade, 2: Diamond, 3: Club)
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Diamond, Suit::Club];

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// クロンダイクの積み上げ判定で使うからね！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

impl Rank {
    /// ランクの数値 (Ace=1 .. King=13) を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// ログや JSON ビューで使う略記を返すよ。("A", "2", ..., "10", "J", "Q", "K")
    pub fn short(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全ランクの一覧。こっちもデッキ生成用！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す構造体だよ！🃏
///
/// 同一性は (suit, rank) の組で決まって、1 ゲームには 52 通りが
/// ちょうど 1 枚ずつ存在するよ。変更できるのは `is_face_up` だけ！
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)] // Copy は外したよ。カードの向きは変わる可能性があるからね。
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// 新しいカードを作るよ。最初は裏向き！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 赤いカード（ハートかダイヤ）かどうか。
    pub fn is_red(&self) -> bool {
        matches!(self.suit, Suit::Heart | Suit::Diamond)
    }

    /// 黒いカード（スペードかクラブ）かどうか。
    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    /// 同じカードか ((suit, rank) の同一性)。向きは見ないよ！
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// "QH" とか "10S" みたいな短い名前。ログと JSON ビューで使うよ。
    pub fn short_name(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.short())
    }
}

// --- テスト ---
// 簡単なテストを書いておこう！
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した Suit, Rank, Card を使う

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        // 値がちゃんと設定されてるか確認
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert_eq!(card.is_face_up, false); // 最初は裏向き

        println!("作成したカード: {:?}", card);
        println!("Card 作成テスト、成功！🎉");
    }

    #[test]
    fn rank_comparison() {
        // ランクの大小比較がちゃんとできるか確認
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);

        // 数値変換も確認！ Ace=1 .. King=13
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::King.value(), 13);

        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn card_colors() {
        assert!(Card::new(Suit::Heart, Rank::Five).is_red());
        assert!(Card::new(Suit::Diamond, Rank::Five).is_red());
        assert!(Card::new(Suit::Spade, Rank::Five).is_black());
        assert!(Card::new(Suit::Club, Rank::Five).is_black());
        println!("カードの色テスト、成功！🎉");
    }

    #[test]
    fn card_identity_ignores_facing() {
        let mut a = Card::new(Suit::Heart, Rank::Queen);
        let b = Card::new(Suit::Heart, Rank::Queen);
        a.is_face_up = true;
        // 向きが違っても同じカードとして扱う！
        assert!(a.is_same_card(&b));
        assert!(!a.is_same_card(&Card::new(Suit::Diamond, Rank::Queen)));
        println!("カード同一性テスト、成功！🎉");
    }

    #[test]
    fn short_names() {
        assert_eq!(Card::new(Suit::Heart, Rank::Queen).short_name(), "QH");
        assert_eq!(Card::new(Suit::Spade, Rank::Ten).short_name(), "10S");
        assert_eq!(Card::new(Suit::Club, Rank::Ace).short_name(), "AC");
        println!("短縮名テスト、成功！🎉");
    }
}
