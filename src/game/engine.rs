// src/game/engine.rs

// --- 必要なものをインポート ---
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::info;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;
use crate::logic::deck::{self, create_standard_deck, shuffle_deck};
use crate::logic::rules::win_condition::check_win_condition;
use crate::logic::scoring::{self, MoveKind};

use super::hint::{self, HintMove};
use super::move_handler;
use super::snapshot::GameSnapshot;
use super::stock_handler;

/// ゲーム全体を管理するエンジンだよ！🃏
///
/// カードの山 (Stock / Waste / Foundation×4 / Tableau×7) を全部ここが
/// 所有していて、状態を変える操作は必ずこのエンジンのコマンドメソッド
/// 経由で行う。表示側はクエリメソッドで読むだけ！
///
/// 各フィールドは `pub(crate)` にしてあるので、ハンドラモジュール
/// (stock_handler, move_handler, ...) からは触れるけど、クレートの外には
/// 公開されないよ。
pub struct GameEngine {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; 4],
    pub(crate) tableaus: [Pile; 7],

    pub(crate) score: i32,
    pub(crate) moves: u32,
    pub(crate) start_time: Instant,
    pub(crate) game_started: bool,
    pub(crate) status: GameStatus,

    pub(crate) undo_stack: VecDeque<GameSnapshot>,
}

impl GameEngine {
    /// 新しいゲームをセットアップして返すよ。
    ///
    /// # 処理の流れ
    /// 1. 新しいカードデッキ (52枚、全部裏向き) を作ってシャッフルする。
    /// 2. クロンダイクのルールに従って配る。
    ///    - 場札 (Tableau): 7列。1列目は1枚、2列目は2枚、... 7列目は7枚。
    ///      各列の一番上だけ表向き！
    ///    - 山札 (Stock): 残りの24枚、全部裏向き。
    /// 3. 配り終わった状態をアンドゥ用のベースラインとして保存する。
    pub fn new() -> Self {
        let mut engine = Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: [Pile::new(), Pile::new(), Pile::new(), Pile::new()],
            tableaus: [
                Pile::new(),
                Pile::new(),
                Pile::new(),
                Pile::new(),
                Pile::new(),
                Pile::new(),
                Pile::new(),
            ],
            score: 0,
            moves: 0,
            start_time: Instant::now(),
            game_started: false,
            status: GameStatus::Playing,
            undo_stack: VecDeque::new(),
        };

        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck);
        engine.deal(deck);

        // 配り終わった状態がアンドゥの基準点。この1個目のスナップショットは
        // 復元対象にはならない (can_undo は「2個以上」で true になる)。
        engine.push_snapshot("New game");

        info!("Game initialized with {} cards", engine.total_cards());
        engine
    }

    /// デッキをクロンダイクの初期配置に配るよ。
    fn deal(&mut self, mut deck: Vec<Card>) {
        // --- 場札への配置 ---
        // 列 col には col+1 枚。一番上 (row == col) だけ表向き！👀
        for col in 0..7 {
            for row in 0..=col {
                if let Some(mut card) = deck::draw(&mut deck) {
                    card.is_face_up = row == col;
                    self.tableaus[col].push(card);
                }
            }
        }

        // --- 山札への配置 ---
        // 残りは全部、裏向きのまま山札へ。
        while let Some(mut card) = deck::draw(&mut deck) {
            card.is_face_up = false;
            self.stock.push(card);
        }
    }

    /// 全部リセットして新しいゲームを始めるよ。
    /// アンドゥ履歴も得点も時間も、何もかも最初から！
    pub fn new_game(&mut self) {
        info!("Starting a new game. Previous progress is discarded.");
        *self = Self::new();
    }

    /// ゲーム時計をスタートする。2回目以降の呼び出しは何もしないよ。
    /// (最初に山札をめくった時に自動で呼ばれる)
    pub fn start_game(&mut self) {
        if !self.game_started {
            self.start_time = Instant::now();
            self.game_started = true;
        }
    }

    /// ゲーム開始からの経過時間。まだ始まってなければゼロ。
    pub fn elapsed(&self) -> Duration {
        if self.game_started {
            self.start_time.elapsed()
        } else {
            Duration::ZERO
        }
    }

    // --- コマンド (状態を変える操作) ---
    // 実装はそれぞれのハンドラモジュールにあるよ。ここは入り口だけ！

    /// 山札から1枚めくる。山札が空なら捨て札のリサイクルになるよ。
    /// 両方空なら false。
    pub fn draw_from_stock(&mut self) -> bool {
        stock_handler::draw_from_stock(self)
    }

    /// 指定のカードを組札 (0-3) に動かす。
    /// カードは捨て札か場札の一番上にある表向きのカードであること。
    pub fn move_to_foundation(&mut self, card: &Card, foundation_index: u8) -> bool {
        move_handler::move_to_foundation(self, card, foundation_index)
    }

    /// 指定のカードを場札 (0-6) に動かす。
    /// カードは捨て札・組札・場札いずれかの一番上にあること。
    pub fn move_to_tableau(&mut self, card: &Card, tableau_index: u8) -> bool {
        move_handler::move_to_tableau(self, card, tableau_index)
    }

    /// 場札から場札へ、連続したまとまりをまるごと動かす。
    pub fn move_sequence(&mut self, source_tableau: u8, start_index: usize, target_tableau: u8) -> bool {
        move_handler::move_sequence(self, source_tableau, start_index, target_tableau)
    }

    /// 直前のムーブを取り消す。-50点のペナルティ付き！
    pub fn undo(&mut self) -> bool {
        super::snapshot::undo(self)
    }

    // --- ヒント ---

    /// 今できる合法手を全部リストアップするよ。探索はしない、ただのスキャン！
    pub fn available_moves(&self) -> Vec<HintMove> {
        hint::find_available_moves(self)
    }

    // --- クレート内部用のヘルパー ---

    /// ムーブの得点差分を適用して、手数を1増やす。
    /// ユーザー操作1回につき必ず1回だけ呼ぶこと！
    pub(crate) fn apply_move_score(&mut self, kind: MoveKind) {
        self.score = scoring::apply_delta(self.score, kind);
        self.moves += 1;
    }

    /// 手数を増やさずに得点差分だけ適用する。
    /// めくりボーナス (+5) とアンドゥペナルティ (-50) はこっち！
    pub(crate) fn apply_score_only(&mut self, kind: MoveKind) {
        self.score = scoring::apply_delta(self.score, kind);
    }

    /// 組札にカードが増えるムーブの後に呼ぶ勝利チェック。
    ///
    /// 勝利ボーナスはここで一度だけ加算する。status が Won になったら
    /// 二度と加算されないし、クエリ側は status を読むだけで再計算しない。
    pub(crate) fn check_win_after_foundation_move(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let sizes = [
            self.foundations[0].len(),
            self.foundations[1].len(),
            self.foundations[2].len(),
            self.foundations[3].len(),
        ];
        if !check_win_condition(&sizes) {
            return;
        }

        self.status = GameStatus::Won;

        let time_bonus = scoring::time_bonus(self.elapsed().as_secs());
        let move_bonus = scoring::move_bonus(self.moves);
        self.score += time_bonus + move_bonus;

        info!("Game completed! 🏆");
        info!("Time bonus: {}", time_bonus);
        info!("Move bonus: {}", move_bonus);
        info!("Final score: {}", self.score);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
