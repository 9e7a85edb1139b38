use jest_core::{Card, ClassicScorer, Scorer, Suit};

fn c(value: u8, suit: Suit) -> Card {
    Card::new(value, suit)
}

macro_rules! score_case {
    ($name:ident, [$($card:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let jest: Vec<Card> = vec![$($card),*];
            assert_eq!(ClassicScorer.score(&jest), $expected, "jest {:?}", jest);
        }
    };
}

score_case!(empty_jest, [], 0);
score_case!(lone_spade_ace, [c(1, Suit::Spade)], 5);
score_case!(lone_ace_and_club, [c(1, Suit::Spade), c(2, Suit::Club)], 7);
score_case!(ace_with_suit_company, [c(1, Suit::Spade), c(4, Suit::Spade)], 5);
score_case!(lone_diamond_ace, [c(1, Suit::Diamond)], -5);
score_case!(black_pair, [c(3, Suit::Spade), c(3, Suit::Club)], 8);
score_case!(black_pair_of_lone_aces, [c(1, Suit::Spade), c(1, Suit::Club)], 12);
score_case!(
    black_pair_counts_values_once,
    [c(2, Suit::Spade), c(2, Suit::Club), c(4, Suit::Spade), c(4, Suit::Club)],
    16
);
score_case!(diamonds_subtract, [c(3, Suit::Diamond), c(2, Suit::Spade)], -1);
score_case!(hearts_without_joker, [c(4, Suit::Heart), c(3, Suit::Heart)], 0);
score_case!(joker_without_hearts, [Card::joker()], 4);
score_case!(joker_one_heart, [Card::joker(), c(3, Suit::Heart)], -3);
score_case!(
    joker_three_hearts,
    [Card::joker(), c(1, Suit::Heart), c(2, Suit::Heart), c(4, Suit::Heart)],
    -7
);
score_case!(
    joker_all_hearts,
    [
        Card::joker(),
        c(1, Suit::Heart),
        c(2, Suit::Heart),
        c(3, Suit::Heart),
        c(4, Suit::Heart),
    ],
    10
);
score_case!(
    extension_cards,
    [c(2, Suit::Bonus), c(3, Suit::Malus), c(5, Suit::Gold)],
    5
);
score_case!(
    mixed_jest,
    [
        Card::joker(),
        c(2, Suit::Heart),
        c(1, Suit::Club),
        c(4, Suit::Spade),
        c(2, Suit::Diamond),
        c(2, Suit::Bonus),
    ],
    8
);

#[test]
fn breakdown_total_matches_score() {
    let jest = [
        Card::joker(),
        c(3, Suit::Spade),
        c(3, Suit::Club),
        c(1, Suit::Diamond),
        c(5, Suit::Gold),
    ];
    let breakdown = ClassicScorer.breakdown(&jest);
    assert_eq!(breakdown.joker_hearts, 4);
    assert_eq!(breakdown.suits, 1);
    assert_eq!(breakdown.black_pairs, 2);
    assert_eq!(breakdown.extension, 5);
    assert_eq!(breakdown.total(), ClassicScorer.score(&jest));
}

#[test]
fn scoring_leaves_the_jest_alone() {
    let jest = vec![
        Card::joker(),
        c(1, Suit::Heart),
        c(1, Suit::Spade),
        c(4, Suit::Club),
        c(3, Suit::Diamond),
    ];
    let before = jest.clone();
    let first = ClassicScorer.score(&jest);
    let second = ClassicScorer.score(&jest);
    let breakdown = ClassicScorer.breakdown(&jest);
    assert_eq!(first, second);
    assert_eq!(ClassicScorer.breakdown(&jest), breakdown);
    assert_eq!(ClassicScorer.score(&jest), first);
    assert_eq!(jest, before);
}
