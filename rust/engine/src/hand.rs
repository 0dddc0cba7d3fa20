use crate::cards::Card;
use crate::errors::EngineError;

/// Poker hand category, weakest to strongest. The discriminant order is
/// what makes `HandScore` comparison work through `derive(Ord)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Totally ordered score of a 5-card hand: category first, then the
/// tie-break ranks in significance order (e.g. pair rank before
/// kickers, kickers descending). Two scores are equal exactly when the
/// category and every tie-break rank match, which is what defines a
/// split pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandScore {
    pub category: Category,
    pub tiebreaks: [u8; 5],
}

/// Best 5-card score over every 5-card subset of `cards`.
///
/// Accepts between 5 and 7 cards (2 hole + up to 5 community); with 7
/// cards this scores all C(7,5) = 21 subsets and keeps the maximum.
///
/// # Errors
///
/// [`EngineError::InvalidHandSize`] when fewer than 5 cards are given.
///
/// # Examples
///
/// ```
/// use riverline_engine::cards::{Card, Rank, Suit};
/// use riverline_engine::hand::{evaluate, Category};
///
/// let cards = [
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Diamonds),
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
///     Card::new(Rank::King, Suit::Diamonds),
/// ];
/// let score = evaluate(&cards).unwrap();
/// assert_eq!(score.category, Category::FullHouse);
/// assert_eq!(score.tiebreaks[0], 2);
/// assert_eq!(score.tiebreaks[1], 5);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandScore, EngineError> {
    let n = cards.len();
    if n < 5 {
        return Err(EngineError::InvalidHandSize { got: n });
    }
    let mut best: Option<HandScore> = None;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let score = score_five(&five);
                        if best.map_or(true, |s| score > s) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }
    best.ok_or(EngineError::InvalidHandSize { got: n })
}

/// Scores exactly five cards with standard category ranking.
pub fn score_five(cards: &[Card; 5]) -> HandScore {
    let mut ranks = [0u8; 5];
    for (slot, card) in ranks.iter_mut().zip(cards.iter()) {
        *slot = card.rank.value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&ranks);

    let mut rank_counts = [0u8; 15];
    for &r in &ranks {
        rank_counts[r as usize] += 1;
    }
    // (count, rank) groups, most frequent first, then highest rank
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if let Some(high) = straight_high {
        if is_flush {
            return score(Category::StraightFlush, &[high]);
        }
    }
    if groups[0].0 == 4 {
        return score(Category::FourOfAKind, &[groups[0].1, groups[1].1]);
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return score(Category::FullHouse, &[groups[0].1, groups[1].1]);
    }
    if is_flush {
        return score(Category::Flush, &ranks);
    }
    if let Some(high) = straight_high {
        return score(Category::Straight, &[high]);
    }
    if groups[0].0 == 3 {
        return score(
            Category::ThreeOfAKind,
            &[groups[0].1, groups[1].1, groups[2].1],
        );
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return score(
            Category::TwoPair,
            &[groups[0].1, groups[1].1, groups[2].1],
        );
    }
    if groups[0].0 == 2 {
        return score(
            Category::OnePair,
            &[groups[0].1, groups[1].1, groups[2].1, groups[3].1],
        );
    }
    score(Category::HighCard, &ranks)
}

fn score(category: Category, significant: &[u8]) -> HandScore {
    let mut tiebreaks = [0u8; 5];
    tiebreaks[..significant.len()].copy_from_slice(significant);
    HandScore {
        category,
        tiebreaks,
    }
}

/// Top rank of a 5-card straight, if the (descending) ranks form one.
/// The wheel A-5-4-3-2 counts as a straight with top rank 5.
fn straight_high(desc_ranks: &[u8; 5]) -> Option<u8> {
    let distinct = desc_ranks.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if desc_ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(desc_ranks[0]);
    }
    if *desc_ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}
