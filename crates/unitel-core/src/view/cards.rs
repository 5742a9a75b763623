use crate::snapshot::SoldCard;

pub const RECENT_CARDS_LIMIT: usize = 5;
pub const EMPTY_CARDS_MESSAGE: &str = "Nenhum cartão vendido";
pub const UNKNOWN_TIME: &str = "--:--:--";

#[derive(Debug, Clone, PartialEq)]
pub enum RecentCardsView {
    Empty { message: &'static str },
    /// Most recently appended first.
    Cards(Vec<CardRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardRow {
    pub id: i64,
    /// `Cartão #007`.
    pub label: String,
    pub time: String,
}

impl RecentCardsView {
    pub fn project(cards: &[SoldCard]) -> Self {
        if cards.is_empty() {
            return RecentCardsView::Empty {
                message: EMPTY_CARDS_MESSAGE,
            };
        }

        RecentCardsView::Cards(
            cards
                .iter()
                .rev()
                .take(RECENT_CARDS_LIMIT)
                .map(CardRow::project)
                .collect(),
        )
    }
}

impl CardRow {
    pub fn project(card: &SoldCard) -> Self {
        Self {
            id: card.id,
            label: format!("Cartão #{:03}", card.id),
            time: card.time_of_day().unwrap_or(UNKNOWN_TIME).to_string(),
        }
    }
}
