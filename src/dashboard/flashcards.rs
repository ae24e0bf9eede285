//! Flashcard browsing and study.

use crate::app::state::{InputOutcome, InputState};
use crate::data::flashcards::{sample_flashcards, Category, Flashcard};
use crossterm::event::KeyEvent;

/// Which cards are in play: every card, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deck {
    All,
    Only(Category),
}

impl Deck {
    const ORDER: [Deck; 3] = [
        Deck::All,
        Deck::Only(Category::ALL[0]),
        Deck::Only(Category::ALL[1]),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Deck::All => "All Decks",
            Deck::Only(cat) => cat.label(),
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|d| *d == self).unwrap_or(0)
    }

    pub fn next(self) -> Deck {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Deck {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn contains(self, card: &Flashcard) -> bool {
        match self {
            Deck::All => true,
            Deck::Only(cat) => card.category == cat,
        }
    }
}

/// Cards in `deck` whose front or back contains `query`, ignoring case.
pub fn filter_cards<'a>(cards: &'a [Flashcard], deck: Deck, query: &str) -> Vec<&'a Flashcard> {
    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| deck.contains(card))
        .filter(|card| {
            needle.is_empty()
                || card.front.to_lowercase().contains(&needle)
                || card.back.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardMode {
    Browse,
    Study,
}

#[derive(Debug)]
pub struct FlashcardSection {
    cards: Vec<Flashcard>,
    pub deck: Deck,
    pub query: InputState,
    pub mode: FlashcardMode,
    /// Study position in the filtered list.
    pub cursor: usize,
    pub flipped: bool,
    /// First card shown in the browse list.
    pub browse_offset: usize,
}

impl FlashcardSection {
    pub fn new() -> Self {
        Self::with_cards(sample_flashcards())
    }

    pub fn with_cards(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            deck: Deck::All,
            query: InputState::new(),
            mode: FlashcardMode::Browse,
            cursor: 0,
            flipped: false,
            browse_offset: 0,
        }
    }

    pub fn filtered(&self) -> Vec<&Flashcard> {
        filter_cards(&self.cards, self.deck, &self.query.text)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.filtered().get(self.cursor).copied()
    }

    fn reset_position(&mut self) {
        self.cursor = 0;
        self.flipped = false;
        self.browse_offset = 0;
    }

    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.reset_position();
    }

    pub fn next_deck(&mut self) {
        self.set_deck(self.deck.next());
    }

    pub fn prev_deck(&mut self) {
        self.set_deck(self.deck.prev());
    }

    pub fn edit_query(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.query.handle_key(key);
        if outcome == InputOutcome::Changed {
            self.reset_position();
        }
        outcome
    }

    pub fn scroll_browse(&mut self, down: bool) {
        if down {
            if self.browse_offset + 1 < self.filtered_count() {
                self.browse_offset += 1;
            }
        } else {
            self.browse_offset = self.browse_offset.saturating_sub(1);
        }
    }

    pub fn start_study(&mut self) {
        self.mode = FlashcardMode::Study;
        self.cursor = 0;
        self.flipped = false;
    }

    pub fn back_to_browse(&mut self) {
        self.mode = FlashcardMode::Browse;
    }

    pub fn can_go_prev(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.filtered_count()
    }

    pub fn next_card(&mut self) {
        if self.can_go_next() {
            self.cursor += 1;
            self.flipped = false;
        }
    }

    pub fn prev_card(&mut self) {
        if self.can_go_prev() {
            self.cursor -= 1;
            self.flipped = false;
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Restart the deck from the first card. The order is left as is.
    pub fn shuffle(&mut self) {
        self.cursor = 0;
        self.flipped = false;
    }
}
