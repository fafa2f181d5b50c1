use crate::card::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pub controller: Controller,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String, controller: Controller, cards: Vec<Card>) -> Self {
        Self {
            name,
            controller,
            hand: cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Card at a 1-based hand slot, as shown to players.
    pub fn card_at(&self, slot: usize) -> Option<&Card> {
        slot.checked_sub(1).and_then(|index| self.hand.get(index))
    }

    /// Removes the card at a 1-based hand slot. Out-of-range slots are left alone.
    pub fn remove_card(&mut self, slot: usize) -> Option<Card> {
        match slot.checked_sub(1) {
            Some(index) if index < self.hand.len() => Some(self.hand.remove(index)),
            _ => None,
        }
    }

    /// Hand paired with 1-based slots, in acquisition order.
    pub fn listing(&self) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.hand.iter().enumerate().map(|(index, card)| (index + 1, card))
    }
}
