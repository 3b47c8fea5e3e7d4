use super::*;
use rand::Rng;
use rvr_cards::*;
use rvr_core::*;
use rvr_ranges::Range;

/// The state of one range-vs-range hand.
///
/// `Table` holds everything the engine reads and writes during a hand:
/// per-player stacks, contributions, ranges and hidden dealt combos, plus
/// the public board and betting-round bookkeeping.
///
/// # Fields
///
/// - `players` — Seats in action order
/// - `board` — Community cards dealt so far
/// - `street` — Current betting round
/// - `structure` — Limit or no-limit
/// - `blind` — Minimum bet, and the raise increment each round starts from
/// - `pot_pre` — Chips in the pot from previous rounds
/// - `increment` — Current minimum raise increment
/// - `bet_count` — Aggressive actions so far this round
/// - `current_factor` — Likelihood of the realized line, in (0, 1]
/// - `finished` — No further action will be recorded
///
/// Callers own the table and serialize access to it; every operation here
/// runs to completion on a single thread.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    players: Vec<Player>,
    board: Board,
    street: Street,
    structure: Structure,
    blind: Chips,
    pot_pre: Chips,
    increment: Chips,
    bet_count: usize,
    current_factor: Probability,
    finished: bool,
}

/// Construction.
impl Table {
    /// A fresh preflop table with nothing in the pot.
    pub fn new(structure: Structure, blind: Chips, players: Vec<Player>) -> Self {
        Self {
            players,
            board: Board::empty(),
            street: Street::Pref,
            structure,
            blind,
            pot_pre: 0,
            increment: blind,
            bet_count: 0,
            current_factor: STARTING_FACTOR,
            finished: false,
        }
    }
    /// Deals every player a concrete combo from their starting range.
    ///
    /// Seats are dealt in order, each avoiding the cards already given to
    /// earlier seats. Stacks beyond `MAX_STACK` are refused.
    pub fn deal<R: Rng>(structure: Structure, blind: Chips, seats: Vec<(Range, Chips)>, rng: &mut R) -> Result<Self, Violation> {
        let mut dealt = Hand::empty();
        let mut players = Vec::with_capacity(seats.len());
        for (range, stack) in seats {
            if !(0..=MAX_STACK).contains(&stack) {
                log::error!("refusing to seat a stack of {}", stack);
                return Err(Violation::Stack(stack));
            }
            let cards = range.deal(&dealt, rng).ok_or(Violation::NoCombos)?;
            dealt = Hand::add(dealt, Hand::from(cards));
            players.push(Player::from((cards, range, stack)));
        }
        Ok(Self::new(structure, blind, players))
    }
    /// Places the table on a later street with the given board.
    pub fn with_board(mut self, street: Street, board: Board) -> Self {
        self.street = street;
        self.board = board;
        self
    }
    /// Sets the chips carried in from earlier rounds.
    pub fn with_pot(mut self, pot_pre: Chips) -> Self {
        self.pot_pre = pot_pre;
        self
    }
    /// Posts a forced bet for a seat; the seat keeps its turn.
    pub fn post(&mut self, seat: Position, chips: Chips) -> Result<(), Violation> {
        self.player_mut(seat)?.post(chips);
        Ok(())
    }
}

/// Public state accessors.
impl Table {
    pub fn n(&self) -> usize {
        self.players.len()
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: Position) -> Result<&Player, Violation> {
        self.players.get(seat).ok_or(Violation::Seat(seat))
    }
    pub fn player_mut(&mut self, seat: Position) -> Result<&mut Player, Violation> {
        self.players.get_mut(seat).ok_or(Violation::Seat(seat))
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn structure(&self) -> Structure {
        self.structure
    }
    pub fn blind(&self) -> Chips {
        self.blind
    }
    pub fn pot_pre(&self) -> Chips {
        self.pot_pre
    }
    pub fn increment(&self) -> Chips {
        self.increment
    }
    pub fn bet_count(&self) -> usize {
        self.bet_count
    }
    pub fn current_factor(&self) -> Probability {
        self.current_factor
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    /// Highest contribution this round.
    pub fn raised_to(&self) -> Chips {
        self.players.iter().map(Player::contributed).max().unwrap_or(0)
    }
    /// Everything in the middle, including this round's contributions.
    pub fn pot(&self) -> Chips {
        self.pot_pre + self.players.iter().map(Player::contributed).sum::<Chips>()
    }
    /// Cards unavailable to `seat`: the board and every other seat's dealt
    /// combo, folded or not.
    pub fn dead(&self, seat: Position) -> Hand {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != seat)
            .map(|(_, p)| Hand::from(p.cards()))
            .fold(Hand::from(self.board), Hand::union)
    }
    /// The board plus every dealt combo at the table.
    pub fn used(&self) -> Hand {
        self.players
            .iter()
            .map(|p| Hand::from(p.cards()))
            .fold(Hand::from(self.board), Hand::union)
    }
    /// Seats still owed a decision, in turn order starting after `after`.
    pub fn left_to_act(&self, after: Position) -> Vec<Position> {
        (1..self.n())
            .map(|i| (after + i) % self.n())
            .filter(|i| self.players[*i].is_left_to_act())
            .collect()
    }
    /// The next seat to act after `after`, if anyone is owed a decision.
    pub fn next_to_act(&self, after: Position) -> Option<Position> {
        self.left_to_act(after).first().copied()
    }
    /// Players who have not folded.
    pub fn remaining(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }
    /// True once nobody is owed a decision this round.
    pub fn is_round_over(&self) -> bool {
        self.players.iter().all(|p| !p.is_left_to_act())
    }
}

/// Betting envelope.
impl Table {
    /// The legal action envelope for the player in `seat`.
    pub fn options(&self, seat: Position) -> Result<ActionOptions, Violation> {
        let player = self.player(seat)?;
        let raised_to = self.raised_to();
        let call_cost = player.stack().min(raised_to - player.contributed());
        let mut bet_lower = raised_to + self.increment;
        let mut bet_higher = player.stack() + player.contributed();
        if bet_higher < bet_lower {
            bet_lower = bet_higher;
        }
        if self.structure.is_limit() {
            bet_higher = bet_lower;
        }
        let can_raise = bet_lower > raised_to && !self.structure.is_capped(self.bet_count);
        match can_raise {
            true => ActionOptions::new(call_cost, raised_to != 0, bet_lower, bet_higher),
            false => Ok(ActionOptions::passive(call_cost)),
        }
    }
}

impl TryFrom<(&Table, Position)> for ActionOptions {
    type Error = Violation;
    fn try_from((table, seat): (&Table, Position)) -> Result<Self, Self::Error> {
        table.options(seat)
    }
}

/// State transitions.
impl Table {
    /// Applies a resolved action for the player in `seat`.
    pub fn apply(&mut self, seat: Position, result: ActionResult) -> Result<(), Violation> {
        self.player(seat)?;
        match result {
            ActionResult::Fold => self.fold(seat),
            ActionResult::Passive { call_cost } => self.passive(seat, call_cost),
            ActionResult::Aggressive { raise_total, .. } => self.aggressive(seat, raise_total),
            ActionResult::Terminate => self.terminate(seat),
        }
        Ok(())
    }
    /// Scales the likelihood of the realized line by `ratio`.
    pub fn discount(&mut self, ratio: Probability) {
        debug_assert!(ratio > 0. && ratio <= 1.);
        self.current_factor *= ratio;
    }
    fn fold(&mut self, seat: Position) {
        let player = &mut self.players[seat];
        player.fold();
        player.reset_left_to_act(false);
    }
    fn passive(&mut self, seat: Position, call_cost: Chips) {
        let player = &mut self.players[seat];
        player.bet(call_cost);
        player.reset_left_to_act(false);
    }
    fn aggressive(&mut self, seat: Position, raise_total: Chips) {
        let raised_to = self.raised_to();
        self.increment = self.increment.max(raise_total - raised_to);
        self.bet_count += 1;
        let player = &mut self.players[seat];
        player.bet(raise_total - player.contributed());
        player.reset_left_to_act(false);
        for (_, other) in self
            .players
            .iter_mut()
            .enumerate()
            .filter(|(i, p)| *i != seat && !p.is_folded())
        {
            other.reset_left_to_act(true);
        }
    }
    fn terminate(&mut self, seat: Position) {
        self.players[seat].reset_left_to_act(false);
        self.finished = true;
    }
}

/// Street advancement.
impl Table {
    /// Closes the current round and opens the next one.
    ///
    /// Contributions move into the pot, new community cards are dealt from
    /// the cards nobody holds, and every remaining player is owed a decision
    /// again. Closing the river round (or a round with one player left)
    /// finishes the hand instead.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        debug_assert!(self.is_round_over());
        let next = match self.street.next() {
            Some(next) if self.remaining() >= 2 => next,
            _ => {
                self.finished = true;
                return;
            }
        };
        self.pot_pre = self.pot();
        let n = next.n_observed().saturating_sub(self.board.size());
        let mut deck = Vec::<Card>::from(self.used().complement());
        let mut cards = Hand::empty();
        for _ in 0..n {
            let card = deck.swap_remove(rng.random_range(0..deck.len()));
            cards = Hand::add(cards, Hand::from(card));
        }
        self.board.add(cards);
        self.street = next;
        self.increment = self.blind;
        self.bet_count = 0;
        for player in self.players.iter_mut() {
            player.reset_contributed();
            player.reset_left_to_act(!player.is_folded());
        }
        log::debug!("advanced to {}", self.board.on(self.street));
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} ({} pot {})", self.board.on(self.street), self.structure, self.pot())?;
        for (i, player) in self.players.iter().enumerate() {
            writeln!(f, "  {} {}", i, player)?;
        }
        write!(f, "  factor {:.4}", self.current_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn player(cards: &str, range: &str, stack: Chips) -> Player {
        Player::from((
            Combo::try_from(cards).unwrap(),
            Range::try_from(range).unwrap(),
            stack,
        ))
    }

    /// Heads-up no-limit, 1/2 blinds posted, 200 behind each.
    fn heads_up() -> Table {
        let mut table = Table::new(
            Structure::NoLimit,
            2,
            vec![player("AsAh", "anything", 200), player("KsKh", "anything", 200)],
        );
        table.post(0, 1).unwrap();
        table.post(1, 2).unwrap();
        table
    }

    #[test]
    fn envelope_facing_blind() {
        let table = heads_up();
        let options = table.options(0).unwrap();
        assert_eq!(options.call_cost(), 1);
        assert!(options.is_raise());
        assert_eq!(options.min_raise(), Some(4));
        assert_eq!(options.max_raise(), Some(200));
    }

    #[test]
    fn envelope_first_bet() {
        let table = Table::new(
            Structure::NoLimit,
            2,
            vec![player("AsAh", "AA", 196), player("KsKh", "KK", 196)],
        );
        let options = table.options(0).unwrap();
        assert!(options.can_check());
        assert!(!options.is_raise());
        assert_eq!(options.min_raise(), Some(2));
        assert_eq!(options.max_raise(), Some(196));
    }

    #[test]
    fn envelope_clamps_short_stack() {
        let mut table = Table::new(
            Structure::NoLimit,
            2,
            vec![player("AsAh", "AA", 5), player("KsKh", "KK", 200)],
        );
        table.post(1, 4).unwrap();
        let options = table.options(0).unwrap();
        assert_eq!(options.call_cost(), 4);
        assert_eq!(options.min_raise(), Some(5));
        assert_eq!(options.max_raise(), Some(5));
    }

    #[test]
    fn envelope_short_stack_cannot_raise() {
        let mut table = Table::new(
            Structure::NoLimit,
            2,
            vec![player("AsAh", "AA", 3), player("KsKh", "KK", 200)],
        );
        table.post(1, 10).unwrap();
        let options = table.options(0).unwrap();
        assert_eq!(options.call_cost(), 3);
        assert!(!options.can_raise());
    }

    #[test]
    fn envelope_limit_single_size_and_cap() {
        let mut table = Table::new(
            Structure::Limit,
            2,
            vec![player("AsAh", "AA", 200), player("KsKh", "KK", 200)],
        );
        table.post(0, 1).unwrap();
        table.post(1, 2).unwrap();
        let options = table.options(0).unwrap();
        assert_eq!(options.min_raise(), options.max_raise());
        assert_eq!(options.min_raise(), Some(4));
        for (seat, total) in [(0, 4), (1, 6), (0, 8), (1, 10)] {
            table.apply(seat, ActionResult::raise_to(total, true)).unwrap();
        }
        assert_eq!(table.bet_count(), 4);
        assert!(!table.options(0).unwrap().can_raise());
        assert_eq!(table.options(0).unwrap().call_cost(), 2);
    }

    #[test]
    fn unknown_seat() {
        assert_eq!(heads_up().options(7), Err(Violation::Seat(7)));
    }

    #[test]
    fn fold_and_call() {
        let mut table = heads_up();
        table.apply(0, ActionResult::call(1)).unwrap();
        assert_eq!(table.player(0).unwrap().contributed(), 2);
        assert_eq!(table.player(0).unwrap().stack(), 198);
        assert!(!table.player(0).unwrap().is_left_to_act());
        table.apply(1, ActionResult::fold()).unwrap();
        assert!(table.player(1).unwrap().is_folded());
        assert!(table.is_round_over());
        assert_eq!(table.pot(), 4);
    }

    #[test]
    fn aggression_reopens_action() {
        let mut table = Table::new(
            Structure::NoLimit,
            2,
            vec![
                player("AsAh", "AA", 200),
                player("KsKh", "KK", 200),
                player("QsQh", "QQ", 200),
            ],
        );
        table.post(0, 1).unwrap();
        table.post(1, 2).unwrap();
        table.apply(2, ActionResult::fold()).unwrap();
        table.apply(0, ActionResult::call(1)).unwrap();
        table.apply(1, ActionResult::raise_to(10, true)).unwrap();
        assert!(table.player(0).unwrap().is_left_to_act());
        assert!(!table.player(1).unwrap().is_left_to_act());
        assert!(!table.player(2).unwrap().is_left_to_act());
        assert_eq!(table.player(1).unwrap().stack(), 190);
        assert_eq!(table.player(1).unwrap().contributed(), 10);
        assert_eq!(table.increment(), 8);
        assert_eq!(table.bet_count(), 1);
        table.apply(0, ActionResult::raise_to(14, true)).unwrap();
        assert_eq!(table.increment(), 8);
    }

    #[test]
    fn terminate_finishes() {
        let mut table = heads_up();
        let before = table.player(0).unwrap().clone();
        table.apply(0, ActionResult::terminate()).unwrap();
        assert!(table.is_finished());
        assert!(!table.player(0).unwrap().is_left_to_act());
        assert_eq!(table.player(0).unwrap().stack(), before.stack());
    }

    #[test]
    fn left_to_act_wraps() {
        let table = Table::new(
            Structure::NoLimit,
            2,
            vec![
                player("AsAh", "AA", 200),
                player("KsKh", "KK", 200),
                player("QsQh", "QQ", 200),
            ],
        );
        assert_eq!(table.left_to_act(1), vec![2, 0]);
        assert_eq!(table.left_to_act(2), vec![0, 1]);
        assert_eq!(table.next_to_act(0), Some(1));
    }

    #[test]
    fn dead_cards_exclude_own_hand() {
        let table = heads_up().with_board(Street::Flop, Board::try_from("2h3c4d").unwrap());
        let dead = table.dead(1);
        assert_eq!(dead, Hand::try_from("AsAh2h3c4d").unwrap());
    }

    #[test]
    fn advance_deals_and_resets() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut table = heads_up();
        table.apply(0, ActionResult::call(1)).unwrap();
        table.apply(1, ActionResult::call(0)).unwrap();
        table.advance(rng);
        assert_eq!(table.street(), Street::Flop);
        assert_eq!(table.board().size(), 3);
        assert_eq!(table.pot_pre(), 4);
        assert_eq!(table.pot(), 4);
        assert_eq!(table.raised_to(), 0);
        assert_eq!(table.left_to_act(1), vec![0]);
        assert!(table.player(1).unwrap().is_left_to_act());
        assert_eq!(table.used().size(), 7);
    }

    #[test]
    fn advance_past_river_finishes() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut table = heads_up().with_board(Street::Rive, Board::try_from("2h3c4d5s6s").unwrap());
        table.apply(0, ActionResult::call(1)).unwrap();
        table.apply(1, ActionResult::call(0)).unwrap();
        table.advance(rng);
        assert!(table.is_finished());
    }

    #[test]
    fn deal_avoids_collisions() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..50 {
            let table = Table::deal(
                Structure::NoLimit,
                2,
                vec![
                    (Range::try_from("AA").unwrap(), 100),
                    (Range::try_from("AA").unwrap(), 100),
                    (Range::try_from("AA").unwrap(), 100),
                ],
                rng,
            );
            assert_eq!(table.err(), Some(Violation::NoCombos));
        }
        let table = Table::deal(
            Structure::NoLimit,
            2,
            vec![(Range::try_from("AA").unwrap(), 100), (Range::try_from("AA").unwrap(), 100)],
            rng,
        )
        .unwrap();
        let a = Hand::from(table.player(0).unwrap().cards());
        let b = Hand::from(table.player(1).unwrap().cards());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn deep_stacks_shove_and_call() {
        let mut table = Table::new(
            Structure::NoLimit,
            2,
            vec![player("AsAh", "anything", 20000), player("KsKh", "anything", 20000)],
        );
        table.post(0, 1).unwrap();
        table.post(1, 2).unwrap();
        let shove = table.options(0).unwrap().max_raise().unwrap();
        assert_eq!(shove, 20000);
        table.apply(0, ActionResult::raise_to(shove, true)).unwrap();
        let call = table.options(1).unwrap();
        assert_eq!(call.call_cost(), 19998);
        table.apply(1, ActionResult::call(call.call_cost())).unwrap();
        assert_eq!(table.pot(), 40000);
        assert_eq!(table.increment(), 19998);
        assert_eq!(table.options(0).unwrap(), ActionOptions::passive(0));
        assert_eq!(table.options(1).unwrap(), ActionOptions::passive(0));
    }

    #[test]
    fn deal_rejects_oversized_stacks() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let seats = vec![
            (Range::try_from("anything").unwrap(), 200),
            (Range::try_from("anything").unwrap(), MAX_STACK + 1),
        ];
        assert_eq!(
            Table::deal(Structure::NoLimit, 2, seats, rng),
            Err(Violation::Stack(MAX_STACK + 1))
        );
        let seats = vec![(Range::try_from("anything").unwrap(), -1)];
        assert_eq!(Table::deal(Structure::NoLimit, 2, seats, rng), Err(Violation::Stack(-1)));
    }
}
