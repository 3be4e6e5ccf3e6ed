use super::Solution;
use gtl_cards::Board;
use gtl_cards::Hole;
use gtl_cards::Street;
use gtl_core::Chips;
use gtl_core::N;
use gtl_gameplay::History;
use gtl_gameplay::Seat;

/// A decision point as the explanation composer sees it.
pub trait Spot {
    fn seat(&self) -> Seat;
    fn stage(&self) -> Street;
    fn pot(&self) -> Chips;
    /// Chips behind for every seat, in table order.
    fn stacks(&self) -> &[Chips; N];
    fn hole(&self) -> &Hole;
    fn board(&self) -> &Board;
    fn history(&self) -> &History;
    fn solution(&self) -> &Solution;
}
